pub mod request;

pub use request::BfhlRequest;
