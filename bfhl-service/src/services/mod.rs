pub mod operations;
pub mod providers;
