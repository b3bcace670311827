//! service-core: Shared infrastructure for the bfhl service.
pub mod config;
pub mod error;
pub mod observability;
