// src/core/mod.rs
//! Backend access and the failure kinds it reports

pub mod error;
pub mod service_client;

pub use error::ActionError;
pub use service_client::{Backend, ServiceClient};
