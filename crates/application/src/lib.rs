//! Application layer - Use cases and orchestration
//!
//! Defines the port used to reach the upstream forecast service and the
//! service that turns a coordinate pair into a characterized forecast period.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
