//! Domain layer for the current weather service
//!
//! Contains the forecast entities, the coordinates value object and the
//! temperature characterization policy. This layer performs no I/O.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
