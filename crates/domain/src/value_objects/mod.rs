//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;

pub use coordinates::Coordinates;
