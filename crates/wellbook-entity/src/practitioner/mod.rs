//! Practitioner profile entity.

pub mod model;

pub use model::{CreatePractitioner, Practitioner, UpdatePractitioner};
