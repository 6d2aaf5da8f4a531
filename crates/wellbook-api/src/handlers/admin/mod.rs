//! Admin-only handlers.

pub mod practitioners;
