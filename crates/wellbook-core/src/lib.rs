//! # wellbook-core
//!
//! Core crate for Wellbook. Contains the unified error system,
//! configuration schemas, and shared helpers.
//!
//! This crate has **no** internal dependencies on other Wellbook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
