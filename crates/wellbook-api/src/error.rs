//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` implementation for `AppError` lives in `wellbook-core`
//! alongside the error type itself (Rust's orphan rule requires the impl to
//! sit in the crate that defines `AppError`). It is re-exported here so the
//! API crate's error surface stays in one place.

pub use wellbook_core::error::ApiErrorResponse;
