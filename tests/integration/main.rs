//! HTTP integration tests.
//!
//! These exercise the full router against a live PostgreSQL instance and
//! are `#[ignore]`d by default. Point `WELLBOOK_TEST_DATABASE_URL` at a
//! disposable database and run `cargo test -- --ignored` to execute them.

mod helpers;

mod auth_test;
mod booking_test;
mod practitioner_test;
mod product_test;
