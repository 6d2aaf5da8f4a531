//! Typed authorization predicates.

pub mod predicate;

pub use predicate::{Actor, Check};
