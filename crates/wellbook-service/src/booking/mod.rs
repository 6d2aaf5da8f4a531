//! Booking lifecycle service.

pub mod service;

pub use service::BookingService;
