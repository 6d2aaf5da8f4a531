//! In-app notification service.

pub mod service;

pub use service::NotificationService;
