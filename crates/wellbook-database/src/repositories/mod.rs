//! Concrete repository implementations, one per entity.

pub mod booking;
pub mod notification;
pub mod practitioner;
pub mod product;
pub mod refresh_token;
pub mod user;

pub use booking::BookingRepository;
pub use notification::NotificationRepository;
pub use practitioner::PractitionerRepository;
pub use product::ProductRepository;
pub use refresh_token::RefreshTokenRepository;
pub use user::UserRepository;
