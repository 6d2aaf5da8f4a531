//! # wellbook-auth
//!
//! Authentication and authorization for the Wellbook platform.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `credentials` — email + password verification against the user store
//! - `jwt` — signed access token issuance and stateless validation
//! - `refresh` — opaque refresh token lifecycle (create, verify, revoke, rotate)
//! - `authz` — typed role/ownership predicates
//! - `session` — login, refresh, and logout orchestration

pub mod authz;
pub mod credentials;
pub mod jwt;
pub mod password;
pub mod refresh;
pub mod session;

pub use authz::{Actor, Check};
pub use credentials::CredentialVerifier;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use refresh::RefreshTokenStore;
pub use session::{LoginResult, RefreshResult, SessionManager};
