// ============================
// gatehouse-backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod jwt;
pub mod password;
pub mod session;
mod service;
mod service_impl;

pub use jwt::{Claims, TokenCodec};
pub use password::{
    hash_password, validate_password_strength, verify_password, PasswordRequirements,
    MIN_PASSWORD_LENGTH, SALT_ROUNDS,
};
pub use service::AuthService;
pub use service_impl::DefaultAuth;
pub use session::{SessionManager, SESSION_COOKIE, SESSION_TTL_SECS};
