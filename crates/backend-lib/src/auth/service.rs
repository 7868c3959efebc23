use axum::http::{HeaderMap, HeaderValue};

use gatehouse_common::{SessionData, UserIdentity};

use super::PasswordRequirements;
use crate::error::AppError;

/// Seam between the HTTP surface and the authentication primitives.
pub trait AuthService: Send + Sync {
    fn hash_password(&self, plain: &str) -> Result<String, AppError>;
    fn verify_password(&self, plain: &str, hash: &str) -> Result<bool, AppError>;
    fn password_ok(&self, password: &str, requirements: &PasswordRequirements) -> bool;
    fn create_session(&self, user: &UserIdentity)
        -> Result<(SessionData, HeaderValue), AppError>;
    fn get_session(&self, headers: &HeaderMap) -> Option<SessionData>;
}
