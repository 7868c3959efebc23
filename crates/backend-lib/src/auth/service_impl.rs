use axum::http::{HeaderMap, HeaderValue};

use gatehouse_common::{SessionData, UserIdentity};

use crate::auth::{
    hash_password, validate_password_strength, verify_password, AuthService,
    PasswordRequirements, SessionManager,
};
use crate::error::AppError;

pub struct DefaultAuth {
    sessions: SessionManager,
}

impl DefaultAuth {
    pub fn new(sessions: SessionManager) -> Self {
        Self { sessions }
    }
}

impl AuthService for DefaultAuth {
    fn hash_password(&self, plain: &str) -> Result<String, AppError> {
        hash_password(plain)
    }

    fn verify_password(&self, plain: &str, hash: &str) -> Result<bool, AppError> {
        verify_password(plain, hash)
    }

    fn password_ok(&self, password: &str, requirements: &PasswordRequirements) -> bool {
        validate_password_strength(password, requirements)
    }

    fn create_session(
        &self,
        user: &UserIdentity,
    ) -> Result<(SessionData, HeaderValue), AppError> {
        self.sessions.create_session(user)
    }

    fn get_session(&self, headers: &HeaderMap) -> Option<SessionData> {
        self.sessions.get_session(headers)
    }
}
