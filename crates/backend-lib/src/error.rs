// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid session token")]
    InvalidToken,

    #[error("authentication required")]
    Unauthenticated,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("a user id is required to create a session")]
    MissingUserId,

    #[error("an account with this email already exists")]
    DuplicateEmail,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidToken | AppError::Unauthenticated | AppError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            },
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            // MissingUserId is a programming error, not a client failure
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingConfig(_) => "CFG_001",
            AppError::Config(_) => "CFG_002",
            AppError::InvalidToken => "AUTH_001",
            AppError::Unauthenticated => "AUTH_002",
            AppError::InvalidCredentials => "AUTH_003",
            AppError::MissingUserId => "AUTH_004",
            AppError::DuplicateEmail => "USER_001",
            AppError::InvalidInput(_) => "VAL_001",
            AppError::PasswordHash(_) => "HASH_001",
            AppError::Database(_) => "DB_001",
            AppError::Internal(_) => "INT_001",
        }
    }

    /// Get a sanitized message suitable for production use.
    ///
    /// The three authentication failures share one message so a caller
    /// cannot tell an absent session, a bad token, and wrong credentials
    /// apart from the response body.
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::InvalidToken | AppError::Unauthenticated | AppError::InvalidCredentials => {
                "Authentication failed".to_string()
            },
            AppError::MissingConfig(key) => {
                format!("Server configuration error: {key} is not set")
            },
            AppError::Config(_) => "Server configuration error".to_string(),
            AppError::DuplicateEmail => "An account with this email already exists".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::MissingUserId
            | AppError::PasswordHash(_)
            | AppError::Database(_)
            | AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        let body = serde_json::json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_display() {
        let missing = AppError::MissingConfig("database_url");
        assert_eq!(
            missing.to_string(),
            "missing required configuration: database_url"
        );

        let token = AppError::InvalidToken;
        assert_eq!(token.to_string(), "invalid session token");

        let input = AppError::InvalidInput("email is required".to_string());
        assert_eq!(input.to_string(), "Invalid input: email is required");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InvalidInput("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingConfig("auth_secret").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::MissingUserId.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_error_codes() {
        assert_eq!(AppError::MissingConfig("auth_secret").error_code(), "CFG_001");
        assert_eq!(AppError::InvalidToken.error_code(), "AUTH_001");
        assert_eq!(AppError::InvalidCredentials.error_code(), "AUTH_003");
        assert_eq!(AppError::DuplicateEmail.error_code(), "USER_001");
        assert_eq!(
            AppError::Internal("test".to_string()).error_code(),
            "INT_001"
        );
    }

    #[test]
    fn auth_failures_share_a_sanitized_message() {
        // No oracle: the body must not reveal which failure mode occurred
        assert_eq!(
            AppError::InvalidToken.sanitized_message(),
            AppError::Unauthenticated.sanitized_message()
        );
        assert_eq!(
            AppError::InvalidToken.sanitized_message(),
            AppError::InvalidCredentials.sanitized_message()
        );
    }

    #[test]
    fn test_app_error_into_response() {
        let error = AppError::Unauthenticated;
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response_headers = response.headers();
        assert!(response_headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("application/json"));
    }
}
