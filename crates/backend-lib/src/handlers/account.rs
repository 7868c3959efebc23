// ============================
// crates/backend-lib/src/handlers/account.rs
// ============================
//! Account creation, sign-in and session introspection.
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Extension, Json,
};
use metrics::counter;
use zeroize::Zeroize;

use gatehouse_common::{SessionData, SignInRequest, SignUpRequest, UserIdentity};

use crate::auth::PasswordRequirements;
use crate::db::NewUser;
use crate::error::AppError;
use crate::metrics::ACCOUNT_CREATED;
use crate::AppState;

/// Create an account and establish a session for it.
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignUpRequest>,
) -> Result<(StatusCode, HeaderMap, Json<SessionData>), AppError> {
    let email = req.email.trim().to_ascii_lowercase();
    if !looks_like_email(&email) {
        return Err(AppError::InvalidInput(
            "a valid email address is required".to_string(),
        ));
    }

    let requirements = PasswordRequirements::default();
    if !state.auth.password_ok(&req.password, &requirements) {
        return Err(AppError::InvalidInput(format!(
            "password must be at least {} characters and contain a lowercase letter and a digit",
            requirements.min_length
        )));
    }

    let store = state.db.store()?;
    if store.find_by_email(&email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let mut plain = req.password;
    let password_hash = state.auth.hash_password(&plain)?;
    plain.zeroize();

    let user = store
        .insert(NewUser {
            email,
            password_hash,
        })
        .await?;
    counter!(ACCOUNT_CREATED).increment(1);
    tracing::info!(user_id = user.id, "account created");

    let (session, cookie) = state
        .auth
        .create_session(&UserIdentity { id: Some(user.id) })?;

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie);
    Ok((StatusCode::CREATED, headers, Json(session)))
}

/// Sign in to an existing account.
///
/// Unknown email and wrong password collapse into the same
/// `InvalidCredentials` failure.
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> Result<(StatusCode, HeaderMap, Json<SessionData>), AppError> {
    let email = req.email.trim().to_ascii_lowercase();
    let store = state.db.store()?;

    let user = store
        .find_by_email(&email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let mut plain = req.password;
    let matches = state.auth.verify_password(&plain, &user.password_hash)?;
    plain.zeroize();
    if !matches {
        return Err(AppError::InvalidCredentials);
    }

    let (session, cookie) = state
        .auth
        .create_session(&UserIdentity { id: Some(user.id) })?;

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie);
    Ok((StatusCode::OK, headers, Json(session)))
}

/// Return the session payload resolved by the middleware.
pub async fn current_user(
    Extension(session): Extension<SessionData>,
) -> Json<SessionData> {
    Json(session)
}

/// Minimal shape check; real validation is the mail round trip.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("user@example.com"));
        assert!(!looks_like_email("user"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("user@nodot"));
        assert!(!looks_like_email(""));
    }
}
