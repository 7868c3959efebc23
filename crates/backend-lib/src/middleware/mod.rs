// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the Gatehouse session service.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, AppState};


/// Require a valid session cookie.
///
/// Resolves the session and injects the payload into request extensions
/// for downstream handlers. An absent cookie and an invalid one are
/// rejected identically.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(session) = state.auth.get_session(request.headers()) else {
        return Err(AppError::Unauthenticated);
    };

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}
