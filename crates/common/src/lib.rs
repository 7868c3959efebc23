// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! shared between the Gatehouse service and its clients.
//! This module defines the session payload and the JSON request shapes
//! of the HTTP surface.

use serde::{Deserialize, Serialize};

/// The user record embedded in a session payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Database id of the signed-in user
    pub id: i64,
}

/// The session payload carried inside the signed cookie token.
///
/// The schema is closed: only the user record and the application-level
/// expiration are read or written. Tokens minted by newer versions may
/// carry extra fields; they are ignored rather than rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// Identity of the signed-in user
    pub user: SessionUser,
    /// Application-level expiration, RFC 3339
    pub expires: String,
}

/// Identity handed to session establishment.
///
/// `id` is optional because callers may pass a record that has not been
/// persisted yet; establishing a session without an id is a programming
/// error and fails fast.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserIdentity {
    pub id: Option<i64>,
}

/// Request body for account creation
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

/// Request body for signing in to an existing account
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}
