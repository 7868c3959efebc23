// ============================
// gatehouse-backend-lib/src/auth/session.rs
// ============================
//! Cookie-backed session handling.
//!
//! Sessions are stateless: the signed token held by the client is the only
//! session record, so there is nothing server-side to revoke or clean up.
use std::sync::Arc;

use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use metrics::counter;

use gatehouse_common::{SessionData, SessionUser, UserIdentity};

use super::jwt::TokenCodec;
use crate::error::AppError;
use crate::metrics::{SESSION_CREATED, SESSION_REJECTED};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Session TTL (time to live), seconds. The token's `exp` claim, the
/// payload's `expires` field and the cookie's `Expires` attribute all
/// derive from this one constant.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24; // 24 hours

/// Session manager: reads the session cookie into a payload and issues
/// new session cookies.
#[derive(Clone)]
pub struct SessionManager {
    codec: Arc<TokenCodec>,
    /// `Secure` cookie attribute, enabled in production only
    secure_cookies: bool,
}

impl SessionManager {
    pub fn new(codec: Arc<TokenCodec>, secure_cookies: bool) -> Self {
        Self {
            codec,
            secure_cookies,
        }
    }

    /// Resolve the session carried by a request, if any.
    ///
    /// A missing cookie, a malformed token, a bad signature and an expired
    /// token all yield `None`. The distinction is logged, never returned:
    /// callers must treat "bad cookie" identically to "no cookie".
    pub fn get_session(&self, headers: &HeaderMap) -> Option<SessionData> {
        let token = parse_cookie(headers, SESSION_COOKIE)?;
        match self.codec.verify(&token) {
            Ok(session) => Some(session),
            Err(err) => {
                counter!(SESSION_REJECTED).increment(1);
                tracing::debug!(%err, "failed to verify session cookie");
                None
            }
        }
    }

    /// Establish a session for a user and return the payload together with
    /// the `Set-Cookie` header value to attach to the response.
    ///
    /// An identity without an id is a programming error and fails fast.
    pub fn create_session(
        &self,
        user: &UserIdentity,
    ) -> Result<(SessionData, HeaderValue), AppError> {
        let Some(id) = user.id else {
            return Err(AppError::MissingUserId);
        };

        let expires_at = Utc::now() + Duration::seconds(SESSION_TTL_SECS);
        let session = SessionData {
            user: SessionUser { id },
            expires: expires_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let token = self.codec.sign(&session)?;
        let cookie = self.cookie_header(&token, expires_at)?;

        counter!(SESSION_CREATED).increment(1);
        Ok((session, cookie))
    }

    /// Build the `Set-Cookie` value: HttpOnly, SameSite=Lax, root path,
    /// expiring together with the token, Secure in production.
    fn cookie_header(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<HeaderValue, AppError> {
        let expires = expires_at.format("%a, %d %b %Y %H:%M:%S GMT");
        let mut cookie =
            format!("{SESSION_COOKIE}={token}; Expires={expires}; HttpOnly; SameSite=Lax; Path=/");
        if self.secure_cookies {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie)
            .map_err(|err| AppError::Internal(format!("invalid session cookie value: {err}")))
    }
}

/// Extract a named cookie from the `Cookie` request header.
fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(COOKIE)?.to_str().ok()?;
    for part in header.split(';') {
        let part = part.trim();
        if let Some(eq) = part.find('=') {
            let (key, value) = part.split_at(eq);
            if key == name {
                return Some(value[1..].to_string());
            }
        }
    }
    None
}
