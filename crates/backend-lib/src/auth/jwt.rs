// ============================
// gatehouse-backend-lib/src/auth/jwt.rs
// ============================
//! Session token signing and verification.
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use gatehouse_common::SessionData;

use super::session::SESSION_TTL_SECS;
use crate::error::AppError;

/// Clock-skew tolerance applied when checking the `exp` claim, in seconds.
const CLOCK_SKEW_LEEWAY_SECS: u64 = 30;

/// Wire shape of the signed token: the session payload flattened together
/// with the registered timing claims.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    #[serde(flatten)]
    pub session: SessionData,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiration, unix seconds
    pub exp: i64,
}

/// Symmetric HS256 codec for session tokens.
///
/// Verification restricts the accepted algorithm set to the one used for
/// signing, so a token cannot downgrade or substitute its algorithm.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY_SECS;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a session payload, stamping issued-at = now and
    /// expiration = now + 24h.
    pub fn sign(&self, session: &SessionData) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            session: session.clone(),
            iat: now,
            exp: now + SESSION_TTL_SECS,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| AppError::Internal(format!("failed to sign session token: {err}")))
    }

    /// Verify a token and return its session payload.
    ///
    /// Every failure mode (malformed token, wrong signature, wrong
    /// algorithm, expired claim) collapses into the single
    /// [`AppError::InvalidToken`] so callers cannot distinguish them.
    pub fn verify(&self, token: &str) -> Result<SessionData, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.session)
            .map_err(|_| AppError::InvalidToken)
    }
}
