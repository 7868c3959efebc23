// ============================
// gatehouse-backend-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.
use crate::error::AppError;

/// Fixed bcrypt cost factor.
///
/// Deliberately not configurable per call; raising it is a code change and
/// previously stored hashes are not migrated (no rehash-on-login).
pub const SALT_ROUNDS: u32 = 10;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Password complexity requirements
pub struct PasswordRequirements {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
}

impl Default for PasswordRequirements {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            require_uppercase: false,
            require_lowercase: true,
            require_digit: true,
        }
    }
}

/// Hash a password using bcrypt at the fixed cost factor
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(plain, SALT_ROUNDS)?)
}

/// Verify a password against a stored hash.
///
/// A mismatch is `Ok(false)`; only a malformed hash is an error.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AppError> {
    Ok(bcrypt::verify(plain, hash)?)
}

/// Check if a password meets the complexity requirements
pub fn validate_password_strength(password: &str, requirements: &PasswordRequirements) -> bool {
    if password.len() < requirements.min_length {
        return false;
    }

    if requirements.require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
        return false;
    }

    if requirements.require_lowercase && !password.chars().any(|c| c.is_lowercase()) {
        return false;
    }

    if requirements.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    true
}
