// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const SESSION_CREATED: &str = "session.created";
pub const SESSION_REJECTED: &str = "session.rejected";
pub const ACCOUNT_CREATED: &str = "account.created";
