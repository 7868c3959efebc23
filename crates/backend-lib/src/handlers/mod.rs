// crates/backend-lib/src/handlers/mod.rs

//! HTTP handlers for the account and session endpoints.

pub mod account;

pub use account::{current_user, sign_in, sign_up};
