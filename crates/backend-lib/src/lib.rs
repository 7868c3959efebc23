// ============================
// gatehouse-backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the Gatehouse session service.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod router;

use std::sync::Arc;

use crate::auth::{AuthService, DefaultAuth, SessionManager, TokenCodec};
use crate::config::Settings;
use crate::db::Database;
use crate::error::AppError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth: Arc<dyn AuthService>,
    /// Session manager
    pub sessions: SessionManager,
    /// Settings manager
    pub settings: Arc<Settings>,
    /// Database handles
    pub db: Database,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Fails at startup when the signing secret is missing in production.
    /// A missing database URL does not fail here; the database handle is
    /// constructed in its unconfigured, fail-on-first-use form instead.
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        let secret = settings.effective_auth_secret()?;
        let codec = Arc::new(TokenCodec::new(&secret));
        let sessions = SessionManager::new(codec, settings.environment.is_production());
        let auth: Arc<dyn AuthService> = Arc::new(DefaultAuth::new(sessions.clone()));
        let db = Database::connect(&settings)?;

        Ok(Self {
            auth,
            sessions,
            settings: Arc::new(settings),
            db,
        })
    }
}
