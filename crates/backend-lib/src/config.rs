// ============================
// gatehouse-backend-lib/src/config.rs
// ============================
//! Configuration management.
use std::net::SocketAddr;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Fallback signing secret for non-production environments.
///
/// Publicly known and therefore insecure. Production refuses to start
/// without a real secret; everywhere else the fallback is logged loudly.
pub const INSECURE_DEV_SECRET: &str = "gatehouse-dev-secret-please-set-properly";

/// Deployment environment flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level filter, `tracing_subscriber::EnvFilter` syntax
    pub log_level: String,
    /// Deployment environment
    pub environment: Environment,
    /// Symmetric secret used to sign session tokens
    pub auth_secret: Option<String>,
    /// Postgres connection string
    pub database_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_level: "info".to_string(),
            environment: Environment::Development,
            auth_secret: None,
            database_url: None,
        }
    }
}

impl Settings {
    /// Load settings from `gatehouse.toml` merged with `GATEHOUSE_`-prefixed
    /// environment variables. Environment variables take precedence.
    pub fn load() -> Result<Self, AppError> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("gatehouse.toml"))
            .merge(Env::prefixed("GATEHOUSE_"))
            .extract()
            .map_err(|err| AppError::Config(err.to_string()))
    }

    /// Resolve the secret used for token signing.
    ///
    /// Missing in production: fatal. Missing elsewhere: warn and fall back
    /// to the publicly known development secret.
    pub fn effective_auth_secret(&self) -> Result<String, AppError> {
        match &self.auth_secret {
            Some(secret) if !secret.is_empty() => Ok(secret.clone()),
            _ if self.environment.is_production() => Err(AppError::MissingConfig("auth_secret")),
            _ => {
                tracing::warn!(
                    "auth_secret is not set; using a publicly known development secret. \
                     This is INSECURE and must not reach production."
                );
                Ok(INSECURE_DEV_SECRET.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        figment::Jail::expect_with(|_jail| {
            let settings = Settings::load().unwrap();
            assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:3000");
            assert_eq!(settings.log_level, "info");
            assert_eq!(settings.environment, Environment::Development);
            assert!(settings.auth_secret.is_none());
            assert!(settings.database_url.is_none());
            Ok(())
        });
    }

    #[test]
    fn environment_variables_override_the_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "gatehouse.toml",
                r#"
                log_level = "debug"
                auth_secret = "file-secret"
                "#,
            )?;
            jail.set_env("GATEHOUSE_LOG_LEVEL", "warn");
            jail.set_env("GATEHOUSE_DATABASE_URL", "postgres://localhost/gatehouse");

            let settings = Settings::load().unwrap();
            assert_eq!(settings.log_level, "warn");
            assert_eq!(settings.auth_secret.as_deref(), Some("file-secret"));
            assert_eq!(
                settings.database_url.as_deref(),
                Some("postgres://localhost/gatehouse")
            );
            Ok(())
        });
    }

    #[test]
    fn missing_secret_falls_back_outside_production() {
        let settings = Settings::default();
        let secret = settings.effective_auth_secret().unwrap();
        assert_eq!(secret, INSECURE_DEV_SECRET);
    }

    #[test]
    fn missing_secret_is_fatal_in_production() {
        let settings = Settings {
            environment: Environment::Production,
            ..Settings::default()
        };
        let err = settings.effective_auth_secret().unwrap_err();
        assert!(matches!(err, AppError::MissingConfig("auth_secret")));
    }

    #[test]
    fn empty_secret_is_treated_as_missing() {
        let settings = Settings {
            environment: Environment::Production,
            auth_secret: Some(String::new()),
            ..Settings::default()
        };
        assert!(settings.effective_auth_secret().is_err());
    }
}
