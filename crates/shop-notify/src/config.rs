//! # Configuration
//!
//! Provider credentials and service settings, loaded from the environment
//! at process start. The storefront this service replaces embedded its
//! EmailJS credentials directly in source; here a missing variable is a
//! startup error – secrets are never defaulted from code.

use thiserror::Error;

/// The real EmailJS relay. Overridable via `EMAILJS_ENDPOINT` so tests and
/// staging can point the adapter at a simulated provider.
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Default bind address for the HTTP server (`NOTIFY_BIND_ADDR` overrides).
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Credentials and endpoint for the EmailJS-style relay call.
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
}

impl EmailJsConfig {
    /// Loads the EmailJS configuration from the environment.
    ///
    /// Required: `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
    /// `EMAILJS_USER_ID`. Optional: `EMAILJS_ENDPOINT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: std::env::var("EMAILJS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_EMAILJS_ENDPOINT.to_string()),
            service_id: require("EMAILJS_SERVICE_ID")?,
            template_id: require("EMAILJS_TEMPLATE_ID")?,
            user_id: require("EMAILJS_USER_ID")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// The HTTP bind address (`NOTIFY_BIND_ADDR`, defaulting to
/// [`DEFAULT_BIND_ADDR`]).
pub fn bind_addr() -> String {
    std::env::var("NOTIFY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}
