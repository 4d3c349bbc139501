//! Runtime configuration read from the environment.
//!
//! `main` loads a `.env` file with `dotenvy` before calling [`Config::from_env`]; after that
//! the struct is passed explicitly and nothing else reads the environment.

use crate::server::error::config::ConfigError;

/// Default address the HTTP server listens on.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8090";
/// Default number of attempts for each UEX fetch, a single attempt means no retries.
pub const DEFAULT_UEX_MAX_ATTEMPTS: u32 = 1;

#[derive(Debug, Clone)]
pub struct Config {
    pub uex_api_url: String,
    pub uex_api_key: String,
    pub database_url: String,
    pub admin_token: String,
    pub bind_address: String,
    /// Whether manual sync triggers answer with the outcome instead of always reporting success
    pub report_sync_failures: bool,
    pub uex_max_attempts: u32,
    pub commodity_sync_cron: Option<String>,
    pub star_system_sync_cron: Option<String>,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required =
            |var: &str| optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let report_sync_failures = match optional("REPORT_SYNC_FAILURES") {
            None => false,
            Some(value) => parse_bool("REPORT_SYNC_FAILURES", &value)?,
        };

        let uex_max_attempts = match optional("UEX_MAX_ATTEMPTS") {
            None => DEFAULT_UEX_MAX_ATTEMPTS,
            Some(value) => match value.parse::<u32>() {
                Ok(attempts) if attempts >= 1 => attempts,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "UEX_MAX_ATTEMPTS".to_string(),
                        reason: format!("expected a positive integer, got `{}`", value),
                    })
                }
            },
        };

        Ok(Self {
            uex_api_url: required("UEX_API_URL")?,
            uex_api_key: required("UEX_API_KEY")?,
            database_url: required("DATABASE_URL")?,
            admin_token: required("ADMIN_TOKEN")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            report_sync_failures,
            uex_max_attempts,
            commodity_sync_cron: optional("COMMODITY_SYNC_CRON"),
            star_system_sync_cron: optional("STAR_SYSTEM_SYNC_CRON"),
            user_agent: format!("PulsePoint/{}", env!("CARGO_PKG_VERSION")),
        })
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got `{}`", value),
        }),
    }
}
