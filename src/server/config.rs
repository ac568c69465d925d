use std::net::SocketAddr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_GEOCODER_USER_AGENT: &str = "venue-booking/0.1";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    pub geocoder_url: Url,
    pub geocoder_user_agent: String,

    /// Sessions expire after this many days without a request.
    pub session_expiry_days: i64,
    /// Allowed browser origin; any origin when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from any variable source.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDRESS", e))?;

        let geocoder_url = Url::parse(
            &lookup("GEOCODER_URL").unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_string()),
        )
        .map_err(|e| invalid("GEOCODER_URL", e))?;

        let geocoder_user_agent = lookup("GEOCODER_USER_AGENT")
            .unwrap_or_else(|| DEFAULT_GEOCODER_USER_AGENT.to_string());

        let session_expiry_days = match lookup("SESSION_EXPIRY_DAYS") {
            Some(value) => {
                let days = value
                    .parse::<i64>()
                    .map_err(|e| invalid("SESSION_EXPIRY_DAYS", e))?;
                if days < 1 {
                    return Err(invalid("SESSION_EXPIRY_DAYS", "must be at least 1"));
                }
                days
            }
            None => DEFAULT_SESSION_EXPIRY_DAYS,
        };

        let cors_origin = lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty());

        Ok(Self {
            database_url,
            bind_address,
            geocoder_url,
            geocoder_user_agent,
            session_expiry_days,
            cors_origin,
        })
    }
}

fn invalid(name: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = config_from(&[("DATABASE_URL", "sqlite://venues.db?mode=rwc")]).unwrap();

        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.geocoder_url.as_str(), "https://nominatim.openstreetmap.org/");
        assert_eq!(config.geocoder_user_agent, DEFAULT_GEOCODER_USER_AGENT);
        assert_eq!(config.session_expiry_days, 7);
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn requires_database_url() {
        let result = config_from(&[]);

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "DATABASE_URL"));
    }

    #[test]
    fn rejects_malformed_values() {
        let bad_address = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("BIND_ADDRESS", "nowhere")]);
        let bad_expiry = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SESSION_EXPIRY_DAYS", "0"),
        ]);

        assert!(matches!(bad_address, Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "BIND_ADDRESS"));
        assert!(matches!(bad_expiry, Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "SESSION_EXPIRY_DAYS"));
    }
}
