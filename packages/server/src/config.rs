use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub database_max_connections: u32,
    pub db_connect_attempts: u32,
    pub db_connect_retry_delay: Duration,
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let retry_delay_secs: u64 = lookup("DB_CONNECT_RETRY_DELAY_SECS")
            .unwrap_or_else(|| "2".to_string())
            .parse()
            .context("DB_CONNECT_RETRY_DELAY_SECS must be a valid number")?;

        Ok(Self {
            database_url: lookup("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            db_connect_attempts: lookup("DB_CONNECT_ATTEMPTS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .context("DB_CONNECT_ATTEMPTS must be a valid number")?,
            db_connect_retry_delay: Duration::from_secs(retry_delay_secs),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/jobs")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/jobs");
        assert_eq!(config.port, 3001);
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.db_connect_attempts, 5);
        assert_eq!(config.db_connect_retry_delay, Duration::from_secs(2));
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/jobs"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn allowed_origins_are_split_and_trimmed() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/jobs"),
            ("ALLOWED_ORIGINS", "http://localhost:3000, https://jobs.example.org,,"),
        ]))
        .unwrap();

        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "https://jobs.example.org"]
        );
    }
}
