use std::env;
use std::path::PathBuf;

use dotenv::dotenv;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Server port cannot be 0")]
    ZeroPort,

    #[error("EVENTS_FILE cannot be empty")]
    EmptyEventsFile,

    #[error("CORS_ORIGIN must be set in production")]
    MissingCorsOrigin,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON array of events served by `GET /api/events`.
    pub events_file: PathBuf,
    /// Built frontend to serve at `/`, if any.
    pub frontend_dist: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub cors_origin: Option<String>,
}

impl Config {
    /// Reads `.env` (and `.env.<environment>` outside development), then
    /// builds the config from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();
        let environment_hint = env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);
        let env_file = format!(".env.{:?}", environment_hint).to_lowercase();
        if env_file != ".env.development" {
            let _ = dotenv::from_filename(&env_file);
        }

        let config = Self::from_lookup(|name| env::var(name).ok())?;
        config.log_configuration();
        Ok(config)
    }

    /// Builds and validates a config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let environment = match var("RUST_ENV") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "RUST_ENV", value })?,
            None => Environment::Development,
        };

        let default_workers = if environment == Environment::Production { 4 } else { 1 };
        let server = ServerConfig {
            host: var("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(var("SERVER_PORT"), "SERVER_PORT", 8080)?,
            workers: parse_or(var("BACKEND_WORKERS"), "BACKEND_WORKERS", default_workers)?,
        };

        let catalog = CatalogConfig {
            events_file: PathBuf::from(
                lookup("EVENTS_FILE").unwrap_or_else(|| "data/events.json".to_string()),
            ),
            frontend_dist: var("FRONTEND_DIST").map(PathBuf::from),
        };

        let config = Config {
            environment,
            server,
            catalog,
            cors_origin: var("CORS_ORIGIN"),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.catalog.events_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyEventsFile);
        }
        if self.environment == Environment::Production && self.cors_origin.is_none() {
            return Err(ConfigError::MissingCorsOrigin);
        }
        Ok(())
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!("Server: {}:{} (workers: {})", self.server.host, self.server.port, self.server.workers);
        info!("Events file: {}", self.catalog.events_file.display());
        match &self.catalog.frontend_dist {
            Some(dist) => info!("Serving frontend from {}", dist.display()),
            None => info!("Frontend serving disabled"),
        }

        if self.environment == Environment::Development {
            warn!("Running in development mode - CORS allows local origins");
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[rstest]
    #[case("development", Environment::Development)]
    #[case("dev", Environment::Development)]
    #[case("TEST", Environment::Test)]
    #[case("Production", Environment::Production)]
    #[case("prod", Environment::Production)]
    fn test_environment_parsing(#[case] raw: &str, #[case] expected: Environment) {
        assert_eq!(raw.parse::<Environment>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_environment_rejected() {
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(
            config_from(&[("RUST_ENV", "staging")]),
            Err(ConfigError::InvalidValue {
                name: "RUST_ENV",
                value: "staging".to_string()
            })
        );
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(
            config.server,
            ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: 1,
            }
        );
        assert_eq!(config.catalog.events_file, PathBuf::from("data/events.json"));
        assert_eq!(config.catalog.frontend_dist, None);
        assert_eq!(config.cors_origin, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("EVENTS_FILE", "/srv/catalog.json"),
            ("FRONTEND_DIST", "frontend/dist"),
            ("CORS_ORIGIN", "https://tickets.example.com"),
        ])
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.catalog.events_file, PathBuf::from("/srv/catalog.json"));
        assert_eq!(config.catalog.frontend_dist, Some(PathBuf::from("frontend/dist")));
        assert_eq!(config.cors_origin.as_deref(), Some("https://tickets.example.com"));
    }

    #[rstest]
    #[case("SERVER_PORT", "0", ConfigError::ZeroPort)]
    #[case("SERVER_PORT", "eighty", ConfigError::InvalidValue { name: "SERVER_PORT", value: "eighty".to_string() })]
    #[case("EVENTS_FILE", "", ConfigError::EmptyEventsFile)]
    fn test_invalid_values(#[case] name: &str, #[case] value: &str, #[case] expected: ConfigError) {
        assert_eq!(config_from(&[(name, value)]), Err(expected));
    }

    #[test]
    fn test_production_requires_cors_origin() {
        assert_eq!(
            config_from(&[("RUST_ENV", "production")]),
            Err(ConfigError::MissingCorsOrigin)
        );
        let config = config_from(&[
            ("RUST_ENV", "production"),
            ("CORS_ORIGIN", "https://tickets.example.com"),
        ])
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.server.workers, 4);
    }
}
