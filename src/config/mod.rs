use dashmap::DashMap;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use strum_macros::{Display, EnumString};

/// Configuration service
///
/// Holds a snapshot of the process environment taken at construction.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Deployment environment, read from `NODE_ENV` (or `APP_ENV`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_service(&ConfigService::new())
    }

    pub fn from_service(config: &ConfigService) -> Self {
        let environment = match config.get("NODE_ENV").or_else(|| config.get("APP_ENV")) {
            Some(raw) => Environment::from_str(&raw).unwrap_or_else(|_| {
                tracing::warn!("Unknown environment '{}', falling back to development", raw);
                Environment::Development
            }),
            None => Environment::default(),
        };

        Self {
            environment,
            server: ServerConfig {
                host: config.get_or("HOST", "0.0.0.0"),
                port: parse_port(config, "PORT", 3000),
            },
            database: DatabaseConfig {
                host: config.get_or("DB_HOST", "localhost"),
                port: parse_port(config, "DB_PORT", 5432),
                name: config.get_or("DB_NAME", "mydb"),
                user: config.get_or("DB_USER", "postgres"),
                password: config.get_or("DB_PASSWORD", "postgres"),
            },
        }
    }

    /// Test mode swaps Postgres for the in-memory store.
    pub fn is_test_mode(&self) -> bool {
        self.environment == Environment::Test
    }
}

fn parse_port(config: &ConfigService, key: &str, default: u16) -> u16 {
    match config.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{} must be a valid port, got '{}'; using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
