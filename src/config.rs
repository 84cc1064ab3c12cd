//! Runtime configuration read from the environment at startup.

use sea_orm::ConnectOptions;

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5000";

/// Server settings, each overridable through an environment variable of the
/// same name.
#[derive(Clone, Debug)]
pub struct Config {
    /// Connection string handed to Sea-ORM (`DATABASE_URL`).
    pub database_url: String,
    /// Address the HTTP listener binds to (`BIND_ADDR`).
    pub bind_addr: String,
    /// Origin the browser frontend is served from (`CORS_ORIGIN`).
    pub cors_origin: String,
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        }
    }

    /// Connection options for the configured database.
    #[must_use]
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        if self.database_url.starts_with("sqlite::memory:") {
            // Force single connection to keep the in-memory DB alive
            opt.max_connections(1).min_connections(1);
        }
        opt.sqlx_logging(false);
        opt
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.cors_origin, "http://localhost:5000");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let vars = HashMap::from([
            ("DATABASE_URL", "mysql://shelter:secret@db/shelter"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("CORS_ORIGIN", "https://shelter.example.org"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(ToString::to_string));
        assert_eq!(config.database_url, "mysql://shelter:secret@db/shelter");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.cors_origin, "https://shelter.example.org");
    }

    #[test]
    fn test_partial_overrides_keep_remaining_defaults() {
        let vars = HashMap::from([("BIND_ADDR", "0.0.0.0:9000")]);
        let config = Config::from_lookup(|key| vars.get(key).map(ToString::to_string));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.cors_origin, "http://localhost:5000");
    }

    #[test]
    fn test_in_memory_sqlite_pins_a_single_connection() {
        let config = Config::default();
        let opt = config.connect_options();
        assert_eq!(opt.get_max_connections(), Some(1));
        assert_eq!(opt.get_min_connections(), Some(1));
    }

    #[test]
    fn test_server_databases_use_pool_defaults() {
        let vars = HashMap::from([("DATABASE_URL", "mysql://shelter:secret@db/shelter")]);
        let config = Config::from_lookup(|key| vars.get(key).map(ToString::to_string));
        let opt = config.connect_options();
        assert_eq!(opt.get_max_connections(), None);
    }
}
