//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Book listing configuration.
    #[serde(default)]
    pub books: BooksConfig,
    /// Web asset configuration.
    #[serde(default)]
    pub web: WebConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_database_url() -> String {
    "sqlite://aklatan.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

/// Book listing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BooksConfig {
    /// Books shown per index page.
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_per_page() -> i64 {
    15
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

/// Web asset configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `AKLATAN__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails
    /// [`AppConfig::validate`].
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("AKLATAN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but cannot be served.
    ///
    /// # Errors
    ///
    /// Returns an error if `books.per_page` is not positive.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.books.per_page <= 0 {
            return Err(config::ConfigError::Message(format!(
                "books.per_page must be positive, got {}",
                self.books.per_page
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VARS: [&str; 5] = [
        "RUN_MODE",
        "AKLATAN__SERVER__PORT",
        "AKLATAN__DATABASE__URL",
        "AKLATAN__BOOKS__PER_PAGE",
        "AKLATAN__WEB__STATIC_DIR",
    ];

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(VARS, || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.database.url, "sqlite://aklatan.db?mode=rwc");
            assert_eq!(config.database.max_connections, 5);
            assert_eq!(config.books.per_page, 15);
            assert_eq!(config.web.static_dir, "static");
        });
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("RUN_MODE", None),
                ("AKLATAN__SERVER__PORT", Some("4000")),
                ("AKLATAN__DATABASE__URL", Some("sqlite::memory:")),
                ("AKLATAN__BOOKS__PER_PAGE", Some("25")),
                ("AKLATAN__WEB__STATIC_DIR", Some("/srv/static")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 4000);
                assert_eq!(config.database.url, "sqlite::memory:");
                assert_eq!(config.books.per_page, 25);
                assert_eq!(config.web.static_dir, "/srv/static");
            },
        );
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-5")]
    fn test_non_positive_per_page_rejected(#[case] per_page: &str) {
        temp_env::with_vars(
            [("RUN_MODE", None), ("AKLATAN__BOOKS__PER_PAGE", Some(per_page))],
            || {
                let err = AppConfig::load().unwrap_err();
                assert!(err.to_string().contains("books.per_page"));
            },
        );
    }

    #[test]
    fn test_validate_checks_per_page() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.books.per_page = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        temp_env::with_vars(
            [("RUN_MODE", None), ("AKLATAN__SERVER__PORT", Some("not-a-port"))],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }
}
