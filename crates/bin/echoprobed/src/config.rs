//! Configuration loading — environment variables read once at startup.
//!
//! Every field has a sensible default so an empty environment yields a
//! working server on `0.0.0.0:5001`. The resulting [`Config`] is passed by
//! reference into listener and logging setup; nothing is stored globally.

use std::num::ParseIntError;

/// Top-level configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`, `::1` or a host name).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Default)]
pub struct LoggingConfig {
    /// Verbose diagnostics (`DEBUG=true`).
    pub debug: bool,
    /// Explicit filter directive (`RUST_LOG` syntax), overriding `debug`.
    pub filter: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Reads `HOST`, `PORT`, `DEBUG` and `RUST_LOG`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid non-zero port number.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_env_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("PORT") {
            self.server.port = val
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: val, source })?;
        }
        if let Some(val) = lookup("DEBUG") {
            self.logging.debug = val.eq_ignore_ascii_case("true");
        }
        if let Some(val) = lookup("RUST_LOG").filter(|val| !val.trim().is_empty()) {
            self.logging.filter = Some(val);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address, bracketing IPv6 literals.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        let host = &self.server.host;
        if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{}", self.server.port)
        } else {
            format!("{host}:{}", self.server.port)
        }
    }

    /// Return the `tracing` filter directive to install.
    #[must_use]
    pub fn log_filter(&self) -> String {
        match &self.logging.filter {
            Some(filter) => filter.clone(),
            None if self.logging.debug => {
                "echoprobed=debug,echoprobe_adapter_http_axum=debug,tower_http=debug".to_string()
            }
            None => "echoprobed=info,echoprobe_adapter_http_axum=info,tower_http=info".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a number in `1..=65535`.
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
