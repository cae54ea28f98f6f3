//! Configuration module for the transcription gateway.
//!
//! Loads configuration from built-in defaults, YAML files and environment
//! variables. Every auth field has an empty default so a missing secret
//! degrades to deny-all instead of aborting startup.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per line, for log shippers.
    Json,
    /// Human-readable, for local development.
    Pretty,
}

/// Single-user authentication configuration.
#[derive(Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Secret string the token signing key is derived from.
    #[serde(default)]
    pub jwt_secret: String,
    /// The one identity allowed to log in.
    #[serde(default)]
    pub username: String,
    /// Lowercase hex SHA-256 of the password.
    #[serde(default)]
    pub password_hash: String,
    /// Mark the session cookie `Secure`.
    #[serde(default)]
    pub secure_cookie: bool,
}

// Secrets stay out of logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &redacted(&self.jwt_secret))
            .field("username", &self.username)
            .field("password_hash", &redacted(&self.password_hash))
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. `NODE_ENV=production` forces `auth.secure_cookie`
    /// 2. Environment variables (TRANSCRIBE__*)
    /// 3. config/local.yaml (if exists)
    /// 4. config/default.yaml
    /// 5. Unprefixed `JWT_SECRET`, `AUTH_USERNAME`, `AUTH_PASSWORD_HASH`
    /// 6. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::layered(
            |name| std::env::var(name).ok(),
            Environment::with_prefix("TRANSCRIBE"),
        )
    }

    /// Build the full source stack over `lookup` and a prefixed `env` source.
    fn layered<F>(lookup: F, env: Environment) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = lookup("NODE_ENV").is_some_and(|value| value == "production");

        let config = Self::defaults(&lookup)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env.separator("__").try_parsing(true))
            .set_override_option("auth.secure_cookie", production.then_some(true))?
            .build()?;

        config.try_deserialize()
    }

    /// Builder seeded with built-in defaults and the unprefixed variables.
    fn defaults<F>(
        lookup: &F,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("logging.format", "json")?
            .set_default("auth.jwt_secret", lookup("JWT_SECRET").unwrap_or_default())?
            .set_default("auth.username", lookup("AUTH_USERNAME").unwrap_or_default())?
            .set_default(
                "auth.password_hash",
                lookup("AUTH_PASSWORD_HASH").unwrap_or_default(),
            )?
            .set_default("auth.secure_cookie", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Load through every layer, `config/` files included, with the given
    /// unprefixed and `TRANSCRIBE__` variables.
    fn load_with(unprefixed: &[(&str, &str)], prefixed: &[(&str, &str)]) -> Config {
        let unprefixed = vars(unprefixed);
        let env = Environment::with_prefix("TRANSCRIBE").source(Some(vars(prefixed)));
        Config::layered(|name| unprefixed.get(name).cloned(), env).unwrap()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load_with(&[], &[]);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.auth.jwt_secret.is_empty());
        assert!(config.auth.username.is_empty());
        assert!(config.auth.password_hash.is_empty());
        assert!(!config.auth.secure_cookie);
    }

    #[test]
    fn test_unprefixed_variables() {
        let config = load_with(
            &[
                ("JWT_SECRET", "s3cret"),
                ("AUTH_USERNAME", "alice@example.com"),
                ("AUTH_PASSWORD_HASH", "abc123"),
            ],
            &[],
        );
        assert_eq!(config.auth.jwt_secret, "s3cret");
        assert_eq!(config.auth.username, "alice@example.com");
        assert_eq!(config.auth.password_hash, "abc123");
    }

    #[test]
    fn test_production_marks_cookie_secure_over_files() {
        assert!(std::path::Path::new("config/default.yaml").exists());

        let config = load_with(&[("NODE_ENV", "production"), ("JWT_SECRET", "s3cret")], &[]);
        assert!(config.auth.secure_cookie);

        // An explicit opt-out does not survive production either.
        let config = load_with(
            &[("NODE_ENV", "production")],
            &[("TRANSCRIBE__AUTH__SECURE_COOKIE", "false")],
        );
        assert!(config.auth.secure_cookie);
    }

    #[test]
    fn test_development_cookie_follows_layers() {
        let config = load_with(&[("NODE_ENV", "development")], &[]);
        assert!(!config.auth.secure_cookie);

        let config = load_with(&[], &[("TRANSCRIBE__AUTH__SECURE_COOKIE", "true")]);
        assert!(config.auth.secure_cookie);
    }

    #[test]
    fn test_prefixed_variables_win_over_unprefixed() {
        let config = load_with(
            &[("AUTH_USERNAME", "alice@example.com")],
            &[
                ("TRANSCRIBE__AUTH__USERNAME", "carol@example.com"),
                ("TRANSCRIBE__LOGGING__FORMAT", "pretty"),
            ],
        );
        assert_eq!(config.auth.username, "carol@example.com");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let auth = AuthConfig {
            jwt_secret: "top-secret".to_string(),
            username: "alice@example.com".to_string(),
            password_hash: String::new(),
            secure_cookie: false,
        };
        let printed = format!("{auth:?}");
        assert!(!printed.contains("top-secret"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("<unset>"));
        assert!(printed.contains("alice@example.com"));
    }
}
