//! Database configuration from the environment or a TOML document.

use crate::error::{DataError, DataResult};
use crate::monitor::MonitorConfig;
use mes_query::Ident;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Connection, pool and logging settings.
///
/// `Debug` output redacts the password.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Schema placed first on the search path of every pooled connection.
    pub schema: String,
    pub pool_max: usize,
    pub connect_timeout_ms: u64,
    pub idle_timeout_ms: u64,
    pub log: LogConfig,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "mes".to_string(),
            user: "admin".to_string(),
            password: "password".to_string(),
            schema: "mes_core".to_string(),
            pool_max: 10,
            connect_timeout_ms: 2_000,
            idle_timeout_ms: 30_000,
            log: LogConfig::default(),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("schema", &self.schema)
            .field("pool_max", &self.pool_max)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("idle_timeout_ms", &self.idle_timeout_ms)
            .field("log", &self.log)
            .finish()
    }
}

/// Statement logging settings, see [`MonitorConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub slow_query_threshold_ms: Option<u64>,
    pub query_timeout_ms: Option<u64>,
    pub max_sql_length: Option<usize>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            slow_query_threshold_ms: None,
            query_timeout_ms: None,
            max_sql_length: Some(200),
        }
    }
}

impl LogConfig {
    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            query_timeout: self.query_timeout_ms.map(Duration::from_millis),
            slow_query_threshold: self.slow_query_threshold_ms.map(Duration::from_millis),
            max_sql_length: self.max_sql_length,
        }
    }
}

impl DbConfig {
    /// Load `.env` (if present) and read `DB_*` variables over the defaults.
    pub fn from_env() -> DataResult<Self> {
        // A missing .env file is fine; variables may come from the process.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    ///
    /// Recognised keys: `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`,
    /// `DB_PASSWORD`, `DB_SCHEMA`, `DB_POOL_MAX`, `DB_CONNECT_TIMEOUT_MS`,
    /// `DB_IDLE_TIMEOUT_MS`, `DB_SLOW_QUERY_MS`, `DB_QUERY_TIMEOUT_MS`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DataResult<Self> {
        let defaults = Self::default();
        let text = |key: &str, default: String| lookup(key).unwrap_or(default);

        let config = Self {
            host: text("DB_HOST", defaults.host),
            port: parse_var(&lookup, "DB_PORT")?.unwrap_or(defaults.port),
            database: text("DB_NAME", defaults.database),
            user: text("DB_USER", defaults.user),
            password: text("DB_PASSWORD", defaults.password),
            schema: text("DB_SCHEMA", defaults.schema),
            pool_max: parse_var(&lookup, "DB_POOL_MAX")?.unwrap_or(defaults.pool_max),
            connect_timeout_ms: parse_var(&lookup, "DB_CONNECT_TIMEOUT_MS")?
                .unwrap_or(defaults.connect_timeout_ms),
            idle_timeout_ms: parse_var(&lookup, "DB_IDLE_TIMEOUT_MS")?
                .unwrap_or(defaults.idle_timeout_ms),
            log: LogConfig {
                slow_query_threshold_ms: parse_var(&lookup, "DB_SLOW_QUERY_MS")?,
                query_timeout_ms: parse_var(&lookup, "DB_QUERY_TIMEOUT_MS")?,
                ..defaults.log
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document. Missing keys take their defaults.
    ///
    /// ```toml
    /// host = "db.plant.local"
    /// schema = "mes_core"
    /// pool_max = 20
    ///
    /// [log]
    /// slow_query_threshold_ms = 250
    /// ```
    pub fn from_toml_str(raw: &str) -> DataResult<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|e| DataError::config(format!("invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that end up in connection options.
    pub fn validate(&self) -> DataResult<()> {
        self.schema_ident()?;
        if self.pool_max == 0 {
            return Err(DataError::config("pool_max must be at least 1"));
        }
        if self.connect_timeout_ms == 0 || self.idle_timeout_ms == 0 {
            return Err(DataError::config("timeouts must be greater than zero"));
        }
        Ok(())
    }

    /// The schema as a validated identifier.
    pub fn schema_ident(&self) -> DataResult<Ident> {
        Ident::parse(&self.schema)
            .map_err(|e| DataError::config(format!("invalid schema '{}': {e}", self.schema)))
    }

    /// Connection option that sets the search path, e.g. `-c search_path=mes_core,public`.
    pub fn search_path_option(&self) -> DataResult<String> {
        Ok(format!("-c search_path={},public", self.schema_ident()?))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }
}

fn parse_var<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> DataResult<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| DataError::config(format!("{key}={raw:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_defaults() {
        let config = DbConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DbConfig::default());
        assert_eq!(config.port, 5432);
        assert_eq!(config.schema, "mes_core");
        assert_eq!(config.pool_max, 10);
        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.idle_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn env_overrides() {
        let config = DbConfig::from_lookup(lookup_from(&[
            ("DB_HOST", "db.plant.local"),
            ("DB_PORT", "6432"),
            ("DB_NAME", "mes_test"),
            ("DB_SCHEMA", "mes_stage"),
            ("DB_POOL_MAX", "4"),
            ("DB_SLOW_QUERY_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.host, "db.plant.local");
        assert_eq!(config.port, 6432);
        assert_eq!(config.database, "mes_test");
        assert_eq!(config.pool_max, 4);
        assert_eq!(config.log.slow_query_threshold_ms, Some(250));
        assert_eq!(
            config.log.monitor_config().slow_query_threshold,
            Some(Duration::from_millis(250))
        );
        assert_eq!(
            config.search_path_option().unwrap(),
            "-c search_path=mes_stage,public"
        );
    }

    #[test]
    fn bad_number_is_a_config_error() {
        let err = DbConfig::from_lookup(lookup_from(&[("DB_PORT", "fifty")])).unwrap_err();
        assert!(matches!(err, DataError::Config(msg) if msg.starts_with("DB_PORT")));
    }

    #[test]
    fn schema_must_be_an_identifier() {
        let err =
            DbConfig::from_lookup(lookup_from(&[("DB_SCHEMA", "mes_core; DROP SCHEMA public")]))
                .unwrap_err();
        assert!(matches!(err, DataError::Config(_)));
    }

    #[test]
    fn toml_with_partial_keys() {
        let config = DbConfig::from_toml_str(
            r#"
            host = "10.0.0.5"
            pool_max = 20

            [log]
            slow_query_threshold_ms = 500
            max_sql_length = 80
            "#,
        )
        .unwrap();
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.pool_max, 20);
        assert_eq!(config.database, "mes");
        assert_eq!(config.log.max_sql_length, Some(80));
        assert_eq!(config.log.query_timeout_ms, None);
    }

    #[test]
    fn debug_output_hides_password() {
        let config = DbConfig {
            password: "s3cret-pw".to_string(),
            ..DbConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret-pw"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("mes_core"));
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        assert!(DbConfig::from_toml_str("hostname = \"x\"").is_err());
        assert!(DbConfig::from_toml_str("pool_max = 0").is_err());
    }
}
