//! Server settings loaded via OrthoConfig.
//!
//! Values come from `CONTACTS_*` environment variables, an optional
//! configuration file, and command-line flags, in OrthoConfig's usual
//! precedence. Everything is optional; accessors supply the defaults.

use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
/// Conventional variable consulted when `CONTACTS_DATABASE_URL` is unset.
pub const DATABASE_URL_FALLBACK_ENV: &str = "DATABASE_URL";

/// Errors raised when settings cannot be turned into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid listen host {host:?}: {source}")]
    InvalidHost {
        /// Offending host value.
        host: String,
        /// Parser failure.
        source: AddrParseError,
    },
}

/// Configuration values for the HTTP server and its storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct ServerSettings {
    /// IP address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Contacts are kept in memory when absent.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl ServerSettings {
    /// Listen host, defaulting to all interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Listen port, defaulting to 8080.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address assembled from [`Self::host`] and [`Self::port`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Database URL from settings, falling back to `DATABASE_URL`.
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env::var(DATABASE_URL_FALLBACK_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Pool configuration for `database_url`.
    #[must_use]
    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size.unwrap_or(PoolConfig::DEFAULT_MAX_SIZE))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("CONTACTS_HOST", None::<String>),
            ("CONTACTS_PORT", None::<String>),
            ("CONTACTS_DATABASE_URL", None::<String>),
            ("CONTACTS_POOL_MAX_SIZE", None::<String>),
            ("DATABASE_URL", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))
        );
        assert!(settings.database_url().is_none());
        assert_eq!(
            settings.pool_config("postgres://x").max_size(),
            PoolConfig::DEFAULT_MAX_SIZE
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CONTACTS_HOST", Some("127.0.0.1".to_owned())),
            ("CONTACTS_PORT", Some("9090".to_owned())),
            (
                "CONTACTS_DATABASE_URL",
                Some("postgres://app@db/contacts".to_owned()),
            ),
            ("CONTACTS_POOL_MAX_SIZE", Some("3".to_owned())),
            ("DATABASE_URL", Some("postgres://ignored@db/other".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([127, 0, 0, 1], 9090)))
        );
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://app@db/contacts")
        );
        assert_eq!(settings.pool_config("postgres://x").max_size(), 3);
    }

    #[rstest]
    fn database_url_falls_back_to_conventional_variable() {
        let _guard = lock_env([
            ("CONTACTS_DATABASE_URL", None::<String>),
            ("DATABASE_URL", Some("postgres://app@db/contacts".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://app@db/contacts")
        );
    }

    fn settings_with(host: Option<&str>, database_url: Option<&str>) -> ServerSettings {
        ServerSettings {
            host: host.map(str::to_owned),
            port: None,
            database_url: database_url.map(str::to_owned),
            pool_max_size: None,
        }
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let settings = settings_with(None, Some("  "));
        let _guard = lock_env([("DATABASE_URL", None::<String>)]);

        assert!(settings.database_url().is_none());
    }

    #[rstest]
    fn hostnames_are_rejected() {
        let settings = settings_with(Some("localhost"), None);

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidHost { .. })
        ));
    }
}
