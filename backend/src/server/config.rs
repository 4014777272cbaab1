//! Server settings loaded via OrthoConfig and the resolved server config.

use std::net::SocketAddr;

use actix_web::http::Uri;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use signup_backend::outbound::persistence::DbPool;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5173/";

/// Raw settings from CLI, environment (`SIGNUP_*`) and config files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Listening port.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Browser origin allowed by CORS.
    pub client_origin: Option<String>,
    /// PostgreSQL URL; unset runs against the in-memory store.
    pub database_url: Option<String>,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Allowed CORS origin without a trailing slash.
    ///
    /// Browsers send `Origin` without a trailing `/`, so a configured
    /// `http://localhost:5173/` must match `http://localhost:5173`. `*`
    /// allows any origin.
    ///
    /// # Errors
    ///
    /// Returns an error when the origin is blank or not an
    /// `http(s)://host[:port]` URL.
    pub fn client_origin(&self) -> std::io::Result<&str> {
        let origin = self
            .client_origin
            .as_deref()
            .unwrap_or(DEFAULT_CLIENT_ORIGIN)
            .trim()
            .trim_end_matches('/');
        if origin == "*" {
            return Ok(origin);
        }
        let uri: Uri = origin
            .parse()
            .map_err(|err| invalid_origin(origin, err))?;
        let has_scheme = matches!(uri.scheme_str(), Some("http" | "https"));
        let bare = uri.path_and_query().is_none_or(|path| path.as_str() == "/");
        if !has_scheme || uri.authority().is_none() || !bare {
            return Err(invalid_origin(origin, "expected scheme://host[:port]"));
        }
        Ok(origin)
    }

    /// Database URL, if one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Socket address built from host and port.
    ///
    /// # Errors
    ///
    /// Returns an error when the host is not a valid IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        format!("{}:{}", self.host(), self.port)
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid bind address: {err}")))
    }
}

fn invalid_origin(origin: &str, reason: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("invalid client origin `{origin}`: {reason}"))
}

/// Resolved configuration for [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) client_origin: String,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration with no database pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, client_origin: impl Into<String>) -> Self {
        Self {
            bind_addr,
            client_origin: client_origin.into(),
            db_pool: None,
        }
    }

    /// Attach a database connection pool; without one the in-memory store is used.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
