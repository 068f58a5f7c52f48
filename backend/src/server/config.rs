//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable naming the socket address to bind.
const BIND_ADDR_VAR: &str = "BREEDSENSE_BIND_ADDR";

/// Environment variable naming the transient uploads directory.
const UPLOADS_DIR_VAR: &str = "BREEDSENSE_UPLOADS_DIR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOADS_DIR: &str = "uploads";

/// Configuration for creating the HTTP server.
///
/// Bound once at startup; domain constants such as the breed set and the
/// retention bound are compiled in and not configurable at runtime.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    uploads_dir: PathBuf,
}

impl ServerConfig {
    /// Construct a configuration with explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr,
            uploads_dir: uploads_dir.into(),
        }
    }

    /// Read configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the bind address does not parse.
    pub fn from_env() -> std::io::Result<Self> {
        let raw_addr = env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_addr.parse().map_err(|error| {
            std::io::Error::other(format!("invalid {BIND_ADDR_VAR} value {raw_addr}: {error}"))
        })?;
        let uploads_dir = env::var(UPLOADS_DIR_VAR)
            .map_or_else(|_| PathBuf::from(DEFAULT_UPLOADS_DIR), PathBuf::from);
        Ok(Self {
            bind_addr,
            uploads_dir,
        })
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Directory for transient upload scratch files.
    #[must_use]
    pub fn uploads_dir(&self) -> &Path {
        self.uploads_dir.as_path()
    }
}
