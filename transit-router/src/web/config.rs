//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the request document path.
pub const DOCUMENT_VAR: &str = "TRANSIT_DOCUMENT";

/// Environment variable holding the HTTP listen address.
pub const LISTEN_VAR: &str = "TRANSIT_LISTEN";

/// Error for an environment value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {value}")]
pub struct InvalidEnv {
    var: &'static str,
    value: String,
}

/// How the binary should run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Where to read the request document. Stdin when unset.
    pub document: Option<PathBuf>,

    /// Address to serve HTTP on after answering the document's stat
    /// requests. No server is started when unset.
    pub listen: Option<SocketAddr>,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, InvalidEnv> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of
    /// an environment variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InvalidEnv> {
        let document = lookup(DOCUMENT_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let listen = lookup(LISTEN_VAR)
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse().map_err(|_| InvalidEnv {
                    var: LISTEN_VAR,
                    value: v,
                })
            })
            .transpose()?;

        Ok(Self { document, listen })
    }
}
