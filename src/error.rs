use std::path::PathBuf;
use thiserror::Error;

/// Failures below the application level: the request never produced a
/// readable answer from the server.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Server answered with a non-success HTTP status
    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, TLS, timeout or body decoding failure
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Response body was JSON but not the expected document
    #[error("Invalid response: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// A file selected for upload could not be read
    #[error("Failed to read {name}: {source}")]
    ReadFile {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Endpoint or locator could not be resolved against the server URL
    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid server URL {url:?}: {reason}")]
    InvalidServerUrl { url: String, reason: String },
}
