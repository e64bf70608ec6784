use crate::gateway::credentials::{
    BasicCredentials, BearerToken, CredentialProvider, NoCredentials,
};

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Default address the HTTP API listens on.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// Index searched when none is configured.
pub const DEFAULT_INDEX: &str = "tenders";
/// Per-request timeout towards the index.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, one event per line.
    Text,
    /// Compact JSON objects, one per line, for log aggregators.
    Json,
}

/// Where the gateway gets its credentials from.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Anonymous,
    Basic { username: String, password: String },
    Bearer { token: String },
}

impl CredentialSource {
    /// Builds the strategy that attaches these credentials to outgoing requests.
    pub fn provider(&self) -> Arc<dyn CredentialProvider> {
        match self {
            CredentialSource::Anonymous => Arc::new(NoCredentials),
            CredentialSource::Basic { username, password } => Arc::new(BasicCredentials {
                username: username.clone(),
                password: password.clone(),
            }),
            CredentialSource::Bearer { token } => Arc::new(BearerToken {
                token: token.clone(),
            }),
        }
    }
}

// Secrets never reach the logs.
impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Anonymous => write!(f, "Anonymous"),
            CredentialSource::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            CredentialSource::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

/// Connection settings for the document index.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Base URL of the cluster, without a trailing slash.
    pub endpoint: String,
    pub index: String,
    pub timeout: Duration,
    /// Skip TLS certificate validation (private endpoints with internal certs).
    pub accept_invalid_certs: bool,
    pub credentials: CredentialSource,
}

/// Everything the binary needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub log_format: LogFormat,
    pub log_level: tracing::Level,
    pub gateway: GatewayConfig,
}
