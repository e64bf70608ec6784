use super::types::*;

use anyhow::{Context, Result, anyhow, bail};
use std::net::SocketAddr;
use std::time::Duration;

pub const ENV_BIND: &str = "SEARCH_BIND";
pub const ENV_ENDPOINT: &str = "OPENSEARCH_ENDPOINT";
pub const ENV_INDEX: &str = "OPENSEARCH_INDEX";
pub const ENV_TIMEOUT_MS: &str = "OPENSEARCH_TIMEOUT_MS";
pub const ENV_ACCEPT_INVALID_CERTS: &str = "OPENSEARCH_ACCEPT_INVALID_CERTS";
pub const ENV_USERNAME: &str = "OPENSEARCH_USERNAME";
pub const ENV_PASSWORD: &str = "OPENSEARCH_PASSWORD";
pub const ENV_TOKEN: &str = "OPENSEARCH_TOKEN";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Values given on the command line. They win over the environment.
#[derive(Debug, Default)]
struct CliOverrides {
    bind: Option<String>,
    endpoint: Option<String>,
    index: Option<String>,
}

fn parse_args(args: &[String]) -> Result<CliOverrides> {
    let mut overrides = CliOverrides::default();

    // args[0] is the program name
    let mut i = 1;
    while i < args.len() {
        let slot = match args[i].as_str() {
            "--bind" => &mut overrides.bind,
            "--endpoint" => &mut overrides.endpoint,
            "--index" => &mut overrides.index,
            _ => {
                i += 1;
                continue;
            }
        };
        let value = args
            .get(i + 1)
            .ok_or_else(|| anyhow!("{} requires a value", args[i]))?;
        *slot = Some(value.clone());
        i += 2;
    }

    Ok(overrides)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ServerConfig {
    /// Loads the configuration of the current process.
    pub fn from_process() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_sources(&args, |key| std::env::var(key).ok())
    }

    /// Builds the configuration from command-line arguments and an environment lookup.
    pub fn from_sources<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cli = parse_args(args)?;

        let bind_raw = cli
            .bind
            .or_else(|| non_empty(env(ENV_BIND)))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_raw
            .parse()
            .with_context(|| format!("invalid bind address '{}'", bind_raw))?;

        let endpoint = non_empty(cli.endpoint.or_else(|| env(ENV_ENDPOINT)))
            .ok_or_else(|| anyhow!("OpenSearch endpoint is not configured (set {} or --endpoint)", ENV_ENDPOINT))?;
        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            bail!("OpenSearch endpoint must be an http(s) URL, got '{}'", endpoint);
        }

        let index = non_empty(cli.index.or_else(|| env(ENV_INDEX)))
            .unwrap_or_else(|| DEFAULT_INDEX.to_string());

        let timeout_ms = match non_empty(env(ENV_TIMEOUT_MS)) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be a number of milliseconds", ENV_TIMEOUT_MS))?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let accept_invalid_certs = non_empty(env(ENV_ACCEPT_INVALID_CERTS))
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let credentials = match (
            non_empty(env(ENV_USERNAME)),
            non_empty(env(ENV_PASSWORD)),
            non_empty(env(ENV_TOKEN)),
        ) {
            (Some(username), Some(password), _) => CredentialSource::Basic { username, password },
            (Some(_), None, _) => bail!("{} is set but {} is missing", ENV_USERNAME, ENV_PASSWORD),
            (None, _, Some(token)) => CredentialSource::Bearer { token },
            (None, _, None) => CredentialSource::Anonymous,
        };

        let log_format = match non_empty(env(ENV_LOG_FORMAT)) {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let log_level = match non_empty(env(ENV_LOG_LEVEL)) {
            Some(raw) => raw
                .trim()
                .parse::<tracing::Level>()
                .map_err(|e| anyhow!("invalid {} '{}': {}", ENV_LOG_LEVEL, raw, e))?,
            None => tracing::Level::INFO,
        };

        Ok(ServerConfig {
            bind,
            log_format,
            log_level,
            gateway: GatewayConfig {
                endpoint,
                index,
                timeout: Duration::from_millis(timeout_ms),
                accept_invalid_certs,
                credentials,
            },
        })
    }
}
