//! Configuration Module Tests
//!
//! Validates how flags and environment variables combine into a `ServerConfig`.

#[cfg(test)]
mod tests {
    use crate::config::loader::*;
    use crate::config::types::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("tender-search")
            .chain(list.iter().copied())
            .map(|s| s.to_string())
            .collect()
    }

    fn load(cli: &[&str], vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_sources(&args(cli), |key| env.get(key).cloned())
    }

    // ============================================================
    // DEFAULTS & REQUIRED VALUES
    // ============================================================

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = load(&[], &[(ENV_ENDPOINT, "https://search.internal:9200")]).unwrap();

        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.gateway.endpoint, "https://search.internal:9200");
        assert_eq!(config.gateway.index, DEFAULT_INDEX);
        assert_eq!(config.gateway.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert!(!config.gateway.accept_invalid_certs);
        assert_eq!(config.gateway.credentials, CredentialSource::Anonymous);
    }

    #[test]
    fn test_missing_endpoint_is_error() {
        let err = load(&[], &[]).unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn test_blank_endpoint_is_error() {
        assert!(load(&[], &[(ENV_ENDPOINT, "   ")]).is_err());
    }

    #[test]
    fn test_endpoint_must_be_http() {
        assert!(load(&[], &[(ENV_ENDPOINT, "search.internal:9200")]).is_err());
    }

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let config = load(&[], &[(ENV_ENDPOINT, "http://localhost:9200/")]).unwrap();
        assert_eq!(config.gateway.endpoint, "http://localhost:9200");
    }

    // ============================================================
    // COMMAND LINE
    // ============================================================

    #[test]
    fn test_flags_override_environment() {
        let config = load(
            &["--bind", "0.0.0.0:9000", "--endpoint", "http://cli:9200", "--index", "tenders-v2"],
            &[
                (ENV_BIND, "127.0.0.1:1234"),
                (ENV_ENDPOINT, "http://env:9200"),
                (ENV_INDEX, "tenders-v1"),
            ],
        )
        .unwrap();

        assert_eq!(config.bind.to_string(), "0.0.0.0:9000");
        assert_eq!(config.gateway.endpoint, "http://cli:9200");
        assert_eq!(config.gateway.index, "tenders-v2");
    }

    #[test]
    fn test_flag_without_value_is_error() {
        let err = load(&["--index"], &[(ENV_ENDPOINT, "http://localhost:9200")]).unwrap_err();
        assert!(err.to_string().contains("--index"));
    }

    #[test]
    fn test_unknown_flags_ignored() {
        let config = load(&["--verbose", "--endpoint", "http://localhost:9200"], &[]).unwrap();
        assert_eq!(config.gateway.endpoint, "http://localhost:9200");
    }

    #[test]
    fn test_invalid_bind_is_error() {
        assert!(load(&["--bind", "not-an-address"], &[(ENV_ENDPOINT, "http://x")]).is_err());
    }

    // ============================================================
    // ENVIRONMENT
    // ============================================================

    #[test]
    fn test_timeout_and_tls_flags() {
        let config = load(
            &[],
            &[
                (ENV_ENDPOINT, "https://vpc-endpoint"),
                (ENV_TIMEOUT_MS, "2500"),
                (ENV_ACCEPT_INVALID_CERTS, "true"),
            ],
        )
        .unwrap();

        assert_eq!(config.gateway.timeout, Duration::from_millis(2500));
        assert!(config.gateway.accept_invalid_certs);
    }

    #[test]
    fn test_invalid_timeout_is_error() {
        let err = load(&[], &[(ENV_ENDPOINT, "http://x"), (ENV_TIMEOUT_MS, "soon")]).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_MS));
    }

    #[test]
    fn test_json_logging_and_level() {
        let config = load(
            &[],
            &[(ENV_ENDPOINT, "http://x"), (ENV_LOG_FORMAT, "JSON"), (ENV_LOG_LEVEL, "debug")],
        )
        .unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_log_level_is_error() {
        assert!(load(&[], &[(ENV_ENDPOINT, "http://x"), (ENV_LOG_LEVEL, "chatty")]).is_err());
    }

    // ============================================================
    // CREDENTIALS
    // ============================================================

    #[test]
    fn test_basic_credentials() {
        let config = load(
            &[],
            &[
                (ENV_ENDPOINT, "http://x"),
                (ENV_USERNAME, "search"),
                (ENV_PASSWORD, "hunter2"),
                (ENV_TOKEN, "ignored"),
            ],
        )
        .unwrap();

        assert_eq!(
            config.gateway.credentials,
            CredentialSource::Basic {
                username: "search".to_string(),
                password: "hunter2".to_string()
            }
        );
    }

    #[test]
    fn test_username_without_password_is_error() {
        assert!(load(&[], &[(ENV_ENDPOINT, "http://x"), (ENV_USERNAME, "search")]).is_err());
    }

    #[test]
    fn test_bearer_token() {
        let config = load(&[], &[(ENV_ENDPOINT, "http://x"), (ENV_TOKEN, "abc")]).unwrap();

        assert_eq!(
            config.gateway.credentials,
            CredentialSource::Bearer {
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let source = CredentialSource::Basic {
            username: "search".to_string(),
            password: "hunter2".to_string(),
        };
        let bearer = CredentialSource::Bearer {
            token: "abc123".to_string(),
        };

        let rendered = format!("{:?} {:?}", source, bearer);

        assert!(rendered.contains("search"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("abc123"));
    }
}
