use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Validate a service base address and normalise it for path joining.
pub(super) fn parse_connection(connection: &str) -> Result<String, ClientError> {
    let parsed = Url::parse(connection).map_err(|e| {
        ClientError::InvalidConfig(format!(
            "invalid address `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(connection.trim_end_matches('/').to_owned()),
        other => Err(ClientError::InvalidConfig(format!(
            "unsupported address scheme `{other}`; expected http or https"
        ))),
    }
}

pub(super) fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder()
        .pool_max_idle_per_host(8)
        .tcp_nodelay(true);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ClientError::InvalidConfig(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn parse_connection_http_url() {
        let parsed = parse_connection("http://localhost:10102").expect("should parse");
        assert_eq!(parsed, "http://localhost:10102");
    }

    #[test]
    fn parse_connection_strips_trailing_slash() {
        let parsed = parse_connection("https://node.example:9291/").expect("should parse");
        assert_eq!(parsed, "https://node.example:9291");
    }

    #[test]
    fn parse_connection_invalid_scheme() {
        let err = parse_connection("ftp://example.com").expect_err("must reject ftp");
        assert!(err.to_string().contains("unsupported address scheme"));
    }

    #[test]
    fn parse_connection_rejects_bare_host() {
        let err = parse_connection("localhost").expect_err("must reject missing scheme");
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn build_http_client_with_timeouts() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(1))
            .with_connect_timeout(Duration::from_millis(500));
        assert!(build_http_client(&config).is_ok());
    }
}
