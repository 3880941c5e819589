use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::ClientError;

use super::connection::{build_http_client, parse_connection};
use super::protocol::{JsonRpcRequest, JsonRpcResponse};

pub(super) const JSON_RPC_PATH: &str = "/json_rpc";

/// The only `status` value a legacy endpoint uses for success.
pub(super) const STATUS_OK: &str = "OK";

/// One base address plus a pooled HTTP client. Cloning shares the pool.
#[derive(Clone)]
pub(super) struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub(super) fn new(address: &str, config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(config)?,
            base_url: parse_connection(address)?,
        })
    }

    pub(super) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One JSON-RPC 2.0 round trip against `{base}/json_rpc`.
    pub(super) async fn post_json_rpc<P, R>(
        &self,
        method: &str,
        params: Option<&P>,
    ) -> Result<R, ClientError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{JSON_RPC_PATH}", self.base_url);
        let payload = JsonRpcRequest::new(method, params).encode()?;
        debug!(rpc.method = method, %url, "rpc call");

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        let status = response.status();
        let http_error = response.error_for_status_ref().err();

        let body = response.bytes().await?;
        debug!(rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(
            rpc.method = method,
            body = %String::from_utf8_lossy(&body),
            "rpc response body"
        );

        let decoded = match JsonRpcResponse::decode(&body, method) {
            Ok(decoded) => decoded,
            Err(err) => return Err(http_error.map_or(err, ClientError::Transport)),
        };
        trace!(
            rpc.method = method,
            rpc.id = %decoded.id,
            rpc.version = %decoded.jsonrpc,
            "rpc envelope"
        );

        // A failed HTTP exchange only counts as an RPC answer when the body
        // carries an error object; anything else is the transport failing.
        if let Some(http_error) = http_error {
            return Err(match decoded.error() {
                Some(rpc @ ClientError::Rpc { .. }) => rpc,
                _ => ClientError::Transport(http_error),
            });
        }
        decoded.into_result(method)
    }

    /// One plain GET of `{base}{path}` decoded as JSON. No envelope is
    /// assumed; the caller checks whatever status field the endpoint has.
    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "http get");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let http_error = response.error_for_status_ref().err();

        let body = response.bytes().await?;
        debug!(%url, %status, body_len = body.len(), "http get response");
        trace!(%url, body = %String::from_utf8_lossy(&body), "http get response body");

        if let Some(http_error) = http_error {
            return Err(ClientError::Transport(http_error));
        }
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            context: format!("{path} response"),
            source,
        })
    }
}

/// Map a legacy endpoint's `status` field to a result.
pub(super) fn ensure_status_ok(status: &str) -> Result<(), ClientError> {
    if status == STATUS_OK {
        Ok(())
    } else {
        Err(ClientError::Status(status.to_owned()))
    }
}
