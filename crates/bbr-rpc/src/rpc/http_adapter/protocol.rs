use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;

pub(super) const JSONRPC_VERSION: &str = "2.0";

/// Handles keep no per-call state, so every request carries the same id.
pub(super) const REQUEST_ID: u64 = 0;

#[derive(Serialize)]
pub(super) struct JsonRpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a P>,
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub(super) fn new(method: &'a str, params: Option<&'a P>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        }
    }

    pub(super) fn encode(&self) -> Result<Vec<u8>, ClientError> {
        serde_json::to_vec(self).map_err(ClientError::Encode)
    }
}

/// Response envelope. `result` stays untyped until the error object has been
/// checked, so a failing call never depends on the shape of its payload.
#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    #[serde(default)]
    pub(super) id: serde_json::Value,
    #[serde(default)]
    pub(super) jsonrpc: String,
    #[serde(default)]
    pub(super) error: Option<serde_json::Value>,
    #[serde(default)]
    pub(super) result: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    pub(super) fn decode(body: &[u8], method: &str) -> Result<Self, ClientError> {
        serde_json::from_slice(body).map_err(|source| ClientError::Decode {
            context: format!("{method} response"),
            source,
        })
    }

    /// The error the envelope signals, if any.
    pub(super) fn error(&self) -> Option<ClientError> {
        self.error.as_ref().and_then(parse_jsonrpc_error)
    }

    pub(super) fn into_result<R: DeserializeOwned>(self, method: &str) -> Result<R, ClientError> {
        if let Some(err) = self.error() {
            return Err(err);
        }
        let result = match self.result {
            None | Some(serde_json::Value::Null) => {
                return Err(ClientError::InvalidResponse(format!(
                    "{method} response carries no result"
                )));
            }
            Some(result) => result,
        };
        serde_json::from_value(result).map_err(|source| ClientError::Decode {
            context: format!("{method} result"),
            source,
        })
    }
}

/// Parse a JSON-RPC error value into a structured `ClientError`.
///
/// `null` and `{"code": 0, ...}` mean success. A `{code, message}` object
/// with any other code becomes `Rpc`; anything else is `InvalidResponse`.
pub(super) fn parse_jsonrpc_error(err: &serde_json::Value) -> Option<ClientError> {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        #[serde(default)]
        message: String,
    }

    if err.is_null() {
        return None;
    }
    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) if parsed.code == 0 => None,
        Ok(parsed) => Some(ClientError::Rpc {
            code: parsed.code,
            message: parsed.message,
        }),
        Err(_) => Some(ClientError::InvalidResponse(format!(
            "non-standard JSON-RPC error: {err}"
        ))),
    }
}
