#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP exchange itself failed: connection refused, timeout, body
    /// read error, or a non-2xx reply whose body was not a usable envelope.
    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The JSON-RPC envelope carried a non-zero error code. `message` is the
    /// remote service's text, unmodified.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// A plain-GET endpoint answered with a `status` other than `"OK"`.
    #[error("node returned status `{0}`")]
    Status(String),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// True for the decode family: malformed JSON, unexpected shape, or a
    /// payload that breaks a documented invariant.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::InvalidResponse(_))
    }

    /// The remote message for an RPC error, verbatim.
    pub fn rpc_message(&self) -> Option<&str> {
        match self {
            Self::Rpc { message, .. } => Some(message),
            _ => None,
        }
    }
}
