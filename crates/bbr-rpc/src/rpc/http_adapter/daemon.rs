use async_trait::async_trait;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::rpc::DaemonRpc;
use crate::rpc::types::{BlockHeaderByHeightParams, BlockHeaderResult, HeightResponse};
use crate::types::{BlockHeader, DaemonInfo};

use super::transport::{ensure_status_ok, HttpTransport};

const GET_HEIGHT_PATH: &str = "/getheight";
const GET_INFO_PATH: &str = "/getinfo";

/// Handle to a daemon's HTTP interface.
///
/// Holds only the base address and a pooled HTTP client; clones share the
/// pool and can be used from many tasks at once.
#[derive(Clone)]
pub struct DaemonClient {
    transport: HttpTransport,
}

impl DaemonClient {
    /// Create a handle for `address` (e.g. `http://localhost:10102`) with no
    /// request timeout.
    pub fn new(address: &str) -> Result<Self, ClientError> {
        Self::with_config(address, &ClientConfig::default())
    }

    pub fn with_config(address: &str, config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            transport: HttpTransport::new(address, config)?,
        })
    }

    pub fn address(&self) -> &str {
        self.transport.base_url()
    }
}

#[async_trait]
impl DaemonRpc for DaemonClient {
    async fn get_height(&self) -> Result<u64, ClientError> {
        let response: HeightResponse = self.transport.get_json(GET_HEIGHT_PATH).await?;
        ensure_status_ok(&response.status)?;
        let height = response.height.ok_or_else(|| {
            ClientError::InvalidResponse("getheight response carries no height".to_owned())
        })?;
        debug!(height, "daemon height");
        Ok(height)
    }

    async fn get_info(&self) -> Result<DaemonInfo, ClientError> {
        let info: DaemonInfo = self.transport.get_json(GET_INFO_PATH).await?;
        ensure_status_ok(&info.status)?;
        Ok(info)
    }

    async fn get_block_header_by_height(&self, height: u64) -> Result<BlockHeader, ClientError> {
        let result: BlockHeaderResult = self
            .transport
            .post_json_rpc(
                "getblockheaderbyheight",
                Some(&BlockHeaderByHeightParams { height }),
            )
            .await?;
        Ok(result.block_header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_http_address() {
        assert!(matches!(
            DaemonClient::new("tcp://localhost:10102"),
            Err(ClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn address_is_normalised() {
        let daemon = DaemonClient::new("http://localhost:10102/").expect("valid address");
        assert_eq!(daemon.address(), "http://localhost:10102");
    }
}
