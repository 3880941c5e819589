//! Daemon and wallet RPC abstraction layer.
//!
//! Defines the [`DaemonRpc`] and [`WalletRpc`] traits and their HTTP
//! implementations ([`DaemonClient`], [`WalletClient`]).

mod http_adapter;
pub mod types;

pub use http_adapter::{DaemonClient, WalletClient};
pub use types::TransferResult;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::types::{Amount, Balance, BlockHeader, DaemonInfo, PaymentDetails, TransferRequest};

/// Blockchain queries served by the daemon.
#[async_trait]
pub trait DaemonRpc: Send + Sync {
    /// Current chain height, from the legacy `/getheight` endpoint.
    async fn get_height(&self) -> Result<u64, ClientError>;

    /// Node statistics snapshot, from the legacy `/getinfo` endpoint.
    async fn get_info(&self) -> Result<DaemonInfo, ClientError>;

    /// Header of the block at `height`. Out-of-range heights are rejected by
    /// the node, not checked locally.
    async fn get_block_header_by_height(&self, height: u64) -> Result<BlockHeader, ClientError>;
}

/// Balance, transfer and payment queries served by the wallet.
#[async_trait]
pub trait WalletRpc: Send + Sync {
    async fn get_balance(&self) -> Result<Balance, ClientError>;

    /// Send `amount` to a single address with the default fee and no unlock
    /// delay. `payment_id_hex` may be empty. Returns the transaction hash.
    ///
    /// No balance check happens here; the wallet rejects what it cannot pay.
    async fn transfer(
        &self,
        destination: &str,
        amount: Amount,
        mixin: u64,
        payment_id_hex: &str,
    ) -> Result<String, ClientError> {
        let request = TransferRequest::single(destination, amount, mixin, payment_id_hex);
        self.transfer_with(&request).await
    }

    /// Submit a fully specified transfer.
    async fn transfer_with(&self, request: &TransferRequest) -> Result<String, ClientError>;

    /// Payments received under `payment_id`, in the order the wallet lists
    /// them. An empty list means none were found.
    async fn get_payments(&self, payment_id: &str) -> Result<Vec<PaymentDetails>, ClientError>;
}
