//! Per-method parameter records and response wrappers.
//!
//! The domain values themselves live in `crate::types`; this module only
//! holds the shapes that exist to carry them over the wire.

use serde::{Deserialize, Serialize};

use crate::types::{BlockHeader, PaymentDetails};

// ==============================================================================
// Daemon
// ==============================================================================

/// Body of `GET /getheight`. `height` is meaningless unless `status` is `OK`,
/// and a busy node may leave it out.
#[derive(Debug, Deserialize)]
pub(crate) struct HeightResponse {
    pub(crate) height: Option<u64>,
    pub(crate) status: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BlockHeaderByHeightParams {
    pub(crate) height: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlockHeaderResult {
    pub(crate) block_header: BlockHeader,
}

// ==============================================================================
// Wallet
// ==============================================================================

/// Result of the wallet `transfer` method. The hash is opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferResult {
    pub tx_hash: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetPaymentsParams<'a> {
    pub(crate) payment_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentsResult {
    #[serde(default)]
    pub(crate) payments: Vec<PaymentDetails>,
}
