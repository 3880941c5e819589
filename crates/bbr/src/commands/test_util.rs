//! In-memory stand-ins for the daemon and wallet used by command tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bbr_rpc::rpc::{DaemonRpc, WalletRpc};
use bbr_rpc::{Amount, Balance, BlockHeader, ClientError, DaemonInfo, PaymentDetails, TransferRequest};

pub(crate) fn header(height: u64, reward: Amount, orphan: bool) -> BlockHeader {
    BlockHeader {
        timestamp: 1_400_000_000 + height * 120,
        height,
        hash: format!("{height:064x}"),
        depth: 0,
        orphan_status: orphan,
        reward,
    }
}

pub(crate) fn rpc_error(message: &str) -> ClientError {
    ClientError::Rpc {
        code: -1,
        message: message.to_owned(),
    }
}

#[derive(Default)]
pub(crate) struct StubDaemon {
    pub(crate) height: u64,
    pub(crate) headers: HashMap<u64, BlockHeader>,
    pub(crate) info: Option<DaemonInfo>,
}

impl StubDaemon {
    /// A chain of `height` blocks, each paying `reward`.
    pub(crate) fn chain(height: u64, reward: Amount) -> Self {
        Self {
            height,
            headers: (0..height).map(|h| (h, header(h, reward, false))).collect(),
            info: None,
        }
    }
}

#[async_trait]
impl DaemonRpc for StubDaemon {
    async fn get_height(&self) -> Result<u64, ClientError> {
        Ok(self.height)
    }

    async fn get_info(&self) -> Result<DaemonInfo, ClientError> {
        self.info
            .clone()
            .ok_or_else(|| ClientError::Status("BUSY".to_owned()))
    }

    async fn get_block_header_by_height(&self, height: u64) -> Result<BlockHeader, ClientError> {
        self.headers
            .get(&height)
            .cloned()
            .ok_or_else(|| rpc_error("height out of range"))
    }
}

pub(crate) struct StubWallet {
    pub(crate) balance: Balance,
    pub(crate) payments: Vec<PaymentDetails>,
    /// Message of the RPC error every transfer fails with, if set.
    pub(crate) reject_transfers: Option<String>,
    pub(crate) transfers: Mutex<Vec<TransferRequest>>,
}

impl StubWallet {
    pub(crate) fn with_unlocked(unlocked: Amount) -> Self {
        Self {
            balance: Balance {
                balance: unlocked,
                unlocked_balance: unlocked,
            },
            payments: Vec::new(),
            reject_transfers: None,
            transfers: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<TransferRequest> {
        self.transfers.lock().expect("stub lock poisoned").clone()
    }
}

#[async_trait]
impl WalletRpc for StubWallet {
    async fn get_balance(&self) -> Result<Balance, ClientError> {
        Ok(self.balance)
    }

    async fn transfer_with(&self, request: &TransferRequest) -> Result<String, ClientError> {
        if let Some(message) = &self.reject_transfers {
            return Err(rpc_error(message));
        }
        self.transfers
            .lock()
            .expect("stub lock poisoned")
            .push(request.clone());
        Ok("f00d".to_owned())
    }

    async fn get_payments(&self, _payment_id: &str) -> Result<Vec<PaymentDetails>, ClientError> {
        Ok(self.payments.clone())
    }
}
