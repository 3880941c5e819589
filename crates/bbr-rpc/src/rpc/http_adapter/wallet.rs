use async_trait::async_trait;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::rpc::WalletRpc;
use crate::rpc::types::{GetPaymentsParams, PaymentsResult, TransferResult};
use crate::types::{Balance, PaymentDetails, TransferRequest};

use super::transport::HttpTransport;

/// Handle to a wallet service's JSON-RPC interface.
#[derive(Clone)]
pub struct WalletClient {
    transport: HttpTransport,
}

impl WalletClient {
    /// Create a handle for `address` (e.g. `http://localhost:9291`) with no
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
impl WalletRpc for WalletClient {
    async fn get_balance(&self) -> Result<Balance, ClientError> {
        let balance: Balance = self
            .transport
            .post_json_rpc::<(), _>("getbalance", None)
            .await?;
        check_balance(balance)
    }

    async fn transfer_with(&self, request: &TransferRequest) -> Result<String, ClientError> {
        debug!(
            destinations = request.destinations.len(),
            fee = request.fee.atomic(),
            mixin = request.mixin,
            has_payment_id = !request.payment_id_hex.is_empty(),
            "wallet transfer"
        );
        let result: TransferResult = self
            .transport
            .post_json_rpc("transfer", Some(request))
            .await?;
        Ok(result.tx_hash)
    }

    async fn get_payments(&self, payment_id: &str) -> Result<Vec<PaymentDetails>, ClientError> {
        let result: PaymentsResult = self
            .transport
            .post_json_rpc("get_payments", Some(&GetPaymentsParams { payment_id }))
            .await?;
        debug!(count = result.payments.len(), "wallet payments");
        Ok(result.payments)
    }
}

/// Reject balances where more is spendable than is held.
fn check_balance(balance: Balance) -> Result<Balance, ClientError> {
    if balance.unlocked_balance > balance.balance {
        return Err(ClientError::InvalidResponse(format!(
            "unlocked balance {} exceeds balance {}",
            balance.unlocked_balance.atomic(),
            balance.balance.atomic()
        )));
    }
    Ok(balance)
}

#[cfg(test)]
mod tests {
    use crate::types::Amount;

    use super::*;

    #[test]
    fn check_balance_accepts_equal() {
        let balance = Balance {
            balance: Amount(10),
            unlocked_balance: Amount(10),
        };
        assert_eq!(check_balance(balance).expect("equal is valid"), balance);
    }

    #[test]
    fn check_balance_rejects_inverted() {
        let balance = Balance {
            balance: Amount(1),
            unlocked_balance: Amount(2),
        };
        let err = check_balance(balance).expect_err("must reject");
        assert!(err.is_decode());
    }
}
