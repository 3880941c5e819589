use std::io::Write;

use bbr_rpc::rpc::WalletRpc;
use eyre::WrapErr;

pub(crate) async fn run(
    wallet: &dyn WalletRpc,
    payment_id: &str,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let payments = wallet
        .get_payments(payment_id)
        .await
        .context("could not get payments")?;

    if payments.is_empty() {
        writeln!(out, "No payments found for {payment_id}")?;
        return Ok(());
    }
    for payment in &payments {
        writeln!(
            out,
            "Payment: tx {} amount {} height {} unlock {}",
            payment.tx_hash, payment.amount, payment.block_height, payment.unlock_time
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use bbr_rpc::types::COIN;
    use bbr_rpc::{Amount, PaymentDetails};

    use super::*;
    use crate::commands::test_util::StubWallet;

    #[tokio::test]
    async fn lists_each_payment() {
        let mut wallet = StubWallet::with_unlocked(Amount::ZERO);
        wallet.payments = vec![
            PaymentDetails {
                tx_hash: "t1".to_owned(),
                amount: Amount(COIN),
                block_height: 10,
                unlock_time: 0,
            },
            PaymentDetails {
                tx_hash: "t2".to_owned(),
                amount: Amount(COIN / 2),
                block_height: 11,
                unlock_time: 0,
            },
        ];
        let mut out = Vec::new();

        run(&wallet, "abc123", &mut out).await.expect("payments must succeed");

        let text = String::from_utf8(out).expect("utf8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Payment: tx t1 amount 1.000000000000 height 10 unlock 0",
                "Payment: tx t2 amount 0.500000000000 height 11 unlock 0",
            ]
        );
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let wallet = StubWallet::with_unlocked(Amount::ZERO);
        let mut out = Vec::new();

        run(&wallet, "abc123", &mut out).await.expect("empty is fine");
        assert_eq!(
            String::from_utf8(out).expect("utf8 output"),
            "No payments found for abc123\n"
        );
    }
}
