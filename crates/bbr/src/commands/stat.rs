use std::io::Write;

use bbr_rpc::rpc::{DaemonRpc, WalletRpc};
use eyre::{bail, WrapErr};

use super::format_timestamp;

/// Report block 1's header and the wallet's unlocked balance. Both queries
/// run even when the first fails; the command fails if either did.
pub(crate) async fn run(
    daemon: &dyn DaemonRpc,
    wallet: &dyn WalletRpc,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let mut failures = 0;

    match daemon.get_block_header_by_height(1).await {
        Ok(header) => writeln!(
            out,
            "Block {} has timestamp {}",
            header.height,
            format_timestamp(header.timestamp)
        )?,
        Err(err) => {
            failures += 1;
            writeln!(out, "Could not get block header: {err}")?;
        }
    }

    match wallet.get_balance().await {
        Ok(balance) => writeln!(
            out,
            "Wallet has unlocked balance {}",
            balance.unlocked_balance
        )?,
        Err(err) => {
            failures += 1;
            writeln!(out, "Could not get balance: {err}")?;
        }
    }

    out.flush().context("flush output")?;
    if failures > 0 {
        bail!("{} of 2 queries failed", failures);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use bbr_rpc::types::COIN;
    use bbr_rpc::Amount;

    use super::*;
    use crate::commands::test_util::{StubDaemon, StubWallet};

    #[tokio::test]
    async fn reports_header_and_balance() {
        let daemon = StubDaemon::chain(5, Amount(COIN));
        let wallet = StubWallet::with_unlocked(Amount(3 * COIN));
        let mut out = Vec::new();

        run(&daemon, &wallet, &mut out).await.expect("stat must succeed");

        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.contains("Block 1 has timestamp 2014-05-13T16:55:20Z"));
        assert!(text.contains("Wallet has unlocked balance 3.000000000000"));
    }

    #[tokio::test]
    async fn keeps_going_after_daemon_failure() {
        let daemon = StubDaemon::default();
        let wallet = StubWallet::with_unlocked(Amount(COIN));
        let mut out = Vec::new();

        let err = run(&daemon, &wallet, &mut out)
            .await
            .expect_err("missing header must fail the command");
        assert!(err.to_string().contains("1 of 2"));

        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.contains("Could not get block header"));
        assert!(text.contains("Wallet has unlocked balance 1.000000000000"));
    }
}
