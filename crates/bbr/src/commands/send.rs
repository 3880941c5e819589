use std::io::{BufRead, Write};

use bbr_rpc::rpc::WalletRpc;
use bbr_rpc::TransferRequest;
use eyre::{bail, eyre, WrapErr};

use crate::cli::SendArgs;

/// Check the unlocked balance, confirm, then submit a single-destination
/// transfer. The wallet is the final judge of whether the transfer is valid.
pub(crate) async fn run(
    wallet: &dyn WalletRpc,
    args: &SendArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let balance = wallet.get_balance().await.context("could not get balance")?;
    writeln!(out, "Unlocked balance: {}", balance.unlocked_balance)?;

    let request = TransferRequest::single(&args.address, args.amount, args.mixin, &args.payment_id);
    let total = request
        .total()
        .ok_or_else(|| eyre!("amount plus fee does not fit in 64 bits"))?;
    if balance.unlocked_balance < total {
        bail!(
            "not enough unlocked balance: need {} (including fee {}), have {}",
            total,
            request.fee,
            balance.unlocked_balance
        );
    }

    writeln!(
        out,
        "About to transfer {} to {} (fee {}, mixin {})",
        args.amount, args.address, request.fee, request.mixin
    )?;
    if !args.payment_id.is_empty() {
        writeln!(out, "with payment ID: {}", args.payment_id)?;
    }

    if !args.yes && !confirm(input, out)? {
        writeln!(out, "Aborted.")?;
        return Ok(());
    }

    let tx_hash = wallet
        .transfer_with(&request)
        .await
        .context("could not do transfer")?;
    writeln!(out, "Transferred, tx hash: {tx_hash}")?;
    Ok(())
}

fn confirm(input: &mut impl BufRead, out: &mut impl Write) -> eyre::Result<bool> {
    write!(out, "Proceed? [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer).context("read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES" | "Yes"))
}
