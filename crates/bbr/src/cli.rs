use clap::{Args, Parser, Subcommand};

use bbr_rpc::Amount;

/// bbr — command-line tools for a Boolberry daemon and wallet.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Daemon base URL.
    #[arg(long, default_value = "http://localhost:10102", env = "BBR_DAEMON_URL")]
    pub daemon_url: String,

    /// Wallet service base URL.
    #[arg(long, default_value = "http://localhost:9291", env = "BBR_WALLET_URL")]
    pub wallet_url: String,

    /// Request timeout in seconds. Without it, calls wait for the service.
    #[arg(long, env = "BBR_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the header of block 1 and the wallet's unlocked balance.
    Stat,

    /// Show the chain height and the daemon's statistics.
    Info,

    /// Summarise rewards and orphans over the trailing blocks.
    Blockinfo(BlockinfoArgs),

    /// Transfer funds from the wallet.
    Send(SendArgs),

    /// List payments received under a payment id.
    Payments(PaymentsArgs),
}

#[derive(Args)]
pub struct BlockinfoArgs {
    /// Number of trailing blocks to inspect (720 is roughly one day).
    #[arg(long, default_value = "720")]
    pub blocks: u64,

    /// Maximum header requests in flight.
    #[arg(long, default_value = "4")]
    pub concurrency: usize,
}

#[derive(Args)]
pub struct SendArgs {
    /// Destination address.
    pub address: String,

    /// Amount in coins, e.g. `12` or `0.5`.
    pub amount: Amount,

    /// Hex payment id to attach.
    #[arg(long = "payment-id", default_value = "")]
    pub payment_id: String,

    /// Mixin count (number of decoy inputs).
    #[arg(long, default_value = "0")]
    pub mixin: u64,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args)]
pub struct PaymentsArgs {
    /// Hex payment id to look up.
    pub payment_id: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn send_parses_decimal_amount() {
        let cli = Cli::try_parse_from(["bbr", "send", "1Addr", "1.5", "--mixin", "3"])
            .expect("send args must parse");
        let Command::Send(args) = cli.command else {
            panic!("expected send subcommand");
        };
        assert_eq!(args.address, "1Addr");
        assert_eq!(args.amount, Amount(1_500_000_000_000));
        assert_eq!(args.mixin, 3);
        assert!(args.payment_id.is_empty());
        assert!(!args.yes);
    }

    #[test]
    fn send_rejects_bad_amount() {
        assert!(Cli::try_parse_from(["bbr", "send", "1Addr", "-1"]).is_err());
        assert!(Cli::try_parse_from(["bbr", "send", "1Addr", "0.0000000000001"]).is_err());
    }

    #[test]
    fn blockinfo_defaults() {
        let cli = Cli::try_parse_from(["bbr", "blockinfo"]).expect("blockinfo must parse");
        let Command::Blockinfo(args) = cli.command else {
            panic!("expected blockinfo subcommand");
        };
        assert_eq!(args.blocks, 720);
        assert_eq!(args.concurrency, 4);
    }
}
