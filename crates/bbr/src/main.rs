mod cli;
mod commands;

use std::io;
use std::time::Duration;

use bbr_rpc::rpc::{DaemonClient, WalletClient};
use bbr_rpc::ClientConfig;
use clap::Parser;
use eyre::WrapErr;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    // Diagnostics go to stderr so command output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_level(true)
        .init();

    let mut config = ClientConfig::default();
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Stat => {
            let daemon = connect_daemon(&args.daemon_url, &config)?;
            let wallet = connect_wallet(&args.wallet_url, &config)?;
            commands::stat::run(&daemon, &wallet, &mut out).await
        }
        Command::Info => {
            let daemon = connect_daemon(&args.daemon_url, &config)?;
            commands::info::run(&daemon, &mut out).await
        }
        Command::Blockinfo(opts) => {
            let daemon = connect_daemon(&args.daemon_url, &config)?;
            commands::blockinfo::run(&daemon, opts.blocks, opts.concurrency, &mut out).await
        }
        Command::Send(opts) => {
            let wallet = connect_wallet(&args.wallet_url, &config)?;
            let mut input = io::stdin().lock();
            commands::send::run(&wallet, opts, &mut input, &mut out).await
        }
        Command::Payments(opts) => {
            let wallet = connect_wallet(&args.wallet_url, &config)?;
            commands::payments::run(&wallet, &opts.payment_id, &mut out).await
        }
    }
}

fn connect_daemon(url: &str, config: &ClientConfig) -> eyre::Result<DaemonClient> {
    tracing::debug!(%url, "using daemon");
    DaemonClient::with_config(url, config).wrap_err_with(|| format!("invalid daemon URL `{url}`"))
}

fn connect_wallet(url: &str, config: &ClientConfig) -> eyre::Result<WalletClient> {
    tracing::debug!(%url, "using wallet");
    WalletClient::with_config(url, config).wrap_err_with(|| format!("invalid wallet URL `{url}`"))
}
