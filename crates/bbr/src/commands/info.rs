use std::io::Write;

use bbr_rpc::rpc::DaemonRpc;
use eyre::WrapErr;

pub(crate) async fn run(daemon: &dyn DaemonRpc, out: &mut impl Write) -> eyre::Result<()> {
    let height = daemon.get_height().await.context("could not get height")?;
    let info = daemon.get_info().await.context("could not get daemon info")?;

    writeln!(out, "Height: {height}")?;
    writeln!(
        out,
        "Connections: {} out, {} in",
        info.outgoing_connections_count, info.incoming_connections_count
    )?;
    writeln!(out, "Pool size: {}", info.tx_pool_size)?;
    serde_json::to_writer_pretty(&mut *out, &info).context("write daemon info")?;
    writeln!(out)?;
    Ok(())
}
