use std::io::Write;
use std::time::Instant;

use bbr_rpc::rpc::DaemonRpc;
use bbr_rpc::{Amount, BlockHeader};
use eyre::{eyre, WrapErr};
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RewardStats {
    pub(crate) normal: u64,
    pub(crate) orphans: u64,
    /// Sum of rewards over non-orphan blocks.
    pub(crate) total_reward: Amount,
}

impl RewardStats {
    pub(crate) fn from_headers<'a>(
        headers: impl IntoIterator<Item = &'a BlockHeader>,
    ) -> eyre::Result<Self> {
        let mut stats = Self::default();
        for header in headers {
            if header.orphan_status {
                stats.orphans += 1;
                continue;
            }
            stats.normal += 1;
            stats.total_reward = stats
                .total_reward
                .checked_add(header.reward)
                .ok_or_else(|| eyre!("reward sum overflows at height {}", header.height))?;
        }
        Ok(stats)
    }

    /// Mean reward of normal blocks in coins, for display.
    pub(crate) fn average_reward_coins(&self) -> Option<f64> {
        (self.normal > 0).then(|| self.total_reward.as_coins_f64() / self.normal as f64)
    }
}

/// Fetch the `blocks` headers below the current height, keeping at most
/// `concurrency` requests in flight on the one daemon handle.
pub(crate) async fn collect(
    daemon: &dyn DaemonRpc,
    blocks: u64,
    concurrency: usize,
) -> eyre::Result<Vec<BlockHeader>> {
    let height = daemon.get_height().await.context("error getting height")?;
    let start = height.saturating_sub(blocks);
    debug!(start, end = height, concurrency, "fetching block headers");

    stream::iter(start..height)
        .map(|h| daemon.get_block_header_by_height(h))
        .buffered(concurrency.max(1))
        .try_collect::<Vec<_>>()
        .await
        .context("error getting block header")
}

pub(crate) async fn run(
    daemon: &dyn DaemonRpc,
    blocks: u64,
    concurrency: usize,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let started = Instant::now();
    let headers = collect(daemon, blocks, concurrency).await?;
    let elapsed = started.elapsed();

    let stats = RewardStats::from_headers(&headers)?;
    match stats.average_reward_coins() {
        Some(avg) => writeln!(
            out,
            "Normal: {}  Orphans: {}  Avg reward: {avg:.2}",
            stats.normal, stats.orphans
        )?,
        None => writeln!(
            out,
            "Normal: 0  Orphans: {}  Avg reward: n/a",
            stats.orphans
        )?,
    }
    writeln!(
        out,
        "Fetched {} headers in {:.2}s",
        headers.len(),
        elapsed.as_secs_f64()
    )?;
    Ok(())
}
