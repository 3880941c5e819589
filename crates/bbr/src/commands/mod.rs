//! Subcommand implementations.
//!
//! Each command talks to the services only through the `DaemonRpc` /
//! `WalletRpc` traits and writes its report to a caller-supplied writer.

pub(crate) mod blockinfo;
pub(crate) mod info;
pub(crate) mod payments;
pub(crate) mod send;
pub(crate) mod stat;

#[cfg(test)]
pub(crate) mod test_util;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Render a block timestamp (unix seconds) as RFC 3339 UTC, falling back to
/// the raw number when it is out of range.
pub(crate) fn format_timestamp(unix_secs: u64) -> String {
    i64::try_from(unix_secs)
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_else(|| unix_secs.to_string())
}
