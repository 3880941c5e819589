//! JSON and JSON-RPC clients for the daemon and wallet HTTP interfaces.
//!
//! Both handles sit on one transport that knows two round trips: JSON-RPC
//! 2.0 over POST to `/json_rpc` (envelope error object), and plain GET of a
//! legacy endpoint (bare `status` string).

mod connection;
mod daemon;
mod protocol;
mod transport;
mod wallet;

pub use daemon::DaemonClient;
pub use wallet::WalletClient;
