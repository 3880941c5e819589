//! Client for a Boolberry-style daemon and wallet service.
//!
//! ```no_run
//! use bbr_rpc::rpc::{DaemonClient, DaemonRpc};
//!
//! # async fn run() -> Result<(), bbr_rpc::ClientError> {
//! let daemon = DaemonClient::new("http://localhost:10102")?;
//! let header = daemon.get_block_header_by_height(1).await?;
//! println!("block {} has timestamp {}", header.height, header.timestamp);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod rpc;
pub mod types;

pub use config::ClientConfig;
pub use error::ClientError;
pub use types::{Amount, Balance, BlockHeader, DaemonInfo, PaymentDetails, TransferRequest};
