//! Domain types exchanged with the daemon and the wallet service.
//!
//! Everything here is a plain DTO: decoded from a response body, handed to
//! the caller, never touched again by the client. Amounts are kept in
//! atomic units throughout; [`Amount::as_coins_f64`] exists only for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ==============================================================================
// Amount
// ==============================================================================

/// Atomic units per display coin.
pub const COIN: u64 = 1_000_000_000_000;

/// Number of fractional digits in a display amount (`log10(COIN)`).
pub const COIN_DECIMALS: usize = 12;

/// Flat fee attached to every transfer built by the wallet client.
pub const DEFAULT_FEE: Amount = Amount(1_000_000_000);

/// An amount in the smallest currency unit.
///
/// `#[serde(transparent)]` keeps the wire form a bare JSON integer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(pub u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_atomic(units: u64) -> Self {
        Self(units)
    }

    pub const fn atomic(self) -> u64 {
        self.0
    }

    /// Whole coins to atomic units; `None` on overflow.
    pub fn from_coins(coins: u64) -> Option<Self> {
        coins.checked_mul(COIN).map(Self)
    }

    /// Lossy conversion for display only.
    pub fn as_coins_f64(self) -> f64 {
        self.0 as f64 / COIN as f64
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Exact decimal rendering in coins, always with all twelve digits.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / COIN,
            self.0 % COIN,
            width = COIN_DECIMALS
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid character `{0}` in amount")]
    InvalidCharacter(char),

    #[error("amount has more than 12 fractional digits")]
    TooPrecise,

    #[error("amount does not fit in 64 bits of atomic units")]
    Overflow,
}

/// Parses a decimal coin amount such as `"12"` or `"0.5"`.
impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (s, None),
        };
        if whole.is_empty() {
            return Err(ParseAmountError::Empty);
        }
        let whole = parse_digits(whole)?;

        let frac_units = match frac {
            None => 0,
            Some("") => return Err(ParseAmountError::Empty),
            Some(frac) if frac.len() > COIN_DECIMALS => {
                return Err(ParseAmountError::TooPrecise);
            }
            Some(frac) => {
                let scale = 10u64.pow((COIN_DECIMALS - frac.len()) as u32);
                parse_digits(frac)? * scale
            }
        };

        Amount::from_coins(whole)
            .and_then(|a| a.checked_add(Amount(frac_units)))
            .ok_or(ParseAmountError::Overflow)
    }
}

fn parse_digits(digits: &str) -> Result<u64, ParseAmountError> {
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseAmountError::InvalidCharacter(bad));
    }
    digits.parse().map_err(|_| ParseAmountError::Overflow)
}

// ==============================================================================
// Daemon Types
// ==============================================================================

/// A block header as reported by `getblockheaderbyheight`.
///
/// Only `timestamp` and `height` are guaranteed; the rest default when the
/// node omits them. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Unix seconds.
    pub timestamp: u64,
    pub height: u64,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub depth: u64,
    #[serde(default)]
    pub orphan_status: bool,
    #[serde(default)]
    pub reward: Amount,
}

/// Snapshot of the daemon's `/getinfo` endpoint.
///
/// The commonly used statistics are typed; every other field the node sends
/// is preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaemonInfo {
    pub status: String,
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub difficulty: u64,
    #[serde(default)]
    pub tx_count: u64,
    #[serde(default)]
    pub tx_pool_size: u64,
    #[serde(default)]
    pub alt_blocks_count: u64,
    #[serde(default)]
    pub outgoing_connections_count: u64,
    #[serde(default)]
    pub incoming_connections_count: u64,
    #[serde(default)]
    pub white_peerlist_size: u64,
    #[serde(default)]
    pub grey_peerlist_size: u64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ==============================================================================
// Wallet Types
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: Amount,
    pub unlocked_balance: Amount,
}

impl Balance {
    /// Funds that are confirmed but not yet spendable.
    pub fn locked(&self) -> Amount {
        Amount(self.balance.0.saturating_sub(self.unlocked_balance.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub amount: Amount,
    pub address: String,
}

/// Parameters of the wallet `transfer` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub destinations: Vec<Destination>,
    pub fee: Amount,
    pub mixin: u64,
    /// `0` means spendable as soon as the transaction confirms.
    #[serde(default)]
    pub unlock_time: u64,
    /// Hex-encoded payment id; empty when there is none.
    #[serde(default)]
    pub payment_id_hex: String,
}

impl TransferRequest {
    /// A single-destination transfer with [`DEFAULT_FEE`] and no unlock delay.
    pub fn single(address: &str, amount: Amount, mixin: u64, payment_id_hex: &str) -> Self {
        Self {
            destinations: vec![Destination {
                amount,
                address: address.to_owned(),
            }],
            fee: DEFAULT_FEE,
            mixin,
            unlock_time: 0,
            payment_id_hex: payment_id_hex.to_owned(),
        }
    }

    /// Sum of all destination amounts plus the fee; `None` on overflow.
    pub fn total(&self) -> Option<Amount> {
        self.destinations
            .iter()
            .try_fold(self.fee, |acc, d| acc.checked_add(d.amount))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub tx_hash: String,
    pub amount: Amount,
    #[serde(default)]
    pub block_height: u64,
    #[serde(default)]
    pub unlock_time: u64,
}
