// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Multi-asset token values for wallet balances, fees and transfer amounts.
//!
//! A [`MultiToken`] holds exact ([`BigDecimal`](bigdecimal::BigDecimal))
//! quantities of several tokens on a single network, keyed by token
//! identifier. One token, described by its [`DefaultTokenEntry`], is the
//! default (usually the chain's native coin) and is always present, even at
//! zero. Every other token is dropped once its quantity reaches zero.
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use multitoken::{DefaultTokenEntry, MultiToken, NetworkId, TokenEntry};
//!
//! # fn main() -> Result<(), multitoken::MultiTokenError> {
//! let network = NetworkId::new(1);
//! let defaults = DefaultTokenEntry::new(network, "ada");
//!
//! let balance = MultiToken::new(
//!     vec![
//!         TokenEntry::new("ada", network, 1_000),
//!         TokenEntry::new("x", network, 10),
//!     ],
//!     defaults.clone(),
//! )?;
//! let fee = MultiToken::new(vec![TokenEntry::new("ada", network, 170)], defaults)?;
//!
//! let remaining = balance.join_subtract_copy(&fee)?;
//! assert_eq!(remaining.default_amount(), &BigDecimal::from(830));
//! assert_eq!(balance.default_amount(), &BigDecimal::from(1_000));
//! # Ok(())
//! # }
//! ```
//!
//! Values cross storage and process boundaries as [`MultiTokenData`], which
//! carries amounts as decimal strings.

pub mod config;
pub mod errors;
mod spans;
pub mod types;

pub use config::{MultiTokenConfig, MultiTokenConfigBuilder, NetworkConfig};
pub use errors::{MultiTokenDataError, MultiTokenError, NetworkMismatchError};
pub use types::tokens::{
    DefaultTokenEntry, MultiToken, MultiTokenData, TokenDecimals, TokenEntry, TokenEntryData,
    TokenLookupKey,
};
pub use types::NetworkId;
