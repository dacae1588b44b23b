// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token values
//!
//! # Type Relationships
//!
//! ```text
//! TokenEntry (identifier, NetworkId, BigDecimal)
//!     |
//!     | collected under one DefaultTokenEntry
//!     ↓
//! MultiToken (default entry + pruned non-default entries)
//!     |
//!     | to_data / from_data
//!     ↓
//! MultiTokenData (string amounts, serde)
//! ```
//!
//! [`TokenDecimals`] shifts any amount between natural and display units.

mod data;
mod decimals;
mod entry;
mod multi_token;

pub use data::{MultiTokenData, TokenEntryData};
pub use decimals::TokenDecimals;
pub use entry::{DefaultTokenEntry, TokenEntry, TokenLookupKey};
pub use multi_token::MultiToken;
