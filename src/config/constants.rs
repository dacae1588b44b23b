// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known networks and token constants
//!
//! Centralizes the network identifiers and default-token parameters the
//! common presets in [`MultiTokenConfig`](super::MultiTokenConfig) are built from.

use crate::types::tokens::TokenDecimals;
use crate::types::NetworkId;

/// Well-known network identifiers
pub mod networks {
    use super::*;

    /// Cardano mainnet
    pub const CARDANO_MAINNET: NetworkId = NetworkId::new(1);

    /// Cardano public testnet
    pub const CARDANO_TESTNET: NetworkId = NetworkId::new(300);

    /// Ergo mainnet
    pub const ERGO_MAINNET: NetworkId = NetworkId::new(200);

    /// Ergo testnet
    pub const ERGO_TESTNET: NetworkId = NetworkId::new(201);
}

/// Identifier of the native coin on Cardano and Ergo
///
/// Native coins have no policy or token id, so they are keyed by the empty
/// string.
pub const NATIVE_IDENTIFIER: &str = "";

/// Decimal count of ADA (1 ADA = 10^6 lovelace)
pub const ADA_DECIMALS: TokenDecimals = TokenDecimals::ADA;

/// Decimal count of ERG (1 ERG = 10^9 nanoErg)
pub const ERG_DECIMALS: TokenDecimals = TokenDecimals::ERG;
