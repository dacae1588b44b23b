// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Single-token quantities and the default-token descriptor

use bigdecimal::{BigDecimal, Signed};
use serde::{Deserialize, Serialize};

use crate::types::NetworkId;

/// Identifies a fungible asset on a specific network
///
/// Two keys refer to the same token iff both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenLookupKey {
    /// Token identifier (empty string for most native coins)
    pub identifier: String,
    /// Network the token lives on
    pub network_id: NetworkId,
}

impl TokenLookupKey {
    /// Create a new lookup key
    pub fn new(identifier: impl Into<String>, network_id: NetworkId) -> Self {
        Self {
            identifier: identifier.into(),
            network_id,
        }
    }
}

/// A quantity of one asset
///
/// Amounts are exact decimals in the token's natural (smallest) unit. They may
/// be negative while a subtraction is in flight.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use multitoken::{NetworkId, TokenEntry};
///
/// let entry = TokenEntry::new("tokenA", NetworkId::new(0), 50);
/// assert_eq!(entry.amount, BigDecimal::from(50));
/// assert_eq!(entry.negated().amount, BigDecimal::from(-50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    /// Token identifier
    pub identifier: String,
    /// Network the token lives on
    pub network_id: NetworkId,
    /// Quantity in natural units
    pub amount: BigDecimal,
}

impl TokenEntry {
    /// Create a new entry
    pub fn new(
        identifier: impl Into<String>,
        network_id: NetworkId,
        amount: impl Into<BigDecimal>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            network_id,
            amount: amount.into(),
        }
    }

    /// The `(identifier, network)` pair this entry is keyed by
    pub fn lookup_key(&self) -> TokenLookupKey {
        TokenLookupKey::new(self.identifier.clone(), self.network_id)
    }

    /// Same token, amount negated
    pub fn negated(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            network_id: self.network_id,
            amount: -self.amount.clone(),
        }
    }

    /// Same token, absolute amount
    pub fn abs(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            network_id: self.network_id,
            amount: self.amount.abs(),
        }
    }

    /// Check if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }
}

impl std::fmt::Display for TokenEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}: {}", self.identifier, self.network_id, self.amount)
    }
}

/// Which token is "the default" for a [`MultiToken`](crate::MultiToken)
///
/// Usually the chain's native coin. Fixed when the value is constructed; there
/// are no setters, and a `MultiToken` only ever hands it out by shared reference.
///
/// Serializes with the field names used by the wallet's stored data:
///
/// ```
/// use multitoken::{DefaultTokenEntry, NetworkId};
///
/// let defaults = DefaultTokenEntry::new(NetworkId::new(1), "");
/// let json = serde_json::to_string(&defaults).unwrap();
/// assert_eq!(json, r#"{"defaultNetworkId":1,"defaultIdentifier":""}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultTokenEntry {
    default_network_id: NetworkId,
    default_identifier: String,
}

impl DefaultTokenEntry {
    /// Create a new defaults descriptor
    pub fn new(default_network_id: NetworkId, default_identifier: impl Into<String>) -> Self {
        Self {
            default_network_id,
            default_identifier: default_identifier.into(),
        }
    }

    /// Network every entry of the owning value must belong to
    pub fn network_id(&self) -> NetworkId {
        self.default_network_id
    }

    /// Identifier of the default token
    pub fn identifier(&self) -> &str {
        &self.default_identifier
    }

    /// Lookup key of the default token
    pub fn lookup_key(&self) -> TokenLookupKey {
        TokenLookupKey::new(self.default_identifier.clone(), self.default_network_id)
    }

    /// Entry for the default token with the given amount
    pub fn entry(&self, amount: impl Into<BigDecimal>) -> TokenEntry {
        TokenEntry::new(self.default_identifier.clone(), self.default_network_id, amount)
    }
}
