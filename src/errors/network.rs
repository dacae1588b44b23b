// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for mixing token values from different networks.

use crate::types::NetworkId;

/// An entry was combined with a [`MultiToken`](crate::MultiToken) that lives on
/// a different network.
///
/// This is a programmer error: values from different chains must never be
/// added together. Callers should not retry or coerce; fix the call site.
///
/// # Examples
///
/// ```
/// use multitoken::{DefaultTokenEntry, MultiToken, NetworkId, TokenEntry};
///
/// let mut value = MultiToken::zero(DefaultTokenEntry::new(NetworkId::new(1), ""));
/// let foreign = TokenEntry::new("", NetworkId::new(200), 5);
///
/// let err = value.add(foreign).unwrap_err();
/// assert_eq!(err.expected, NetworkId::new(1));
/// assert_eq!(err.found, NetworkId::new(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Network mismatch for token '{identifier}': expected network {expected}, found {found}"
)]
pub struct NetworkMismatchError {
    /// Identifier of the rejected entry
    pub identifier: String,
    /// Network of the receiving value
    pub expected: NetworkId,
    /// Network of the rejected entry
    pub found: NetworkId,
}

impl NetworkMismatchError {
    /// Create a mismatch error for the given token identifier.
    pub fn new(identifier: impl Into<String>, expected: NetworkId, found: NetworkId) -> Self {
        Self {
            identifier: identifier.into(),
            expected,
            found,
        }
    }
}
