// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Network identifier type

use serde::{Deserialize, Serialize};

/// Identifier of the network (chain) a token lives on
///
/// Two token entries can only be combined when they share a `NetworkId`.
/// Well-known values live in [`config::constants`](crate::config::constants).
///
/// # Examples
///
/// ```
/// use multitoken::NetworkId;
///
/// let network = NetworkId::new(1);
/// assert_eq!(network.as_i32(), 1);
/// assert_eq!(network.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(i32);

impl NetworkId {
    /// Create a new network identifier
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the inner i32 value
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl From<i32> for NetworkId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
