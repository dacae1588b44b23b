// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for multitoken values
//!
//! Maps each network to the token that acts as its default (native) entry and
//! the decimal count that token is displayed with.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use multitoken::config::constants::networks;
//! use multitoken::MultiTokenConfig;
//!
//! // Cardano and Ergo mainnet/testnet are pre-registered
//! let config = MultiTokenConfig::default();
//! let balance = config.zero_for(networks::CARDANO_MAINNET).unwrap();
//! assert!(balance.is_empty());
//! ```
//!
//! # Example: Custom networks
//!
//! ```rust
//! use multitoken::{DefaultTokenEntry, MultiTokenConfigBuilder, NetworkId, TokenDecimals};
//!
//! let devnet = NetworkId::new(4242);
//! let config = MultiTokenConfigBuilder::new()
//!     .network(DefaultTokenEntry::new(devnet, "tDEV"), TokenDecimals::new(8))
//!     .build();
//!
//! assert_eq!(config.decimals_for(devnet), Some(TokenDecimals::new(8)));
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::types::tokens::{DefaultTokenEntry, MultiToken, TokenDecimals};
use crate::types::NetworkId;

pub mod constants;

use constants::{networks, ADA_DECIMALS, ERG_DECIMALS, NATIVE_IDENTIFIER};

/// Default-token parameters of one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Default token every value on this network carries
    pub defaults: DefaultTokenEntry,

    /// Decimal count the default token is displayed with
    pub decimals: TokenDecimals,
}

impl NetworkConfig {
    /// Network whose native coin is keyed by the empty identifier
    pub fn native(network_id: NetworkId, decimals: TokenDecimals) -> Self {
        Self {
            defaults: DefaultTokenEntry::new(network_id, NATIVE_IDENTIFIER),
            decimals,
        }
    }
}

/// Registry of per-network default tokens
///
/// Use [`MultiTokenConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct MultiTokenConfig {
    networks: HashMap<NetworkId, NetworkConfig>,
}

impl Default for MultiTokenConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl MultiTokenConfig {
    /// Create config with Cardano and Ergo presets
    ///
    /// Registers mainnet and testnet for both chains with their native coin
    /// (empty identifier) as the default token.
    pub fn with_common_defaults() -> Self {
        let mut config = Self::empty();

        config.set_network(NetworkConfig::native(networks::CARDANO_MAINNET, ADA_DECIMALS));
        config.set_network(NetworkConfig::native(networks::CARDANO_TESTNET, ADA_DECIMALS));
        config.set_network(NetworkConfig::native(networks::ERGO_MAINNET, ERG_DECIMALS));
        config.set_network(NetworkConfig::native(networks::ERGO_TESTNET, ERG_DECIMALS));

        config
    }

    /// Create config with no networks registered
    pub fn empty() -> Self {
        Self {
            networks: HashMap::new(),
        }
    }

    /// Parameters registered for a network
    pub fn network(&self, network_id: NetworkId) -> Option<&NetworkConfig> {
        self.networks.get(&network_id)
    }

    /// Default-token descriptor for a network
    pub fn defaults_for(&self, network_id: NetworkId) -> Option<&DefaultTokenEntry> {
        self.network(network_id).map(|network| &network.defaults)
    }

    /// Decimal count of a network's default token
    pub fn decimals_for(&self, network_id: NetworkId) -> Option<TokenDecimals> {
        self.network(network_id).map(|network| network.decimals)
    }

    /// An empty value on a network, or `None` if the network is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use multitoken::{MultiTokenConfig, NetworkId};
    ///
    /// let config = MultiTokenConfig::empty();
    /// assert!(config.zero_for(NetworkId::new(1)).is_none());
    /// ```
    pub fn zero_for(&self, network_id: NetworkId) -> Option<MultiToken> {
        let defaults = self.defaults_for(network_id);
        if defaults.is_none() {
            debug!(network_id = %network_id, "No default token registered for network");
        }
        defaults.cloned().map(MultiToken::zero)
    }

    /// Register or replace a network
    ///
    /// The network is the one named by `config.defaults`.
    pub fn set_network(&mut self, config: NetworkConfig) {
        let network_id = config.defaults.network_id();
        if let Some(previous) = self.networks.insert(network_id, config) {
            debug!(
                network_id = %network_id,
                previous_identifier = previous.defaults.identifier(),
                "Replaced registered network"
            );
        }
    }

    /// Number of registered networks
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Check if no network is registered
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

/// Builder for [`MultiTokenConfig`]
///
/// # Example
///
/// ```rust
/// use multitoken::config::constants::networks;
/// use multitoken::{MultiTokenConfigBuilder, NetworkConfig, TokenDecimals};
///
/// let config = MultiTokenConfigBuilder::with_defaults()
///     // Display ERG with fewer decimals
///     .network_config(NetworkConfig::native(networks::ERGO_MAINNET, TokenDecimals::new(4)))
///     .build();
///
/// assert_eq!(config.decimals_for(networks::ERGO_MAINNET), Some(TokenDecimals::new(4)));
/// ```
pub struct MultiTokenConfigBuilder {
    config: MultiTokenConfig,
}

impl Default for MultiTokenConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiTokenConfigBuilder {
    /// Create a new builder with no networks registered
    pub fn new() -> Self {
        Self {
            config: MultiTokenConfig::empty(),
        }
    }

    /// Start with common defaults
    ///
    /// Initializes the builder with the same networks as
    /// [`MultiTokenConfig::with_common_defaults`].
    pub fn with_defaults() -> Self {
        Self {
            config: MultiTokenConfig::with_common_defaults(),
        }
    }

    /// Register the network of `defaults` with its decimal count
    pub fn network(mut self, defaults: DefaultTokenEntry, decimals: TokenDecimals) -> Self {
        self.config.set_network(NetworkConfig { defaults, decimals });
        self
    }

    /// Register a network from a prepared [`NetworkConfig`]
    pub fn network_config(mut self, config: NetworkConfig) -> Self {
        self.config.set_network(config);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> MultiTokenConfig {
        self.config
    }
}
