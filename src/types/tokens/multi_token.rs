// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Multi-asset token value with a guaranteed default token

use std::collections::HashMap;
use std::iter::{Chain, Once};

use bigdecimal::{BigDecimal, Signed, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::data::MultiTokenData;
use super::entry::{DefaultTokenEntry, TokenEntry};
use crate::errors::NetworkMismatchError;
use crate::spans;
use crate::types::NetworkId;

/// When a non-default entry is dropped after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prune {
    /// Drop at exactly zero
    Zero,
    /// Drop at zero or below
    ZeroOrBelow,
}

impl Prune {
    fn removes(self, amount: &BigDecimal) -> bool {
        match self {
            Prune::Zero => amount.is_zero(),
            Prune::ZeroOrBelow => !amount.is_positive(),
        }
    }
}

/// A balance, fee, or transfer amount spanning several tokens on one network
///
/// Holds at most one entry per token identifier, plus the default token
/// (usually the chain's native coin) which is always present, even at zero.
/// Non-default entries disappear as soon as they reach zero.
///
/// Operations come in two flavours:
/// - `add`, `subtract`, `join_*_mut` and their `_with_limit_zero` variants
///   mutate in place and return `&mut Self` for chaining
/// - `join_*_copy`, [`abs_copy`](Self::abs_copy) and
///   [`negated_copy`](Self::negated_copy) leave `self` untouched and return
///   a new value
///
/// Every entry must belong to the network of the [`DefaultTokenEntry`] the
/// value was built with; anything else is rejected with
/// [`NetworkMismatchError`].
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use multitoken::{DefaultTokenEntry, MultiToken, NetworkId, TokenEntry};
///
/// # fn main() -> Result<(), multitoken::NetworkMismatchError> {
/// let network = NetworkId::new(0);
/// let mut balance = MultiToken::zero(DefaultTokenEntry::new(network, ""));
///
/// balance
///     .add(TokenEntry::new("", network, 100))?
///     .add(TokenEntry::new("tokenA", network, 50))?;
/// assert_eq!(balance.default_amount(), &BigDecimal::from(100));
/// assert_eq!(balance.non_default_entries().len(), 1);
///
/// balance.subtract(TokenEntry::new("tokenA", network, 50))?;
/// assert!(balance.non_default_entries().is_empty());
/// assert_eq!(balance.default_amount(), &BigDecimal::from(100));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MultiTokenData", into = "MultiTokenData")]
pub struct MultiToken {
    defaults: DefaultTokenEntry,
    default_entry: TokenEntry,
    others: Vec<TokenEntry>,
}

impl MultiToken {
    /// Create a value from initial entries
    ///
    /// Starts from a zero default entry and adds each entry in order, so
    /// entries for the same token are merged and zero entries are pruned.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkMismatchError`] if any entry belongs to a network
    /// other than `defaults.network_id()`.
    pub fn new(
        values: impl IntoIterator<Item = TokenEntry>,
        defaults: DefaultTokenEntry,
    ) -> Result<Self, NetworkMismatchError> {
        let mut value = Self::zero(defaults);
        for entry in values {
            value.add(entry)?;
        }
        Ok(value)
    }

    /// A value holding only the default token at zero
    pub fn zero(defaults: DefaultTokenEntry) -> Self {
        let default_entry = defaults.entry(BigDecimal::zero());
        Self {
            defaults,
            default_entry,
            others: Vec::new(),
        }
    }

    /// The default-token descriptor fixed at construction
    pub fn defaults(&self) -> &DefaultTokenEntry {
        &self.defaults
    }

    /// Network every entry belongs to
    pub fn network_id(&self) -> NetworkId {
        self.defaults.network_id()
    }

    /// Amount held for `identifier`, if the token is present
    pub fn get(&self, identifier: &str) -> Option<&BigDecimal> {
        self.iter()
            .find(|entry| entry.identifier == identifier)
            .map(|entry| &entry.amount)
    }

    /// Build an entry on this value's network
    pub fn create_entry(
        &self,
        identifier: impl Into<String>,
        amount: impl Into<BigDecimal>,
    ) -> TokenEntry {
        TokenEntry::new(identifier, self.network_id(), amount)
    }

    /// Build an entry for the default token
    pub fn create_default_entry(&self, amount: impl Into<BigDecimal>) -> TokenEntry {
        self.defaults.entry(amount)
    }

    /// Add `entry` in place, dropping a non-default entry that lands on zero
    ///
    /// # Errors
    ///
    /// Returns [`NetworkMismatchError`] without modifying `self` if `entry` is
    /// on another network.
    pub fn add(&mut self, entry: TokenEntry) -> Result<&mut Self, NetworkMismatchError> {
        self.apply(entry, Prune::Zero)
    }

    /// Like [`add`](Self::add), but drops a non-default entry that lands on
    /// zero or below
    pub fn add_with_limit_zero(
        &mut self,
        entry: TokenEntry,
    ) -> Result<&mut Self, NetworkMismatchError> {
        self.apply(entry, Prune::ZeroOrBelow)
    }

    /// Subtract `entry` in place (same rules as [`add`](Self::add))
    pub fn subtract(&mut self, entry: TokenEntry) -> Result<&mut Self, NetworkMismatchError> {
        self.apply(negate(entry), Prune::Zero)
    }

    /// Subtract `entry` in place, dropping a non-default entry that lands on
    /// zero or below
    pub fn subtract_with_limit_zero(
        &mut self,
        entry: TokenEntry,
    ) -> Result<&mut Self, NetworkMismatchError> {
        self.apply(negate(entry), Prune::ZeroOrBelow)
    }

    /// Add every entry of `other` into `self`
    ///
    /// # Errors
    ///
    /// Returns [`NetworkMismatchError`] if `other` lives on another network.
    /// The check happens before any entry is applied, so `self` is unchanged
    /// on error.
    pub fn join_add_mut(&mut self, other: &MultiToken) -> Result<&mut Self, NetworkMismatchError> {
        self.join(other, "add", false, Prune::Zero)
    }

    /// Subtract every entry of `other` from `self`
    pub fn join_subtract_mut(
        &mut self,
        other: &MultiToken,
    ) -> Result<&mut Self, NetworkMismatchError> {
        self.join(other, "subtract", true, Prune::Zero)
    }

    /// Subtract every entry of `other` from `self`, dropping non-default
    /// entries that land on zero or below
    pub fn join_subtract_mut_with_limit_zero(
        &mut self,
        other: &MultiToken,
    ) -> Result<&mut Self, NetworkMismatchError> {
        self.join(other, "subtract_with_limit_zero", true, Prune::ZeroOrBelow)
    }

    /// `self + other` as a new value; `self` is left untouched
    pub fn join_add_copy(&self, other: &MultiToken) -> Result<MultiToken, NetworkMismatchError> {
        let mut copy = self.clone();
        copy.join_add_mut(other)?;
        Ok(copy)
    }

    /// `self - other` as a new value; `self` is left untouched
    pub fn join_subtract_copy(
        &self,
        other: &MultiToken,
    ) -> Result<MultiToken, NetworkMismatchError> {
        let mut copy = self.clone();
        copy.join_subtract_mut(other)?;
        Ok(copy)
    }

    /// `self - other` as a new value with limit-zero pruning
    pub fn join_subtract_copy_with_limit_zero(
        &self,
        other: &MultiToken,
    ) -> Result<MultiToken, NetworkMismatchError> {
        let mut copy = self.clone();
        copy.join_subtract_mut_with_limit_zero(other)?;
        Ok(copy)
    }

    /// New value with every amount replaced by its absolute value
    pub fn abs_copy(&self) -> MultiToken {
        self.map_entries(TokenEntry::abs)
    }

    /// New value with every amount negated
    pub fn negated_copy(&self) -> MultiToken {
        self.map_entries(TokenEntry::negated)
    }

    /// Amount held for the default token
    pub fn default_amount(&self) -> &BigDecimal {
        &self.default_entry.amount
    }

    /// The default-token entry; always present
    pub fn default_entry(&self) -> &TokenEntry {
        &self.default_entry
    }

    /// Every entry except the default one
    pub fn non_default_entries(&self) -> &[TokenEntry] {
        &self.others
    }

    /// Snapshot of the amounts keyed by identifier
    pub fn as_map(&self) -> HashMap<String, BigDecimal> {
        self.iter()
            .map(|entry| (entry.identifier.clone(), entry.amount.clone()))
            .collect()
    }

    /// Owned snapshot of all entries, default entry first
    pub fn entries(&self) -> Vec<TokenEntry> {
        self.iter().cloned().collect()
    }

    /// Iterate over all entries, default entry first
    pub fn iter(&self) -> Chain<Once<&TokenEntry>, std::slice::Iter<'_, TokenEntry>> {
        std::iter::once(&self.default_entry).chain(self.others.iter())
    }

    /// Check if both values hold exactly the same `(identifier, amount)` pairs
    ///
    /// Ignores entry order and the [`DefaultTokenEntry`] of either side.
    /// Amounts compare by exact decimal value, so `1.50` equals `1.5`.
    pub fn is_equal_to(&self, other: &MultiToken) -> bool {
        let mut remaining: HashMap<&str, &BigDecimal> = self
            .iter()
            .map(|entry| (entry.identifier.as_str(), &entry.amount))
            .collect();

        for entry in other.iter() {
            match remaining.remove(entry.identifier.as_str()) {
                Some(amount) if *amount == entry.amount => {}
                _ => return false,
            }
        }

        remaining.is_empty()
    }

    /// Number of entries held, including the default entry
    pub fn len(&self) -> usize {
        1 + self.others.len()
    }

    /// Check if no entry holds a strictly positive amount
    ///
    /// A value whose entries are all zero or negative counts as empty, so a
    /// freshly created value is empty even though [`len`](Self::len) is 1.
    pub fn is_empty(&self) -> bool {
        !self.iter().any(TokenEntry::is_positive)
    }

    fn check_network(&self, entry: &TokenEntry) -> Result<(), NetworkMismatchError> {
        if entry.network_id == self.network_id() {
            return Ok(());
        }
        debug!(
            identifier = %entry.identifier,
            expected = %self.network_id(),
            found = %entry.network_id,
            "Rejected token entry from another network"
        );
        Err(NetworkMismatchError::new(
            entry.identifier.clone(),
            self.network_id(),
            entry.network_id,
        ))
    }

    fn apply(&mut self, entry: TokenEntry, prune: Prune) -> Result<&mut Self, NetworkMismatchError> {
        self.check_network(&entry)?;

        // The default entry is never pruned
        if entry.identifier == self.defaults.identifier() {
            self.default_entry.amount += entry.amount;
            return Ok(self);
        }

        match self
            .others
            .iter()
            .position(|existing| existing.identifier == entry.identifier)
        {
            Some(index) => {
                self.others[index].amount += entry.amount;
                if prune.removes(&self.others[index].amount) {
                    let removed = self.others.remove(index);
                    trace!(identifier = %removed.identifier, "Pruned token entry");
                }
            }
            None if prune.removes(&entry.amount) => {
                trace!(identifier = %entry.identifier, "Pruned token entry on insert");
            }
            None => self.others.push(entry),
        }

        Ok(self)
    }

    fn join(
        &mut self,
        other: &MultiToken,
        operation: &'static str,
        negated: bool,
        prune: Prune,
    ) -> Result<&mut Self, NetworkMismatchError> {
        let span = spans::join(operation, self.network_id(), other.len());
        let _guard = span.enter();

        // All of `other`'s entries share its network
        self.check_network(other.default_entry())?;

        for entry in other.iter() {
            let entry = if negated {
                entry.negated()
            } else {
                entry.clone()
            };
            self.apply(entry, prune)?;
        }

        Ok(self)
    }

    fn map_entries(&self, f: impl Fn(&TokenEntry) -> TokenEntry) -> MultiToken {
        MultiToken {
            defaults: self.defaults.clone(),
            default_entry: f(&self.default_entry),
            others: self.others.iter().map(f).collect(),
        }
    }
}

fn negate(entry: TokenEntry) -> TokenEntry {
    TokenEntry {
        amount: -entry.amount,
        ..entry
    }
}

impl PartialEq for MultiToken {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for MultiToken {}

impl<'a> IntoIterator for &'a MultiToken {
    type Item = &'a TokenEntry;
    type IntoIter = Chain<Once<&'a TokenEntry>, std::slice::Iter<'a, TokenEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for MultiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MultiToken(default: {}, tokens: {{", self.default_amount())?;
        for (i, entry) in self.others.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", entry.identifier, entry.amount)?;
        }
        write!(f, "}})")
    }
}
