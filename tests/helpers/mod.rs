// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for multitoken integration tests
//!
//! Provides proptest strategies for token values and a tracing setup that
//! routes library logs through the test harness.

#![allow(dead_code)]

use bigdecimal::BigDecimal;
use multitoken::{DefaultTokenEntry, MultiToken, NetworkId, TokenDecimals, TokenEntry};
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

/// Network every generated value lives on
pub const NETWORK: NetworkId = NetworkId::new(1);

/// A network no generated value lives on
pub const FOREIGN_NETWORK: NetworkId = NetworkId::new(2);

/// Install a test-writer subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Defaults descriptor on [`NETWORK`]
pub fn defaults(identifier: &str) -> DefaultTokenEntry {
    DefaultTokenEntry::new(NETWORK, identifier)
}

/// Entry on [`NETWORK`]
pub fn entry(identifier: &str, amount: impl Into<BigDecimal>) -> TokenEntry {
    TokenEntry::new(identifier, NETWORK, amount)
}

/// Identifiers drawn from a small pool so entries collide often
pub fn arb_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("ada".to_string()),
        Just("tokenA".to_string()),
        Just("tokenB".to_string()),
        Just("policy.asset".to_string()),
    ]
}

/// `digits * 10^-scale`, exactly
fn scaled(digits: i64, scale: u8) -> BigDecimal {
    TokenDecimals::new(scale)
        .to_display_units(&BigDecimal::from(digits))
        .expect("small scales never overflow")
}

/// Exact decimal amounts, including fractional and negative values
pub fn arb_amount() -> impl Strategy<Value = BigDecimal> {
    (-1_000_000_000_000i64..=1_000_000_000_000, 0u8..=9)
        .prop_map(|(digits, scale)| scaled(digits, scale))
}

/// Strictly positive exact decimal amounts
pub fn arb_positive_amount() -> impl Strategy<Value = BigDecimal> {
    (1i64..=1_000_000_000_000, 0u8..=9)
        .prop_map(|(digits, scale)| scaled(digits, scale))
}

/// Entry on [`NETWORK`] with any amount
pub fn arb_entry() -> impl Strategy<Value = TokenEntry> {
    (arb_identifier(), arb_amount()).prop_map(|(identifier, amount)| entry(&identifier, amount))
}

/// Default-token descriptor on [`NETWORK`]
pub fn arb_defaults() -> impl Strategy<Value = DefaultTokenEntry> {
    arb_identifier().prop_map(|identifier| defaults(&identifier))
}

/// Any value reachable through construction
pub fn arb_multi_token() -> impl Strategy<Value = MultiToken> {
    (prop::collection::vec(arb_entry(), 0..8), arb_defaults()).prop_map(|(values, defaults)| {
        MultiToken::new(values, defaults).expect("generated entries share one network")
    })
}

/// Value sharing the given defaults
pub fn arb_multi_token_with(defaults: DefaultTokenEntry) -> impl Strategy<Value = MultiToken> {
    prop::collection::vec(arb_entry(), 0..8).prop_map(move |values| {
        MultiToken::new(values, defaults.clone()).expect("generated entries share one network")
    })
}

/// One mutating step applied to a value
#[derive(Debug, Clone)]
pub enum Step {
    Add(TokenEntry),
    AddWithLimitZero(TokenEntry),
    Subtract(TokenEntry),
    SubtractWithLimitZero(TokenEntry),
    JoinAdd(Vec<TokenEntry>),
    JoinSubtract(Vec<TokenEntry>),
    JoinSubtractWithLimitZero(Vec<TokenEntry>),
}

impl Step {
    /// Apply the step; generated steps never cross networks
    pub fn apply(&self, value: &mut MultiToken) {
        let defaults = value.defaults().clone();
        let join_operand = |entries: &[TokenEntry]| {
            MultiToken::new(entries.to_vec(), defaults.clone()).expect("same network")
        };
        let result = match self {
            Step::Add(e) => value.add(e.clone()).map(|_| ()),
            Step::AddWithLimitZero(e) => value.add_with_limit_zero(e.clone()).map(|_| ()),
            Step::Subtract(e) => value.subtract(e.clone()).map(|_| ()),
            Step::SubtractWithLimitZero(e) => value.subtract_with_limit_zero(e.clone()).map(|_| ()),
            Step::JoinAdd(entries) => value.join_add_mut(&join_operand(entries)).map(|_| ()),
            Step::JoinSubtract(entries) => {
                value.join_subtract_mut(&join_operand(entries)).map(|_| ())
            }
            Step::JoinSubtractWithLimitZero(entries) => value
                .join_subtract_mut_with_limit_zero(&join_operand(entries))
                .map(|_| ()),
        };
        result.expect("generated steps share one network");
    }
}

/// Any mutating step
pub fn arb_step() -> impl Strategy<Value = Step> {
    let entries = || prop::collection::vec(arb_entry(), 0..4);
    prop_oneof![
        arb_entry().prop_map(Step::Add),
        arb_entry().prop_map(Step::AddWithLimitZero),
        arb_entry().prop_map(Step::Subtract),
        arb_entry().prop_map(Step::SubtractWithLimitZero),
        entries().prop_map(Step::JoinAdd),
        entries().prop_map(Step::JoinSubtract),
        entries().prop_map(Step::JoinSubtractWithLimitZero),
    ]
}
