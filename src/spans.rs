// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for multitoken operations.
//!
//! Telemetry is kept apart from the arithmetic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&mut self, other: &MultiToken) -> Result<..> {
//!     let span = spans::my_operation(self.network_id(), other.len());
//!     let _guard = span.enter();
//!     // Arithmetic here
//! }
//! ```

use tracing::Span;

use crate::types::NetworkId;

/// Create span for folding another value into a `MultiToken` entry by entry.
///
/// `operation` names the join flavour (`add`, `subtract`,
/// `subtract_with_limit_zero`).
#[inline]
pub(crate) fn join(operation: &'static str, network_id: NetworkId, entries: usize) -> Span {
    tracing::trace_span!(
        "multitoken.join",
        operation = operation,
        network_id = %network_id,
        entries = entries,
    )
}

/// Create span for restoring a `MultiToken` from its plain-data form.
#[inline]
pub(crate) fn from_data(network_id: NetworkId, entries: usize) -> Span {
    tracing::debug_span!(
        "multitoken.from_data",
        network_id = %network_id,
        entries = entries,
    )
}
