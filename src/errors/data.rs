// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for restoring token values from their plain-data form.
//!
//! These surface at the serialization boundary: values read back from
//! storage or received from another process.

use bigdecimal::ParseBigDecimalError;

use super::NetworkMismatchError;

/// Errors that can occur when building a [`MultiToken`](crate::MultiToken)
/// from [`MultiTokenData`](crate::MultiTokenData) or JSON.
///
/// # Examples
///
/// ```
/// use multitoken::{MultiToken, MultiTokenData, MultiTokenDataError};
///
/// let json = r#"{
///     "values": [{ "identifier": "", "networkId": 1, "amount": "12.x" }],
///     "defaults": { "defaultNetworkId": 1, "defaultIdentifier": "" }
/// }"#;
///
/// match MultiTokenData::from_json(json).and_then(MultiToken::try_from) {
///     Err(MultiTokenDataError::InvalidAmount { value, .. }) => assert_eq!(value, "12.x"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum MultiTokenDataError {
    /// An amount string could not be parsed as an exact decimal.
    ///
    /// Amount strings should be validated before they reach this layer;
    /// this variant carries the offending value for diagnostics.
    #[error("Invalid amount '{value}' for token '{identifier}': {source}")]
    InvalidAmount {
        /// Identifier of the entry carrying the bad amount
        identifier: String,
        /// The raw amount string
        value: String,
        /// Underlying parser error
        #[source]
        source: ParseBigDecimalError,
    },

    /// An entry belongs to a different network than the declared defaults.
    #[error(transparent)]
    NetworkMismatch(#[from] NetworkMismatchError),

    /// The JSON document was malformed or did not match the expected shape.
    #[error("Malformed token value JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MultiTokenDataError {
    /// Create an `InvalidAmount` error.
    pub fn invalid_amount(
        identifier: impl Into<String>,
        value: impl Into<String>,
        source: ParseBigDecimalError,
    ) -> Self {
        MultiTokenDataError::InvalidAmount {
            identifier: identifier.into(),
            value: value.into(),
            source,
        }
    }
}
