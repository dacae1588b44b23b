// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Plain-data form of token values
//!
//! [`MultiTokenData`] is the shape a [`MultiToken`] takes when it crosses a
//! storage or process boundary: amounts travel as decimal strings so no
//! precision is lost in JSON numbers.
//!
//! ```json
//! {
//!   "values": [{ "identifier": "", "networkId": 1, "amount": "1500000" }],
//!   "defaults": { "defaultNetworkId": 1, "defaultIdentifier": "" }
//! }
//! ```

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::entry::{DefaultTokenEntry, TokenEntry};
use super::multi_token::MultiToken;
use crate::errors::MultiTokenDataError;
use crate::spans;
use crate::types::NetworkId;

/// A [`TokenEntry`] with its amount as a decimal string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntryData {
    /// Token identifier
    pub identifier: String,
    /// Network the token lives on
    pub network_id: NetworkId,
    /// Amount in natural units, as a decimal string
    pub amount: String,
}

impl From<&TokenEntry> for TokenEntryData {
    fn from(entry: &TokenEntry) -> Self {
        Self {
            identifier: entry.identifier.clone(),
            network_id: entry.network_id,
            amount: entry.amount.to_string(),
        }
    }
}

impl TryFrom<TokenEntryData> for TokenEntry {
    type Error = MultiTokenDataError;

    fn try_from(data: TokenEntryData) -> Result<Self, Self::Error> {
        let amount = BigDecimal::from_str(&data.amount).map_err(|e| {
            MultiTokenDataError::invalid_amount(data.identifier.clone(), data.amount.clone(), e)
        })?;
        Ok(TokenEntry::new(data.identifier, data.network_id, amount))
    }
}

/// Plain-data form of a [`MultiToken`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiTokenData {
    /// Entries with string amounts
    pub values: Vec<TokenEntryData>,
    /// The default-token descriptor
    pub defaults: DefaultTokenEntry,
}

impl MultiTokenData {
    /// Parse the JSON representation
    pub fn from_json(json: &str) -> Result<Self, MultiTokenDataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as JSON
    pub fn to_json(&self) -> Result<String, MultiTokenDataError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl MultiToken {
    /// Restore a value from its plain-data form
    ///
    /// # Errors
    ///
    /// - [`MultiTokenDataError::InvalidAmount`] if an amount string is not a
    ///   decimal number
    /// - [`MultiTokenDataError::NetworkMismatch`] if an entry is on a network
    ///   other than the declared defaults
    ///
    /// # Examples
    ///
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use multitoken::{DefaultTokenEntry, MultiToken, MultiTokenData, NetworkId, TokenEntryData};
    ///
    /// let data = MultiTokenData {
    ///     values: vec![TokenEntryData {
    ///         identifier: "x".to_string(),
    ///         network_id: NetworkId::new(1),
    ///         amount: "10".to_string(),
    ///     }],
    ///     defaults: DefaultTokenEntry::new(NetworkId::new(1), "ada"),
    /// };
    /// let value = MultiToken::from_data(data).unwrap();
    /// assert_eq!(value.get("x"), Some(&BigDecimal::from(10)));
    /// ```
    pub fn from_data(data: MultiTokenData) -> Result<Self, MultiTokenDataError> {
        let span = spans::from_data(data.defaults.network_id(), data.values.len());
        let _guard = span.enter();

        let values = data
            .values
            .into_iter()
            .map(TokenEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MultiToken::new(values, data.defaults)?)
    }

    /// Plain-data form of this value, default entry first
    pub fn to_data(&self) -> MultiTokenData {
        MultiTokenData {
            values: self.iter().map(TokenEntryData::from).collect(),
            defaults: self.defaults().clone(),
        }
    }
}

impl TryFrom<MultiTokenData> for MultiToken {
    type Error = MultiTokenDataError;

    fn try_from(data: MultiTokenData) -> Result<Self, Self::Error> {
        MultiToken::from_data(data)
    }
}

impl From<MultiToken> for MultiTokenData {
    fn from(value: MultiToken) -> Self {
        value.to_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "values": [
                { "identifier": "", "networkId": 1, "amount": "1500000" },
                { "identifier": "policy.asset", "networkId": 1, "amount": "0.25" }
            ],
            "defaults": { "defaultNetworkId": 1, "defaultIdentifier": "" }
        }"#
    }

    #[test]
    fn test_from_json() {
        let data = MultiTokenData::from_json(sample_json()).unwrap();
        let value = MultiToken::from_data(data).unwrap();
        assert_eq!(value.default_amount(), &BigDecimal::from(1_500_000));
        assert_eq!(
            value.get("policy.asset"),
            Some(&BigDecimal::from_str("0.25").unwrap())
        );
    }

    #[test]
    fn test_amounts_serialize_as_strings() {
        let value = MultiToken::from_data(MultiTokenData::from_json(sample_json()).unwrap()).unwrap();
        let json = value.to_data().to_json().unwrap();
        assert!(json.contains(r#""amount":"1500000""#));
        assert!(json.contains(r#""amount":"0.25""#));
    }

    #[test]
    fn test_serde_through_multi_token() {
        let value: MultiToken = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        let restored: MultiToken = serde_json::from_str(&json).unwrap();
        assert_eq!(value, restored);
        assert_eq!(restored.defaults(), value.defaults());
    }

    #[test]
    fn test_invalid_amount() {
        let data = MultiTokenData {
            values: vec![TokenEntryData {
                identifier: "x".to_string(),
                network_id: NetworkId::new(1),
                amount: "ten".to_string(),
            }],
            defaults: DefaultTokenEntry::new(NetworkId::new(1), ""),
        };
        match MultiToken::from_data(data) {
            Err(MultiTokenDataError::InvalidAmount {
                identifier, value, ..
            }) => {
                assert_eq!(identifier, "x");
                assert_eq!(value, "ten");
            }
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
    }

    #[test]
    fn test_network_mismatch_in_data() {
        let data = MultiTokenData {
            values: vec![TokenEntryData {
                identifier: "x".to_string(),
                network_id: NetworkId::new(2),
                amount: "1".to_string(),
            }],
            defaults: DefaultTokenEntry::new(NetworkId::new(1), ""),
        };
        assert!(matches!(
            MultiToken::from_data(data),
            Err(MultiTokenDataError::NetworkMismatch(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            MultiTokenData::from_json(r#"{"values": 3}"#),
            Err(MultiTokenDataError::Json(_))
        ));
    }

    #[test]
    fn test_deserialize_rejects_invalid_amount() {
        let json = r#"{
            "values": [{ "identifier": "x", "networkId": 1, "amount": "" }],
            "defaults": { "defaultNetworkId": 1, "defaultIdentifier": "" }
        }"#;
        assert!(serde_json::from_str::<MultiToken>(json).is_err());
    }

    #[test]
    fn test_to_data_lists_default_first() {
        let defaults = DefaultTokenEntry::new(NetworkId::new(0), "ada");
        let value = MultiToken::new(
            vec![
                TokenEntry::new("x", NetworkId::new(0), 1),
                TokenEntry::new("ada", NetworkId::new(0), 2),
            ],
            defaults,
        )
        .unwrap();
        let data = value.to_data();
        assert_eq!(data.values[0].identifier, "ada");
        assert_eq!(data.values[0].amount, "2");
        assert_eq!(data.values[1].identifier, "x");
    }
}
