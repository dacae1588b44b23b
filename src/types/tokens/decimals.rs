// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Number of decimal places a token is displayed with
///
/// Token amounts are stored in natural units (lovelace for ADA, nanoErg for
/// ERG). Display code shifts them by the token's decimal count:
/// - ADA: 6 decimals
/// - ERG: 9 decimals
///
/// Shifting is exact; no rounding ever happens here. It returns `None` only
/// when the shifted exponent would not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use multitoken::TokenDecimals;
/// use std::str::FromStr;
///
/// let lovelace = BigDecimal::from(1_500_000);
/// let ada = TokenDecimals::ADA.to_display_units(&lovelace).unwrap();
/// assert_eq!(ada, BigDecimal::from_str("1.5").unwrap());
/// assert_eq!(TokenDecimals::ADA.to_base_units(&ada), Some(lovelace));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Cardano's ADA (6)
    pub const ADA: Self = Self(6);

    /// Ergo's ERG (9)
    pub const ERG: Self = Self(9);

    /// Tokens without a registered decimal count (0)
    pub const NONE: Self = Self(0);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Shift a natural-unit amount into display units: amount / 10^decimals
    pub fn to_display_units(&self, amount: &BigDecimal) -> Option<BigDecimal> {
        let (digits, scale) = amount.clone().into_bigint_and_exponent();
        let scale = scale.checked_add(i64::from(self.0))?;
        Some(BigDecimal::new(digits, scale))
    }

    /// Shift a display-unit amount into natural units: amount * 10^decimals
    pub fn to_base_units(&self, amount: &BigDecimal) -> Option<BigDecimal> {
        let (digits, scale) = amount.clone().into_bigint_and_exponent();
        let scale = scale.checked_sub(i64::from(self.0))?;
        Some(BigDecimal::new(digits, scale))
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
