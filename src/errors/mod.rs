// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the multitoken library.
//!
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling
//!   ([`NetworkMismatchError`], [`MultiTokenDataError`])
//! - **Unified error type** ([`MultiTokenError`]) for callers that don't need
//!   to distinguish between error sources
//!
//! # Examples
//!
//! ```rust
//! use multitoken::{MultiToken, MultiTokenData, MultiTokenError};
//!
//! fn restore_and_sum(a: &str, b: &str) -> Result<MultiToken, MultiTokenError> {
//!     let a = MultiToken::try_from(MultiTokenData::from_json(a)?)?;
//!     let b = MultiToken::try_from(MultiTokenData::from_json(b)?)?;
//!     // Both error types convert into MultiTokenError via `?`
//!     Ok(a.join_add_copy(&b)?)
//! }
//! ```

mod data;
mod network;

pub use data::MultiTokenDataError;
pub use network::NetworkMismatchError;

/// Unified error type for all multitoken operations.
#[derive(Debug, thiserror::Error)]
pub enum MultiTokenError {
    /// Values from different networks were combined.
    #[error("Arithmetic error: {0}")]
    NetworkMismatch(#[from] NetworkMismatchError),

    /// Restoring a value from its plain-data form failed.
    #[error("Data error: {0}")]
    Data(#[from] MultiTokenDataError),
}
