// SPDX-FileCopyrightText: 2025 Yoroi Wallet Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across multitoken.
//!
//! This module provides newtype wrappers and value types for:
//! - Network identifiers
//! - Single-token entries and the default-token descriptor
//! - Multi-token values and their plain-data form
//! - Token decimal precision

pub mod network;
pub mod tokens;

pub use network::NetworkId;
