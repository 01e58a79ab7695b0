//! Shared types for the Indodax REST API
//!
//! This crate provides the core type definitions used across the workspace.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Pair`] - Market identifiers (e.g., "btc_idr")
//! - [`Method`] - Private trade API method names
//! - [`TradeType`], [`OrderType`], [`TimeInForce`] - Order enums
//! - [`TimeFrame`] - OHLC history resolutions
//! - [`SortOrder`] - History ordering
//! - [`normalize_network`] - Withdrawal network alias mapping

pub mod de_helpers;
pub mod enums;
pub mod error;
pub mod network;
pub mod pair;

// Re-export commonly used types
pub use enums::*;
pub use error::*;
pub use network::normalize_network;
pub use pair::Pair;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;

/// Tolerance window (ms) sent as `recvWindow` with every private call
pub const DEFAULT_RECV_WINDOW: u64 = 5000;
