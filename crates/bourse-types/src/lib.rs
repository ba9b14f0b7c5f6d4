//! # bourse-types
//!
//! Shared types, errors, and configuration for the **Bourse** exchange core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`OrderId`], [`TradeId`]
//! - **Order model**: [`Order`], [`OrderSide`], [`OrderOutcome`]
//! - **Trade model**: [`Trade`]
//! - **Receipt model**: [`SettlementReceipt`], [`CancelReceipt`]
//! - **Call context**: [`Call`] (sender identity + attached quote value)
//! - **Token metadata**: [`TokenMetadata`]
//! - **Configuration**: [`GenesisConfig`]
//! - **Errors**: [`BourseError`] with `BRS_ERR_` prefix codes
//! - **Constants**: system-wide defaults

pub mod call;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;
pub mod receipt;
pub mod token;
pub mod trade;

// Re-export all primary types at crate root for ergonomic imports:
//   use bourse_types::{Order, OrderSide, Trade, Call, ...};

pub use call::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use receipt::*;
pub use token::*;
pub use trade::*;

// Constants are accessed via `bourse_types::constants::FOO`
// (not re-exported to avoid name collisions).
