//! # bourse-orderbook
//!
//! **Order book plane** for the Bourse exchange core.
//!
//! 1. **OrderBook**: two collections of resting orders (buy side, sell
//!    side) keyed by a single strictly increasing order id
//! 2. **EscrowVault**: the quote value held on behalf of resting buy orders
//!
//! The book stores and retrieves; it never matches on its own. Settlement
//! is driven externally by naming a specific (buy, sell) pair.

pub mod book;
pub mod escrow;

pub use book::OrderBook;
pub use escrow::EscrowVault;
