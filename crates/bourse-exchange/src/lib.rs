//! # bourse-exchange
//!
//! **Operation surface** of the Bourse exchange core.
//!
//! ## Architecture
//!
//! The [`Exchange`] facade owns every component and is the only way to
//! mutate them:
//! 1. **Ledger** (`bourse-ledger`): balances, supply, admin gate
//! 2. **OrderBook** + **EscrowVault** (`bourse-orderbook`): resting orders
//!    and the buy-side escrow pool
//! 3. **TradeLog**: append-only trade history
//! 4. **MarketStats**: last trade price + all-time cumulative volume
//!
//! ## Execution model
//!
//! Single-threaded and transactional: each operation validates every
//! precondition before its first mutation, then commits in full. A failed
//! operation returns a named [`bourse_types::BourseError`] and leaves all
//! state unchanged. Settlement is on request — an external caller (usually
//! a matching bot) names a specific (buy, sell) pair; placement never
//! matches automatically.

pub mod exchange;
pub mod history;
pub mod settlement;
pub mod snapshot;
pub mod stats;

pub use exchange::Exchange;
pub use history::TradeLog;
pub use snapshot::ExchangeSnapshot;
pub use stats::MarketStats;
