//! Serializable snapshot of the full persisted state.
//!
//! The core does not persist anything itself — the substrate commits a
//! snapshot to its atomic store after each operation and hands it back on
//! restart. A snapshot carries every persisted field: balance map, both
//! order maps, order counter, trade map, trade counter, admin identity,
//! last price, cumulative volume, token metadata, and the escrow total.

use bourse_ledger::Ledger;
use bourse_orderbook::{EscrowVault, OrderBook};
use bourse_types::TokenMetadata;
use serde::{Deserialize, Serialize};

use crate::exchange::Exchange;
use crate::history::TradeLog;
use crate::stats::MarketStats;

/// The complete durable state of an [`Exchange`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeSnapshot {
    pub ledger: Ledger,
    pub book: OrderBook,
    pub escrow: EscrowVault,
    pub trades: TradeLog,
    pub stats: MarketStats,
    pub token: TokenMetadata,
}

impl Exchange {
    /// Capture the full persisted state.
    #[must_use]
    pub fn snapshot(&self) -> ExchangeSnapshot {
        ExchangeSnapshot {
            ledger: self.ledger.clone(),
            book: self.book.clone(),
            escrow: self.escrow,
            trades: self.trades.clone(),
            stats: self.stats,
            token: self.token.clone(),
        }
    }

    /// Rebuild an exchange from a snapshot.
    #[must_use]
    pub fn restore(snapshot: ExchangeSnapshot) -> Self {
        Self {
            ledger: snapshot.ledger,
            book: snapshot.book,
            escrow: snapshot.escrow,
            trades: snapshot.trades,
            stats: snapshot.stats,
            token: snapshot.token,
        }
    }
}
