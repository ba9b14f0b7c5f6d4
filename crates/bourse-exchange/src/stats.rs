//! Derived market statistics.
//!
//! `last_price` is updated on every settlement; `cumulative_volume` is the
//! all-time filled quantity and is never windowed or reset.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Last trade price and all-time volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStats {
    last_price: Decimal,
    cumulative_volume: Decimal,
}

impl MarketStats {
    /// Create stats seeded with the genesis price.
    #[must_use]
    pub fn new(initial_price: Decimal) -> Self {
        Self {
            last_price: initial_price,
            cumulative_volume: Decimal::ZERO,
        }
    }

    /// Record a settled fill.
    pub fn record_fill(&mut self, price: Decimal, quantity: Decimal) {
        self.last_price = price;
        self.cumulative_volume += quantity;
    }

    /// Price of the most recent settlement (the genesis seed before any).
    #[must_use]
    pub fn last_price(&self) -> Decimal {
        self.last_price
    }

    /// All-time filled quantity. Monotonically increasing.
    #[must_use]
    pub fn cumulative_volume(&self) -> Decimal {
        self.cumulative_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_initial_price() {
        let stats = MarketStats::new(Decimal::ONE);
        assert_eq!(stats.last_price(), Decimal::ONE);
        assert_eq!(stats.cumulative_volume(), Decimal::ZERO);
    }

    #[test]
    fn fills_update_price_and_accumulate_volume() {
        let mut stats = MarketStats::new(Decimal::ONE);
        stats.record_fill(Decimal::new(120, 2), Decimal::new(50, 0));
        stats.record_fill(Decimal::new(110, 2), Decimal::new(25, 0));

        assert_eq!(stats.last_price(), Decimal::new(110, 2));
        assert_eq!(stats.cumulative_volume(), Decimal::new(75, 0));
    }

    #[test]
    fn volume_never_decreases() {
        let mut stats = MarketStats::new(Decimal::ONE);
        let mut previous = stats.cumulative_volume();
        for qty in 1..=10 {
            stats.record_fill(Decimal::ONE, Decimal::new(qty, 0));
            assert!(stats.cumulative_volume() > previous);
            previous = stats.cumulative_volume();
        }
    }
}
