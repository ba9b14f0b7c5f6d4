//! The two-sided book of resting orders.
//!
//! Orders live in two `BTreeMap`s keyed by [`OrderId`] — one per side —
//! fed by a single global counter, so ids are strictly increasing across
//! both sides and never reused. There is no price-level structure: the book
//! never crosses itself, settlement names a specific pair, and best-price
//! queries scan the side.

use std::collections::BTreeMap;

use bourse_types::{BourseError, Order, OrderId, OrderOutcome, OrderSide, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Resting buy and sell orders plus the shared id counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderBook {
    buys: BTreeMap<OrderId, Order>,
    sells: BTreeMap<OrderId, Order>,
    /// Next id to allocate. Only ever incremented.
    next_id: u64,
}

impl OrderBook {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =================================================================
    // Insertion
    // =================================================================

    /// Store an order on its side, allocating the next order id.
    ///
    /// The caller is responsible for escrow/balance checks; the book only
    /// enforces the structural invariant that every resting order has a
    /// positive price and quantity.
    ///
    /// # Errors
    /// - `NonPositivePrice` if `order.price <= 0`
    /// - `NonPositiveQuantity` if `order.quantity <= 0`
    pub fn insert(&mut self, order: Order) -> Result<OrderId> {
        if order.price <= Decimal::ZERO {
            return Err(BourseError::NonPositivePrice { price: order.price });
        }
        if order.quantity <= Decimal::ZERO {
            return Err(BourseError::NonPositiveQuantity {
                quantity: order.quantity,
            });
        }

        let id = OrderId(self.next_id);
        self.next_id += 1;
        self.side_mut(order.side).insert(id, order);
        Ok(id)
    }

    // =================================================================
    // Lookup
    // =================================================================

    /// The order with `id` on `side`, if it is resting there.
    #[must_use]
    pub fn order(&self, side: OrderSide, id: OrderId) -> Option<&Order> {
        self.side(side).get(&id)
    }

    /// Like [`OrderBook::order`] but failing with `OrderNotFound`.
    pub fn require(&self, side: OrderSide, id: OrderId) -> Result<&Order> {
        self.side(side).get(&id).ok_or(BourseError::OrderNotFound(id))
    }

    /// Whether `id` is resting on `side`.
    #[must_use]
    pub fn contains(&self, side: OrderSide, id: OrderId) -> bool {
        self.side(side).contains_key(&id)
    }

    // =================================================================
    // Removal & fills
    // =================================================================

    /// Remove and return the order with `id` on `side`.
    ///
    /// # Errors
    /// Returns `OrderNotFound` if no such order rests there.
    pub fn remove(&mut self, side: OrderSide, id: OrderId) -> Result<Order> {
        self.side_mut(side)
            .remove(&id)
            .ok_or(BourseError::OrderNotFound(id))
    }

    /// Apply a fill of `fill_qty` to the order with `id` on `side`.
    ///
    /// If the fill consumes the full remaining quantity the order is
    /// deleted; otherwise its quantity is decremented in place with price,
    /// trader, and timestamp untouched.
    ///
    /// The caller must have bounded `fill_qty` by the order's remaining
    /// quantity (settlement fills `min` of the two sides).
    ///
    /// # Errors
    /// - `OrderNotFound` if no such order rests there
    /// - `BalanceUnderflow` if `fill_qty` exceeds the remaining quantity
    pub fn fill(&mut self, side: OrderSide, id: OrderId, fill_qty: Decimal) -> Result<OrderOutcome> {
        let order = self
            .side_mut(side)
            .get_mut(&id)
            .ok_or(BourseError::OrderNotFound(id))?;

        if order.quantity < fill_qty {
            return Err(BourseError::BalanceUnderflow);
        }

        if order.quantity == fill_qty {
            self.side_mut(side).remove(&id);
            Ok(OrderOutcome::Closed)
        } else {
            order.quantity -= fill_qty;
            let remaining = order.quantity;
            Ok(OrderOutcome::Open { remaining })
        }
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Best (highest) resting buy price, or `None` if no buys.
    #[must_use]
    pub fn best_bid(&self) -> Option<Decimal> {
        self.buys.values().map(|o| o.price).max()
    }

    /// Best (lowest) resting sell price, or `None` if no sells.
    #[must_use]
    pub fn best_ask(&self) -> Option<Decimal> {
        self.sells.values().map(|o| o.price).min()
    }

    /// Spread = best ask − best bid. `None` if either side is empty.
    #[must_use]
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Number of resting buy orders.
    #[must_use]
    pub fn buy_count(&self) -> usize {
        self.buys.len()
    }

    /// Number of resting sell orders.
    #[must_use]
    pub fn sell_count(&self) -> usize {
        self.sells.len()
    }

    /// Total number of resting orders on both sides.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.buys.len() + self.sells.len()
    }

    /// Returns `true` if the book has no orders on either side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }

    /// Sum of `price × quantity` over all resting buy orders — the quote
    /// value the escrow vault must be holding.
    #[must_use]
    pub fn total_buy_notional(&self) -> Decimal {
        self.buys.values().map(Order::notional).sum()
    }

    // =================================================================
    // Iteration (for views and snapshots)
    // =================================================================

    /// Iterate resting buy orders in id (placement) order.
    pub fn buys(&self) -> impl Iterator<Item = (&OrderId, &Order)> {
        self.buys.iter()
    }

    /// Iterate resting sell orders in id (placement) order.
    pub fn sells(&self) -> impl Iterator<Item = (&OrderId, &Order)> {
        self.sells.iter()
    }

    /// The id the next inserted order will receive.
    #[must_use]
    pub fn next_order_id(&self) -> OrderId {
        OrderId(self.next_id)
    }

    fn side(&self, side: OrderSide) -> &BTreeMap<OrderId, Order> {
        match side {
            OrderSide::Buy => &self.buys,
            OrderSide::Sell => &self.sells,
        }
    }

    fn side_mut(&mut self, side: OrderSide) -> &mut BTreeMap<OrderId, Order> {
        match side {
            OrderSide::Buy => &mut self.buys,
            OrderSide::Sell => &mut self.sells,
        }
    }
}
