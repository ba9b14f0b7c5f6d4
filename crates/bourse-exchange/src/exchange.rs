//! The exchange facade — every operation of the core, in one place.
//!
//! Each method is one atomic operation: validate everything, then commit.
//! The commit half only uses mutations whose preconditions were already
//! established, so no error path ever leaves a partial write behind.

use bourse_ledger::Ledger;
use bourse_orderbook::{EscrowVault, OrderBook};
use bourse_types::{
    AccountId, BourseError, Call, CancelReceipt, GenesisConfig, Order, OrderId, OrderSide, Result,
    SettlementReceipt, TokenMetadata, Trade, TradeId,
};
use chrono::Utc;
use rust_decimal::Decimal;

use crate::history::TradeLog;
use crate::settlement;
use crate::stats::MarketStats;

/// The single-ledger exchange core.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub(crate) ledger: Ledger,
    pub(crate) book: OrderBook,
    pub(crate) escrow: EscrowVault,
    pub(crate) trades: TradeLog,
    pub(crate) stats: MarketStats,
    pub(crate) token: TokenMetadata,
}

impl Exchange {
    /// Create an exchange from genesis parameters. The admin is credited
    /// the entire initial supply.
    #[must_use]
    pub fn new(config: GenesisConfig) -> Self {
        Self {
            ledger: Ledger::new(config.admin, config.initial_supply),
            book: OrderBook::new(),
            escrow: EscrowVault::new(),
            trades: TradeLog::new(),
            stats: MarketStats::new(config.initial_price),
            token: config.token,
        }
    }

    // =================================================================
    // Placement
    // =================================================================

    /// Place a buy order, escrowing the attached value.
    ///
    /// The caller must attach exactly `price × quantity` in quote value;
    /// the escrow is held until settlement pays it out or cancellation
    /// refunds it.
    ///
    /// # Errors
    /// - `NonPositivePrice` / `NonPositiveQuantity`
    /// - `IncorrectEscrowAmount` on any attached-value mismatch
    pub fn place_buy_order(&mut self, call: Call, price: Decimal, quantity: Decimal) -> Result<OrderId> {
        require_positive_order(price, quantity)?;
        let cost = price * quantity;
        call.require_value(cost)?;

        let id = self
            .book
            .insert(Order::new(call.sender, OrderSide::Buy, price, quantity))?;
        self.escrow.hold(cost);
        tracing::info!(%id, trader = %call.sender, %price, %quantity, escrow = %cost, "buy order placed");
        Ok(id)
    }

    /// Place a sell order. No value is attached and no tokens are locked:
    /// the seller's balance is only re-checked at settlement time.
    ///
    /// # Errors
    /// - `UnexpectedPayment` if any value is attached
    /// - `NonPositivePrice` / `NonPositiveQuantity`
    /// - `InsufficientBalance` if the caller holds fewer tokens than
    ///   `quantity` right now (advisory check, not a lock)
    pub fn place_sell_order(&mut self, call: Call, price: Decimal, quantity: Decimal) -> Result<OrderId> {
        call.require_no_value()?;
        require_positive_order(price, quantity)?;
        self.ledger.require_balance(call.sender, quantity)?;

        let id = self
            .book
            .insert(Order::new(call.sender, OrderSide::Sell, price, quantity))?;
        tracing::info!(%id, trader = %call.sender, %price, %quantity, "sell order placed");
        Ok(id)
    }

    // =================================================================
    // Settlement
    // =================================================================

    /// Settle a caller-named (buy, sell) pair.
    ///
    /// Open to any caller — it only moves value already escrowed or owned
    /// by the two named parties. Fills `min` of the two remaining
    /// quantities at the *sell* order's price; the buyer's escrow for the
    /// filled portion is split into the seller's payout and a
    /// price-improvement refund reported on the receipt.
    ///
    /// # Errors
    /// - `UnexpectedPayment` if any value is attached
    /// - `OrderNotFound` if either id is absent
    /// - `IncompatiblePrices` if the pair does not cross
    /// - `InsufficientBalance` if the seller's balance no longer covers the
    ///   sell order's remaining quantity
    pub fn execute_trade(
        &mut self,
        call: Call,
        buy_id: OrderId,
        sell_id: OrderId,
    ) -> Result<SettlementReceipt> {
        call.require_no_value()?;
        let fill = settlement::plan(&self.book, &self.ledger, buy_id, sell_id)?;

        // Commit. Every step below is covered by the plan's checks: the
        // seller's balance covers the fill, the vault holds at least the
        // buy order's notional, and both orders rest with quantity >= fill.
        self.ledger.debit(fill.seller, fill.quantity)?;
        self.ledger.credit(fill.buyer, fill.quantity);
        self.escrow.release(fill.escrow_released())?;

        let trade = Trade {
            buyer: fill.buyer,
            seller: fill.seller,
            price: fill.price,
            quantity: fill.quantity,
            quote_amount: fill.seller_payout,
            executed_at: Utc::now(),
        };
        let trade_id = self.trades.append(trade.clone());
        self.stats.record_fill(fill.price, fill.quantity);

        let buy_order = self.book.fill(OrderSide::Buy, buy_id, fill.quantity)?;
        let sell_order = self.book.fill(OrderSide::Sell, sell_id, fill.quantity)?;

        tracing::info!(
            %trade_id, %buy_id, %sell_id,
            price = %fill.price, quantity = %fill.quantity,
            payout = %fill.seller_payout, refund = %fill.buyer_refund,
            "trade settled"
        );
        Ok(SettlementReceipt {
            trade_id,
            trade,
            seller_payout: fill.seller_payout,
            buyer_refund: fill.buyer_refund,
            buy_order,
            sell_order,
        })
    }

    // =================================================================
    // Cancellation
    // =================================================================

    /// Cancel a resting order. Only its owner may cancel.
    ///
    /// A buy order refunds its full remaining escrow, `price × remaining`;
    /// a sell order is simply deleted (no escrow existed).
    ///
    /// # Errors
    /// - `UnexpectedPayment` if any value is attached
    /// - `OrderNotFound` if no such order rests on `side`
    /// - `NotOrderOwner` if the caller is not the order's trader
    pub fn cancel_order(&mut self, call: Call, order_id: OrderId, side: OrderSide) -> Result<CancelReceipt> {
        call.require_no_value()?;
        let order = self.book.require(side, order_id)?;
        if order.trader != call.sender {
            return Err(BourseError::NotOrderOwner(order_id));
        }
        let refund = match side {
            OrderSide::Buy => order.notional(),
            OrderSide::Sell => Decimal::ZERO,
        };

        // Commit: the vault holds at least every resting buy's notional.
        self.escrow.release(refund)?;
        self.book.remove(side, order_id)?;
        tracing::info!(%order_id, %side, %refund, "order cancelled");
        Ok(CancelReceipt {
            order_id,
            side,
            refund,
        })
    }

    // =================================================================
    // Ledger passthroughs
    // =================================================================

    /// Move tokens from the caller to `to`. Pure token move: no attached
    /// value is permitted.
    pub fn transfer(&mut self, call: Call, to: AccountId, amount: Decimal) -> Result<()> {
        call.require_no_value()?;
        self.ledger.transfer(call.sender, to, amount)
    }

    /// Mint new tokens to `to`. Admin only.
    pub fn mint(&mut self, call: Call, to: AccountId, amount: Decimal) -> Result<()> {
        call.require_no_value()?;
        self.ledger.mint(call.sender, to, amount)
    }

    /// Burn tokens from the caller's own balance.
    pub fn burn(&mut self, call: Call, amount: Decimal) -> Result<()> {
        call.require_no_value()?;
        self.ledger.burn(call.sender, amount)
    }

    // =================================================================
    // Views (read-only, never fail, zero defaults)
    // =================================================================

    /// Balance of `account`; zero for unknown accounts.
    #[must_use]
    pub fn balance_of(&self, account: AccountId) -> Decimal {
        self.ledger.balance_of(account)
    }

    /// Total token supply.
    #[must_use]
    pub fn total_supply(&self) -> Decimal {
        self.ledger.total_supply()
    }

    /// Price of the most recent settlement.
    #[must_use]
    pub fn last_price(&self) -> Decimal {
        self.stats.last_price()
    }

    /// All-time cumulative settled volume.
    #[must_use]
    pub fn cumulative_volume(&self) -> Decimal {
        self.stats.cumulative_volume()
    }

    /// The resting buy order with `id`, if any.
    #[must_use]
    pub fn buy_order(&self, id: OrderId) -> Option<&Order> {
        self.book.order(OrderSide::Buy, id)
    }

    /// The resting sell order with `id`, if any.
    #[must_use]
    pub fn sell_order(&self, id: OrderId) -> Option<&Order> {
        self.book.order(OrderSide::Sell, id)
    }

    /// The recorded trade with `id`, if any.
    #[must_use]
    pub fn trade(&self, id: TradeId) -> Option<&Trade> {
        self.trades.trade(id)
    }

    /// Best (highest) resting buy price.
    #[must_use]
    pub fn best_bid(&self) -> Option<Decimal> {
        self.book.best_bid()
    }

    /// Best (lowest) resting sell price.
    #[must_use]
    pub fn best_ask(&self) -> Option<Decimal> {
        self.book.best_ask()
    }

    /// Spread between best ask and best bid.
    #[must_use]
    pub fn spread(&self) -> Option<Decimal> {
        self.book.spread()
    }

    /// Number of resting orders on both sides.
    #[must_use]
    pub fn open_order_count(&self) -> usize {
        self.book.order_count()
    }

    /// Number of recorded trades.
    #[must_use]
    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    /// Quote value currently held in escrow.
    #[must_use]
    pub fn escrow_held(&self) -> Decimal {
        self.escrow.held()
    }

    /// Token metadata.
    #[must_use]
    pub fn token(&self) -> &TokenMetadata {
        &self.token
    }

    /// The admin identity.
    #[must_use]
    pub fn admin(&self) -> AccountId {
        self.ledger.admin()
    }

    // =================================================================
    // Invariants
    // =================================================================

    /// Verify both core invariants: supply conservation and that the vault
    /// holds exactly the sum of resting buy notionals.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` naming the broken invariant.
    pub fn verify_invariants(&self) -> Result<()> {
        bourse_ledger::verify_conservation(&self.ledger)?;
        let expected = self.book.total_buy_notional();
        let held = self.escrow.held();
        if held != expected {
            return Err(BourseError::SupplyInvariantViolation {
                reason: format!("escrow held {held} != resting buy notional {expected}"),
            });
        }
        Ok(())
    }
}

fn require_positive_order(price: Decimal, quantity: Decimal) -> Result<()> {
    if price <= Decimal::ZERO {
        return Err(BourseError::NonPositivePrice { price });
    }
    if quantity <= Decimal::ZERO {
        return Err(BourseError::NonPositiveQuantity { quantity });
    }
    Ok(())
}
