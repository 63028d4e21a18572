//! Single-instrument order book: bids, asks, and the trade ledger.
//!
//! [`OrderBook::submit`] matches an incoming order against the opposite side, appends the
//! resulting trades to the ledger, and rests any remainder on the order's own side.

use crate::book_side::{BookSide, LevelSummary};
use crate::clock::Clock;
use crate::error::OrderError;
use crate::execution::Trade;
use crate::ids::IdSource;
use crate::matching::match_order;
use crate::types::{Order, Side};
use log::debug;
use rust_decimal::Decimal;

/// Resting orders per side, each in that side's priority order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BookSnapshot {
    #[serde(rename = "buy_orders")]
    pub bids: Vec<Order>,
    #[serde(rename = "sell_orders")]
    pub asks: Vec<Order>,
}

#[derive(Debug, Clone)]
pub struct OrderBook {
    bids: BookSide,
    asks: BookSide,
    /// Every trade in execution order. Append-only.
    trades: Vec<Trade>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            trades: Vec::new(),
        }
    }

    /// Matches `order` against the contra side and books any residual.
    ///
    /// Returns the incoming order in its final state (quantity and status after matching)
    /// and the trades this call produced. An order failing [`Order::check`] is rejected
    /// and the book is left untouched. Side and bound checks on raw input belong to
    /// [`crate::engine::Engine::submit`].
    pub fn submit(
        &mut self,
        order: Order,
        ids: &dyn IdSource,
        clock: &dyn Clock,
    ) -> Result<(Order, Vec<Trade>), OrderError> {
        order.check()?;
        let (contra, own) = match order.side {
            Side::Buy => (&mut self.asks, &mut self.bids),
            Side::Sell => (&mut self.bids, &mut self.asks),
        };
        let (residual, trades) = match_order(order, contra, ids, clock);
        self.trades.extend(trades.iter().cloned());
        if residual.quantity > 0 {
            debug!(
                "resting order_id={} side={} price={} quantity={}",
                residual.id, residual.side, residual.price, residual.quantity
            );
            own.insert(residual.clone());
        }
        Ok((residual, trades))
    }

    pub fn bids(&self) -> &BookSide {
        &self.bids
    }

    pub fn asks(&self) -> &BookSide {
        &self.asks
    }

    /// Best bid price (None if empty).
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.best_price()
    }

    /// Best ask price (None if empty).
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.best_price()
    }

    /// All resting orders: bids best-first, then asks best-first.
    pub fn orders(&self) -> Vec<Order> {
        self.bids.iter().chain(self.asks.iter()).cloned().collect()
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            bids: self.bids.orders(),
            asks: self.asks.orders(),
        }
    }

    /// Aggregated depth per side: (bids, asks), best-first.
    pub fn depth(&self) -> (Vec<LevelSummary>, Vec<LevelSummary>) {
        (self.bids.levels(), self.asks.levels())
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
