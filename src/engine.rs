//! Single-entry matching engine facade.
//!
//! [`Engine`] validates new-order commands, builds the [`Order`] (id and timestamp from the
//! injected capabilities), and drives the [`OrderBook`]. [`SharedEngine`] wraps it in one
//! mutex so each submission and each query is a single critical section.

use crate::clock::{Clock, SystemClock};
use crate::config::OrderLimits;
use crate::error::OrderError;
use crate::execution::Trade;
use crate::ids::{IdSource, UuidIds};
use crate::order_book::{BookSnapshot, OrderBook};
use crate::types::{NewOrder, Order, OrderId, OrderStatus};
use log::{info, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Outcome of one accepted submission.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SubmitOutcome {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub remaining_quantity: u64,
    /// Trades produced by this submission only, in execution order.
    pub trades: Vec<Trade>,
}

/// Single-instrument matching engine.
pub struct Engine {
    book: OrderBook,
    limits: OrderLimits,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl Engine {
    /// Engine with UUID ids and the system clock.
    pub fn new(limits: OrderLimits) -> Self {
        Self::with_capabilities(limits, Box::new(UuidIds), Box::new(SystemClock::new()))
    }

    pub fn with_capabilities(
        limits: OrderLimits,
        ids: Box<dyn IdSource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            book: OrderBook::new(),
            limits,
            ids,
            clock,
        }
    }

    /// Validates and submits a new limit order.
    ///
    /// Returns `Err` without touching the book if the command is malformed.
    pub fn submit(&mut self, cmd: &NewOrder) -> Result<SubmitOutcome, OrderError> {
        let (side, price, quantity) = cmd.validate(&self.limits).map_err(|e| {
            warn!(
                "order rejected side={} price={} quantity={} reason={}",
                cmd.side, cmd.price, cmd.quantity, e
            );
            e
        })?;
        let order = Order::new(self.ids.next_order_id(), side, price, quantity, self.clock.now());
        info!(
            "order accepted order_id={} side={} price={} quantity={}",
            order.id, order.side, order.price, order.quantity
        );
        let (order, trades) = self
            .book
            .submit(order, self.ids.as_ref(), self.clock.as_ref())?;
        for trade in &trades {
            info!(
                "trade trade_id={} maker={} taker={} price={} quantity={}",
                trade.id, trade.maker_id, trade.taker_id, trade.price, trade.quantity
            );
        }
        Ok(SubmitOutcome {
            order_id: order.id,
            status: order.status,
            remaining_quantity: order.quantity,
            trades,
        })
    }

    /// All resting orders, bids then asks.
    pub fn list_orders(&self) -> Vec<Order> {
        self.book.orders()
    }

    /// Full trade ledger in execution order.
    pub fn list_trades(&self) -> Vec<Trade> {
        self.book.trades().to_vec()
    }

    pub fn snapshot_book(&self) -> BookSnapshot {
        self.book.snapshot()
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn limits(&self) -> &OrderLimits {
        &self.limits
    }

    pub fn best_bid(&self) -> Option<Decimal> {
        self.book.best_bid()
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.book.best_ask()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("book", &self.book)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

/// Cloneable handle to one [`Engine`] behind a mutex.
///
/// Each method holds the lock for its whole body and does no I/O while holding it.
/// Queries return owned copies.
#[derive(Clone, Debug)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn submit(&self, cmd: &NewOrder) -> Result<SubmitOutcome, OrderError> {
        self.lock().submit(cmd)
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.lock().list_orders()
    }

    pub fn list_trades(&self) -> Vec<Trade> {
        self.lock().list_trades()
    }

    pub fn snapshot_book(&self) -> BookSnapshot {
        self.lock().snapshot_book()
    }

    /// Runs `f` against the engine inside the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Engine) -> R) -> R {
        f(&*self.lock())
    }

    // Matching cannot panic part-way, so a poisoned lock still guards a consistent book.
    fn lock(&self) -> MutexGuard<'_, Engine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
