//! One side of the book: resting orders in price-time priority.
//!
//! Orders are kept in a `BTreeMap` keyed by price, each level a FIFO queue ordered by
//! `created_at`. Best bid is the highest price, best ask the lowest. Insertion and
//! front access cost O(log P) in the number of price levels.

use crate::types::{Order, OrderId, Side};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, VecDeque};

/// Result of reducing the front order of a side.
#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    pub resting_order_id: OrderId,
    pub price: Decimal,
    pub quantity: u64,
    /// True if the resting order reached zero and was removed from the side.
    pub resting_fully_filled: bool,
}

/// Aggregate of one price level.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LevelSummary {
    pub price: Decimal,
    pub quantity: u64,
    pub orders: usize,
}

#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    levels: BTreeMap<Decimal, VecDeque<Order>>,
    len: usize,
}

impl BookSide {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            len: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of resting orders.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rests `order` behind every order at its price with an earlier or equal `created_at`.
    /// Orders for the other side, or failing [`Order::check`], are ignored.
    pub fn insert(&mut self, order: Order) {
        if order.side != self.side || order.check().is_err() {
            return;
        }
        let queue = self.levels.entry(order.price).or_default();
        let pos = queue.partition_point(|o| o.created_at <= order.created_at);
        queue.insert(pos, order);
        self.len += 1;
    }

    /// Best resting order, if any.
    pub fn peek_front(&self) -> Option<&Order> {
        self.best_level().and_then(|(_, q)| q.front())
    }

    pub fn best_price(&self) -> Option<Decimal> {
        self.best_level().map(|(p, _)| *p)
    }

    /// Reduces the front order by up to `quantity`, removing it when it reaches zero.
    /// Returns `None` if the side is empty.
    pub fn reduce_front(&mut self, quantity: u64) -> Option<Fill> {
        let price = self.best_price()?;
        let queue = self.levels.get_mut(&price)?;
        let front = queue.front_mut()?;
        let filled = front.apply_fill(quantity);
        let fill = Fill {
            resting_order_id: front.id.clone(),
            price,
            quantity: filled,
            resting_fully_filled: front.is_filled(),
        };
        if fill.resting_fully_filled {
            queue.pop_front();
            self.len -= 1;
            if queue.is_empty() {
                self.levels.remove(&price);
            }
        }
        Some(fill)
    }

    /// Resting orders best-first.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Order> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev().flatten()),
            Side::Sell => Box::new(self.levels.values().flatten()),
        }
    }

    /// Owned copy of the resting orders, best-first.
    pub fn orders(&self) -> Vec<Order> {
        self.iter().cloned().collect()
    }

    /// Per-level totals, best-first.
    pub fn levels(&self) -> Vec<LevelSummary> {
        let summarize = |(price, queue): (&Decimal, &VecDeque<Order>)| LevelSummary {
            price: *price,
            quantity: queue.iter().map(|o| o.quantity).sum(),
            orders: queue.len(),
        };
        match self.side {
            Side::Buy => self.levels.iter().rev().map(summarize).collect(),
            Side::Sell => self.levels.iter().map(summarize).collect(),
        }
    }

    /// Total resting quantity across all levels.
    pub fn total_quantity(&self) -> u64 {
        self.levels.values().flatten().map(|o| o.quantity).sum()
    }

    fn best_level(&self) -> Option<(&Decimal, &VecDeque<Order>)> {
        match self.side {
            Side::Buy => self.levels.iter().next_back(),
            Side::Sell => self.levels.iter().next(),
        }
    }
}
