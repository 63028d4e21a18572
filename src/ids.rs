//! Identifier generation.
//!
//! The engine never mints ids itself; it asks an [`IdSource`]. Production uses
//! [`UuidIds`] (random UUID v4 strings); tests use [`SequentialIds`] for reproducible ids.

use crate::types::{OrderId, TradeId};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of globally unique opaque identifiers.
pub trait IdSource: Send {
    fn next_order_id(&self) -> OrderId;
    fn next_trade_id(&self) -> TradeId;
}

/// Random UUID v4 identifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_order_id(&self) -> OrderId {
        OrderId(Uuid::new_v4().to_string())
    }

    fn next_trade_id(&self) -> TradeId {
        TradeId(Uuid::new_v4().to_string())
    }
}

/// Counter-based identifiers: `o-1`, `o-2`, ... and `t-1`, `t-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next_order: AtomicU64,
    next_trade: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_order_id(&self) -> OrderId {
        let n = self.next_order.fetch_add(1, Ordering::Relaxed) + 1;
        OrderId(format!("o-{}", n))
    }

    fn next_trade_id(&self) -> TradeId {
        let n = self.next_trade.fetch_add(1, Ordering::Relaxed) + 1;
        TradeId(format!("t-{}", n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_ids_count_independently() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_order_id(), OrderId("o-1".into()));
        assert_eq!(ids.next_order_id(), OrderId("o-2".into()));
        assert_eq!(ids.next_trade_id(), TradeId("t-1".into()));
        assert_eq!(ids.next_order_id(), OrderId("o-3".into()));
    }

    #[test]
    fn uuid_ids_are_unique() {
        let ids = UuidIds;
        let seen: HashSet<String> = (0..1000).map(|_| ids.next_order_id().0).collect();
        assert_eq!(seen.len(), 1000);
        assert_ne!(ids.next_trade_id().0, ids.next_trade_id().0);
    }
}
