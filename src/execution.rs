//! Trades: one record per execution between a resting (maker) and an incoming (taker) order.

use crate::types::{OrderId, Side, TradeId};
use rust_decimal::Decimal;

/// A completed match. Immutable once created.
///
/// `price` is always the maker's limit price. `taker_side` is the side of the incoming order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub maker_id: OrderId,
    pub taker_id: OrderId,
    pub price: Decimal,
    pub quantity: u64,
    pub taker_side: Side,
    pub created_at: u64,
}
