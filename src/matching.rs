//! Price-time priority matching.
//!
//! [`match_order`] runs one incoming limit order against the opposite [`BookSide`]:
//! it consumes the best resting order while the prices cross, emits one [`Trade`] per
//! execution at the maker's price, and hands back the residual order. Booking the
//! residual is the caller's job (see [`crate::order_book::OrderBook::submit`]).

use crate::book_side::BookSide;
use crate::clock::Clock;
use crate::execution::Trade;
use crate::ids::IdSource;
use crate::types::Order;
use log::warn;

/// Matches `incoming` against `contra` and returns `(residual, trades)`.
///
/// Trades come back in execution order. The residual is the incoming order with its
/// quantity and status updated; it is left `Pending` if nothing traded. Nothing is
/// matched if `contra` is on the same side as `incoming` or if `incoming` fails
/// [`Order::check`].
pub fn match_order(
    mut incoming: Order,
    contra: &mut BookSide,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> (Order, Vec<Trade>) {
    let mut trades = Vec::new();
    if contra.side() != incoming.side.opposite() {
        warn!(
            "refusing same-side match order_id={} side={}",
            incoming.id, incoming.side
        );
        return (incoming, trades);
    }
    if let Err(e) = incoming.check() {
        warn!("refusing malformed order order_id={} reason={}", incoming.id, e);
        return (incoming, trades);
    }

    while incoming.quantity > 0 {
        let Some(resting) = contra.peek_front() else {
            break;
        };
        // Sides are priority-ordered, so nothing behind a non-crossing front can cross.
        if !incoming.side.crosses(incoming.price, resting.price) {
            break;
        }
        let fill_qty = incoming.quantity.min(resting.quantity);
        let Some(fill) = contra.reduce_front(fill_qty) else {
            break;
        };
        incoming.apply_fill(fill.quantity);
        trades.push(Trade {
            id: ids.next_trade_id(),
            maker_id: fill.resting_order_id,
            taker_id: incoming.id.clone(),
            price: fill.price,
            quantity: fill.quantity,
            taker_side: incoming.side,
            created_at: clock.now(),
        });
    }

    (incoming, trades)
}
