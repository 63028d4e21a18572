//! Core types and IDs for the order book.
//!
//! Identifiers are opaque string newtypes. [`Order`], [`Side`], and [`OrderStatus`] define a
//! limit order and its lifecycle; [`NewOrder`] is the raw command accepted at the boundary.

use crate::config::OrderLimits;
use crate::error::OrderError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Unique order identifier (opaque).
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

/// Unique trade identifier (opaque).
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TradeId(pub String);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Whether an incoming order on this side with `limit` can trade against a resting
    /// order priced at `resting`. Inclusive on both sides.
    pub fn crosses(self, limit: Decimal, resting: Decimal) -> bool {
        match self {
            Side::Buy => limit >= resting,
            Side::Sell => limit <= resting,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(OrderError::MissingSide),
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(OrderError::InvalidSide(other.to_string())),
        }
    }
}

/// Order lifecycle status.
///
/// `Cancelled` is part of the wire model but nothing in this crate produces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    PartiallyFilled,
    Filled,
    Cancelled,
}

/// A limit order, either incoming or resting on a book side.
///
/// `price` and `created_at` are fixed at creation; only `quantity` and `status` change,
/// and only through [`Order::apply_fill`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub quantity: u64,
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: u64,
}

impl Order {
    /// New order in `Pending` status.
    pub fn new(id: OrderId, side: Side, price: Decimal, quantity: u64, created_at: u64) -> Self {
        Self {
            id,
            side,
            quantity,
            price,
            status: OrderStatus::Pending,
            created_at,
        }
    }

    /// Applies one execution of up to `qty` units. Returns the quantity actually filled,
    /// which is capped at the open quantity.
    pub fn apply_fill(&mut self, qty: u64) -> u64 {
        let filled = qty.min(self.quantity);
        if filled == 0 {
            return 0;
        }
        self.quantity -= filled;
        self.status = if self.quantity == 0 {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        };
        filled
    }

    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Rejects an order that could never rest or trade: zero quantity or a price that is
    /// not strictly positive. The book and the matcher refuse such orders.
    pub fn check(&self) -> Result<(), OrderError> {
        if self.quantity == 0 {
            return Err(OrderError::InvalidQuantity {
                quantity: 0,
                max: u64::MAX,
            });
        }
        if self.price <= Decimal::ZERO {
            return Err(OrderError::InvalidPrice {
                price: self.price,
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}

/// New-order command as received from the transport, before validation.
///
/// `quantity` is signed so that zero and negative inputs can be reported rather than
/// failing to decode.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NewOrder {
    #[serde(default)]
    pub side: String,
    pub price: Decimal,
    pub quantity: i64,
}

impl NewOrder {
    pub fn new(side: impl Into<String>, price: Decimal, quantity: i64) -> Self {
        Self {
            side: side.into(),
            price,
            quantity,
        }
    }

    /// Every problem with this command, in the order quantity, price, side.
    pub fn violations(&self, limits: &OrderLimits) -> Vec<OrderError> {
        let mut out = Vec::new();
        if self.quantity <= 0 || self.quantity as u64 > limits.max_quantity {
            out.push(OrderError::InvalidQuantity {
                quantity: self.quantity,
                max: limits.max_quantity,
            });
        }
        if self.price <= Decimal::ZERO {
            out.push(OrderError::InvalidPrice {
                price: self.price,
                reason: "must be positive".into(),
            });
        } else if self.price > limits.max_price {
            out.push(OrderError::InvalidPrice {
                price: self.price,
                reason: format!("exceeds maximum {}", limits.max_price),
            });
        } else if self.price.normalize().scale() > limits.price_scale {
            out.push(OrderError::InvalidPrice {
                price: self.price,
                reason: format!("more than {} decimal places", limits.price_scale),
            });
        }
        if let Err(e) = self.side.parse::<Side>() {
            out.push(e);
        }
        out
    }

    /// Validates the command and returns its typed fields, or the first violation.
    pub fn validate(&self, limits: &OrderLimits) -> Result<(Side, Decimal, u64), OrderError> {
        if let Some(first) = self.violations(limits).into_iter().next() {
            return Err(first);
        }
        let side = self.side.parse::<Side>()?;
        Ok((side, self.price.normalize(), self.quantity as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> OrderLimits {
        OrderLimits::default()
    }

    #[test]
    fn side_parses_lowercase_only() {
        assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("sell".parse::<Side>().unwrap(), Side::Sell);
        assert_eq!(
            "BUY".parse::<Side>().unwrap_err(),
            OrderError::InvalidSide("BUY".into())
        );
        assert_eq!("".parse::<Side>().unwrap_err(), OrderError::MissingSide);
    }

    #[test]
    fn crosses_is_inclusive() {
        let p = Decimal::from(100);
        assert!(Side::Buy.crosses(p, p));
        assert!(Side::Sell.crosses(p, p));
        assert!(Side::Buy.crosses(Decimal::from(101), p));
        assert!(!Side::Buy.crosses(Decimal::from(99), p));
        assert!(Side::Sell.crosses(Decimal::from(99), p));
        assert!(!Side::Sell.crosses(Decimal::from(101), p));
    }

    #[test]
    fn apply_fill_advances_status() {
        let mut o = Order::new(OrderId("o1".into()), Side::Buy, Decimal::from(10), 5, 1);
        assert_eq!(o.apply_fill(2), 2);
        assert_eq!(o.quantity, 3);
        assert_eq!(o.status, OrderStatus::PartiallyFilled);
        assert_eq!(o.apply_fill(10), 3);
        assert_eq!(o.quantity, 0);
        assert_eq!(o.status, OrderStatus::Filled);
        assert_eq!(o.apply_fill(1), 0);
        assert_eq!(o.status, OrderStatus::Filled);
    }

    #[test]
    fn apply_zero_fill_keeps_pending() {
        let mut o = Order::new(OrderId("o1".into()), Side::Sell, Decimal::from(10), 5, 1);
        assert_eq!(o.apply_fill(0), 0);
        assert_eq!(o.status, OrderStatus::Pending);
    }

    #[test]
    fn validate_accepts_well_formed_command() {
        let cmd = NewOrder::new("sell", "100.50".parse().unwrap(), 50);
        let (side, price, qty) = cmd.validate(&limits()).unwrap();
        assert_eq!(side, Side::Sell);
        assert_eq!(price, "100.5".parse::<Decimal>().unwrap());
        assert_eq!(qty, 50);
    }

    #[test]
    fn validate_rejects_non_positive_quantity() {
        for q in [0, -5] {
            let err = NewOrder::new("buy", Decimal::from(100), q)
                .validate(&limits())
                .unwrap_err();
            assert!(matches!(err, OrderError::InvalidQuantity { .. }));
        }
    }

    #[test]
    fn validate_rejects_excessive_quantity() {
        let err = NewOrder::new("buy", Decimal::from(100), 1_000_000_000)
            .validate(&limits())
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity { .. }));
    }

    #[test]
    fn validate_rejects_bad_prices() {
        for price in ["0", "-1", "1000000000", "10.000000001"] {
            let err = NewOrder::new("buy", price.parse().unwrap(), 1)
                .validate(&limits())
                .unwrap_err();
            assert!(matches!(err, OrderError::InvalidPrice { .. }), "{}", price);
        }
    }

    #[test]
    fn sub_cent_prices_are_accepted_by_default() {
        for price in ["100.0001", "100.0002", "0.00000001"] {
            let cmd = NewOrder::new("buy", price.parse().unwrap(), 1);
            assert!(cmd.validate(&limits()).is_ok(), "{}", price);
        }
    }

    #[test]
    fn empty_side_is_reported_as_missing() {
        let v = NewOrder::new("", Decimal::from(10), 1).violations(&limits());
        assert_eq!(v, vec![OrderError::MissingSide]);
    }

    #[test]
    fn check_refuses_orders_that_cannot_rest() {
        let ok = Order::new(OrderId("o1".into()), Side::Buy, Decimal::from(10), 1, 1);
        assert!(ok.check().is_ok());
        let zero_qty = Order { quantity: 0, ..ok.clone() };
        assert!(matches!(
            zero_qty.check(),
            Err(OrderError::InvalidQuantity { quantity: 0, .. })
        ));
        for price in [Decimal::ZERO, Decimal::from(-3)] {
            let bad = Order { price, ..ok.clone() };
            assert!(matches!(bad.check(), Err(OrderError::InvalidPrice { .. })));
        }
    }

    #[test]
    fn trailing_zeros_do_not_count_against_scale() {
        let cmd = NewOrder::new("buy", "10.5000".parse().unwrap(), 1);
        assert!(cmd.validate(&limits()).is_ok());
    }

    #[test]
    fn violations_lists_every_problem() {
        let cmd = NewOrder::new("hold", Decimal::ZERO, 0);
        let v = cmd.violations(&limits());
        assert_eq!(v.len(), 3);
        assert!(matches!(v[0], OrderError::InvalidQuantity { .. }));
        assert!(matches!(v[1], OrderError::InvalidPrice { .. }));
        assert_eq!(v[2], OrderError::InvalidSide("hold".into()));
    }
}
