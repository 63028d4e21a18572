//! Rejections raised at the engine boundary.
//!
//! Every variant is detected before the book is touched, so a rejected command leaves
//! book state unchanged. Matching itself cannot fail once an order is well formed.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("side is required and cannot be empty")]
    MissingSide,

    #[error("side must be either 'buy' or 'sell' (received: '{0}')")]
    InvalidSide(String),

    #[error("quantity must be between 1 and {max} (received: {quantity})")]
    InvalidQuantity { quantity: i64, max: u64 },

    #[error("invalid price {price}: {reason}")]
    InvalidPrice { price: Decimal, reason: String },
}
