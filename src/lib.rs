//! # Limit Order Engine
//!
//! Single-instrument limit order book with price-time priority matching: incoming orders
//! trade against the best resting opposite orders at the resting (maker) price, and any
//! remainder rests on the book.
//!
//! ## Entry point
//!
//! Use [`Engine`] to validate and submit commands, or [`SharedEngine`] to share one engine
//! across threads with every operation serialized behind a single lock.
//!
//! ## Example
//!
//! ```rust
//! use limit_order_engine::{Engine, NewOrder, OrderLimits, OrderStatus};
//! use rust_decimal::Decimal;
//!
//! let mut engine = Engine::new(OrderLimits::default());
//! let sell = engine.submit(&NewOrder::new("sell", Decimal::from(100), 50)).unwrap();
//! assert!(sell.trades.is_empty());
//!
//! let buy = engine.submit(&NewOrder::new("buy", Decimal::from(105), 20)).unwrap();
//! assert_eq!(buy.status, OrderStatus::Filled);
//! assert_eq!(buy.trades[0].price, Decimal::from(100));
//! assert_eq!(engine.snapshot_book().asks[0].quantity, 30);
//! ```
//!
//! ## Lower-level API
//!
//! [`OrderBook`], [`BookSide`], and [`match_order`] can be driven directly given an
//! [`IdSource`] and a [`Clock`]. They refuse orders failing [`Order::check`] but apply no
//! configured bounds; [`Engine::submit`] is the entry point that validates raw commands.

pub mod api;
pub mod book_side;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod execution;
pub mod ids;
pub mod market_data_gen;
pub mod matching;
pub mod order_book;
pub mod types;

pub use book_side::{BookSide, Fill, LevelSummary};
pub use clock::{Clock, LogicalClock, SystemClock};
pub use config::{EngineConfig, OrderLimits};
pub use engine::{Engine, SharedEngine, SubmitOutcome};
pub use error::OrderError;
pub use execution::Trade;
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use market_data_gen::{replay_into_engine, Generator, GeneratorConfig};
pub use matching::match_order;
pub use order_book::{BookSnapshot, OrderBook};
pub use types::{NewOrder, Order, OrderId, OrderStatus, Side, TradeId};
