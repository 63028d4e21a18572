//! Runtime configuration, read from the environment.
//!
//! `PORT`, `MAX_QUANTITY`, `MAX_PRICE`, `PRICE_SCALE`. Missing or unparsable values fall
//! back to the defaults.

use rust_decimal::Decimal;

/// Bounds applied to every new-order command.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderLimits {
    pub max_quantity: u64,
    pub max_price: Decimal,
    /// Maximum number of decimal places a price may carry.
    pub price_scale: u32,
}

impl Default for OrderLimits {
    fn default() -> Self {
        Self {
            max_quantity: 999_999_999,
            max_price: Decimal::new(99_999_999_999, 2),
            price_scale: 8,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub port: u16,
    pub limits: OrderLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            limits: OrderLimits::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (used by [`EngineConfig::from_env`] and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);
        let max_quantity = lookup("MAX_QUANTITY")
            .and_then(|s| s.parse().ok())
            .filter(|q: &u64| *q > 0)
            .unwrap_or(defaults.limits.max_quantity);
        let max_price = lookup("MAX_PRICE")
            .and_then(|s| s.parse().ok())
            .filter(|p: &Decimal| *p > Decimal::ZERO)
            .unwrap_or(defaults.limits.max_price);
        let price_scale = lookup("PRICE_SCALE")
            .and_then(|s| s.parse().ok())
            .filter(|s: &u32| *s <= 28)
            .unwrap_or(defaults.limits.price_scale);
        Self {
            port,
            limits: OrderLimits {
                max_quantity,
                max_price,
                price_scale,
            },
        }
    }
}
