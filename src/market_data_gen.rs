//! Synthetic order-flow generator.
//!
//! Deterministic, configurable stream of [`NewOrder`] commands for replay tests, property
//! tests, and benchmarks. Same seed ⇒ same sequence of commands.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::engine::{Engine, SubmitOutcome};
use crate::error::OrderError;
use crate::types::NewOrder;

/// Configuration for the synthetic order generator.
/// All ranges are inclusive. Same config + seed produces the same stream.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// RNG seed. Same seed ⇒ same order stream.
    pub seed: u64,
    /// Number of commands produced by [`Generator::all_orders`].
    pub num_orders: usize,
    /// Probability of a buy (0.0..=1.0). Sell otherwise.
    pub buy_ratio: f64,
    /// Price range in ticks (inclusive).
    pub price_min_ticks: i64,
    pub price_max_ticks: i64,
    /// Decimal places of one tick: 2 means ticks are hundredths.
    pub tick_scale: u32,
    /// Quantity range (inclusive), whole units.
    pub quantity_min: i64,
    pub quantity_max: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_orders: 1000,
            buy_ratio: 0.5,
            price_min_ticks: 9_500,
            price_max_ticks: 10_500,
            tick_scale: 2,
            quantity_min: 1,
            quantity_max: 100,
        }
    }
}

/// Deterministic command stream. Create with [`Generator::new`].
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { rng, config }
    }

    /// Generates the next command. Advances the RNG.
    pub fn next_order(&mut self) -> NewOrder {
        let side = if self.rng.gen::<f64>() < self.config.buy_ratio {
            "buy"
        } else {
            "sell"
        };
        let ticks = self
            .rng
            .gen_range(self.config.price_min_ticks..=self.config.price_max_ticks);
        let quantity = self
            .rng
            .gen_range(self.config.quantity_min..=self.config.quantity_max);
        NewOrder::new(side, Decimal::new(ticks, self.config.tick_scale), quantity)
    }

    pub fn take_orders(&mut self, n: usize) -> Vec<NewOrder> {
        (0..n).map(|_| self.next_order()).collect()
    }

    /// Returns the full stream of commands as defined by `config.num_orders`.
    pub fn all_orders(&mut self) -> Vec<NewOrder> {
        self.take_orders(self.config.num_orders)
    }
}

/// Replays commands into the engine. Returns every outcome in submission order, or the
/// first rejection.
pub fn replay_into_engine(
    engine: &mut Engine,
    orders: impl IntoIterator<Item = NewOrder>,
) -> Result<Vec<SubmitOutcome>, OrderError> {
    orders.into_iter().map(|cmd| engine.submit(&cmd)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderLimits;

    #[test]
    fn same_seed_same_stream() {
        let c = GeneratorConfig {
            seed: 42,
            num_orders: 10,
            ..Default::default()
        };
        let orders1 = Generator::new(c.clone()).all_orders();
        let orders2 = Generator::new(c).all_orders();
        assert_eq!(orders1.len(), 10);
        assert_eq!(orders1, orders2);
    }

    #[test]
    fn different_seed_different_stream() {
        let o1 = Generator::new(GeneratorConfig {
            seed: 1,
            num_orders: 5,
            ..Default::default()
        })
        .all_orders();
        let o2 = Generator::new(GeneratorConfig {
            seed: 2,
            num_orders: 5,
            ..Default::default()
        })
        .all_orders();
        assert_ne!(o1, o2, "different seeds should produce different order content");
    }

    #[test]
    fn generated_commands_pass_default_validation() {
        let limits = OrderLimits::default();
        for cmd in Generator::new(GeneratorConfig::default()).all_orders() {
            assert!(cmd.validate(&limits).is_ok(), "{:?}", cmd);
        }
    }

    #[test]
    fn replay_into_engine_succeeds() {
        let mut engine = Engine::new(OrderLimits::default());
        let orders = Generator::new(GeneratorConfig {
            seed: 123,
            num_orders: 20,
            ..Default::default()
        })
        .all_orders();
        let outcomes = replay_into_engine(&mut engine, orders).unwrap();
        assert_eq!(outcomes.len(), 20);
        let traded: usize = outcomes.iter().map(|o| o.trades.len()).sum();
        assert_eq!(traded, engine.list_trades().len());
    }
}
