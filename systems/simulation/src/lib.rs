#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic logistic growth simulation driven by a Park–Miller stream.
//!
//! Every state starts at its baseline and grows towards a carrying capacity of
//! twice that baseline, perturbed by one uniform draw per year. All states share
//! a single random stream: states are processed in baseline order and, within a
//! state, years in increasing order. [`draw_index`] spells out which draw feeds
//! which update so callers never depend on incidental iteration order.

pub mod rng;

use choropleth_core::{round_to_hundredths, Baseline, Horizon, Simulation, StateSeries};

pub use rng::ParkMiller;

/// Growth rate applied to every state.
pub const GROWTH_RATE: f64 = 0.05;

/// Ratio between a state's carrying capacity and its baseline.
pub const CAPACITY_FACTOR: f64 = 2.0;

/// Tuning knobs of the logistic update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthTuning {
    /// Per-year growth rate `r`; higher values pull states towards capacity faster.
    pub rate: f64,
    /// Carrying capacity `K` expressed as a multiple of the baseline.
    pub capacity_factor: f64,
}

impl Default for GrowthTuning {
    fn default() -> Self {
        Self {
            rate: GROWTH_RATE,
            capacity_factor: CAPACITY_FACTOR,
        }
    }
}

/// Pure system that turns baselines into per-year series.
#[derive(Clone, Debug, Default)]
pub struct LogisticGrowth {
    tuning: GrowthTuning,
}

impl LogisticGrowth {
    /// Creates a simulator with the provided tuning.
    #[must_use]
    pub fn new(tuning: GrowthTuning) -> Self {
        Self { tuning }
    }

    /// Simulates every baseline across the horizon, drawing from `rng`.
    ///
    /// Exactly `horizon.steps()` values are drawn per state, in baseline order.
    /// The year-0 value is the baseline itself; later values are rounded to two
    /// decimals while the carried state keeps full precision.
    pub fn simulate(
        &self,
        baselines: &[Baseline],
        horizon: Horizon,
        rng: &mut ParkMiller,
    ) -> Simulation {
        let years = horizon.years().collect();
        let series = baselines
            .iter()
            .map(|baseline| StateSeries {
                state: baseline.state.clone(),
                values: self.simulate_state(baseline.value, horizon, rng),
            })
            .collect();

        Simulation::new(years, series)
    }

    fn simulate_state(&self, baseline: f64, horizon: Horizon, rng: &mut ParkMiller) -> Vec<f64> {
        let mut values = Vec::with_capacity(horizon.num_years());
        if horizon.num_years() == 0 {
            return values;
        }

        let capacity = baseline * self.tuning.capacity_factor;
        let mut current = baseline;
        values.push(current);

        for _ in 0..horizon.steps() {
            let draw = rng.next_unit();
            current = self.advance(current, capacity, draw);
            values.push(round_to_hundredths(current));
        }

        values
    }

    fn advance(&self, current: f64, capacity: f64, draw: f64) -> f64 {
        // A zero capacity leaves the logistic term undefined; the state stays empty.
        if capacity == 0.0 {
            return 0.0;
        }

        let rate = self.tuning.rate;
        let next = current + rate * current * (1.0 - current / capacity) + (draw - 0.5);
        next.max(0.0)
    }
}

/// Simulates the baselines with the default tuning and a fresh stream for `seed`.
#[must_use]
pub fn simulate(baselines: &[Baseline], horizon: Horizon, seed: i64) -> Simulation {
    let mut rng = ParkMiller::new(seed);
    LogisticGrowth::default().simulate(baselines, horizon, &mut rng)
}

/// Zero-based index of the draw consumed when updating `entity` at year offset `step`.
///
/// Returns `None` for the baseline year and for offsets beyond the horizon,
/// neither of which consumes a draw.
#[must_use]
pub fn draw_index(entity: usize, step: usize, horizon: Horizon) -> Option<usize> {
    if step == 0 || step >= horizon.num_years() {
        return None;
    }

    entity
        .checked_mul(horizon.steps())?
        .checked_add(step - 1)
}
