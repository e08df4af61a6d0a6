#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Immutable session dataset for the choropleth map.
//!
//! An [`Atlas`] is built once from an [`AtlasConfig`]: the growth simulation
//! runs over every baseline, ratios are derived against the reference table,
//! and the result is frozen for the rest of the session. Adapters read it
//! exclusively through the [`query`] module.

mod config;
mod defaults;

use choropleth_core::{Horizon, RatioSeries, ReferenceTable, Region, StateSeries};
use choropleth_system_ratio::derive_ratio;
use choropleth_system_simulation::simulate;
use tracing::{debug, info};

pub use config::{AtlasConfig, ConfigError, Table};

/// Years, simulated series, derived ratios and static tables of one session.
#[derive(Clone, Debug, PartialEq)]
pub struct Atlas {
    horizon: Horizon,
    years: Vec<i32>,
    counts: Vec<StateSeries>,
    ratios: Vec<RatioSeries>,
    references: ReferenceTable,
    regions: Vec<Region>,
}

impl Atlas {
    /// Validates the configuration and computes every dataset.
    pub fn build(config: &AtlasConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let horizon = config.horizon();
        let simulation = simulate(&config.baselines, horizon, config.random_seed);
        let (years, counts) = simulation.into_parts();
        debug!(
            states = counts.len(),
            draws = counts.len() * horizon.steps(),
            "simulated logistic growth"
        );

        let references = ReferenceTable::from_entries(config.references.clone());
        let ratios = derive_ratio(&counts, &references);
        let undefined = ratios
            .iter()
            .filter(|ratio| ratio.values.iter().all(Option::is_none))
            .count();
        debug!(states = ratios.len(), undefined, "derived ratios");

        info!(
            start_year = horizon.start_year(),
            num_years = horizon.num_years(),
            seed = config.random_seed,
            states = counts.len(),
            regions = config.regions.len(),
            "atlas ready"
        );

        Ok(Self {
            horizon,
            years,
            counts,
            ratios,
            references,
            regions: config.regions.clone(),
        })
    }
}

/// Query functions that provide read-only access to the atlas.
pub mod query {
    use choropleth_core::{
        DisplayMode, Fips, Horizon, RatioSeries, ReferenceTable, Region, StateCode, StateSeries,
    };

    use super::Atlas;

    /// Value displayed for a single state.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Sample<'a> {
        /// State the value belongs to.
        pub state: &'a StateCode,
        /// Displayed value; `None` when undefined.
        pub value: Option<f64>,
    }

    /// Simulated time span.
    #[must_use]
    pub fn horizon(atlas: &Atlas) -> Horizon {
        atlas.horizon
    }

    /// Calendar years covered by the atlas.
    #[must_use]
    pub fn years(atlas: &Atlas) -> &[i32] {
        &atlas.years
    }

    /// Simulated series in baseline order.
    #[must_use]
    pub fn counts(atlas: &Atlas) -> &[StateSeries] {
        &atlas.counts
    }

    /// Derived ratio series in baseline order.
    #[must_use]
    pub fn ratios(atlas: &Atlas) -> &[RatioSeries] {
        &atlas.ratios
    }

    /// Static reference counts in configuration order.
    #[must_use]
    pub fn references(atlas: &Atlas) -> &ReferenceTable {
        &atlas.references
    }

    /// State to map-region mapping.
    #[must_use]
    pub fn regions(atlas: &Atlas) -> &[Region] {
        &atlas.regions
    }

    /// Region identifier of the state, if mapped.
    #[must_use]
    pub fn fips_for<'a>(atlas: &'a Atlas, state: &StateCode) -> Option<&'a Fips> {
        atlas
            .regions
            .iter()
            .find(|region| &region.state == state)
            .map(|region| &region.fips)
    }

    /// State drawn by the region, if mapped.
    #[must_use]
    pub fn state_for<'a>(atlas: &'a Atlas, fips: &Fips) -> Option<&'a StateCode> {
        atlas
            .regions
            .iter()
            .find(|region| &region.fips == fips)
            .map(|region| &region.state)
    }

    /// Values displayed for the mode at the year offset, in dataset order.
    ///
    /// Reference counts are static and ignore the year offset.
    #[must_use]
    pub fn samples(atlas: &Atlas, mode: DisplayMode, year_index: usize) -> Vec<Sample<'_>> {
        match mode {
            DisplayMode::Count => atlas
                .counts
                .iter()
                .map(|series| Sample {
                    state: &series.state,
                    value: series.value_at(year_index),
                })
                .collect(),
            DisplayMode::Ratio => atlas
                .ratios
                .iter()
                .map(|series| Sample {
                    state: &series.state,
                    value: series.value_at(year_index),
                })
                .collect(),
            DisplayMode::Reference => atlas
                .references
                .iter()
                .map(|entry| Sample {
                    state: &entry.state,
                    value: Some(f64::from(entry.count)),
                })
                .collect(),
        }
    }

    /// Value displayed for a single state, if the state belongs to the mode's dataset.
    #[must_use]
    pub fn value(
        atlas: &Atlas,
        mode: DisplayMode,
        state: &StateCode,
        year_index: usize,
    ) -> Option<f64> {
        samples(atlas, mode, year_index)
            .into_iter()
            .find(|sample| sample.state == state)
            .and_then(|sample| sample.value)
    }

    /// Every defined value of the mode's dataset across the whole horizon.
    #[must_use]
    pub fn defined_values(atlas: &Atlas, mode: DisplayMode) -> Vec<f64> {
        match mode {
            DisplayMode::Count => atlas
                .counts
                .iter()
                .flat_map(|series| series.values.iter().copied())
                .collect(),
            DisplayMode::Ratio => atlas
                .ratios
                .iter()
                .flat_map(|series| series.values.iter().copied().flatten())
                .collect(),
            DisplayMode::Reference => atlas
                .references
                .iter()
                .map(|entry| f64::from(entry.count))
                .collect(),
        }
    }
}
