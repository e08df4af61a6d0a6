use std::collections::HashSet;

use choropleth_core::{
    Baseline, Fips, Horizon, ReferenceCount, Region, StateCode, DEFAULT_NUM_YEARS,
    DEFAULT_RANDOM_SEED, DEFAULT_START_YEAR,
};
use serde::Deserialize;
use thiserror::Error;

use crate::defaults;

/// Constants consumed when building an [`Atlas`](crate::Atlas).
///
/// Every field falls back to the bundled dataset, so an empty document
/// reproduces the default session. Tables are ordered lists; baseline order
/// fixes the order in which states draw from the random stream.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtlasConfig {
    /// First simulated year.
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    /// Number of simulated years.
    #[serde(default = "default_num_years")]
    pub num_years: usize,
    /// Seed of the Park–Miller stream.
    #[serde(default = "default_random_seed")]
    pub random_seed: i64,
    /// Starting values, in simulation order.
    #[serde(default = "defaults::baselines", rename = "baseline")]
    pub baselines: Vec<Baseline>,
    /// Ratio denominators; may name states without a baseline.
    #[serde(default = "defaults::references", rename = "reference")]
    pub references: Vec<ReferenceCount>,
    /// State to map-region mapping used by renderers.
    #[serde(default = "defaults::regions", rename = "region")]
    pub regions: Vec<Region>,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            num_years: DEFAULT_NUM_YEARS,
            random_seed: DEFAULT_RANDOM_SEED,
            baselines: defaults::baselines(),
            references: defaults::references(),
            regions: defaults::regions(),
        }
    }
}

fn default_start_year() -> i32 {
    DEFAULT_START_YEAR
}

fn default_num_years() -> usize {
    DEFAULT_NUM_YEARS
}

fn default_random_seed() -> i64 {
    DEFAULT_RANDOM_SEED
}

impl AtlasConfig {
    /// Simulated time span described by the configuration.
    #[must_use]
    pub const fn horizon(&self) -> Horizon {
        Horizon::new(self.start_year, self.num_years)
    }

    /// Checks the tables for duplicates, empty identifiers and invalid baselines.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for baseline in &self.baselines {
            check_state(&baseline.state, Table::Baseline, &mut seen)?;
            if !baseline.value.is_finite() || baseline.value < 0.0 {
                return Err(ConfigError::InvalidBaseline {
                    state: baseline.state.clone(),
                    value: baseline.value,
                });
            }
        }

        seen.clear();
        for reference in &self.references {
            check_state(&reference.state, Table::Reference, &mut seen)?;
        }

        seen.clear();
        let mut seen_fips: HashSet<&Fips> = HashSet::new();
        for region in &self.regions {
            check_state(&region.state, Table::Region, &mut seen)?;
            if !seen_fips.insert(&region.fips) {
                return Err(ConfigError::DuplicateFips {
                    fips: region.fips.clone(),
                });
            }
        }

        Ok(())
    }
}

fn check_state<'a>(
    state: &'a StateCode,
    table: Table,
    seen: &mut HashSet<&'a StateCode>,
) -> Result<(), ConfigError> {
    if state.as_str().trim().is_empty() {
        return Err(ConfigError::EmptyState { table });
    }
    if !seen.insert(state) {
        return Err(ConfigError::DuplicateState {
            table,
            state: state.clone(),
        });
    }
    Ok(())
}

/// Configuration table an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    /// `[[baseline]]` entries.
    Baseline,
    /// `[[reference]]` entries.
    Reference,
    /// `[[region]]` entries.
    Region,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Baseline => "baseline",
            Self::Reference => "reference",
            Self::Region => "region",
        })
    }
}

/// Reasons a configuration may be rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A table entry has an empty state code.
    #[error("{table} table contains an empty state code")]
    EmptyState {
        /// Table holding the entry.
        table: Table,
    },
    /// A state appears twice in the same table.
    #[error("{table} table lists state {state} more than once")]
    DuplicateState {
        /// Table holding the entries.
        table: Table,
        /// Repeated state.
        state: StateCode,
    },
    /// Two regions share the same FIPS code.
    #[error("region table maps FIPS code {fips} more than once")]
    DuplicateFips {
        /// Repeated identifier.
        fips: Fips,
    },
    /// A baseline is negative, NaN or infinite.
    #[error("baseline for {state} must be a non-negative finite number (found {value})")]
    InvalidBaseline {
        /// State carrying the baseline.
        state: StateCode,
        /// Offending value.
        value: f64,
    },
}
