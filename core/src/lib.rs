#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the choropleth workspace.
//!
//! This crate defines the data surface that connects configuration, the
//! immutable atlas, the pure systems and the rendering adapters. Systems
//! consume [`Baseline`] lists and [`ReferenceTable`] values, emit
//! [`Simulation`] and [`RatioSeries`] values, and adapters turn those into
//! [`Color`] fills according to an immutable [`ViewState`].

mod color;
mod rounding;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use color::Color;
pub use rounding::round_to_hundredths;

/// First simulated year of the bundled dataset.
pub const DEFAULT_START_YEAR: i32 = 1959;

/// Number of simulated years in the bundled dataset.
pub const DEFAULT_NUM_YEARS: usize = 80;

/// Seed fed to the random number generator for the bundled dataset.
pub const DEFAULT_RANDOM_SEED: i64 = 42;

/// Short identifier of a simulated entity, usually a state abbreviation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateCode(String);

impl StateCode {
    /// Creates a new state code from the provided identifier.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Retrieves the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// External region identifier used by map artwork, e.g. `"01"` for Alabama.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fips(String);

impl Fips {
    /// Creates a new FIPS identifier.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Retrieves the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Starting value of the growth simulation for a single state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// State the baseline belongs to.
    pub state: StateCode,
    /// Non-negative value emitted for the first simulated year.
    pub value: f64,
}

impl Baseline {
    /// Creates a new baseline entry.
    #[must_use]
    pub fn new(state: StateCode, value: f64) -> Self {
        Self { state, value }
    }
}

/// Static per-state count used as the ratio denominator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCount {
    /// State the count belongs to.
    pub state: StateCode,
    /// Number of reference items recorded for the state.
    pub count: u32,
}

impl ReferenceCount {
    /// Creates a new reference count entry.
    #[must_use]
    pub fn new(state: StateCode, count: u32) -> Self {
        Self { state, count }
    }
}

/// Association between a state and the region identifier used by map artwork.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// State drawn by the region.
    pub state: StateCode,
    /// Identifier of the region within the map artwork.
    pub fips: Fips,
}

impl Region {
    /// Creates a new region mapping.
    #[must_use]
    pub fn new(state: StateCode, fips: Fips) -> Self {
        Self { state, fips }
    }
}

/// Ordered lookup table of reference counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: Vec<ReferenceCount>,
}

impl ReferenceTable {
    /// Creates a table preserving the order of the provided entries.
    #[must_use]
    pub fn from_entries(entries: Vec<ReferenceCount>) -> Self {
        Self { entries }
    }

    /// Returns the count recorded for the state, if any.
    #[must_use]
    pub fn get(&self, state: &StateCode) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| &entry.state == state)
            .map(|entry| entry.count)
    }

    /// Iterator over the entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceCount> {
        self.entries.iter()
    }

    /// Number of states recorded in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Simulated time span expressed as a start year and a number of years.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Horizon {
    start_year: i32,
    num_years: usize,
}

impl Horizon {
    /// Creates a new horizon.
    #[must_use]
    pub const fn new(start_year: i32, num_years: usize) -> Self {
        Self {
            start_year,
            num_years,
        }
    }

    /// First simulated year.
    #[must_use]
    pub const fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Number of simulated years, including the baseline year.
    #[must_use]
    pub const fn num_years(&self) -> usize {
        self.num_years
    }

    /// Number of noisy update steps, one fewer than the number of years.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.num_years.saturating_sub(1)
    }

    /// Iterator over every simulated year in increasing order.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        let start = self.start_year;
        (0..self.num_years).map(move |offset| start.saturating_add(offset as i32))
    }

    /// Calendar year at the provided offset, if it lies within the horizon.
    #[must_use]
    pub fn year_at(&self, index: usize) -> Option<i32> {
        if index < self.num_years {
            Some(self.start_year.saturating_add(index as i32))
        } else {
            None
        }
    }

    /// Offset of the provided calendar year, if it lies within the horizon.
    #[must_use]
    pub fn index_of(&self, year: i32) -> Option<usize> {
        let offset = usize::try_from(year.checked_sub(self.start_year)?).ok()?;
        (offset < self.num_years).then_some(offset)
    }
}

/// Simulated values for a single state, one per year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSeries {
    /// State the series belongs to.
    pub state: StateCode,
    /// Values indexed by year offset.
    pub values: Vec<f64>,
}

impl StateSeries {
    /// Value recorded at the provided year offset.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// Derived ratio values for a single state; `None` marks an undefined ratio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatioSeries {
    /// State the series belongs to.
    pub state: StateCode,
    /// Ratios indexed by year offset.
    pub values: Vec<Option<f64>>,
}

impl RatioSeries {
    /// Ratio recorded at the provided year offset, if defined.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }
}

/// Output of the growth simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    years: Vec<i32>,
    series: Vec<StateSeries>,
}

impl Simulation {
    /// Creates a simulation result from its years and per-state series.
    #[must_use]
    pub fn new(years: Vec<i32>, series: Vec<StateSeries>) -> Self {
        Self { years, series }
    }

    /// Calendar years covered by the simulation.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Per-state series in simulation order.
    #[must_use]
    pub fn series(&self) -> &[StateSeries] {
        &self.series
    }

    /// Series simulated for the provided state, if any.
    #[must_use]
    pub fn series_for(&self, state: &StateCode) -> Option<&StateSeries> {
        self.series.iter().find(|series| &series.state == state)
    }

    /// Consumes the simulation, yielding years and series.
    #[must_use]
    pub fn into_parts(self) -> (Vec<i32>, Vec<StateSeries>) {
        (self.years, self.series)
    }
}

/// Dataset shown on the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Raw simulated values.
    #[default]
    Count,
    /// Simulated values divided by the reference count.
    Ratio,
    /// Static reference counts, identical for every year.
    Reference,
}

impl DisplayMode {
    /// Human readable label of the mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Ratio => "ratio",
            Self::Reference => "reference",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strategy used to turn values into fill colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScale {
    /// Fixed threshold bins.
    #[default]
    Binned,
    /// Green to red hue interpolated across the dataset's value range.
    Continuous,
}

impl ColorScale {
    /// Human readable label of the scale.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Binned => "binned",
            Self::Continuous => "continuous",
        }
    }
}

impl fmt::Display for ColorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable description of what the map currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewState {
    mode: DisplayMode,
    year_index: usize,
    scale: ColorScale,
}

impl ViewState {
    /// Creates a new view state.
    #[must_use]
    pub const fn new(mode: DisplayMode, year_index: usize, scale: ColorScale) -> Self {
        Self {
            mode,
            year_index,
            scale,
        }
    }

    /// Dataset shown on the map.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Offset of the displayed year within the horizon.
    #[must_use]
    pub const fn year_index(&self) -> usize {
        self.year_index
    }

    /// Color scale applied to the displayed values.
    #[must_use]
    pub const fn scale(&self) -> ColorScale {
        self.scale
    }

    /// Returns a copy showing the provided dataset.
    #[must_use]
    pub const fn with_mode(self, mode: DisplayMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy showing the provided year offset.
    #[must_use]
    pub const fn with_year_index(self, year_index: usize) -> Self {
        Self { year_index, ..self }
    }

    /// Returns a copy using the provided color scale.
    #[must_use]
    pub const fn with_scale(self, scale: ColorScale) -> Self {
        Self { scale, ..self }
    }
}
