#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Value-to-color quantization for choropleth fills.
//!
//! The binned quantizer walks an ordered table of inclusive upper bounds and
//! picks the first bin whose bound is not exceeded. Missing, NaN and zero
//! values share a dedicated no-data color; values above the last bound fall
//! into an overflow color. The [`continuous`] module offers a hue ramp for
//! scales that are not keyed to fixed thresholds.

pub mod continuous;

use choropleth_core::Color;
use thiserror::Error;

pub use continuous::{color_for_value, ContinuousScale, NEUTRAL_COLOR};

/// Fill used for missing, NaN and zero values.
pub const NO_DATA_COLOR: Color = Color::from_rgb(0xd3, 0xd3, 0xd3);

/// Fill used for values above the last bound of the default table.
pub const OVERFLOW_COLOR: Color = Color::from_rgb(0x4b, 0x00, 0x00);

/// Inclusive upper bound paired with the color drawn for values up to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBin {
    /// Largest value that still falls into the bin.
    pub upper: f64,
    /// Fill drawn for values in the bin.
    pub color: Color,
}

impl ColorBin {
    /// Creates a new bin.
    #[must_use]
    pub const fn new(upper: f64, color: Color) -> Self {
        Self { upper, color }
    }
}

/// Default thresholds: steps of 0.2 up to 5.0, then 6.0 and steps of 2.0 up to 18.0.
pub const DEFAULT_BINS: [ColorBin; 32] = [
    ColorBin::new(0.2, Color::from_rgb(0xf9, 0xfe, 0xff)),
    ColorBin::new(0.4, Color::from_rgb(0xcc, 0xec, 0xe6)),
    ColorBin::new(0.6, Color::from_rgb(0xca, 0xfd, 0xf1)),
    ColorBin::new(0.8, Color::from_rgb(0xb6, 0xfc, 0xe6)),
    ColorBin::new(1.0, Color::from_rgb(0x71, 0xe4, 0xa8)),
    ColorBin::new(1.2, Color::from_rgb(0x5e, 0xe3, 0xa3)),
    ColorBin::new(1.4, Color::from_rgb(0x46, 0xe7, 0xa1)),
    ColorBin::new(1.6, Color::from_rgb(0x32, 0xed, 0x93)),
    ColorBin::new(1.8, Color::from_rgb(0x27, 0xf9, 0x6d)),
    ColorBin::new(2.0, Color::from_rgb(0x1c, 0xff, 0x5a)),
    ColorBin::new(2.2, Color::from_rgb(0x42, 0xff, 0x3b)),
    ColorBin::new(2.4, Color::from_rgb(0x7d, 0xff, 0x29)),
    ColorBin::new(2.6, Color::from_rgb(0xc3, 0xfd, 0x22)),
    ColorBin::new(2.8, Color::from_rgb(0xe8, 0xfe, 0x1a)),
    ColorBin::new(3.0, Color::from_rgb(0xee, 0xff, 0x33)),
    ColorBin::new(3.2, Color::from_rgb(0xff, 0xec, 0x3d)),
    ColorBin::new(3.4, Color::from_rgb(0xff, 0xe0, 0x33)),
    ColorBin::new(3.6, Color::from_rgb(0xff, 0xd7, 0x26)),
    ColorBin::new(3.8, Color::from_rgb(0xff, 0xcd, 0x1a)),
    ColorBin::new(4.0, Color::from_rgb(0xff, 0xf0, 0x17)),
    ColorBin::new(4.2, Color::from_rgb(0xff, 0xdf, 0x00)),
    ColorBin::new(4.4, Color::from_rgb(0xff, 0xcc, 0x00)),
    ColorBin::new(4.6, Color::from_rgb(0xff, 0xb7, 0x00)),
    ColorBin::new(4.8, Color::from_rgb(0xff, 0xa2, 0x00)),
    ColorBin::new(5.0, Color::from_rgb(0xff, 0x8c, 0x00)),
    ColorBin::new(6.0, Color::from_rgb(0xff, 0x6a, 0x00)),
    ColorBin::new(8.0, Color::from_rgb(0xff, 0x48, 0x00)),
    ColorBin::new(10.0, Color::from_rgb(0xff, 0x25, 0x00)),
    ColorBin::new(12.0, Color::from_rgb(0xff, 0x00, 0x00)),
    ColorBin::new(14.0, Color::from_rgb(0xd1, 0x00, 0x00)),
    ColorBin::new(16.0, Color::from_rgb(0xa8, 0x00, 0x00)),
    ColorBin::new(18.0, Color::from_rgb(0x7f, 0x00, 0x00)),
];

/// Bin selected for a value. Ordering follows magnitude: no-data first, overflow last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bin {
    /// Missing, NaN or zero value.
    NoData,
    /// Zero-based index into the bin table.
    Index(usize),
    /// Value above the last bound.
    Overflow,
}

/// Validated, ordered table of color bins.
#[derive(Clone, Debug, PartialEq)]
pub struct BinTable {
    bins: Vec<ColorBin>,
    no_data: Color,
    overflow: Color,
}

impl Default for BinTable {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS.to_vec(),
            no_data: NO_DATA_COLOR,
            overflow: OVERFLOW_COLOR,
        }
    }
}

impl BinTable {
    /// Creates a table after checking that bounds are finite and strictly increasing.
    pub fn new(bins: Vec<ColorBin>, no_data: Color, overflow: Color) -> Result<Self, PaletteError> {
        if bins.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut previous: Option<f64> = None;
        for (index, bin) in bins.iter().enumerate() {
            if !bin.upper.is_finite() {
                return Err(PaletteError::NonFiniteBound {
                    index,
                    bound: bin.upper,
                });
            }
            if let Some(previous) = previous {
                if bin.upper <= previous {
                    return Err(PaletteError::UnorderedBounds {
                        index,
                        previous,
                        bound: bin.upper,
                    });
                }
            }
            previous = Some(bin.upper);
        }

        Ok(Self {
            bins,
            no_data,
            overflow,
        })
    }

    /// Bins in increasing bound order.
    #[must_use]
    pub fn bins(&self) -> &[ColorBin] {
        &self.bins
    }

    /// Selects the bin a value falls into.
    #[must_use]
    pub fn quantize(&self, value: Option<f64>) -> Bin {
        quantize_in(&self.bins, value)
    }

    /// Fill drawn for the provided bin.
    #[must_use]
    pub fn color(&self, bin: Bin) -> Color {
        match bin {
            Bin::NoData => self.no_data,
            Bin::Index(index) => self
                .bins
                .get(index)
                .map_or(self.overflow, |bin| bin.color),
            Bin::Overflow => self.overflow,
        }
    }

    /// Fill drawn for the provided value.
    #[must_use]
    pub fn color_for(&self, value: Option<f64>) -> Color {
        self.color(self.quantize(value))
    }
}

/// Selects the bin a value falls into using the default table.
#[must_use]
pub fn quantize(value: Option<f64>) -> Bin {
    quantize_in(&DEFAULT_BINS, value)
}

/// Fill drawn for the provided value using the default table.
#[must_use]
pub fn color_for(value: Option<f64>) -> Color {
    match quantize(value) {
        Bin::NoData => NO_DATA_COLOR,
        Bin::Index(index) => DEFAULT_BINS[index].color,
        Bin::Overflow => OVERFLOW_COLOR,
    }
}

fn quantize_in(bins: &[ColorBin], value: Option<f64>) -> Bin {
    let Some(value) = value else {
        return Bin::NoData;
    };
    if value.is_nan() || value == 0.0 {
        return Bin::NoData;
    }

    bins.iter()
        .position(|bin| value <= bin.upper)
        .map_or(Bin::Overflow, Bin::Index)
}

/// Reasons a bin table may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum PaletteError {
    /// The table contains no bins.
    #[error("bin table must contain at least one bin")]
    Empty,
    /// A bound is NaN or infinite.
    #[error("bin {index} has non-finite bound {bound}")]
    NonFiniteBound {
        /// Position of the offending bin.
        index: usize,
        /// Offending bound.
        bound: f64,
    },
    /// A bound does not exceed its predecessor.
    #[error("bin {index} bound {bound} does not exceed previous bound {previous}")]
    UnorderedBounds {
        /// Position of the offending bin.
        index: usize,
        /// Bound of the preceding bin.
        previous: f64,
        /// Offending bound.
        bound: f64,
    },
}
