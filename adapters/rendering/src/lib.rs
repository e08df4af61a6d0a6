#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for choropleth adapters.
//!
//! Rendering is a pure function of the [`Atlas`] and a [`ViewState`]: it
//! produces a [`MapFrame`] describing the fill of every mapped region.
//! Backends decide how a frame reaches the user.

mod svg;

use anyhow::Result as AnyResult;
use choropleth_atlas::{query, Atlas};
use choropleth_core::{Color, ColorScale, DisplayMode, Fips, StateCode, ViewState};
use choropleth_system_palette::{color_for, ContinuousScale};
use glam::Vec2;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub use svg::paint_svg;

/// Offset between the cursor and the top-left corner of a tooltip.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// Label shown for values that are undefined.
pub const NULL_LABEL: &str = "null";

/// Fill computed for a single map region.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionFill {
    /// State drawn by the region.
    pub state: StateCode,
    /// Identifier of the region in the map artwork.
    pub fips: Fips,
    /// Displayed value; `None` when undefined.
    pub value: Option<f64>,
    /// Fill color derived from the value.
    pub color: Color,
}

/// Everything needed to paint the map for one view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapFrame {
    /// Calendar year shown by the frame.
    pub year: i32,
    /// Dataset shown by the frame.
    pub mode: DisplayMode,
    /// Color scale used for the fills.
    pub scale: ColorScale,
    /// Painted regions in dataset order.
    pub regions: Vec<RegionFill>,
}

impl MapFrame {
    /// Looks up the fill of the region with the provided identifier.
    #[must_use]
    pub fn region(&self, fips: &Fips) -> Option<&RegionFill> {
        self.regions.iter().find(|region| &region.fips == fips)
    }
}

/// Hover label anchored next to the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Text shown inside the tooltip.
    pub text: String,
    /// Top-left corner of the tooltip in screen space.
    pub position: Vec2,
}

/// Renders the view of the atlas into a map frame.
pub fn render(atlas: &Atlas, view: &ViewState) -> Result<MapFrame, RenderingError> {
    let horizon = query::horizon(atlas);
    let year = horizon
        .year_at(view.year_index())
        .ok_or(RenderingError::YearOutOfRange {
            index: view.year_index(),
            num_years: horizon.num_years(),
        })?;

    let fill = Fill::for_view(atlas, view);
    let mut unmapped = 0_usize;
    let regions: Vec<RegionFill> = query::samples(atlas, view.mode(), view.year_index())
        .into_iter()
        .filter_map(|sample| {
            let Some(fips) = query::fips_for(atlas, sample.state) else {
                unmapped += 1;
                return None;
            };
            Some(RegionFill {
                state: sample.state.clone(),
                fips: fips.clone(),
                value: sample.value,
                color: fill.color_for(sample.value),
            })
        })
        .collect();

    if unmapped > 0 {
        debug!(unmapped, mode = %view.mode(), "skipped states without a map region");
    }
    debug!(year, mode = %view.mode(), regions = regions.len(), "rendered map frame");

    Ok(MapFrame {
        year,
        mode: view.mode(),
        scale: view.scale(),
        regions,
    })
}

/// Builds the tooltip shown while hovering the region with the provided identifier.
#[must_use]
pub fn tooltip(frame: &MapFrame, fips: &Fips, cursor: Vec2) -> Option<Tooltip> {
    let region = frame.region(fips)?;
    Some(Tooltip {
        text: format!("{}: {}", region.state, format_value(region.value)),
        position: cursor + TOOLTIP_OFFSET,
    })
}

/// Formats a displayed value the way labels show it.
#[must_use]
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(value) if !value.is_nan() => value.to_string(),
        _ => NULL_LABEL.to_owned(),
    }
}

enum Fill {
    Binned,
    Continuous(ContinuousScale),
}

impl Fill {
    fn for_view(atlas: &Atlas, view: &ViewState) -> Self {
        match view.scale() {
            ColorScale::Binned => Self::Binned,
            ColorScale::Continuous => {
                let scale =
                    ContinuousScale::from_values(query::defined_values(atlas, view.mode()))
                        .unwrap_or(ContinuousScale::new(0.0, 0.0));
                debug!(min = scale.min(), max = scale.max(), "continuous scale range");
                Self::Continuous(scale)
            }
        }
    }

    fn color_for(&self, value: Option<f64>) -> Color {
        match self {
            Self::Binned => color_for(value),
            Self::Continuous(scale) => scale.color_for(value),
        }
    }
}

/// Rendering backend capable of presenting map frames.
pub trait RenderingBackend {
    /// Presents a single frame to the user.
    fn present(&mut self, frame: &MapFrame) -> AnyResult<()>;
}

/// Errors that can occur when rendering a view.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderingError {
    /// The view points at a year outside the simulated horizon.
    #[error("year index {index} is outside the {num_years}-year horizon")]
    YearOutOfRange {
        /// Requested year offset.
        index: usize,
        /// Number of years available.
        num_years: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use choropleth_atlas::AtlasConfig;
    use choropleth_system_palette::{color_for_value, NEUTRAL_COLOR, NO_DATA_COLOR};

    fn bundled() -> Atlas {
        Atlas::build(&AtlasConfig::default()).expect("bundled configuration is valid")
    }

    fn fill<'a>(frame: &'a MapFrame, fips: &str) -> Option<&'a RegionFill> {
        frame.region(&Fips::new(fips))
    }

    #[test]
    fn count_frame_paints_simulated_states_only() {
        let atlas = bundled();
        let frame = render(&atlas, &ViewState::default()).expect("year 0 is in range");

        assert_eq!(frame.year, 1959);
        assert_eq!(frame.mode, DisplayMode::Count);
        assert_eq!(frame.regions.len(), 47);
        assert!(fill(&frame, "02").is_none());

        let alabama = fill(&frame, "01").expect("AL is painted");
        assert_eq!(alabama.state, StateCode::new("AL"));
        assert_eq!(alabama.value, Some(4.35));
        assert_eq!(alabama.color, color_for(Some(4.35)));
    }

    #[test]
    fn reference_frame_paints_states_without_baselines() {
        let atlas = bundled();
        let view = ViewState::default().with_mode(DisplayMode::Reference);
        let frame = render(&atlas, &view).expect("year 0 is in range");

        assert_eq!(frame.regions.len(), 50);
        let alaska = fill(&frame, "02").expect("AK is painted in reference mode");
        assert_eq!(alaska.value, Some(0.0));
        assert_eq!(alaska.color, NO_DATA_COLOR);
        assert_eq!(fill(&frame, "48").and_then(|texas| texas.value), Some(15.0));
    }

    #[test]
    fn year_label_follows_the_index() {
        let atlas = bundled();
        let view = ViewState::default().with_year_index(79);
        let frame = render(&atlas, &view).expect("last year is in range");

        assert_eq!(frame.year, 2038);
        assert_eq!(fill(&frame, "48").and_then(|texas| texas.value), Some(28.4));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let atlas = bundled();
        let view = ViewState::default().with_year_index(80);

        assert_eq!(
            render(&atlas, &view),
            Err(RenderingError::YearOutOfRange {
                index: 80,
                num_years: 80,
            })
        );
    }

    #[test]
    fn undefined_ratios_use_the_no_data_color() {
        let atlas = bundled();
        let view = ViewState::default().with_mode(DisplayMode::Ratio);
        let frame = render(&atlas, &view).expect("year 0 is in range");

        let connecticut = fill(&frame, "09").expect("CT is painted");
        assert_eq!(connecticut.value, None);
        assert_eq!(connecticut.color, NO_DATA_COLOR);
        assert_eq!(fill(&frame, "01").and_then(|alabama| alabama.value), Some(0.72));
    }

    #[test]
    fn continuous_scale_spans_the_whole_horizon() {
        let atlas = bundled();
        let view = ViewState::default()
            .with_mode(DisplayMode::Ratio)
            .with_scale(ColorScale::Continuous);
        let frame = render(&atlas, &view).expect("year 0 is in range");
        let scale = ContinuousScale::from_values(query::defined_values(&atlas, DisplayMode::Ratio))
            .expect("ratios are defined");

        let alabama = fill(&frame, "01").expect("AL is painted");
        assert_eq!(
            alabama.color,
            color_for_value(Some(0.72), scale.min(), scale.max())
        );
        let connecticut = fill(&frame, "09").expect("CT is painted");
        assert_eq!(connecticut.color, NEUTRAL_COLOR);
    }

    #[test]
    fn tooltip_names_state_and_value() {
        let atlas = bundled();
        let frame = render(&atlas, &ViewState::default()).expect("year 0 is in range");

        let hover = tooltip(&frame, &Fips::new("01"), Vec2::new(100.0, 40.0))
            .expect("AL is painted");
        assert_eq!(hover.text, "AL: 4.35");
        assert_eq!(hover.position, Vec2::new(110.0, 50.0));
        assert!(tooltip(&frame, &Fips::new("02"), Vec2::ZERO).is_none());
    }

    #[test]
    fn tooltip_labels_undefined_values_as_null() {
        let atlas = bundled();
        let view = ViewState::default().with_mode(DisplayMode::Ratio);
        let frame = render(&atlas, &view).expect("year 0 is in range");

        let hover = tooltip(&frame, &Fips::new("09"), Vec2::ZERO).expect("CT is painted");
        assert_eq!(hover.text, "CT: null");
    }

    #[test]
    fn values_format_without_trailing_zeros() {
        assert_eq!(format_value(Some(28.4)), "28.4");
        assert_eq!(format_value(Some(15.0)), "15");
        assert_eq!(format_value(Some(0.0)), "0");
        assert_eq!(format_value(Some(f64::NAN)), "null");
        assert_eq!(format_value(None), "null");
    }
}
