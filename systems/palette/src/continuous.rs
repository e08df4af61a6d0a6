//! Continuous green-to-red ramp over an arbitrary value range.

use choropleth_core::Color;

/// Fill used for missing values on the continuous ramp.
pub const NEUTRAL_COLOR: Color = Color::from_rgb(0xcc, 0xcc, 0xcc);

/// Hue drawn at the bottom of the range, in degrees.
pub const LOW_HUE: f64 = 120.0;

/// Hue drawn at the top of the range, in degrees.
pub const HIGH_HUE: f64 = 0.0;

const SATURATION: f64 = 0.8;
const LIGHTNESS: f64 = 0.55;

/// Closed value range spanned by the continuous ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousScale {
    min: f64,
    max: f64,
}

impl ContinuousScale {
    /// Creates a scale spanning `min..=max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Builds the tightest scale covering every finite value, or `None` when there is none.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |range: Option<Self>, value| {
                Some(match range {
                    Some(range) => Self::new(range.min.min(value), range.max.max(value)),
                    None => Self::new(value, value),
                })
            })
    }

    /// Lower end of the scale.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper end of the scale.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Position of `value` within the scale, clamped to `0.0..=1.0`.
    ///
    /// A degenerate scale (`max <= min`, or non-finite ends) places every value at 0.
    #[must_use]
    pub fn position(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }

        let position = (value - self.min) / span;
        if position.is_nan() {
            return 0.0;
        }
        position.clamp(0.0, 1.0)
    }

    /// Fill drawn for the provided value.
    #[must_use]
    pub fn color_for(&self, value: Option<f64>) -> Color {
        match value {
            Some(value) if !value.is_nan() => {
                let position = self.position(value);
                let hue = LOW_HUE + (HIGH_HUE - LOW_HUE) * position;
                Color::from_hsl(hue, SATURATION, LIGHTNESS)
            }
            _ => NEUTRAL_COLOR,
        }
    }
}

/// Fill drawn for `value` on a green-to-red ramp spanning `min..=max`.
#[must_use]
pub fn color_for_value(value: Option<f64>, min: f64, max: f64) -> Color {
    ContinuousScale::new(min, max).color_for(value)
}

#[cfg(test)]
mod tests {
    use super::{color_for_value, ContinuousScale, NEUTRAL_COLOR};
    use choropleth_core::Color;

    #[test]
    fn range_ends_map_to_green_and_red() {
        assert_eq!(color_for_value(Some(0.0), 0.0, 10.0), Color::from_rgb(48, 232, 48));
        assert_eq!(color_for_value(Some(10.0), 0.0, 10.0), Color::from_rgb(232, 48, 48));
    }

    #[test]
    fn midpoint_maps_to_yellow() {
        assert_eq!(color_for_value(Some(5.0), 0.0, 10.0), Color::from_rgb(232, 232, 48));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(
            color_for_value(Some(-4.0), 0.0, 10.0),
            color_for_value(Some(0.0), 0.0, 10.0)
        );
        assert_eq!(
            color_for_value(Some(40.0), 0.0, 10.0),
            color_for_value(Some(10.0), 0.0, 10.0)
        );
    }

    #[test]
    fn missing_values_are_neutral() {
        assert_eq!(color_for_value(None, 0.0, 10.0), NEUTRAL_COLOR);
        assert_eq!(color_for_value(Some(f64::NAN), 0.0, 10.0), NEUTRAL_COLOR);
        assert_eq!(NEUTRAL_COLOR.to_string(), "#cccccc");
    }

    #[test]
    fn degenerate_range_places_values_at_the_bottom() {
        let scale = ContinuousScale::new(3.0, 3.0);
        assert_eq!(scale.position(3.0), 0.0);
        assert_eq!(scale.position(100.0), 0.0);
        assert_eq!(ContinuousScale::new(5.0, 1.0).position(2.0), 0.0);
    }

    #[test]
    fn scale_from_values_skips_non_finite_entries() {
        let scale = ContinuousScale::from_values([4.0, f64::NAN, -1.5, 12.25, f64::INFINITY])
            .expect("finite values present");
        assert_eq!(scale.min(), -1.5);
        assert_eq!(scale.max(), 12.25);
        assert!(ContinuousScale::from_values([f64::NAN]).is_none());
        assert!(ContinuousScale::from_values(std::iter::empty()).is_none());
    }
}
