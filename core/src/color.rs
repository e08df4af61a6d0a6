use std::fmt;

use serde::{Serialize, Serializer};

/// Opaque or translucent fill color with byte RGBA channels.
///
/// Colors render as CSS hex notation: `#rrggbb` when fully opaque and
/// `#rrggbbaa` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    /// Creates an opaque color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, u8::MAX)
    }

    /// Creates a color from byte RGBA components.
    #[must_use]
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from HSL coordinates.
    ///
    /// `hue` is expressed in degrees and wraps around 360; `saturation` and
    /// `lightness` are fractions clamped to `0.0..=1.0`.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);
        let hue = if hue.is_finite() {
            hue.rem_euclid(360.0)
        } else {
            0.0
        };

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let secondary = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (red, green, blue) = match sector as u32 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };
        let offset = lightness - chroma / 2.0;

        Self::from_rgb(
            unit_to_byte(red + offset),
            unit_to_byte(green + offset),
            unit_to_byte(blue + offset),
        )
    }
}

fn unit_to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if self.alpha != u8::MAX {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn opaque_colors_render_as_six_digit_hex() {
        assert_eq!(Color::from_rgb(0xd3, 0xd3, 0xd3).to_string(), "#d3d3d3");
        assert_eq!(Color::from_rgb(0x4b, 0x00, 0x00).to_string(), "#4b0000");
    }

    #[test]
    fn translucent_colors_keep_alpha_channel() {
        assert_eq!(
            Color::from_rgba(0x12, 0x34, 0x56, 0x80).to_string(),
            "#12345680"
        );
    }

    #[test]
    fn hsl_endpoints_match_css_conversion() {
        assert_eq!(Color::from_hsl(120.0, 0.8, 0.55), Color::from_rgb(48, 232, 48));
        assert_eq!(Color::from_hsl(0.0, 0.8, 0.55), Color::from_rgb(232, 48, 48));
        assert_eq!(Color::from_hsl(60.0, 0.8, 0.55), Color::from_rgb(232, 232, 48));
    }

    #[test]
    fn hsl_hue_wraps_around_full_turn() {
        assert_eq!(Color::from_hsl(360.0, 0.8, 0.55), Color::from_hsl(0.0, 0.8, 0.55));
        assert_eq!(Color::from_hsl(-240.0, 0.8, 0.55), Color::from_hsl(120.0, 0.8, 0.55));
    }

    #[test]
    fn zero_saturation_yields_gray() {
        assert_eq!(Color::from_hsl(200.0, 0.0, 0.8), Color::from_rgb(204, 204, 204));
    }
}
