//! Salary-to-color scale for the choropleth map.
//!
//! Salaries are normalized against a fixed floor/ceiling and blended between
//! two reference colors per channel. The normalization factor is clamped to
//! [0, 1]: the source dashboard let out-of-range salaries overshoot into
//! invalid channel values, which was judged unintended.

use serde::Serialize;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// CSS `rgb(...)` form for direct use as a map fill.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Reference color for salaries at or below the floor (pale blue).
pub const LOW_SALARY_COLOR: Rgb = Rgb {
    r: 230,
    g: 238,
    b: 248,
};

/// Reference color for salaries at or above the ceiling (dashboard brand blue).
pub const HIGH_SALARY_COLOR: Rgb = Rgb { r: 0, g: 93, b: 171 };

/// Endpoints of the salary color scale, owned by the caller rather than
/// living as ambient module state.
#[derive(Debug, Clone)]
pub struct ColorScaleConfig {
    pub floor: f64,
    pub ceiling: f64,
    pub low: Rgb,
    pub high: Rgb,
}

impl Default for ColorScaleConfig {
    fn default() -> Self {
        Self {
            floor: 70_000.0,
            ceiling: 120_000.0,
            low: LOW_SALARY_COLOR,
            high: HIGH_SALARY_COLOR,
        }
    }
}

/// Maps a salary onto the scale by linear per-channel interpolation, rounding
/// each channel to the nearest integer. Degenerate ranges (ceiling ≤ floor)
/// pin everything to the low color.
pub fn salary_to_color(salary: f64, config: &ColorScaleConfig) -> Rgb {
    let span = config.ceiling - config.floor;
    let factor = if span > 0.0 {
        ((salary - config.floor) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Rgb {
        r: blend_channel(config.low.r, config.high.r, factor),
        g: blend_channel(config.low.g, config.high.g, factor),
        b: blend_channel(config.low.b, config.high.b, factor),
    }
}

fn blend_channel(low: u8, high: u8, factor: f64) -> u8 {
    (low as f64 + (high as f64 - low as f64) * factor).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_maps_to_low_color_exactly() {
        let config = ColorScaleConfig::default();
        assert_eq!(salary_to_color(70_000.0, &config), config.low);
    }

    #[test]
    fn test_ceiling_maps_to_high_color_exactly() {
        let config = ColorScaleConfig::default();
        assert_eq!(salary_to_color(120_000.0, &config), config.high);
    }

    #[test]
    fn test_midpoint_is_rounded_blend() {
        let config = ColorScaleConfig::default();
        let mid = salary_to_color(95_000.0, &config);
        // r: 230 → 0 gives 115; g: 238 → 93 gives 165.5 → 166;
        // b: 248 → 171 gives 209.5 → 210.
        assert_eq!(
            mid,
            Rgb {
                r: 115,
                g: 166,
                b: 210
            }
        );
    }

    #[test]
    fn test_below_floor_clamps_to_low() {
        let config = ColorScaleConfig::default();
        assert_eq!(salary_to_color(0.0, &config), config.low);
        assert_eq!(salary_to_color(-5_000.0, &config), config.low);
    }

    #[test]
    fn test_above_ceiling_clamps_to_high() {
        let config = ColorScaleConfig::default();
        assert_eq!(salary_to_color(400_000.0, &config), config.high);
    }

    #[test]
    fn test_degenerate_range_pins_to_low() {
        let config = ColorScaleConfig {
            floor: 100_000.0,
            ceiling: 100_000.0,
            ..ColorScaleConfig::default()
        };
        assert_eq!(salary_to_color(150_000.0, &config), config.low);
    }

    #[test]
    fn test_css_form() {
        assert_eq!(HIGH_SALARY_COLOR.to_css(), "rgb(0, 93, 171)");
    }
}
