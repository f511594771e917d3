//! Amplitude-to-color mapping.
//!
//! The complex argument picks the hue, the magnitude lifts the
//! lightness, saturation is fixed. Stateless and deterministic.

use crate::constants::color::{LIGHTNESS_FLOOR, LIGHTNESS_GAIN, SATURATION};
use num_complex::Complex64;
use std::f64::consts::PI;

/// One 8-bit RGB sample derived from a complex amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSample {
    /// Map one amplitude to a color.
    ///
    /// `hue = (arg + π) / 2π · 360`, `lightness = 0.3 + |amp| · 0.4`.
    /// Magnitudes are expected in `[0, 1]`; a normalized state vector
    /// keeps lightness within range by itself.
    pub fn from_amplitude(amplitude: Complex64) -> Self {
        let magnitude = amplitude.norm();
        let phase = amplitude.im.atan2(amplitude.re);

        let hue = (phase + PI) / (2.0 * PI) * 360.0;
        let lightness = LIGHTNESS_FLOOR + magnitude * LIGHTNESS_GAIN;

        hsl_to_rgb(hue, SATURATION, lightness)
    }

    /// Map a whole amplitude sequence, order-preserving
    pub fn map_all(amplitudes: &[Complex64]) -> Vec<Self> {
        amplitudes.iter().copied().map(Self::from_amplitude).collect()
    }

    /// `#rrggbb` form, for renderers that take hex strings
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Standard six-sector HSL to 8-bit RGB conversion.
/// `h` in degrees (reduced mod 360 here), `s` and `l` in `[0, 1]`.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> ColorSample {
    let h = h % 360.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    ColorSample {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}
