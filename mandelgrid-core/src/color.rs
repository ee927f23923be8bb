//! Smooth coloring of escape-time results.

use crate::escape::EscapeResult;
use libm::log;
use serde::{Deserialize, Serialize};

/// Named rule mapping a smooth-color value to RGB.
///
/// The discriminants are the persistence ids handed to the external
/// view-state layer; grayscale is the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    /// White for any escaped point, black inside.
    Monochrome,
    /// Full-value HSV sweep.
    BrightHsv,
    /// Low-value HSV sweep.
    BlueHsv,
    /// Low-value HSV sweep with red and blue swapped.
    MutedHsv,
    /// 512-level ramp clamped to 8 bits.
    Grayscale,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Grayscale
    }
}

impl Palette {
    pub fn id(&self) -> u8 {
        match self {
            Palette::Monochrome => 0,
            Palette::BrightHsv => 1,
            Palette::BlueHsv => 2,
            Palette::MutedHsv => 3,
            Palette::Grayscale => 4,
        }
    }

    pub fn from_id(id: u8) -> Option<Palette> {
        match id {
            0 => Some(Palette::Monochrome),
            1 => Some(Palette::BrightHsv),
            2 => Some(Palette::BlueHsv),
            3 => Some(Palette::MutedHsv),
            4 => Some(Palette::Grayscale),
            _ => None,
        }
    }
}

/// Continuous iteration count for an escaped point.
///
/// Standard logarithmic correction over the discrete count, using the
/// refinement squares captured a few iterations past escape. Meaningless
/// for set members.
pub fn smooth_value(result: &EscapeResult) -> f64 {
    let log_base = 1.0 / log(2.0);
    let log_halfbase = log(0.5) * log_base;
    let n = (result.iteration_cap - result.iterations_remaining) as f64;
    5.0 + n - log_halfbase - log(log(result.last_real_sq + result.last_imag_sq)) * log_base
}

/// Map one evaluated point to RGB under the given palette.
///
/// Set members are always black regardless of palette.
pub fn color_for(palette: Palette, result: &EscapeResult) -> [u8; 3] {
    if result.iterations_remaining == 0 {
        return [0, 0, 0];
    }

    let v = smooth_value(result);
    let cap = result.iteration_cap as f64;

    match palette {
        Palette::Monochrome => [255, 255, 255],
        Palette::Grayscale => {
            let level = (512.0 * v / cap).floor().clamp(0.0, 255.0) as u8;
            [level, level, level]
        }
        Palette::BrightHsv => hsv_to_rgb(360.0 * v / cap, 1.0, 1.0),
        Palette::BlueHsv => hsv_to_rgb(360.0 * v / cap, 1.0, 10.0 * v / cap),
        Palette::MutedHsv => {
            let [r, g, b] = hsv_to_rgb(360.0 * v / cap, 1.0, 10.0 * v / cap);
            [b, g, r]
        }
    }
}

/// Sector-based HSV to RGB conversion: six 60° hue sectors.
///
/// h in degrees, s and v in [0, 1]; v is clamped from above.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let v = v.min(1.0);

    let hp = h / 60.0;
    let c = v * s;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());

    let (r, g, b) = if hp < 1.0 {
        (c, x, 0.0)
    } else if hp < 2.0 {
        (x, c, 0.0)
    } else if hp < 3.0 {
        (0.0, c, x)
    } else if hp < 4.0 {
        (0.0, x, c)
    } else if hp < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = v - c;
    [
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    ]
}
