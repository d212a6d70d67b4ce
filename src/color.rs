use palette::{IntoColor, Mix, Oklab, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Fixed colours
// ---------------------------------------------------------------------------

/// Marker colour when the plot is not colour mapped.
pub const UNIFORM_MARKER_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);

/// Viridis sampled at nine evenly spaced positions.
const VIRIDIS_STOPS: [(u8, u8, u8); 9] = [
    (0x44, 0x01, 0x54),
    (0x47, 0x2d, 0x7b),
    (0x3b, 0x52, 0x8b),
    (0x2c, 0x72, 0x8e),
    (0x21, 0x91, 0x8c),
    (0x28, 0xae, 0x80),
    (0x5e, 0xc9, 0x62),
    (0xad, 0xdc, 0x30),
    (0xfd, 0xe7, 0x25),
];

// ---------------------------------------------------------------------------
// Continuous colour scale
// ---------------------------------------------------------------------------

/// A continuous colour scale over `[0, 1]`, interpolated in Oklab so equal
/// steps look equally far apart.
#[derive(Debug, Clone)]
pub struct ColorScale {
    pub name: &'static str,
    stops: Vec<Oklab>,
}

impl ColorScale {
    pub fn viridis() -> Self {
        let stops = VIRIDIS_STOPS
            .iter()
            .map(|&(r, g, b)| {
                let rgb: Srgb = Srgb::<u8>::new(r, g, b).into_format();
                rgb.into_color()
            })
            .collect();
        ColorScale {
            name: "viridis",
            stops,
        }
    }

    /// Colour at position `t`. Out-of-range positions clamp; NaN maps to
    /// the low end.
    pub fn color_at(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) as f32 };
        let segments = (self.stops.len() - 1) as f32;
        let pos = t * segments;
        let lo = (pos.floor() as usize).min(self.stops.len() - 2);
        let lab = self.stops[lo].mix(self.stops[lo + 1], pos - lo as f32);
        let rgb: Srgb = lab.into_color();
        RGBColor(to_u8(rgb.red), to_u8(rgb.green), to_u8(rgb.blue))
    }
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ---------------------------------------------------------------------------
// Normalization: data value → [0, 1]
// ---------------------------------------------------------------------------

/// Linear mapping of a data range onto the colour scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    /// Range spanned by the finite values; `None` if there are none.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<Self> {
        let (vmin, vmax) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        (vmin <= vmax).then_some(Normalize { vmin, vmax })
    }

    /// A degenerate range maps every value to `0.0`.
    pub fn apply(&self, value: f64) -> f64 {
        let range = self.vmax - self.vmin;
        if range.abs() < f64::EPSILON {
            0.0
        } else {
            (value - self.vmin) / range
        }
    }
}
