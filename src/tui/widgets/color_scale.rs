//! Linear two-colour scale over a `[lo, hi]` count domain

use ratatui::style::Color;

use crate::types::RhythmGrid;

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Move each channel `amount` (0..=1) of the way towards white
    pub fn brighten(self, amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let lift = |c: u8| lerp_channel(c, 255, amount);
        Self::new(lift(self.r), lift(self.g), lift(self.b))
    }

    /// Hex form, e.g. `#1f2933`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// Numeric range a scale maps from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDomain {
    pub lo: u64,
    pub hi: u64,
}

impl ColorDomain {
    /// Domain `[lo, hi]`; the bounds are swapped if given in reverse
    pub fn new(lo: u64, hi: u64) -> Self {
        Self {
            lo: lo.min(hi),
            hi: lo.max(hi),
        }
    }

    /// `[0, max_count]` for a grid
    pub fn for_grid(grid: &RhythmGrid) -> Self {
        Self::new(0, grid.max_count())
    }
}

/// Colour scale built fresh for each render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain: ColorDomain,
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn new(domain: ColorDomain, low: Rgb, high: Rgb) -> Self {
        Self { domain, low, high }
    }

    pub fn domain(&self) -> ColorDomain {
        self.domain
    }

    /// Endpoint colours `(C0, C1)`
    pub fn endpoints(&self) -> (Rgb, Rgb) {
        (self.low, self.high)
    }

    /// Position of `count` in the domain, clamped to `[0, 1]`.
    /// A degenerate domain (`lo == hi`) always yields 0.
    pub fn fraction(&self, count: u64) -> f64 {
        let ColorDomain { lo, hi } = self.domain;
        if hi == lo {
            return 0.0;
        }
        let t = (count as f64 - lo as f64) / (hi - lo) as f64;
        t.clamp(0.0, 1.0)
    }

    /// Interpolated colour for `count`
    pub fn color(&self, count: u64) -> Rgb {
        let t = self.fraction(count);
        Rgb::new(
            lerp_channel(self.low.r, self.high.r, t),
            lerp_channel(self.low.g, self.high.g, t),
            lerp_channel(self.low.b, self.high.b, t),
        )
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let v = from as f64 + (to as f64 - from as f64) * t;
    v.round().clamp(0.0, 255.0) as u8
}
