//! Multi-stop colour gradients.

use palette::convert::FromColorUnclamped;
use palette::{LinSrgb, Oklab, Srgb};

use crate::error::{LogoError, Result};
use crate::types::{ColorSpace, Colour, Palette};

/// A gradient over an ordered list of stops, sampled at `t` in `[0, 1]`.
///
/// With N stops there are N-1 equal-length segments; `t` is scaled by N-1,
/// the integer part picks the segment and the fraction interpolates within it.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Colour>,
    space: ColorSpace,
}

impl Gradient {
    /// Create a gradient. At least one stop is required.
    pub fn new(stops: &[Colour], space: ColorSpace) -> Result<Self> {
        if stops.is_empty() {
            return Err(LogoError::Config {
                message: "A gradient needs at least one colour stop".to_string(),
                help: None,
            });
        }
        Ok(Self {
            stops: stops.to_vec(),
            space,
        })
    }

    /// Create a gradient from a palette's stops.
    pub fn from_palette(palette: &Palette, space: ColorSpace) -> Self {
        Self {
            stops: palette.stops().to_vec(),
            space,
        }
    }

    pub fn stops(&self) -> &[Colour] {
        &self.stops
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Colour at position `t`. Values outside `[0, 1]` (and NaN) clamp to the end stops.
    pub fn sample(&self, t: f64) -> Colour {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];

        if t.is_nan() || t <= 0.0 {
            return first;
        }
        if t >= 1.0 || self.stops.len() == 1 {
            return last;
        }

        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f64;

        let (a, b) = (self.stops[index], self.stops[index + 1]);
        match self.space {
            ColorSpace::Rgb => lerp_rgb(a, b, local),
            ColorSpace::Oklab => lerp_oklab(a, b, local),
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    lerp(a as f64, b as f64, t).round().clamp(0.0, 255.0) as u8
}

fn lerp_rgb(a: Colour, b: Colour, t: f64) -> Colour {
    Colour::rgb(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
    )
}

/// Interpolate in OKLab: decode sRGB to linear light, convert, mix L/a/b, and back.
fn lerp_oklab(a: Colour, b: Colour, t: f64) -> Colour {
    let from = to_oklab(a);
    let to = to_oklab(b);
    let t = t as f32;

    let mixed = Oklab::new(
        from.l + (to.l - from.l) * t,
        from.a + (to.a - from.a) * t,
        from.b + (to.b - from.b) * t,
    );
    from_oklab(mixed)
}

fn to_oklab(colour: Colour) -> Oklab {
    let srgb: Srgb<f32> = Srgb::new(colour.r, colour.g, colour.b).into_format();
    let linear: LinSrgb<f32> = srgb.into_linear();
    Oklab::from_color_unclamped(linear)
}

fn from_oklab(lab: Oklab) -> Colour {
    let linear: LinSrgb<f32> = LinSrgb::from_color_unclamped(lab);
    let srgb: Srgb<f32> = Srgb::from_linear(linear);
    Colour::rgb(
        unit_to_byte(srgb.red),
        unit_to_byte(srgb.green),
        unit_to_byte(srgb.blue),
    )
}

fn unit_to_byte(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
