//! Colours as four f64 channels in [0, 1], plus the fixed palette.

/// Straight-alpha RGBA colour with channels in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Dark blue used for circle scatter and the primary wave.
pub const DARK_BLUE: Rgba = Rgba::new(60.0 / 255.0, 76.0 / 255.0, 85.0 / 255.0, 1.0);

/// Accent blue used for stripes, the secondary wave and panel borders.
pub const ACCENT_BLUE: Rgba = Rgba::new(23.0 / 255.0, 147.0 / 255.0, 209.0 / 255.0, 1.0);

/// Background grey. The 0.9 alpha baseline is what the logo panel uses;
/// the flat background fill overrides it to fully opaque.
pub const BG_GREY: Rgba = Rgba::new(38.0 / 255.0, 39.0 / 255.0, 33.0 / 255.0, 0.9);

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a replaced alpha channel.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Scale the colour channels by `factor`, leaving alpha untouched.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }

    /// Quantize to straight-alpha RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn q(c: f64) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_quantizes_to_expected_bytes() {
        assert_eq!(DARK_BLUE.to_rgba8(), [60, 76, 85, 255]);
        assert_eq!(ACCENT_BLUE.to_rgba8(), [23, 147, 209, 255]);
        assert_eq!(BG_GREY.to_rgba8(), [38, 39, 33, 230]);
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let c = ACCENT_BLUE.with_alpha(0.2);
        assert_eq!(c.r, ACCENT_BLUE.r);
        assert_eq!(c.a, 0.2);
    }

    #[test]
    fn scaled_clamps_on_quantize() {
        let c = Rgba::new(0.9, 0.9, 0.9, 1.0).scaled(2.0);
        assert_eq!(c.to_rgba8(), [255, 255, 255, 255]);
    }
}
