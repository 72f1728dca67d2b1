//! Background layers: flat fill, gradient overlay and the tiled patterns.
//!
//! The tiled patterns (stripes, quad grid, dot grid) all walk the surface
//! through bounded iterators, so traversal is finite for any positive
//! surface size, including surfaces smaller than one cell.

use crate::color::{ACCENT_BLUE, BG_GREY, Rgba};
use crate::error::WallgenResult;
use crate::rng::RandomSource;
use crate::surface::Surface;

const STRIPE_WIDTH: u32 = 3;
const STRIPE_ALPHA: f64 = 0.2;
const QUAD_CELL_DIVISOR: f64 = 200.0;
const DOT_SPACING_DIVISOR: f64 = 30.0;
const DOT_RADIUS: f64 = 2.0;
const DOT_ALPHA: f64 = 0.2;
const GRADIENT_ALPHA: f64 = 0.1;

/// Row-major walk over a square lattice: rows top to bottom, columns left
/// to right, cursor reset to `origin` at each row start.
///
/// `step` is clamped to at least one pixel so the walk always terminates.
#[derive(Clone, Debug)]
pub struct GridCells {
    origin: f64,
    step: f64,
    width: f64,
    height: f64,
    next_x: f64,
    next_y: f64,
}

impl GridCells {
    pub fn new(origin: f64, step: f64, width: f64, height: f64) -> Self {
        let step = step.max(1.0);
        Self {
            origin,
            step,
            width,
            height,
            next_x: origin,
            next_y: origin,
        }
    }
}

impl Iterator for GridCells {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.origin >= self.width || self.next_y >= self.height {
            return None;
        }
        let cell = (self.next_x, self.next_y);
        self.next_x += self.step;
        if self.next_x >= self.width {
            self.next_x = self.origin;
            self.next_y += self.step;
        }
        Some(cell)
    }
}

/// Paint the whole surface with the opaque background grey.
pub fn flat_fill(surface: &mut Surface) {
    let (w, h) = (surface.fwidth(), surface.fheight());
    surface.fill_rect(0.0, 0.0, w, h, BG_GREY.with_alpha(1.0));
}

/// Low-alpha diagonal ramp from accent blue to neutral grey over the full
/// surface. Purely additive over the flat fill.
pub fn gradient_overlay(surface: &mut Surface) -> WallgenResult<()> {
    let (w, h) = (surface.width(), surface.height());
    let grey = Rgba::new(0.4, 0.4, 0.4, 1.0);

    let mut bytes = vec![0u8; (w as usize) * (h as usize) * 4];
    let span = f64::from(w.saturating_sub(1) + h.saturating_sub(1)).max(1.0);
    let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    let alpha = q(GRADIENT_ALPHA);
    for y in 0..h {
        for x in 0..w {
            let t = f64::from(x + y) / span;
            let lerp = |a: f64, b: f64| a + (b - a) * t;
            let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
            bytes[idx] = q(lerp(ACCENT_BLUE.r, grey.r) * GRADIENT_ALPHA);
            bytes[idx + 1] = q(lerp(ACCENT_BLUE.g, grey.g) * GRADIENT_ALPHA);
            bytes[idx + 2] = q(lerp(ACCENT_BLUE.b, grey.b) * GRADIENT_ALPHA);
            bytes[idx + 3] = alpha;
        }
    }
    surface.draw_premul_image(&bytes, w, h, 0.0, 0.0)
}

/// Vertical 3px stripes tiled left to right across the full width, each in
/// accent blue scaled by an independent random factor.
pub fn stripes(surface: &mut Surface, rng: &mut RandomSource) {
    let h = surface.fheight();
    for x in stripe_offsets(surface.width()) {
        let factor = rng.next_f64();
        let color = ACCENT_BLUE.scaled(factor).with_alpha(STRIPE_ALPHA);
        surface.fill_rect(f64::from(x), 0.0, f64::from(STRIPE_WIDTH), h, color);
    }
}

fn stripe_offsets(surface_width: u32) -> impl Iterator<Item = u32> {
    (0..surface_width).step_by(STRIPE_WIDTH as usize)
}

/// Square cells of side `width/200` (at least 1px, with a 1px gutter),
/// each filled with neutral grey at an independent random alpha.
pub fn quad_grid(surface: &mut Surface, rng: &mut RandomSource) {
    let (w, h) = (surface.fwidth(), surface.fheight());
    let side = (w / QUAD_CELL_DIVISOR).floor().max(1.0);
    let grey = Rgba::new(0.4, 0.4, 0.4, 1.0);
    for (x, y) in GridCells::new(0.0, side + 1.0, w, h) {
        let alpha = 0.6 * rng.next_f64();
        surface.fill_rect(x, y, side, side, grey.with_alpha(alpha));
    }
}

/// White low-alpha dots of radius 2 on a lattice spaced `width/30`, inset
/// one spacing unit from the top-left corner.
pub fn dot_grid(surface: &mut Surface) {
    let (w, h) = (surface.fwidth(), surface.fheight());
    let spacing = (w / DOT_SPACING_DIVISOR).max(1.0);
    let white = Rgba::new(1.0, 1.0, 1.0, DOT_ALPHA);
    for (x, y) in GridCells::new(spacing, spacing, w, h) {
        surface.fill_circle(x, y, DOT_RADIUS, white);
    }
}
