//! Randomized decorative shapes: circle scatter and sine-wave bands.
//!
//! Every random parameter is drawn from the shared [`RandomSource`] stream
//! in a fixed, documented order, so output depends only on configuration
//! and the number of draws that preceded each layer.

use crate::GOLDEN_RATIO;
use crate::color::{ACCENT_BLUE, DARK_BLUE};
use crate::rng::RandomSource;
use crate::surface::Surface;

const MAX_CIRCLE_RADIUS: f64 = 20.0;
const WAVE_LINE_WIDTH: f64 = 2.0;
const MIN_WAVE_PERIOD: f64 = 5.0;
const MIN_WAVE_AMPLITUDE: f64 = 5.0;

/// Baseline policy for the primary wave of each band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaveBaseline {
    /// Uniformly distributed over the surface height.
    #[default]
    Uniform,
    /// Biased toward the lower 90% of the surface, the historical formula
    /// `1.1111 * h * (rng() - 0.1)`.
    LowerBiased,
}

/// Scatter `count` circles uniformly over the surface.
///
/// Per circle, in stream order: line width in [3, 5), fill alpha in
/// [0, 0.3), center x, center y, radius in [0, 20), stroke alpha in
/// [0, 0.3). The disc is filled and its outline stroked with the same dark
/// blue at independent alphas.
pub fn scatter_circles(surface: &mut Surface, rng: &mut RandomSource, count: u32) {
    for _ in 0..count {
        draw_circle(surface, rng);
    }
}

fn draw_circle(surface: &mut Surface, rng: &mut RandomSource) {
    use kurbo::Shape as _;

    let line_width = 3.0 + 2.0 * rng.next_f64();
    let fill_alpha = 0.3 * rng.next_f64();
    let cx = rng.next_f64() * surface.fwidth();
    let cy = rng.next_f64() * surface.fheight();
    let radius = rng.next_f64() * MAX_CIRCLE_RADIUS;
    let stroke_alpha = 0.3 * rng.next_f64();

    let path = kurbo::Circle::new((cx, cy), radius).to_path(0.1);
    surface.fill_path(&path, DARK_BLUE.with_alpha(fill_alpha));
    surface.stroke_path(&path, DARK_BLUE.with_alpha(stroke_alpha), line_width);
}

/// Draw `count` wave bands, each made of two superimposed sine curves
/// spanning the full surface width.
pub fn wave_bands(
    surface: &mut Surface,
    rng: &mut RandomSource,
    count: u32,
    baseline: WaveBaseline,
) {
    for _ in 0..count {
        draw_wave_band(surface, rng, baseline);
    }
}

fn draw_wave_band(surface: &mut Surface, rng: &mut RandomSource, baseline: WaveBaseline) {
    let w = surface.fwidth();
    let h = surface.fheight();

    let period1 = (MIN_WAVE_PERIOD + rng.next_f64()) * w;
    let period2 = 2.0 * period1;

    let baseline1 = match baseline {
        WaveBaseline::Uniform => rng.next_f64() * h,
        WaveBaseline::LowerBiased => 1.1111 * h * (rng.next_f64() - 0.1),
    };

    let phase1 = rng.next_f64() * w;
    let phase2 = rng.next_f64() * w;

    let amplitude1 = MIN_WAVE_AMPLITUDE + rng.next_f64() * h / 5.0;
    let amplitude2 = MIN_WAVE_AMPLITUDE + rng.next_f64() * h / 5.0;

    let curve1 = sine_polyline(surface.width(), baseline1, amplitude1, phase1, period1);
    let alpha1 = 0.1 * rng.next_f64();
    surface.stroke_path(&curve1, DARK_BLUE.with_alpha(alpha1), WAVE_LINE_WIDTH);

    // The second wave hugs the golden-ratio line of the height so that large
    // wave counts densify around the logo panel.
    let baseline2 = h / GOLDEN_RATIO + (rng.next_f64() - 0.5) * h / 4.0;
    let curve2 = sine_polyline(surface.width(), baseline2, amplitude2, phase2, period2);
    let alpha2 = 0.1 * rng.next_f64();
    surface.stroke_path(&curve2, ACCENT_BLUE.with_alpha(alpha2), WAVE_LINE_WIDTH);
}

/// Connected polyline `y = baseline + amplitude * sin(2pi (x + phase) / period)`,
/// sampled at every integer x from 0 to `surface_width` inclusive.
fn sine_polyline(
    surface_width: u32,
    baseline: f64,
    amplitude: f64,
    phase: f64,
    period: f64,
) -> kurbo::BezPath {
    let mut path = kurbo::BezPath::new();
    for x in 0..=surface_width {
        let fx = f64::from(x);
        let y = baseline + amplitude * (2.0 * std::f64::consts::PI * (fx + phase) / period).sin();
        if x == 0 {
            path.move_to((fx, y));
        } else {
            path.line_to((fx, y));
        }
    }
    path
}
