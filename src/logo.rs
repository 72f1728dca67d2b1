//! Logo panel compositing: a translucent full-width band anchored at the
//! golden-ratio line, two accent border lines and the scaled vector logo.

use std::path::Path;

use crate::GOLDEN_RATIO;
use crate::color::{ACCENT_BLUE, BG_GREY};
use crate::config::LogoAlignment;
use crate::error::{WallgenError, WallgenResult};
use crate::surface::Surface;

/// Logo height is pinned to this fraction of the surface height.
pub const LOGO_HEIGHT_FRACTION: f64 = 0.17;

/// Gap kept between the logo and the right surface edge in right alignment.
pub const RIGHT_MARGIN: f64 = 10.0;

const BORDER_LINE_WIDTH: f64 = 2.0;
const BORDER_ALPHA: f64 = 0.8;
const MAX_RASTER_DIM: u32 = 16_384;

/// A parsed vector logo. Loaded once and consumed when rendered.
pub struct LogoAsset {
    tree: usvg::Tree,
}

impl LogoAsset {
    /// Read and parse an SVG file. Unreadable or malformed content is fatal.
    pub fn load(path: &Path) -> WallgenResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| WallgenError::asset(format!("read logo '{}': {e}", path.display())))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> WallgenResult<Self> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts)
            .map_err(|e| WallgenError::asset(format!("parse logo svg: {e}")))?;
        Ok(Self { tree })
    }

    /// Intrinsic (width, height) in the SVG's own units.
    pub fn intrinsic_size(&self) -> (f64, f64) {
        let size = self.tree.size();
        (f64::from(size.width()), f64::from(size.height()))
    }
}

/// Pure placement math for the logo panel, independent of any drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoLayout {
    /// Uniform scale applied to the intrinsic logo size.
    pub scale: f64,
    /// Scaled logo width in pixels.
    pub width: f64,
    /// Scaled logo height in pixels, also the panel height.
    pub height: f64,
    /// Horizontal logo origin per alignment mode.
    pub origin_x: f64,
    /// Top edge of the panel; fixed regardless of alignment.
    pub panel_y: f64,
}

impl LogoLayout {
    pub fn compute(
        surface_w: f64,
        surface_h: f64,
        intrinsic_w: f64,
        intrinsic_h: f64,
        alignment: LogoAlignment,
    ) -> WallgenResult<Self> {
        if !intrinsic_w.is_finite() || !intrinsic_h.is_finite() || intrinsic_w <= 0.0 || intrinsic_h <= 0.0 {
            return Err(WallgenError::asset("logo has invalid intrinsic size"));
        }

        let scale = LOGO_HEIGHT_FRACTION * surface_h / intrinsic_h;
        let width = intrinsic_w * scale;
        let height = intrinsic_h * scale;
        let panel_y = surface_h / GOLDEN_RATIO - height / 2.0;
        let origin_x = match alignment {
            LogoAlignment::Left => 0.0,
            LogoAlignment::Center => (surface_w - width) / 2.0,
            LogoAlignment::Right => surface_w - width - RIGHT_MARGIN,
        };

        Ok(Self {
            scale,
            width,
            height,
            origin_x,
            panel_y,
        })
    }
}

/// Draw the translucent panel, its border lines and the scaled logo.
///
/// Takes the asset by value: the handle is a scoped acquisition released
/// when this returns, on success and error paths alike.
pub fn compose_logo(
    surface: &mut Surface,
    asset: LogoAsset,
    alignment: LogoAlignment,
) -> WallgenResult<()> {
    let (intrinsic_w, intrinsic_h) = asset.intrinsic_size();
    let layout = LogoLayout::compute(
        surface.fwidth(),
        surface.fheight(),
        intrinsic_w,
        intrinsic_h,
        alignment,
    )?;

    let w = surface.fwidth();
    surface.fill_rect(0.0, layout.panel_y, w, layout.height, BG_GREY);

    let border = ACCENT_BLUE.with_alpha(BORDER_ALPHA);
    surface.stroke_line(0.0, layout.panel_y, w, layout.panel_y, border, BORDER_LINE_WIDTH);
    let bottom = layout.panel_y + layout.height;
    surface.stroke_line(0.0, bottom, w, bottom, border, BORDER_LINE_WIDTH);

    let (bytes, raster_w, raster_h) = rasterize(&asset.tree, layout.width, layout.height)?;
    surface.draw_premul_image(&bytes, raster_w, raster_h, layout.origin_x, layout.panel_y)
}

/// Rasterize the SVG at the scaled size, returning premultiplied RGBA8.
fn rasterize(tree: &usvg::Tree, width: f64, height: f64) -> WallgenResult<(Vec<u8>, u32, u32)> {
    let w = width.ceil().max(1.0) as u32;
    let h = height.ceil().max(1.0) as u32;
    if w > MAX_RASTER_DIM || h > MAX_RASTER_DIM {
        return Err(WallgenError::render(format!(
            "logo raster size too large: {w}x{h} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| WallgenError::render("failed to allocate logo pixmap"))?;
    let sx = (w as f32) / tree.size().width();
    let sy = (h as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok((pixmap.data().to_vec(), w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 1920.0;
    const H: f64 = 1080.0;

    fn layout(alignment: LogoAlignment) -> LogoLayout {
        LogoLayout::compute(W, H, 600.0, 200.0, alignment).unwrap()
    }

    #[test]
    fn logo_height_is_pinned_to_surface_fraction() {
        let l = layout(LogoAlignment::Center);
        assert!((l.height - LOGO_HEIGHT_FRACTION * H).abs() < 1e-9);
        // Aspect ratio preserved.
        assert!((l.width / l.height - 3.0).abs() < 1e-9);
    }

    #[test]
    fn panel_y_is_invariant_to_alignment() {
        let left = layout(LogoAlignment::Left);
        let center = layout(LogoAlignment::Center);
        let right = layout(LogoAlignment::Right);
        assert_eq!(left.panel_y, center.panel_y);
        assert_eq!(center.panel_y, right.panel_y);
        let expected = H / GOLDEN_RATIO - left.height / 2.0;
        assert!((left.panel_y - expected).abs() < 1e-9);
    }

    #[test]
    fn left_origin_is_zero() {
        assert_eq!(layout(LogoAlignment::Left).origin_x, 0.0);
    }

    #[test]
    fn center_origin_splits_the_slack() {
        let l = layout(LogoAlignment::Center);
        assert!((l.origin_x - (W - l.width) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn right_origin_leaves_exact_margin() {
        let l = layout(LogoAlignment::Right);
        assert!((l.origin_x + l.width + RIGHT_MARGIN - W).abs() < 1e-9);
    }

    #[test]
    fn degenerate_intrinsic_size_is_an_asset_error() {
        assert!(LogoLayout::compute(W, H, 0.0, 200.0, LogoAlignment::Center).is_err());
        assert!(LogoLayout::compute(W, H, 600.0, 0.0, LogoAlignment::Center).is_err());
    }
}
