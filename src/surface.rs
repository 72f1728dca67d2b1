//! The mutable pixel canvas every layer paints onto.
//!
//! [`Surface`] wraps a `vello_cpu::RenderContext` for the lifetime of one
//! generation run. Draw calls are recorded in order, so later layers
//! composite over earlier ones; [`Surface::finish`] rasterizes everything
//! into a straight-alpha [`Frame`] ready for PNG encoding.

use std::path::Path;
use std::sync::Arc;

use crate::color::Rgba;
use crate::error::{WallgenError, WallgenResult};

/// Largest supported edge length. The CPU rasterizer is u16-indexed.
pub const MAX_DIM: u32 = u16::MAX as u32;

pub struct Surface {
    ctx: vello_cpu::RenderContext,
    width: u32,
    height: u32,
}

impl Surface {
    /// Allocate a transparent canvas of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> WallgenResult<Self> {
        if width == 0 || height == 0 {
            return Err(WallgenError::config("surface dimensions must be positive"));
        }
        if width > MAX_DIM || height > MAX_DIM {
            return Err(WallgenError::config(format!(
                "surface {width}x{height} exceeds the {MAX_DIM}x{MAX_DIM} rasterizer limit"
            )));
        }
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width as u16, height as u16),
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width as f64, the unit every layer formula works in.
    pub fn fwidth(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn fheight(&self) -> f64 {
        f64::from(self.height)
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_paint(color));
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(x, y, x + w, y + h));
    }

    /// Fill an arbitrary path.
    pub fn fill_path(&mut self, path: &kurbo::BezPath, color: Rgba) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_paint(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Fill a circular disc.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgba) {
        use kurbo::Shape as _;
        let path = kurbo::Circle::new((cx, cy), radius.max(0.0)).to_path(0.1);
        self.fill_path(&path, color);
    }

    /// Stroke the outline of a path with the given line width.
    ///
    /// The rasterizer only fills, so the stroke is expanded into a fillable
    /// outline first.
    pub fn stroke_path(&mut self, path: &kurbo::BezPath, color: Rgba, line_width: f64) {
        let outline = kurbo::stroke(
            path.elements().iter().copied(),
            &kurbo::Stroke::new(line_width),
            &kurbo::StrokeOpts::default(),
            0.1,
        );
        self.fill_path(&outline, color);
    }

    /// Stroke a straight line segment.
    pub fn stroke_line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: Rgba,
        line_width: f64,
    ) {
        let mut path = kurbo::BezPath::new();
        path.move_to((x0, y0));
        path.line_to((x1, y1));
        self.stroke_path(&path, color, line_width);
    }

    /// Draw a premultiplied RGBA8 buffer with its top-left corner at `(x, y)`.
    pub(crate) fn draw_premul_image(
        &mut self,
        bytes: &[u8],
        width: u32,
        height: u32,
        x: f64,
        y: f64,
    ) -> WallgenResult<()> {
        let image = image_from_premul_bytes(bytes, width, height)?;
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
        self.ctx.set_paint(image);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    /// Rasterize all recorded draws into a straight-alpha frame.
    pub fn finish(mut self) -> WallgenResult<Frame> {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width as u16, self.height as u16);
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        Ok(Frame {
            width: self.width,
            height: self.height,
            data,
        })
    }
}

/// A finished straight-alpha RGBA8 raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    /// Serialize to a PNG file. An unwritable path surfaces as an I/O error.
    pub fn write_png(&self, path: &Path) -> WallgenResult<()> {
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| match e {
            image::ImageError::IoError(io) => WallgenError::Io(io),
            other => WallgenError::render(format!("write png '{}': {other}", path.display())),
        })
    }
}

fn color_to_paint(color: Rgba) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = color.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> WallgenResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| WallgenError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| WallgenError::render("image height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(WallgenError::render("image byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; the input is already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}
