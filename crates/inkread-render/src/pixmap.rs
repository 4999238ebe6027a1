//! CPU raster target backed by a tiny-skia pixmap.

use inkread_core::raster::{RasterError, RasterResult, RasterTarget};
use inkread_core::stroke::Pen;
use kurbo::{BezPath, Cap, Join, PathEl};
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// An owned copy of a pixmap's premultiplied RGBA bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
}

/// Anti-aliased raster surface. Blank means fully transparent.
#[derive(Debug, Clone)]
pub struct PixmapTarget {
    pixmap: Pixmap,
}

impl PixmapTarget {
    /// Create a blank target. Zero-sized targets are rejected.
    pub fn new(width: u32, height: u32) -> RasterResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// True when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == 0)
    }

    /// Straight (non-premultiplied) RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        rgba
    }
}

impl RasterTarget for PixmapTarget {
    type Buffer = PixelBuffer;

    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn stroke_path(&mut self, path: &BezPath, pen: &Pen) {
        let Some(skia_path) = to_skia_path(path) else {
            log::debug!("Skipping empty or non-finite path");
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(pen.color.r, pen.color.g, pen.color.b, pen.color.a);
        paint.anti_alias = true;

        self.pixmap
            .stroke_path(&skia_path, &paint, &to_skia_stroke(pen), Transform::identity(), None);
    }

    fn snapshot(&self) -> Self::Buffer {
        PixelBuffer {
            data: self.pixmap.data().to_vec(),
        }
    }

    fn restore(&mut self, buffer: &Self::Buffer) {
        let data = self.pixmap.data_mut();
        if data.len() != buffer.data.len() {
            log::error!(
                "Snapshot size mismatch: {} bytes for a {} byte raster",
                buffer.data.len(),
                data.len()
            );
            return;
        }
        data.copy_from_slice(&buffer.data);
    }

    fn encode_png(&self) -> RasterResult<Vec<u8>> {
        encode_png(&self.to_rgba8(), self.width(), self.height())
    }
}

/// Encode straight RGBA pixel data to PNG bytes.
pub fn encode_png(rgba_data: &[u8], width: u32, height: u32) -> RasterResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| RasterError::Encode(format!("PNG header: {e}")))?;
        writer
            .write_image_data(rgba_data)
            .map_err(|e| RasterError::Encode(format!("PNG data: {e}")))?;
    }
    Ok(png_data)
}

/// Convert a kurbo path into a tiny-skia path.
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

fn to_skia_stroke(pen: &Pen) -> Stroke {
    let line_cap = match pen.stroke.start_cap {
        Cap::Butt => LineCap::Butt,
        Cap::Round => LineCap::Round,
        Cap::Square => LineCap::Square,
    };
    let line_join = match pen.stroke.join {
        Join::Bevel => LineJoin::Bevel,
        Join::Miter => LineJoin::Miter,
        Join::Round => LineJoin::Round,
    };
    Stroke {
        width: pen.stroke.width as f32,
        miter_limit: pen.stroke.miter_limit as f32,
        line_cap,
        line_join,
        ..Stroke::default()
    }
}
