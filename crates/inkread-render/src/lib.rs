//! InkRead Render Library
//!
//! Raster backends and the shape renderer for InkRead.
//! The default backend rasterizes on the CPU with tiny-skia.

mod pixmap;
mod shape_renderer;

pub use pixmap::{PixelBuffer, PixmapTarget, encode_png};
pub use shape_renderer::{OUTPUT_STROKE_COLOR, OUTPUT_STROKE_WIDTH, RenderReport, ShapeRenderer};
