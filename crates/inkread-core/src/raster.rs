//! Raster target abstraction.
//!
//! A raster target is anything that can be stroked, blanked, copied out and
//! restored. The drawing surface and the shape renderer are written against
//! this trait so the pixel backend is injected rather than global.

use crate::color::SerializableColor;
use crate::stroke::Pen;
use kurbo::BezPath;
use thiserror::Error;

/// Raster errors.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Invalid raster size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Encoding failed: {0}")]
    Encode(String),
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Result type for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// A drawable pixel surface.
pub trait RasterTarget {
    /// Exclusively owned copy of the raster contents.
    type Buffer: Clone;

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Reset every pixel to the blank state.
    fn clear(&mut self);

    /// Stroke `path` with `pen`, on top of the current contents.
    fn stroke_path(&mut self, path: &BezPath, pen: &Pen);

    /// Copy the current contents out.
    fn snapshot(&self) -> Self::Buffer;

    /// Replace the current contents with a previously taken snapshot.
    fn restore(&mut self, buffer: &Self::Buffer);

    /// Encode the current contents as a PNG image.
    fn encode_png(&self) -> RasterResult<Vec<u8>>;
}

/// A draw command captured by [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCommand {
    pub path: BezPath,
    pub color: SerializableColor,
    pub width: f64,
}

/// A raster target that records stroke commands instead of pixels.
///
/// The recorded list is the visible content: `clear` empties it and
/// `restore` replaces it.
#[derive(Debug, Clone)]
pub struct RecordingTarget {
    width: u32,
    height: u32,
    commands: Vec<StrokeCommand>,
    clear_count: usize,
}

impl RecordingTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            clear_count: 0,
        }
    }

    /// Commands currently visible, in draw order.
    pub fn commands(&self) -> &[StrokeCommand] {
        &self.commands
    }

    /// How many times the target has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RasterTarget for RecordingTarget {
    type Buffer = Vec<StrokeCommand>;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clear_count += 1;
    }

    fn stroke_path(&mut self, path: &BezPath, pen: &Pen) {
        self.commands.push(StrokeCommand {
            path: path.clone(),
            color: pen.color,
            width: pen.width(),
        });
    }

    fn snapshot(&self) -> Self::Buffer {
        self.commands.clone()
    }

    fn restore(&mut self, buffer: &Self::Buffer) {
        self.commands.clone_from(buffer);
    }

    fn encode_png(&self) -> RasterResult<Vec<u8>> {
        Err(RasterError::Unsupported("recording target has no pixels"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn segment(x: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(x, x));
        path
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut target = RecordingTarget::new(10, 10);
        let pen = Pen::brush(SerializableColor::black(), 2.0);
        target.stroke_path(&segment(1.0), &pen);

        let snapshot = target.snapshot();
        target.stroke_path(&segment(2.0), &pen);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(target.commands().len(), 2);

        target.restore(&snapshot);
        assert_eq!(target.commands().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut target = RecordingTarget::new(10, 10);
        let pen = Pen::brush(SerializableColor::black(), 2.0);
        target.stroke_path(&segment(1.0), &pen);
        target.clear();
        assert!(target.is_blank());
        assert_eq!(target.clear_count(), 1);
    }

    #[test]
    fn test_png_unsupported() {
        let target = RecordingTarget::new(10, 10);
        assert!(matches!(target.encode_png(), Err(RasterError::Unsupported(_))));
    }
}
