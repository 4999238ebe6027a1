//! The drawing surface: stroke capture on a raster target with undoable history.

use crate::color::SerializableColor;
use crate::history::{History, HistorySnapshot, HISTORY_CAPACITY};
use crate::input::PointerEvent;
use crate::raster::{RasterResult, RasterTarget};
use crate::stroke::{Brush, Pen, StrokeSegment};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use kurbo::{BezPath, Point};

/// Prefix of the exported data-URI.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// A stroke between pointer-down and pointer-up.
#[derive(Debug, Clone)]
struct ActiveStroke {
    /// Fixed when the stroke starts.
    pen: Pen,
    last_point: Point,
    segments: Vec<StrokeSegment>,
}

/// The canvas a user draws on.
///
/// Every completed stroke and every clear pushes a snapshot of the raster.
/// A stroke started while another is in progress commits the previous one
/// first. Clear, undo and redo discard an in-progress stroke.
pub struct DrawingSurface<R: RasterTarget> {
    target: R,
    brush: Brush,
    active: Option<ActiveStroke>,
    history: History<R::Buffer>,
}

impl<R: RasterTarget> DrawingSurface<R> {
    /// Create a surface over `target`, blanking it and recording the blank state.
    pub fn new(target: R) -> Self {
        Self::with_history_capacity(target, HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(mut target: R, capacity: usize) -> Self {
        target.clear();
        let blank = HistorySnapshot::new(target.snapshot(), Vec::new());
        Self {
            target,
            brush: Brush::default(),
            active: None,
            history: History::with_capacity(blank, capacity),
        }
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_brush_color(&mut self, color: SerializableColor) {
        log::debug!("Brush color {}", color.to_hex());
        self.brush.color = color;
    }

    /// Set the brush width. Zero is rejected.
    pub fn set_brush_width(&mut self, width: u32) -> bool {
        if width == 0 {
            log::warn!("Ignoring brush width 0");
            return false;
        }
        self.brush.width = width;
        true
    }

    /// Start a stroke at `point`. Color and width hold for the whole stroke.
    pub fn begin_stroke(&mut self, point: Point, color: SerializableColor, width: u32) {
        if self.active.is_some() {
            log::debug!("Stroke started while another was in progress; committing previous stroke");
            self.end_stroke();
        }

        let width = width.max(1);
        self.active = Some(ActiveStroke {
            pen: Brush { color, width }.pen(),
            last_point: point,
            segments: vec![StrokeSegment::Start { point, color, width }],
        });
        log::debug!("Stroke started at ({}, {})", point.x, point.y);
    }

    /// Start a stroke with the current brush.
    pub fn begin_stroke_with_brush(&mut self, point: Point) {
        let Brush { color, width } = self.brush;
        self.begin_stroke(point, color, width);
    }

    /// Draw a segment from the last point to `point`. No-op when not drawing.
    pub fn extend_stroke(&mut self, point: Point) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        let mut segment = BezPath::new();
        segment.move_to(active.last_point);
        segment.line_to(point);
        self.target.stroke_path(&segment, &active.pen);

        active.last_point = point;
        active.segments.push(StrokeSegment::LineTo { point });
    }

    /// Finish the current stroke and record it. No-op when not drawing.
    pub fn end_stroke(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        log::debug!("Stroke finished with {} segments", active.segments.len());
        self.history
            .push(HistorySnapshot::new(self.target.snapshot(), active.segments));
    }

    /// Blank the raster and record the blank state.
    pub fn clear(&mut self) {
        self.active = None;
        self.target.clear();
        self.history
            .push(HistorySnapshot::new(self.target.snapshot(), Vec::new()));
        log::info!("Surface cleared");
    }

    /// Step back one snapshot. Returns false when only the initial state remains.
    pub fn undo(&mut self) -> bool {
        self.discard_active_stroke();
        match self.history.undo() {
            Some(snapshot) => {
                self.target.restore(snapshot.raster());
                log::info!("Undo ({} snapshots left)", self.history.len());
                true
            }
            None => false,
        }
    }

    /// Reapply the most recently undone snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.discard_active_stroke();
        match self.history.redo() {
            Some(snapshot) => {
                self.target.restore(snapshot.raster());
                log::info!("Redo ({} snapshots)", self.history.len());
                true
            }
            None => false,
        }
    }

    /// Drop an in-progress stroke and repaint the last committed state over it.
    fn discard_active_stroke(&mut self) {
        if self.active.take().is_some() {
            log::debug!("Discarding in-progress stroke");
            self.target.restore(self.history.current().raster());
        }
    }

    /// Route a pointer event to the stroke operations.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.begin_stroke_with_brush(position),
            PointerEvent::Move { position } => self.extend_stroke(position),
            PointerEvent::Up | PointerEvent::Leave => self.end_stroke(),
        }
    }

    /// Encode what is currently visible, in-progress stroke included, as PNG.
    pub fn export_png(&self) -> RasterResult<Vec<u8>> {
        self.target.encode_png()
    }

    /// Encode what is currently visible as a `data:image/png;base64,` URI.
    pub fn export_snapshot(&self) -> RasterResult<String> {
        let png = self.export_png()?;
        log::info!("Exported snapshot ({} bytes PNG)", png.len());
        Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png)))
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    pub fn history(&self) -> &History<R::Buffer> {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn redo_len(&self) -> usize {
        self.history.redo_len()
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn width(&self) -> u32 {
        self.target.width()
    }

    pub fn height(&self) -> u32 {
        self.target.height()
    }
}
