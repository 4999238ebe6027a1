//! InkRead Core Library
//!
//! Platform-agnostic state for the InkRead sketch recognizer: the drawing
//! surface with its undo history, the raster target seam, recognized shapes
//! and the recognizer wire protocol.

pub mod color;
pub mod history;
pub mod input;
pub mod protocol;
pub mod raster;
pub mod shapes;
pub mod stroke;
pub mod surface;

pub use color::SerializableColor;
pub use history::{History, HistorySnapshot, HISTORY_CAPACITY};
pub use input::{PointerEvent, TouchPhase, to_surface_coords};
pub use protocol::{
    ErrorResponse, ProtocolError, RecognitionMode, RecognitionRequest, RecognitionResult,
    TextResult, parse_error_message, parse_response,
};
pub use raster::{RasterError, RasterResult, RasterTarget, RecordingTarget, StrokeCommand};
pub use shapes::{Shape, ShapeEntry, ShapeKind, ShapeTrait, SkipReason, SkippedShape, parse_shapes};
pub use stroke::{Brush, Pen, StrokeSegment};
pub use surface::{DrawingSurface, PNG_DATA_URI_PREFIX};
