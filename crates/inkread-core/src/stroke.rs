//! Pens, brushes and the recorded segments of a freehand stroke.

use crate::color::SerializableColor;
use kurbo::{Cap, Join, Point, Stroke};
use serde::{Deserialize, Serialize};

/// Default brush width in pixels.
pub const DEFAULT_BRUSH_WIDTH: u32 = 3;

/// One recorded piece of a stroke.
///
/// A stroke is always a single `Start` followed by zero or more `LineTo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrokeSegment {
    Start {
        point: Point,
        color: SerializableColor,
        width: u32,
    },
    LineTo {
        point: Point,
    },
}

impl StrokeSegment {
    pub fn point(&self) -> Point {
        match self {
            StrokeSegment::Start { point, .. } | StrokeSegment::LineTo { point } => *point,
        }
    }
}

/// Color and width the user currently draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    pub color: SerializableColor,
    pub width: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: SerializableColor::black(),
            width: DEFAULT_BRUSH_WIDTH,
        }
    }
}

impl Brush {
    /// The pen used to rasterize strokes drawn with this brush.
    pub fn pen(&self) -> Pen {
        Pen::brush(self.color, self.width as f64)
    }
}

/// Color plus stroke geometry for a raster stroke operation.
#[derive(Debug, Clone)]
pub struct Pen {
    pub color: SerializableColor,
    pub stroke: Stroke,
}

impl Pen {
    /// Freehand pen: round caps and round joins.
    pub fn brush(color: SerializableColor, width: f64) -> Self {
        Self {
            color,
            stroke: Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round),
        }
    }

    /// Outline pen: butt caps and miter joins.
    pub fn outline(color: SerializableColor, width: f64) -> Self {
        Self {
            color,
            stroke: Stroke::new(width).with_caps(Cap::Butt).with_join(Join::Miter),
        }
    }

    pub fn width(&self) -> f64 {
        self.stroke.width
    }
}
