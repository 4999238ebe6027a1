//! Rectangle shape.

use super::{ShapeKind, ShapeTrait, closed_polyline};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle. Width and height may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Anchor corner.
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Corners in drawing order, starting at the anchor.
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.position;
        [
            Point::new(x, y),
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
    }
}

impl ShapeTrait for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn bounds(&self) -> Rect {
        // from_points normalizes negative extents
        Rect::from_points(self.position, self.corners()[2])
    }

    fn to_path(&self) -> Option<BezPath> {
        Some(closed_polyline(&self.corners()))
    }
}
