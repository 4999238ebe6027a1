//! Polygon shape.

use super::{ShapeKind, ShapeTrait, closed_polyline, points_bounds};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A closed outline through three or more points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonFields")]
pub struct Polygon {
    points: Vec<Point>,
}

#[derive(Deserialize)]
struct PolygonFields {
    points: Vec<Point>,
}

impl TryFrom<PolygonFields> for Polygon {
    type Error = String;

    fn try_from(fields: PolygonFields) -> Result<Self, Self::Error> {
        let count = fields.points.len();
        Self::new(fields.points).ok_or_else(|| {
            format!("polygon needs at least {} points, got {count}", Self::MIN_POINTS)
        })
    }
}

impl Polygon {
    /// Minimum number of vertices.
    pub const MIN_POINTS: usize = 3;

    /// Returns `None` for fewer than [`Self::MIN_POINTS`] points.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        (points.len() >= Self::MIN_POINTS).then_some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl ShapeTrait for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.points)
    }

    fn to_path(&self) -> Option<BezPath> {
        Some(closed_polyline(&self.points))
    }
}
