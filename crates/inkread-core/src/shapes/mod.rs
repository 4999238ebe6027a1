//! Recognized shape definitions.

mod circle;
mod ellipse;
mod ingest;
mod line;
mod polygon;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use ingest::{ShapeEntry, SkipReason, SkippedShape, parse_shapes};
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use triangle::{Triangle, TriangleInput};

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used when flattening curves into path elements.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// The kinds of shape the recognizer can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Line,
    Ellipse,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Line,
        ShapeKind::Ellipse,
        ShapeKind::Polygon,
    ];

    /// Wire name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Line => "line",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// Case-insensitive lookup by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Which kind of shape this is.
    fn kind(&self) -> ShapeKind;

    /// Axis-aligned bounding box.
    fn bounds(&self) -> Rect;

    /// Outline to stroke, or `None` when the shape is degenerate and draws nothing.
    fn to_path(&self) -> Option<BezPath>;
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
    Line(Line),
    Ellipse(Ellipse),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(s) => s.kind(),
            Shape::Circle(s) => s.kind(),
            Shape::Triangle(s) => s.kind(),
            Shape::Line(s) => s.kind(),
            Shape::Ellipse(s) => s.kind(),
            Shape::Polygon(s) => s.kind(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Triangle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
        }
    }

    pub fn to_path(&self) -> Option<BezPath> {
        match self {
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
            Shape::Triangle(s) => s.to_path(),
            Shape::Line(s) => s.to_path(),
            Shape::Ellipse(s) => s.to_path(),
            Shape::Polygon(s) => s.to_path(),
        }
    }
}

/// Closed path through `points` in order.
pub(crate) fn closed_polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }
    path.close_path();
    path
}

/// Bounding box of a point set.
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |rect, p| rect.union_pt(*p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_kind_lookup_is_case_insensitive() {
        assert_eq!(ShapeKind::from_name("Rectangle"), Some(ShapeKind::Rectangle));
        assert_eq!(ShapeKind::from_name("POLYGON"), Some(ShapeKind::Polygon));
        assert_eq!(ShapeKind::from_name("banana"), None);
    }

    #[test]
    fn test_closed_polyline() {
        let path = closed_polyline(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ]);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(1.0, 0.0)),
                PathEl::LineTo(Point::new(0.0, 1.0)),
                PathEl::ClosePath,
            ]
        );
        assert!(closed_polyline(&[]).elements().is_empty());
    }

    #[test]
    fn test_points_bounds() {
        let bounds = points_bounds(&[
            Point::new(5.0, 1.0),
            Point::new(-2.0, 4.0),
            Point::new(3.0, 9.0),
        ]);
        assert_eq!(bounds, Rect::new(-2.0, 1.0, 5.0, 9.0));
    }
}
