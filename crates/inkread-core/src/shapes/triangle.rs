//! Triangle shape.

use super::{ShapeKind, ShapeTrait, closed_polyline, points_bounds};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// The two ways a recognizer may describe a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleInput {
    /// A `points` array of exactly three `{x, y}` objects.
    Points([Point; 3]),
    /// Flat `x1, y1, x2, y2, x3, y3` scalars.
    Coords {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    },
}

/// A closed three-vertex outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }
}

impl From<TriangleInput> for Triangle {
    fn from(input: TriangleInput) -> Self {
        match input {
            TriangleInput::Points(vertices) => Self { vertices },
            TriangleInput::Coords {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            } => Self::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)),
        }
    }
}

impl ShapeTrait for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.vertices)
    }

    fn to_path(&self) -> Option<BezPath> {
        Some(closed_polyline(&self.vertices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords() {
        let triangle = Triangle::from(TriangleInput::Coords {
            x1: 0.0,
            y1: 0.0,
            x2: 10.0,
            y2: 0.0,
            x3: 5.0,
            y3: 8.0,
        });
        assert_eq!(triangle.vertices[2], Point::new(5.0, 8.0));
        assert_eq!(triangle.bounds(), Rect::new(0.0, 0.0, 10.0, 8.0));
    }

    #[test]
    fn test_path_is_closed() {
        let triangle = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
        );
        let path = triangle.to_path().unwrap();
        assert_eq!(path.elements().len(), 4);
        assert_eq!(path.elements().last(), Some(&kurbo::PathEl::ClosePath));
    }
}
