//! Circle shape.

use super::{PATH_TOLERANCE, ShapeKind, ShapeTrait};
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// A non-positive or non-finite radius draws nothing.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0)
    }

    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn bounds(&self) -> Rect {
        if self.is_degenerate() {
            return Rect::from_points(self.center, self.center);
        }
        self.as_kurbo().bounding_box()
    }

    fn to_path(&self) -> Option<BezPath> {
        if self.is_degenerate() {
            return None;
        }
        Some(self.as_kurbo().to_path(PATH_TOLERANCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_radius_is_degenerate() {
        let circle = Circle::new(Point::new(50.0, 50.0), 0.0);
        assert!(circle.to_path().is_none());
        let circle = Circle::new(Point::new(50.0, 50.0), -4.0);
        assert!(circle.to_path().is_none());
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(50.0, 50.0), 10.0);
        let bounds = circle.bounds();
        assert!((bounds.x0 - 40.0).abs() < 1e-9);
        assert!((bounds.y1 - 60.0).abs() < 1e-9);
        assert!(circle.to_path().is_some());
    }
}
