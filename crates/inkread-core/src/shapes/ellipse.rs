//! Ellipse shape.

use super::{PATH_TOLERANCE, ShapeKind, ShapeTrait};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An ellipse outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Center point.
    pub center: Point,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius.
    pub radius_y: f64,
    /// Rotation angle in radians (around center).
    #[serde(default)]
    pub rotation: f64,
}

impl Ellipse {
    /// Create a new, unrotated ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Non-positive or non-finite radii draw nothing.
    pub fn is_degenerate(&self) -> bool {
        let valid = |r: f64| r.is_finite() && r > 0.0;
        !(valid(self.radius_x) && valid(self.radius_y))
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::new(self.center, (self.radius_x, self.radius_y), self.rotation)
    }
}

impl ShapeTrait for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
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
    fn test_ellipse_creation() {
        let ellipse = Ellipse::new(Point::new(50.0, 50.0), 30.0, 20.0);
        assert!((ellipse.rotation).abs() < f64::EPSILON);
        assert!(ellipse.to_path().is_some());
    }

    #[test]
    fn test_bounds() {
        let ellipse = Ellipse::new(Point::new(50.0, 50.0), 30.0, 20.0);
        let bounds = ellipse.bounds();
        assert!((bounds.x0 - 20.0).abs() < 1e-6);
        assert!((bounds.y0 - 30.0).abs() < 1e-6);
        assert!((bounds.x1 - 80.0).abs() < 1e-6);
        assert!((bounds.y1 - 70.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotated_bounds_swap_axes() {
        let ellipse =
            Ellipse::new(Point::new(0.0, 0.0), 30.0, 10.0).with_rotation(std::f64::consts::FRAC_PI_2);
        let bounds = ellipse.bounds();
        assert!((bounds.width() - 20.0).abs() < 1e-6);
        assert!((bounds.height() - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_radius() {
        let ellipse = Ellipse::new(Point::new(0.0, 0.0), 0.0, 10.0);
        assert!(ellipse.to_path().is_none());
    }
}
