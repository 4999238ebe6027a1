//! Pointer and touch events for the drawing surface.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are in surface coordinates (see [`to_surface_coords`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
    /// Pointer left the surface. Ends any stroke, like `Up`.
    Leave,
}

/// Phase of a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

impl PointerEvent {
    /// Map a touch event onto a pointer event using only the first touch.
    ///
    /// Start and move without a touch point produce nothing.
    pub fn from_touch(phase: TouchPhase, first_touch: Option<Point>) -> Option<Self> {
        match phase {
            TouchPhase::Start => first_touch.map(|position| PointerEvent::Down { position }),
            TouchPhase::Move => first_touch.map(|position| PointerEvent::Move { position }),
            TouchPhase::End => Some(PointerEvent::Up),
        }
    }
}

/// Convert client coordinates into coordinates relative to the surface's
/// top-left corner.
pub fn to_surface_coords(client: Point, surface_origin: Point) -> Point {
    client - Vec2::new(surface_origin.x, surface_origin.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_mapping() {
        let p = Point::new(4.0, 5.0);
        assert_eq!(
            PointerEvent::from_touch(TouchPhase::Start, Some(p)),
            Some(PointerEvent::Down { position: p })
        );
        assert_eq!(
            PointerEvent::from_touch(TouchPhase::Move, Some(p)),
            Some(PointerEvent::Move { position: p })
        );
        assert_eq!(
            PointerEvent::from_touch(TouchPhase::End, None),
            Some(PointerEvent::Up)
        );
        assert_eq!(PointerEvent::from_touch(TouchPhase::Move, None), None);
    }

    #[test]
    fn test_surface_coords() {
        let local = to_surface_coords(Point::new(120.0, 80.0), Point::new(100.0, 50.0));
        assert_eq!(local, Point::new(20.0, 30.0));
    }
}
