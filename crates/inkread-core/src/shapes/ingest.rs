//! Normalization of raw recognizer output into shapes.
//!
//! Each raw object is converted on its own: a bad entry becomes
//! [`ShapeEntry::Skipped`] and never affects its neighbours.

use super::{Circle, Ellipse, Line, Polygon, Rectangle, Shape, ShapeKind, Triangle, TriangleInput};
use kurbo::Point;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// One element of a recognizer shape batch after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEntry {
    Shape(Shape),
    Skipped(SkippedShape),
}

/// A raw entry that could not be turned into a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedShape {
    /// The raw `type` tag, when there was one.
    pub kind: Option<String>,
    pub reason: SkipReason,
}

/// Why an entry was skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Not a JSON object, or no string `type` field.
    MissingKind,
    /// A `type` this build does not know.
    UnknownKind,
    /// Required fields are missing or have the wrong type.
    Malformed(String),
    /// Triangle with neither a valid points array nor six coordinates.
    IncompleteTriangle,
    /// Polygon with fewer than three points.
    TooFewPoints(usize),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingKind => write!(f, "missing shape type"),
            SkipReason::UnknownKind => write!(f, "unknown shape type"),
            SkipReason::Malformed(detail) => write!(f, "malformed shape: {detail}"),
            SkipReason::IncompleteTriangle => {
                write!(f, "triangle needs three points or six coordinates")
            }
            SkipReason::TooFewPoints(n) => write!(f, "polygon needs at least 3 points, got {n}"),
        }
    }
}

impl ShapeEntry {
    /// Normalize one raw recognizer object.
    pub fn from_value(value: &Value) -> Self {
        let Some(tag) = value.get("type").and_then(Value::as_str) else {
            return Self::skipped(None, SkipReason::MissingKind);
        };
        let Some(kind) = ShapeKind::from_name(tag) else {
            return Self::skipped(Some(tag), SkipReason::UnknownKind);
        };

        let shape = match kind {
            ShapeKind::Rectangle => fields::<RectangleFields>(value).map(|f| {
                Shape::Rectangle(Rectangle::new(Point::new(f.x, f.y), f.width, f.height))
            }),
            ShapeKind::Circle => fields::<CircleFields>(value).map(|f| {
                Shape::Circle(Circle::new(Point::new(f.center_x, f.center_y), f.radius))
            }),
            ShapeKind::Line => fields::<LineFields>(value).map(|f| {
                Shape::Line(Line::new(Point::new(f.x1, f.y1), Point::new(f.x2, f.y2)))
            }),
            ShapeKind::Ellipse => fields::<EllipseFields>(value).map(|f| {
                Shape::Ellipse(
                    Ellipse::new(Point::new(f.center_x, f.center_y), f.radius_x, f.radius_y)
                        .with_rotation(f.rotation.unwrap_or(0.0)),
                )
            }),
            ShapeKind::Triangle => triangle_input(value)
                .map(|input| Shape::Triangle(Triangle::from(input)))
                .ok_or(SkipReason::IncompleteTriangle),
            ShapeKind::Polygon => fields::<PolygonFields>(value).and_then(|f| {
                let count = f.points.len();
                let points = f.points.into_iter().map(Point::from).collect();
                Polygon::new(points)
                    .map(Shape::Polygon)
                    .ok_or(SkipReason::TooFewPoints(count))
            }),
        };

        match shape {
            Ok(shape) => ShapeEntry::Shape(shape),
            Err(reason) => Self::skipped(Some(tag), reason),
        }
    }

    fn skipped(kind: Option<&str>, reason: SkipReason) -> Self {
        ShapeEntry::Skipped(SkippedShape {
            kind: kind.map(str::to_string),
            reason,
        })
    }

    pub fn shape(&self) -> Option<&Shape> {
        match self {
            ShapeEntry::Shape(shape) => Some(shape),
            ShapeEntry::Skipped(_) => None,
        }
    }
}

/// Normalize a whole batch, preserving order.
pub fn parse_shapes(values: &[Value]) -> Vec<ShapeEntry> {
    values.iter().map(ShapeEntry::from_value).collect()
}

fn fields<T: DeserializeOwned>(value: &Value) -> Result<T, SkipReason> {
    T::deserialize(value).map_err(|e| SkipReason::Malformed(e.to_string()))
}

/// Resolve the two triangle encodings. A valid points array wins.
fn triangle_input(value: &Value) -> Option<TriangleInput> {
    let from_points = value
        .get("points")
        .and_then(|points| Vec::<WirePoint>::deserialize(points).ok())
        .and_then(|points| <[WirePoint; 3]>::try_from(points).ok())
        .map(|[a, b, c]| TriangleInput::Points([a.into(), b.into(), c.into()]));

    from_points.or_else(|| {
        let f = fields::<TriangleCoordFields>(value).ok()?;
        Some(TriangleInput::Coords {
            x1: f.x1,
            y1: f.y1,
            x2: f.x2,
            y2: f.y2,
            x3: f.x3,
            y3: f.y3,
        })
    })
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct WirePoint {
    x: f64,
    y: f64,
}

impl From<WirePoint> for Point {
    fn from(p: WirePoint) -> Self {
        Point::new(p.x, p.y)
    }
}

#[derive(Deserialize)]
struct RectangleFields {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CircleFields {
    center_x: f64,
    center_y: f64,
    radius: f64,
}

#[derive(Deserialize)]
struct LineFields {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EllipseFields {
    center_x: f64,
    center_y: f64,
    radius_x: f64,
    radius_y: f64,
    #[serde(default)]
    rotation: Option<f64>,
}

#[derive(Deserialize)]
struct TriangleCoordFields {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
}

#[derive(Deserialize)]
struct PolygonFields {
    points: Vec<WirePoint>,
}
