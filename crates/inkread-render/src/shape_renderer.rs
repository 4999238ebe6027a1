//! Draws recognized shapes onto an output raster.

use inkread_core::SerializableColor;
use inkread_core::raster::RasterTarget;
use inkread_core::shapes::{ShapeEntry, SkippedShape, parse_shapes};
use inkread_core::stroke::Pen;
use kurbo::Rect;
use serde_json::Value;

/// Stroke color used for every rendered shape.
pub const OUTPUT_STROKE_COLOR: SerializableColor = SerializableColor::rgb(0x00, 0x66, 0xff);

/// Stroke width used for every rendered shape.
pub const OUTPUT_STROKE_WIDTH: f64 = 2.0;

/// Outcome of one render call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// Shapes stroked onto the target.
    pub drawn: usize,
    /// Valid shapes with nothing visible to draw (zero radius, zero length).
    pub degenerate: usize,
    /// Entries that were not shapes, with their position in the batch.
    pub skipped: Vec<(usize, SkippedShape)>,
    /// Union of the bounds of every drawn shape.
    pub extent: Option<Rect>,
}

impl RenderReport {
    /// True when part of a drawn shape lies outside a `width` x `height` target.
    pub fn exceeds(&self, width: u32, height: u32) -> bool {
        let area = Rect::new(0.0, 0.0, width as f64, height as f64);
        self.extent.is_some_and(|extent| extent.union(area) != area)
    }
}

/// Renders shape batches onto an output-only target it owns.
pub struct ShapeRenderer<R: RasterTarget> {
    target: R,
    pen: Pen,
}

impl<R: RasterTarget> ShapeRenderer<R> {
    pub fn new(target: R) -> Self {
        Self {
            target,
            pen: Pen::outline(OUTPUT_STROKE_COLOR, OUTPUT_STROKE_WIDTH),
        }
    }

    /// Clear the target, then draw every entry in order.
    ///
    /// Skipped entries are logged and never abort the batch.
    pub fn render(&mut self, entries: &[ShapeEntry]) -> RenderReport {
        self.target.clear();

        let mut report = RenderReport::default();
        for (index, entry) in entries.iter().enumerate() {
            match entry {
                ShapeEntry::Shape(shape) => match shape.to_path() {
                    Some(path) => {
                        self.target.stroke_path(&path, &self.pen);
                        report.drawn += 1;
                        let bounds = shape.bounds();
                        report.extent = Some(report.extent.map_or(bounds, |e| e.union(bounds)));
                    }
                    None => {
                        log::debug!("Shape {index} ({}) is degenerate; nothing drawn", shape.kind());
                        report.degenerate += 1;
                    }
                },
                ShapeEntry::Skipped(skipped) => {
                    log::warn!(
                        "Skipping shape {index} (type: {}): {}",
                        skipped.kind.as_deref().unwrap_or("<none>"),
                        skipped.reason
                    );
                    report.skipped.push((index, skipped.clone()));
                }
            }
        }

        log::info!(
            "Rendered {} shapes ({} degenerate, {} skipped)",
            report.drawn,
            report.degenerate,
            report.skipped.len()
        );
        if report.exceeds(self.target.width(), self.target.height()) {
            log::warn!(
                "Shapes extend beyond the {}x{} output and are cropped",
                self.target.width(),
                self.target.height()
            );
        }
        report
    }

    /// Normalize raw recognizer objects and render them.
    pub fn render_values(&mut self, values: &[Value]) -> RenderReport {
        self.render(&parse_shapes(values))
    }

    /// Blank the output without drawing anything.
    pub fn clear(&mut self) {
        self.target.clear();
    }

    pub fn target(&self) -> &R {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkread_core::raster::RecordingTarget;
    use inkread_core::shapes::SkipReason;
    use kurbo::{PathEl, Point};
    use serde_json::json;

    fn renderer() -> ShapeRenderer<RecordingTarget> {
        ShapeRenderer::new(RecordingTarget::new(200, 200))
    }

    /// MoveTo/LineTo vertices of a path, and whether it closes.
    fn vertices(path: &kurbo::BezPath) -> (Vec<Point>, bool) {
        let mut points = Vec::new();
        let mut closed = false;
        for el in path.elements() {
            match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(*p),
                PathEl::ClosePath => closed = true,
                _ => {}
            }
        }
        (points, closed)
    }

    #[test]
    fn test_rectangle_visits_four_corners() {
        let mut renderer = renderer();
        let report = renderer.render_values(&[json!({
            "type": "rectangle", "x": 10, "y": 10, "width": 50, "height": 20
        })]);
        assert_eq!(report.drawn, 1);

        let commands = renderer.target().commands();
        assert_eq!(commands.len(), 1);
        let (points, closed) = vertices(&commands[0].path);
        assert!(closed);
        assert_eq!(
            points,
            vec![
                Point::new(10.0, 10.0),
                Point::new(60.0, 10.0),
                Point::new(60.0, 30.0),
                Point::new(10.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_fixed_style_for_all_shapes() {
        let mut renderer = renderer();
        renderer.render_values(&[
            json!({"type": "line", "x1": 0, "y1": 0, "x2": 10, "y2": 10}),
            json!({"type": "circle", "centerX": 50, "centerY": 50, "radius": 10}),
            json!({"type": "ellipse", "centerX": 50, "centerY": 50, "radiusX": 10, "radiusY": 5, "rotation": 0.5}),
        ]);
        let commands = renderer.target().commands();
        assert_eq!(commands.len(), 3);
        for command in commands {
            assert_eq!(command.color, OUTPUT_STROKE_COLOR);
            assert!((command.width - OUTPUT_STROKE_WIDTH).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_polygon_with_too_few_points_draws_nothing() {
        let mut renderer = renderer();
        for points in [json!([]), json!([{"x": 0, "y": 0}]), json!([{"x": 0, "y": 0}, {"x": 5, "y": 5}])] {
            let report = renderer.render_values(&[json!({"type": "polygon", "points": points})]);
            assert_eq!(report.drawn, 0);
            assert_eq!(report.skipped.len(), 1);
            assert!(renderer.target().is_blank());
        }
    }

    #[test]
    fn test_triangle_prefers_points_array() {
        let mut renderer = renderer();
        renderer.render_values(&[json!({
            "type": "triangle",
            "points": [{"x": 1, "y": 1}, {"x": 9, "y": 1}, {"x": 5, "y": 7}],
            "x1": 100, "y1": 100, "x2": 150, "y2": 100, "x3": 125, "y3": 150
        })]);

        let (points, closed) = vertices(&renderer.target().commands()[0].path);
        assert!(closed);
        assert_eq!(
            points,
            vec![Point::new(1.0, 1.0), Point::new(9.0, 1.0), Point::new(5.0, 7.0)]
        );
    }

    #[test]
    fn test_zero_radius_circle_draws_no_arc() {
        let mut renderer = renderer();
        let report = renderer.render_values(&[json!({
            "type": "circle", "centerX": 50, "centerY": 50, "radius": 0
        })]);
        assert_eq!(report.drawn, 0);
        assert_eq!(report.degenerate, 1);
        assert!(report.skipped.is_empty());
        assert!(renderer.target().is_blank());
    }

    #[test]
    fn test_unknown_kind_is_skipped() {
        let mut renderer = renderer();
        let report = renderer.render_values(&[json!({"type": "banana"})]);
        assert_eq!(report.drawn, 0);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].1.reason, SkipReason::UnknownKind);
        assert_eq!(report.skipped[0].1.kind.as_deref(), Some("banana"));
        assert!(renderer.target().is_blank());
    }

    #[test]
    fn test_bad_entry_does_not_abort_batch() {
        let mut renderer = renderer();
        let report = renderer.render_values(&[
            json!({"type": "line", "x1": 0, "y1": 0}),
            json!({"no_type": true}),
            json!({"type": "rectangle", "x": 0, "y": 0, "width": 5, "height": 5}),
        ]);
        assert_eq!(report.drawn, 1);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[1].0, 1);
    }

    #[test]
    fn test_render_clears_previous_output() {
        let mut renderer = renderer();
        renderer.render_values(&[json!({"type": "line", "x1": 0, "y1": 0, "x2": 9, "y2": 9})]);
        renderer.render_values(&[]);
        assert!(renderer.target().is_blank());
        assert_eq!(renderer.target().clear_count(), 2);
    }

    #[test]
    fn test_extent_covers_drawn_shapes_only() {
        let mut renderer = renderer();
        let report = renderer.render_values(&[
            json!({"type": "rectangle", "x": 10, "y": 20, "width": 30, "height": 10}),
            json!({"type": "circle", "centerX": 100, "centerY": 100, "radius": 0}),
            json!({"type": "line", "x1": 50, "y1": 5, "x2": 60, "y2": 15}),
        ]);
        assert_eq!(report.extent, Some(Rect::new(10.0, 5.0, 60.0, 30.0)));
        assert!(!report.exceeds(200, 200));
        assert!(report.exceeds(50, 200));
    }

    #[test]
    fn test_empty_batch_has_no_extent() {
        let report = renderer().render_values(&[json!({"type": "banana"})]);
        assert_eq!(report.extent, None);
        assert!(!report.exceeds(1, 1));
    }
}
