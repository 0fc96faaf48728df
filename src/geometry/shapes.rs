use std::f64::consts::PI;

use kurbo::{Circle, Shape};

use crate::foundation::core::{BezPath, CARD_HEIGHT, CARD_WIDTH, Point, Rgba8};
use crate::render::plan::{DrawOp, StrokeStyle};

/// Flattening tolerance for circles, in logical units.
const CIRCLE_TOLERANCE: f64 = 0.05;

/// Side of the square the sigil's unit space is mapped onto.
pub const SIGIL_SCALE: f64 = 250.0;

/// Center of the sigil square on the face.
pub const SIGIL_CENTER: Point = Point::new(200.0, 325.0);

/// Closed star outline with `points` tips.
///
/// Emits `2 * points` vertices, alternating `outer` and `inner` radius, starting straight up
/// from `(x, y)` and advancing clockwise by `π / points`.
pub fn star(x: f64, y: f64, outer: f64, inner: f64, points: u32) -> BezPath {
    let mut path = BezPath::new();
    if points == 0 {
        return path;
    }
    let step = PI / f64::from(points);
    for i in 0..points * 2 {
        let r = if i % 2 == 0 { outer } else { inner };
        let angle = f64::from(i) * step - PI / 2.0;
        let p = Point::new(x + angle.cos() * r, y + angle.sin() * r);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

/// Closed heart silhouette whose cleft sits at `(x, y + 0.3 * size)` and tip at `(x, y + size)`.
pub fn heart(x: f64, y: f64, size: f64) -> BezPath {
    let s = size;
    let mut path = BezPath::new();
    path.move_to((x, y + 0.3 * s));
    path.curve_to((x, y), (x - s, y), (x - s, y + 0.3 * s));
    path.curve_to((x - s, y + 0.6 * s), (x, y + s), (x, y + s));
    path.curve_to((x, y + s), (x + s, y + 0.6 * s), (x + s, y + 0.3 * s));
    path.curve_to((x + s, y), (x, y), (x, y + 0.3 * s));
    path.close_path();
    path
}

/// Full circle as a path.
pub fn circle(center: Point, radius: f64) -> BezPath {
    Circle::new(center, radius).to_path(CIRCLE_TOLERANCE)
}

/// Open polyline through `points`; empty input yields an empty path.
pub fn polyline(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

/// Map a sigil point from unit space onto the face: `center + (p - 0.5) * scale`.
pub fn sigil_to_canvas(p: Point) -> Point {
    Point::new(
        SIGIL_CENTER.x + (p.x - 0.5) * SIGIL_SCALE,
        SIGIL_CENTER.y + (p.y - 0.5) * SIGIL_SCALE,
    )
}

/// Map a design point from normalized full-card space onto the canvas.
pub fn design_to_canvas(p: Point) -> Point {
    Point::new(p.x * CARD_WIDTH, p.y * CARD_HEIGHT)
}

/// Star stroked then filled.
pub fn star_ops(
    center: Point,
    radii: (f64, f64),
    points: u32,
    stroke: Rgba8,
    fill: Rgba8,
    width: f64,
) -> [DrawOp; 2] {
    let (outer, inner) = radii;
    let path = star(center.x, center.y, outer, inner, points);
    [
        DrawOp::StrokePath {
            path: path.clone(),
            color: stroke,
            style: StrokeStyle::plain(width),
            glow: None,
        },
        DrawOp::FillPath { path, color: fill },
    ]
}

/// Heart filled then stroked.
pub fn heart_ops(center: Point, size: f64, stroke: Rgba8, fill: Rgba8, width: f64) -> [DrawOp; 2] {
    let path = heart(center.x, center.y, size);
    [
        DrawOp::FillPath {
            path: path.clone(),
            color: fill,
        },
        DrawOp::StrokePath {
            path,
            color: stroke,
            style: StrokeStyle::plain(width),
            glow: None,
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
