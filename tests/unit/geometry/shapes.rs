use kurbo::PathEl;

use super::*;

fn vertices(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .filter_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
            _ => None,
        })
        .collect()
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn star_has_two_vertices_per_point_and_starts_at_top() {
    let path = star(100.0, 100.0, 15.0, 7.0, 5);
    let v = vertices(&path);
    assert_eq!(v.len(), 10);
    assert!(close(v[0], Point::new(100.0, 85.0)));
    assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));

    for (i, p) in v.iter().enumerate() {
        let r = ((p.x - 100.0).powi(2) + (p.y - 100.0).powi(2)).sqrt();
        let expected = if i % 2 == 0 { 15.0 } else { 7.0 };
        assert!((r - expected).abs() < 1e-9, "vertex {i} at radius {r}");
    }
}

#[test]
fn star_with_zero_points_is_empty() {
    assert!(star(0.0, 0.0, 1.0, 1.0, 0).elements().is_empty());
}

#[test]
fn heart_is_four_curves_symmetric_about_x() {
    let path = heart(50.0, 20.0, 10.0);
    let els = path.elements();
    assert!(matches!(els[0], PathEl::MoveTo(p) if close(p, Point::new(50.0, 23.0))));
    let curves = els
        .iter()
        .filter(|el| matches!(el, PathEl::CurveTo(..)))
        .count();
    assert_eq!(curves, 4);
    assert!(matches!(els.last(), Some(PathEl::ClosePath)));

    let bbox = kurbo::Shape::bounding_box(&path);
    assert!((bbox.center().x - 50.0).abs() < 1e-6);
    assert!((bbox.max_y() - 30.0).abs() < 1e-6);
}

#[test]
fn sigil_mapping_centers_the_unit_square() {
    assert!(close(sigil_to_canvas(Point::new(0.5, 0.5)), SIGIL_CENTER));
    assert!(close(sigil_to_canvas(Point::new(0.0, 0.0)), Point::new(75.0, 200.0)));
    assert!(close(sigil_to_canvas(Point::new(1.0, 1.0)), Point::new(325.0, 450.0)));
    assert!(close(design_to_canvas(Point::new(0.5, 1.0)), Point::new(200.0, 700.0)));
}

#[test]
fn star_ops_stroke_before_fill_and_heart_ops_fill_before_stroke() {
    let c = Rgba8::rgb(1, 2, 3);
    let s = star_ops(Point::new(0.0, 0.0), (15.0, 7.0), 5, c, c, 2.0);
    assert!(matches!(s[0], DrawOp::StrokePath { .. }));
    assert!(matches!(s[1], DrawOp::FillPath { .. }));

    let h = heart_ops(Point::new(0.0, 0.0), 15.0, c, c, 2.0);
    assert!(matches!(h[0], DrawOp::FillPath { .. }));
    assert!(matches!(h[1], DrawOp::StrokePath { .. }));
}

#[test]
fn polyline_stays_open() {
    let path = polyline([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    assert_eq!(path.elements().len(), 2);
    assert!(polyline(std::iter::empty()).elements().is_empty());
}
