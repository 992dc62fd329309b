use drawpicture_designer::model::Geometry;
use drawpicture_designer::model::{
    CircleShape, Color, FreehandShape, HitTolerance, LineShape, Point, Rect, RectangleShape, Shape,
    ShapeGroup, ShapeKind, ShapeType, SineCurveShape, SpiralShape, StarShape, StrokeStyle,
    SuperEllipseShape,
};
use drawpicture_designer::renderer::{paint_shape, DisplayList, DrawCommand};
use drawpicture_designer::transform::Transform;

fn tol() -> HitTolerance {
    HitTolerance::default()
}

#[test]
fn test_rectangle_contains_inclusive_edges() {
    let shape = Shape::new(ShapeKind::Rectangle(RectangleShape::default()));
    assert!(shape.contains_local(Point::new(50.0, 40.0), &tol()));
    assert!(shape.contains_local(Point::new(100.0, 80.0), &tol()));
    assert!(!shape.contains_local(Point::new(100.1, 40.0), &tol()));
}

#[test]
fn test_line_tolerance_grows_with_stroke_width() {
    let line = Shape::new(ShapeKind::Line(LineShape::new(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
    )));
    assert!(line.contains_local(Point::new(50.0, 5.0), &tol()));
    assert!(!line.contains_local(Point::new(50.0, 8.0), &tol()));

    let wide = line.with_stroke(StrokeStyle::new(Color::BLACK, 20.0));
    assert!(wide.contains_local(Point::new(50.0, 8.0), &tol()));
}

#[test]
fn test_zero_length_line_hits_near_its_point() {
    let p = Point::new(10.0, 10.0);
    let line = Shape::new(ShapeKind::Line(LineShape::new(p, p)));
    assert!(line.contains_local(Point::new(13.0, 14.0), &tol()));
    assert!(!line.contains_local(Point::new(20.0, 20.0), &tol()));
}

#[test]
fn test_circle_contains_disc() {
    let circle = Shape::new(ShapeKind::Circle(CircleShape::new(Point::new(0.0, 0.0), 10.0)));
    assert!(circle.contains_local(Point::new(6.0, 8.0), &tol()));
    assert!(!circle.contains_local(Point::new(8.0, 8.0), &tol()));
    assert_eq!(circle.bounding_rect(), Rect::new(-10.0, -10.0, 20.0, 20.0));
}

#[test]
fn test_freehand_near_stroke() {
    let path = FreehandShape::from_points(vec![
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        Point::new(50.0, 50.0),
    ]);
    let shape = Shape::new(ShapeKind::Freehand(path));
    assert!(shape.contains_local(Point::new(52.0, 25.0), &tol()));
    assert!(!shape.contains_local(Point::new(25.0, 25.0), &tol()));
}

#[test]
fn test_single_point_freehand_contains_nothing() {
    let shape = Shape::new(ShapeKind::Freehand(FreehandShape::new(Point::new(0.0, 0.0))));
    assert!(!shape.contains_local(Point::new(0.0, 0.0), &tol()));
}

#[test]
fn test_sine_curve_bounds_and_hit() {
    let curve = SineCurveShape::new(Point::new(0.0, 100.0), 50.0, 0.05, 400.0);
    assert_eq!(curve.bounding_rect(), Rect::new(0.0, 50.0, 400.0, 100.0));

    let shape = Shape::new(ShapeKind::SineCurve(curve.clone()));
    let x = 31.4;
    assert!(shape.contains_local(Point::new(x, curve.y_at(x)), &tol()));
    assert!(!shape.contains_local(Point::new(x, curve.y_at(x) + 30.0), &tol()));
    assert!(!shape.contains_local(Point::new(500.0, 100.0), &tol()));
}

#[test]
fn test_spiral_hit_between_samples() {
    let spiral = SpiralShape::new(Point::new(0.0, 0.0), 0.25, 10.0, 3.0);
    let shape = Shape::new(ShapeKind::Spiral(spiral.clone()));
    let theta = 2.0 * std::f64::consts::PI * 2.5 + 0.013;
    let r = spiral.a + spiral.b * theta;
    let p = Point::new(r * theta.cos(), r * theta.sin());
    assert!(shape.contains_local(p, &tol()));
    assert!(!shape.contains_local(Point::new(1000.0, 0.0), &tol()));
}

#[test]
fn test_star_contains_center_not_notch() {
    let star = StarShape::new(Point::new(0.0, 0.0), 50.0, 20.0, 5);
    let shape = Shape::new(ShapeKind::Star(star));
    assert!(shape.contains_local(Point::new(0.0, 0.0), &tol()));
    // Between two points at the top-right, beyond the inner radius.
    let angle = (-90.0f64 + 36.0).to_radians();
    let notch = Point::new(40.0 * angle.cos(), 40.0 * angle.sin());
    assert!(!shape.contains_local(notch, &tol()));
}

#[test]
fn test_super_ellipse_squarish() {
    let shape = Shape::new(ShapeKind::SuperEllipse(SuperEllipseShape::new(
        Point::new(0.0, 0.0),
        10.0,
        10.0,
        4.0,
    )));
    // Outside the circle of radius 10 but inside the squircle.
    assert!(shape.contains_local(Point::new(7.5, 7.5), &tol()));
    assert!(!shape.contains_local(Point::new(9.9, 9.9), &tol()));

    let flat = Shape::new(ShapeKind::SuperEllipse(SuperEllipseShape::new(
        Point::new(0.0, 0.0),
        0.0,
        10.0,
        2.0,
    )));
    assert!(!flat.contains_local(Point::new(0.0, 0.0), &tol()));
}

#[test]
fn test_group_uses_child_transforms() {
    let child = Shape::new(ShapeKind::Rectangle(RectangleShape::new(Rect::new(
        0.0, 0.0, 10.0, 10.0,
    ))))
    .with_transform(Transform::translated(Point::new(100.0, 0.0)));
    let group = Shape::new(ShapeKind::Group(ShapeGroup::new(vec![child])));

    assert_eq!(group.bounding_rect(), Rect::new(100.0, 0.0, 10.0, 10.0));
    assert!(group.contains_local(Point::new(105.0, 5.0), &tol()));
    assert!(!group.contains_local(Point::new(5.0, 5.0), &tol()));
    assert_eq!(group.shape_type(), ShapeType::Group);
}

#[test]
fn test_transparent_fill_is_dropped() {
    let shape = Shape::new(ShapeKind::Rectangle(RectangleShape::default()))
        .with_fill(Some(Color::rgba(255, 255, 255, 0)));
    assert_eq!(shape.fill, None);
}

#[test]
fn test_clone_is_independent() {
    let original = Shape::new(ShapeKind::Freehand(FreehandShape::from_points(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
    ])));
    let mut copy = original.clone();
    if let ShapeKind::Freehand(path) = &mut copy.kind {
        path.push(Point::new(2.0, 2.0));
    }
    copy.stroke.width = 9.0;

    match &original.kind {
        ShapeKind::Freehand(path) => assert_eq!(path.len(), 2),
        other => panic!("unexpected kind {:?}", other),
    }
    assert_eq!(original.stroke.width, 2.0);
}

#[test]
fn test_paint_shape_applies_transform_and_style() {
    let transform = Transform::compose(Point::new(5.0, 5.0), 30.0, 1.0, 1.0);
    let shape = Shape::new(ShapeKind::Circle(CircleShape::new(Point::new(0.0, 0.0), 4.0)))
        .with_transform(transform);
    let mut list = DisplayList::new();
    paint_shape(&shape, &mut list);

    assert_eq!(list.commands.first(), Some(&DrawCommand::Save));
    assert!(list.commands.contains(&DrawCommand::Transform(transform)));
    assert_eq!(list.commands.last(), Some(&DrawCommand::Restore));
    assert_eq!(list.primitive_count(), 1);
}
