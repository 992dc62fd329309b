use drawpicture_designer::{
    CircleShape, Document, HitFilter, HitTester, LineShape, Point, Rect, RectangleShape, Shape,
    ShapeKind, SpiralShape, Transform,
};

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::new(ShapeKind::Rectangle(RectangleShape::new(Rect::new(x, y, w, h))))
}

#[test]
fn test_topmost_shape_wins() {
    let mut doc = Document::new();
    let bottom = doc.add_shape(rect(0.0, 0.0, 100.0, 100.0));
    let top = doc.add_shape(Shape::new(ShapeKind::Circle(CircleShape::new(
        Point::new(50.0, 50.0),
        20.0,
    ))));

    assert_eq!(doc.shape_at(Point::new(50.0, 50.0), HitFilter::default()), Some(top));
    assert_eq!(doc.shape_at(Point::new(5.0, 5.0), HitFilter::default()), Some(bottom));
}

#[test]
fn test_locked_and_hidden_layers_are_ignored() {
    let mut doc = Document::new();
    let below = doc.add_shape(rect(0.0, 0.0, 100.0, 100.0));
    doc.add_layer("Over").unwrap();
    let over = doc.add_shape(rect(0.0, 0.0, 100.0, 100.0));
    let p = Point::new(50.0, 50.0);
    assert_eq!(doc.shape_at(p, HitFilter::default()), Some(over));

    doc.set_layer_locked("Over", true).unwrap();
    assert_eq!(doc.shape_at(p, HitFilter::default()), Some(below));
    assert_eq!(doc.shape_at(p, HitFilter::visible()), Some(over));

    doc.set_layer_locked("Over", false).unwrap();
    doc.set_layer_visible("Over", false).unwrap();
    assert_eq!(doc.shape_at(p, HitFilter::visible()), Some(below));
}

#[test]
fn test_eraser_strokes_are_not_selectable() {
    let mut doc = Document::new();
    let base = doc.add_shape(rect(0.0, 0.0, 100.0, 100.0));
    let eraser = doc.add_shape(
        Shape::new(ShapeKind::Line(LineShape::new(
            Point::new(0.0, 50.0),
            Point::new(100.0, 50.0),
        )))
        .as_eraser(),
    );
    let p = Point::new(50.0, 50.0);

    assert_eq!(doc.shape_at(p, HitFilter::default()), Some(eraser));
    assert_eq!(doc.shape_at(p, HitFilter::selectable()), Some(base));
}

#[test]
fn test_rotated_shape_is_hit_through_inverse() {
    let mut doc = Document::new();
    let shape = rect(-50.0, -5.0, 100.0, 10.0)
        .with_transform(Transform::compose(Point::new(200.0, 200.0), 90.0, 1.0, 1.0));
    let id = doc.add_shape(shape);

    // The bar now runs vertically through (200, 200).
    assert_eq!(doc.shape_at(Point::new(200.0, 240.0), HitFilter::default()), Some(id));
    assert_eq!(doc.shape_at(Point::new(240.0, 200.0), HitFilter::default()), None);
}

#[test]
fn test_scaled_shape_grows_hit_area() {
    let mut doc = Document::new();
    let shape = rect(0.0, 0.0, 10.0, 10.0)
        .with_transform(Transform::compose(Point::new(0.0, 0.0), 0.0, 4.0, 2.0));
    let id = doc.add_shape(shape);

    assert_eq!(doc.shape_at(Point::new(35.0, 15.0), HitFilter::default()), Some(id));
    assert_eq!(doc.shape_at(Point::new(35.0, 25.0), HitFilter::default()), None);
}

#[test]
fn test_mirrored_shape_is_hit() {
    let mut doc = Document::new();
    let shape = rect(0.0, 0.0, 10.0, 10.0)
        .with_transform(Transform::compose(Point::new(0.0, 0.0), 0.0, -1.0, 1.0));
    let id = doc.add_shape(shape);

    assert_eq!(doc.shape_at(Point::new(-5.0, 5.0), HitFilter::default()), Some(id));
    assert_eq!(doc.shape_at(Point::new(5.0, 5.0), HitFilter::default()), None);
}

#[test]
fn test_padded_bounds_reject_far_points() {
    let tester = HitTester::default();
    let shape = rect(0.0, 0.0, 10.0, 10.0);
    assert!(tester.hits(&shape, Point::new(5.0, 5.0)));
    assert!(!tester.hits(&shape, Point::new(50.0, 5.0)));
}

#[test]
fn test_inward_spiral_hits_at_its_outer_start() {
    let mut doc = Document::new();
    let id = doc.add_shape(Shape::new(ShapeKind::Spiral(SpiralShape::new(
        Point::new(0.0, 0.0),
        50.0,
        -1.0,
        1.0,
    ))));
    assert_eq!(doc.shape_at(Point::new(50.0, 0.0), HitFilter::default()), Some(id));
}
