use drawpicture_designer::tools::{FreehandTool, LineTool, SelectionTool, SpiralTool};
use drawpicture_designer::{
    create_tool, Color, CursorIcon, Document, HandleState, InputEvent, Modifiers, Point,
    PointerEvent, Rect, RectangleShape, Shape, ShapeKind, StrokeStyle, Tool, ToolKind, ToolStyle,
};
use drawpicture_settings::{Config, HandleSettings, ToolSettings};

fn stroke(tool: &mut dyn Tool, doc: &mut Document, points: &[Point]) {
    let (first, rest) = points.split_first().expect("at least one point");
    tool.pointer_down(doc, &PointerEvent::press(*first, Modifiers::NONE));
    for p in rest {
        tool.pointer_move(doc, &PointerEvent::drag(*p, Modifiers::NONE));
    }
    let last = points.last().copied().unwrap_or(*first);
    tool.pointer_up(doc, &PointerEvent::release(last, Modifiers::NONE));
}

fn click(tool: &mut dyn Tool, doc: &mut Document, p: Point, modifiers: Modifiers) {
    tool.pointer_down(doc, &PointerEvent::press(p, modifiers));
    tool.pointer_up(doc, &PointerEvent::release(p, modifiers));
}

fn square(x: f64, y: f64) -> Shape {
    Shape::new(ShapeKind::Rectangle(RectangleShape::new(Rect::new(x, y, 10.0, 10.0))))
}

#[test]
fn test_create_tool_matches_kind() {
    let config = Config::default();
    for kind in ToolKind::ALL {
        assert_eq!(create_tool(kind, &config).kind(), kind);
    }
}

#[test]
fn test_short_line_is_discarded() {
    let mut doc = Document::new();
    let mut tool = LineTool::new(ToolSettings::default());

    stroke(&mut tool, &mut doc, &[Point::new(0.0, 0.0), Point::new(3.0, 3.0)]);
    assert_eq!(doc.shape_count(), 0);
    assert!(!doc.can_undo());

    stroke(&mut tool, &mut doc, &[Point::new(0.0, 0.0), Point::new(4.0, 4.0), Point::new(30.0, 0.0)]);
    assert_eq!(doc.shape_count(), 1);
    match &doc.shapes()[0].kind {
        ShapeKind::Line(line) => assert_eq!(line.end, Point::new(30.0, 0.0)),
        other => panic!("expected a line, got {:?}", other),
    }
}

#[test]
fn test_rectangle_needs_both_sides() {
    let config = Config::default();
    let mut doc = Document::new();
    let mut tool = create_tool(ToolKind::Rectangle, &config);

    stroke(tool.as_mut(), &mut doc, &[Point::new(10.0, 10.0), Point::new(14.0, 40.0)]);
    assert_eq!(doc.shape_count(), 0);

    stroke(tool.as_mut(), &mut doc, &[Point::new(40.0, 30.0), Point::new(10.0, 10.0)]);
    assert_eq!(doc.shape_count(), 1);
    assert_eq!(doc.shapes()[0].bounding_rect(), Rect::new(10.0, 10.0, 30.0, 20.0));
}

#[test]
fn test_circle_radius_from_drag() {
    let config = Config::default();
    let mut doc = Document::new();
    let mut tool = create_tool(ToolKind::Circle, &config);

    stroke(tool.as_mut(), &mut doc, &[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
    assert_eq!(doc.shape_count(), 0);

    stroke(tool.as_mut(), &mut doc, &[Point::new(0.0, 0.0), Point::new(30.0, 40.0)]);
    match &doc.shapes()[0].kind {
        ShapeKind::Circle(circle) => assert_eq!(circle.radius, 50.0),
        other => panic!("expected a circle, got {:?}", other),
    }
}

#[test]
fn test_freehand_needs_enough_points() {
    let mut doc = Document::new();
    let mut tool = FreehandTool::new(ToolSettings::default());

    stroke(&mut tool, &mut doc, &[Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
    assert_eq!(doc.shape_count(), 0);

    stroke(
        &mut tool,
        &mut doc,
        &[Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)],
    );
    assert_eq!(doc.shape_count(), 1);
    assert!(!doc.shapes()[0].is_eraser);
}

#[test]
fn test_eraser_strokes_are_flagged() {
    let mut doc = Document::new();
    let mut tool = FreehandTool::eraser(ToolSettings::default());
    assert_eq!(tool.kind(), ToolKind::Eraser);

    stroke(
        &mut tool,
        &mut doc,
        &[Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)],
    );
    let shape = &doc.shapes()[0];
    assert!(shape.is_eraser);
    assert_eq!(shape.stroke.color, Color::WHITE);
    assert_eq!(shape.stroke.width, 20.0);
}

#[test]
fn test_parametric_tools_always_commit() {
    let mut doc = Document::new();
    let mut spiral = SpiralTool::new(ToolSettings::default());
    click(&mut spiral, &mut doc, Point::new(100.0, 100.0), Modifiers::NONE);
    match &doc.shapes()[0].kind {
        ShapeKind::Spiral(s) => {
            assert_eq!(s.center, Point::new(100.0, 100.0));
            assert_eq!(s.turns, 3.0);
        }
        other => panic!("expected a spiral, got {:?}", other),
    }

    let mut sine = create_tool(ToolKind::SineCurve, &Config::default());
    stroke(sine.as_mut(), &mut doc, &[Point::new(0.0, 0.0), Point::new(57.0, 2.0)]);
    match &doc.shapes()[1].kind {
        ShapeKind::SineCurve(s) => {
            assert_eq!(s.length, 100.0);
            assert_eq!(s.amplitude, 50.0);
        }
        other => panic!("expected a sine curve, got {:?}", other),
    }
}

#[test]
fn test_style_and_preview() {
    let mut doc = Document::new();
    let mut tool = LineTool::new(ToolSettings::default());
    let style = ToolStyle {
        stroke: StrokeStyle::new(Color::rgb(200, 0, 0), 4.0),
        fill: None,
    };
    tool.set_style(&style);
    assert_eq!(tool.cursor(&doc), CursorIcon::Crosshair);

    tool.pointer_down(&mut doc, &PointerEvent::press(Point::new(0.0, 0.0), Modifiers::NONE));
    tool.pointer_move(&mut doc, &PointerEvent::drag(Point::new(20.0, 0.0), Modifiers::NONE));
    assert!(tool.preview().is_some());
    assert_eq!(doc.shape_count(), 0);

    tool.pointer_up(&mut doc, &PointerEvent::release(Point::new(20.0, 0.0), Modifiers::NONE));
    assert!(tool.preview().is_none());
    assert_eq!(doc.shapes()[0].stroke, style.stroke);
}

#[test]
fn test_cancel_drops_the_draft() {
    let mut doc = Document::new();
    let mut tool = create_tool(ToolKind::Rectangle, &Config::default());
    tool.handle_event(
        &mut doc,
        &InputEvent::PointerDown(PointerEvent::press(Point::new(0.0, 0.0), Modifiers::NONE)),
    );
    tool.handle_event(
        &mut doc,
        &InputEvent::PointerMove(PointerEvent::drag(Point::new(50.0, 50.0), Modifiers::NONE)),
    );
    tool.cancel(&mut doc);
    assert!(!tool.handle_event(
        &mut doc,
        &InputEvent::PointerUp(PointerEvent::release(Point::new(50.0, 50.0), Modifiers::NONE)),
    ));
    assert_eq!(doc.shape_count(), 0);
}

#[test]
fn test_click_selects_and_empty_click_clears() {
    let mut doc = Document::new();
    let a = doc.add_shape(square(0.0, 0.0));
    let b = doc.add_shape(square(50.0, 0.0));
    let mut tool = SelectionTool::new(HandleSettings::default());

    click(&mut tool, &mut doc, Point::new(5.0, 5.0), Modifiers::NONE);
    assert_eq!(doc.selected_ids(), &[a]);

    click(&mut tool, &mut doc, Point::new(55.0, 5.0), Modifiers::NONE);
    assert_eq!(doc.selected_ids(), &[b]);

    click(&mut tool, &mut doc, Point::new(5.0, 5.0), Modifiers::SHIFT);
    assert_eq!(doc.selected_ids(), &[b, a]);

    click(&mut tool, &mut doc, Point::new(300.0, 300.0), Modifiers::SHIFT);
    assert_eq!(doc.selection_count(), 2);

    click(&mut tool, &mut doc, Point::new(300.0, 300.0), Modifiers::NONE);
    assert_eq!(doc.selection_count(), 0);
}

#[test]
fn test_click_reaches_shape_stacked_inside_selection() {
    let mut doc = Document::new();
    let big = doc.add_shape(Shape::new(ShapeKind::Rectangle(RectangleShape::new(
        Rect::new(0.0, 0.0, 200.0, 200.0),
    ))));
    let small = doc.add_shape(Shape::new(ShapeKind::Rectangle(RectangleShape::new(
        Rect::new(50.0, 50.0, 20.0, 20.0),
    ))));
    let mut tool = SelectionTool::new(HandleSettings::default());

    click(&mut tool, &mut doc, Point::new(150.0, 150.0), Modifiers::NONE);
    assert_eq!(doc.selected_ids(), &[big]);

    click(&mut tool, &mut doc, Point::new(60.0, 60.0), Modifiers::NONE);
    assert_eq!(doc.selected_ids(), &[small]);

    click(&mut tool, &mut doc, Point::new(150.0, 150.0), Modifiers::NONE);
    click(&mut tool, &mut doc, Point::new(60.0, 60.0), Modifiers::SHIFT);
    assert_eq!(doc.selected_ids(), &[big, small]);
    assert_eq!(doc.shape(big).map(|s| s.transform.translation), Some(Point::new(0.0, 0.0)));
}

#[test]
fn test_erasers_cannot_be_selected_by_click() {
    let mut doc = Document::new();
    doc.add_shape(square(0.0, 0.0).as_eraser());
    let mut tool = SelectionTool::new(HandleSettings::default());

    click(&mut tool, &mut doc, Point::new(5.0, 5.0), Modifiers::NONE);
    assert_eq!(doc.selection_count(), 0);
}

#[test]
fn test_moving_a_multi_selection_is_one_undo_step() {
    let mut doc = Document::new();
    let a = doc.add_shape(square(0.0, 0.0));
    let b = doc.add_shape(square(50.0, 0.0));
    let mut tool = SelectionTool::new(HandleSettings::default());
    click(&mut tool, &mut doc, Point::new(5.0, 5.0), Modifiers::NONE);
    click(&mut tool, &mut doc, Point::new(55.0, 5.0), Modifiers::SHIFT);
    let depth = doc.history().undo_depth();

    stroke(
        &mut tool,
        &mut doc,
        &[Point::new(5.0, 5.0), Point::new(15.0, 5.0), Point::new(25.0, 10.0)],
    );
    let offset = |id| doc.shape(id).map(|s| s.transform.translation);
    assert_eq!(offset(a), Some(Point::new(20.0, 5.0)));
    assert_eq!(offset(b), Some(Point::new(20.0, 5.0)));
    assert_eq!(doc.history().undo_depth(), depth + 1);

    assert!(doc.undo());
    assert_eq!(
        doc.shape(a).map(|s| s.transform.translation),
        Some(Point::new(0.0, 0.0))
    );
    assert_eq!(
        doc.shape(b).map(|s| s.transform.translation),
        Some(Point::new(0.0, 0.0))
    );
}

#[test]
fn test_single_selection_drags_through_handles() {
    let mut doc = Document::new();
    let a = doc.add_shape(Shape::new(ShapeKind::Rectangle(RectangleShape::default())));
    let mut tool = SelectionTool::new(HandleSettings::default());
    click(&mut tool, &mut doc, Point::new(50.0, 40.0), Modifiers::NONE);

    tool.pointer_down(&mut doc, &PointerEvent::press(Point::new(50.0, 40.0), Modifiers::NONE));
    assert!(matches!(tool.handles().state(), HandleState::Dragging { .. }));
    assert_eq!(tool.cursor(&doc), CursorIcon::Grabbing);
    tool.pointer_move(&mut doc, &PointerEvent::drag(Point::new(80.0, 40.0), Modifiers::NONE));
    tool.pointer_up(&mut doc, &PointerEvent::release(Point::new(80.0, 40.0), Modifiers::NONE));

    assert_eq!(
        doc.shape(a).map(|s| s.transform.translation),
        Some(Point::new(30.0, 0.0))
    );
    assert_eq!(tool.handles().state(), HandleState::Idle);
}

#[test]
fn test_cancel_puts_multi_selection_back() {
    let mut doc = Document::new();
    let a = doc.add_shape(square(0.0, 0.0));
    doc.add_shape(square(50.0, 0.0));
    doc.select_all();
    let mut tool = SelectionTool::new(HandleSettings::default());

    tool.pointer_down(&mut doc, &PointerEvent::press(Point::new(5.0, 5.0), Modifiers::NONE));
    tool.pointer_move(&mut doc, &PointerEvent::drag(Point::new(45.0, 5.0), Modifiers::NONE));
    tool.cancel(&mut doc);

    assert_eq!(
        doc.shape(a).map(|s| s.transform.translation),
        Some(Point::new(0.0, 0.0))
    );
}
