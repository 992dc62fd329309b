use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use drawpicture_core::{DocumentEvent, EventBus, EventBusConfig, EventCategory, EventFilter};
use drawpicture_designer::{
    Document, HitFilter, LineShape, Point, Rect, RectangleShape, Shape, ShapeId, ShapeKind,
    DEFAULT_LAYER_NAME,
};

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::new(ShapeKind::Rectangle(RectangleShape::new(Rect::new(x, y, w, h))))
}

fn line() -> Shape {
    Shape::new(ShapeKind::Line(LineShape::new(
        Point::new(0.0, 0.0),
        Point::new(50.0, 50.0),
    )))
}

#[test]
fn test_new_document_has_default_layer() {
    let doc = Document::new();
    assert_eq!(doc.layer_names(), vec![DEFAULT_LAYER_NAME]);
    assert_eq!(doc.current_layer(), DEFAULT_LAYER_NAME);
    assert_eq!(doc.shape_count(), 0);
    assert!(!doc.is_modified());
    assert!(!doc.can_undo());
    assert_eq!(doc.display_name(), "Untitled");
}

#[test]
fn test_rectangle_hit_at_center_only() {
    let mut doc = Document::new();
    let id = doc.add_shape(Shape::new(ShapeKind::Rectangle(RectangleShape::default())));

    assert_eq!(doc.shape_at(Point::new(50.0, 40.0), HitFilter::default()), Some(id));
    assert_eq!(doc.shape_at(Point::new(500.0, 500.0), HitFilter::default()), None);
}

#[test]
fn test_translate_then_undo_restores_each_step() {
    let mut doc = Document::new();
    let id = doc.add_shape(rect(0.0, 0.0, 100.0, 80.0));
    assert!(doc.translate_shape(id, 10.0, 10.0));
    assert!(doc.translate_shape(id, 5.0, 5.0));

    let translation = |doc: &Document| doc.shape(id).map(|s| s.transform.translation);
    assert_eq!(translation(&doc), Some(Point::new(15.0, 15.0)));
    assert_eq!(doc.shape_at(Point::new(110.0, 90.0), HitFilter::default()), Some(id));

    assert!(doc.undo());
    assert_eq!(translation(&doc), Some(Point::new(10.0, 10.0)));

    assert!(doc.undo());
    assert_eq!(translation(&doc), Some(Point::new(0.0, 0.0)));

    assert!(doc.undo());
    assert_eq!(doc.shape_count(), 0);
    assert!(!doc.undo());
}

#[test]
fn test_undo_redo_restores_order() {
    let mut doc = Document::new();
    let first = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    let second = doc.add_shape(line());

    assert!(doc.undo());
    assert!(doc.undo());
    assert_eq!(doc.shape_count(), 0);
    assert!(doc.can_redo());

    assert!(doc.redo());
    assert!(doc.redo());
    let order: Vec<ShapeId> = doc.shapes().iter().map(|s| s.id).collect();
    assert_eq!(order, vec![first, second]);
    assert!(!doc.can_redo());
}

#[test]
fn test_new_edit_clears_redo() {
    let mut doc = Document::new();
    doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.undo();
    assert!(doc.can_redo());

    doc.add_shape(line());
    assert!(!doc.can_redo());
}

#[test]
fn test_ids_are_never_reused_after_undo() {
    let mut doc = Document::new();
    let first = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.undo();
    let second = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    assert!(second > first);
}

#[test]
fn test_clone_selected_offsets_and_selects_copies() {
    let mut doc = Document::new();
    let id = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.select_shape(id, false);

    let clones = doc.clone_selected();
    assert_eq!(clones.len(), 1);
    assert_eq!(doc.shape_count(), 2);
    assert_eq!(doc.selected_ids(), clones.as_slice());
    assert!(!doc.is_selected(id));

    let copy = doc.shape(clones[0]).map(|s| s.transform.translation);
    assert_eq!(copy, Some(Point::new(10.0, 10.0)));
    assert_eq!(doc.index_of(clones[0]), Some(1));

    assert!(doc.undo());
    assert_eq!(doc.shape_count(), 1);
}

#[test]
fn test_clone_with_empty_selection_does_nothing() {
    let mut doc = Document::new();
    doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    let before = doc.history().undo_depth();
    assert!(doc.clone_selected().is_empty());
    assert_eq!(doc.history().undo_depth(), before);
}

#[test]
fn test_delete_selected_is_one_undo_step() {
    let mut doc = Document::new();
    let a = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    let b = doc.add_shape(rect(20.0, 0.0, 10.0, 10.0));
    let c = doc.add_shape(rect(40.0, 0.0, 10.0, 10.0));
    doc.select_shape(a, false);
    doc.select_shape(c, true);

    assert_eq!(doc.delete_selected(), 2);
    assert_eq!(doc.shape_count(), 1);
    assert_eq!(doc.selection_count(), 0);
    assert!(doc.shape(b).is_some());

    assert!(doc.undo());
    assert_eq!(doc.shape_count(), 3);
    assert_eq!(doc.selection_count(), 0);
}

#[test]
fn test_z_order_restacking_keeps_relative_order() {
    let mut doc = Document::new();
    let a = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    let b = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    let c = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));

    doc.select_shape(a, false);
    doc.select_shape(b, true);
    assert!(doc.bring_to_front());
    let order: Vec<ShapeId> = doc.shapes().iter().map(|s| s.id).collect();
    assert_eq!(order, vec![c, a, b]);
    assert_eq!(doc.shape_at(Point::new(5.0, 5.0), HitFilter::default()), Some(b));

    doc.deselect_all();
    doc.select_shape(c, false);
    assert!(doc.send_to_back());
    assert_eq!(doc.index_of(c), Some(0));
}

#[test]
fn test_select_all_skips_erasers_and_inactive_layers() {
    let mut doc = Document::new();
    let plain = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.add_shape(line().as_eraser());
    doc.add_layer("Locked").unwrap();
    doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.set_layer_locked("Locked", true).unwrap();
    doc.add_layer("Hidden").unwrap();
    doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.set_layer_visible("Hidden", false).unwrap();

    doc.select_all();
    assert_eq!(doc.selected_ids(), &[plain]);
}

#[test]
fn test_selection_is_not_recorded_and_cleared_on_undo() {
    let mut doc = Document::new();
    let id = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    let depth = doc.history().undo_depth();

    doc.select_shape(id, false);
    assert_eq!(doc.history().undo_depth(), depth);
    assert!(doc.shape(id).is_some_and(|s| s.selected));

    doc.move_selected(5.0, 5.0);
    assert!(doc.undo());
    assert_eq!(doc.selection_count(), 0);
    assert!(doc.shapes().iter().all(|s| !s.selected));
}

#[test]
fn test_select_missing_shape_is_rejected() {
    let mut doc = Document::new();
    assert!(!doc.select_shape(ShapeId(42), false));
    assert_eq!(doc.selection_count(), 0);
}

#[test]
fn test_rotate_selected_keeps_center() {
    let mut doc = Document::new();
    let id = doc.add_shape(rect(0.0, 0.0, 100.0, 80.0));
    doc.select_shape(id, false);
    let before = doc.shape(id).map(|s| s.world_center());

    assert!(doc.rotate_selected(90.0));
    let shape = doc.shape(id).unwrap();
    let center = shape.world_center();
    let before = before.unwrap();
    assert!(center.distance_to(&before) < 1e-9);
    assert!((shape.transform.rotation - 90.0).abs() < 1e-9);
    let bounds = shape.world_bounds();
    assert!((bounds.width - 80.0).abs() < 1e-9);
    assert!((bounds.height - 100.0).abs() < 1e-9);
}

#[test]
fn test_scale_selected_respects_minimum() {
    let mut doc = Document::new();
    let id = doc.add_shape(rect(0.0, 0.0, 100.0, 80.0));
    doc.select_shape(id, false);

    assert!(doc.scale_selected(0.01));
    let t = doc.shape(id).unwrap().transform;
    assert_eq!(t.scale_x, 0.1);
    assert_eq!(t.scale_y, 0.1);
}

#[test]
fn test_new_shapes_go_to_current_layer() {
    let mut doc = Document::new();
    doc.add_layer("Ink").unwrap();
    let id = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0).on_layer("Nowhere"));
    assert_eq!(doc.shape(id).map(|s| s.layer.as_str()), Some("Ink"));
    assert_eq!(doc.shapes_on_layer("Ink").count(), 1);
}

#[test]
fn test_move_selected_to_layer() {
    let mut doc = Document::new();
    let id = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.add_layer("Top").unwrap();
    doc.select_shape(id, false);

    assert_eq!(doc.move_selected_to_layer("Top"), Ok(1));
    assert_eq!(doc.shape(id).map(|s| s.layer.as_str()), Some("Top"));
    assert!(doc.move_selected_to_layer("Missing").is_err());
}

#[test]
fn test_live_transform_is_not_recorded() {
    let mut doc = Document::new();
    let id = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.set_modified(false);
    let depth = doc.history().undo_depth();

    let mut t = doc.shape(id).unwrap().transform;
    t.translate_by(3.0, 4.0);
    assert!(doc.set_shape_transform(id, t));
    assert_eq!(doc.history().undo_depth(), depth);
    assert!(doc.is_modified());
    assert!(!doc.set_shape_transform(ShapeId(999), t));
}

#[test]
fn test_subscribers_see_changes() {
    let mut doc = Document::new();
    let shapes_changed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&shapes_changed);
    doc.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Shapes]),
        move |event| {
            if event == DocumentEvent::ShapesChanged {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        },
    );

    let selections = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&selections);
    doc.events().subscribe(EventFilter::All, move |event| {
        if let DocumentEvent::SelectionChanged { count } = event {
            sink.lock().unwrap().push(count);
        }
    });

    let id = doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.select_shape(id, false);
    doc.deselect_all();

    assert_eq!(shapes_changed.load(Ordering::SeqCst), 1);
    assert_eq!(*selections.lock().unwrap(), vec![1, 0]);
}

#[test]
fn test_shared_bus_keeps_history() {
    let bus = Arc::new(EventBus::with_config(EventBusConfig {
        enable_history: true,
        ..Default::default()
    }));
    let mut doc = Document::new().with_event_bus(Arc::clone(&bus));
    doc.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    doc.undo();

    let history = bus.history();
    assert!(history.contains(&DocumentEvent::ShapesChanged));
    assert!(history.contains(&DocumentEvent::HistoryChanged {
        can_undo: false,
        can_redo: true,
    }));
}
