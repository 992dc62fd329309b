use drawpicture_designer::{
    Document, EditorCommand, Key, KeyEvent, Modifiers, Rect, RectangleShape, Shape, ShapeKind,
};

fn square(x: f64) -> Shape {
    Shape::new(ShapeKind::Rectangle(RectangleShape::new(Rect::new(x, 0.0, 10.0, 10.0))))
}

fn key(key: Key, modifiers: Modifiers) -> Option<EditorCommand> {
    EditorCommand::from_key(&KeyEvent::new(key, modifiers))
}

#[test]
fn test_default_bindings() {
    assert_eq!(key(Key::Delete, Modifiers::NONE), Some(EditorCommand::DeleteSelection));
    assert_eq!(key(Key::Escape, Modifiers::NONE), Some(EditorCommand::DeselectAll));
    assert_eq!(key(Key::Char('a'), Modifiers::CTRL), Some(EditorCommand::SelectAll));
    assert_eq!(key(Key::Char(']'), Modifiers::CTRL), Some(EditorCommand::BringToFront));
    assert_eq!(key(Key::Char('['), Modifiers::CTRL), Some(EditorCommand::SendToBack));
    assert_eq!(key(Key::Char('Z'), Modifiers::CTRL), Some(EditorCommand::Undo));
    assert_eq!(key(Key::Char('c'), Modifiers::NONE), None);
}

#[test]
fn test_commands_drive_the_document() {
    let mut doc = Document::new();
    let first = doc.add_shape(square(0.0));
    doc.add_shape(square(20.0));

    assert!(EditorCommand::SelectAll.execute(&mut doc));
    assert_eq!(doc.selection_count(), 2);

    assert!(EditorCommand::CloneSelection.execute(&mut doc));
    assert_eq!(doc.shape_count(), 4);
    assert!(!doc.is_selected(first));

    assert!(EditorCommand::DeleteSelection.execute(&mut doc));
    assert_eq!(doc.shape_count(), 2);
    assert!(!EditorCommand::DeleteSelection.execute(&mut doc));

    assert!(EditorCommand::Undo.execute(&mut doc));
    assert_eq!(doc.shape_count(), 4);
    assert!(EditorCommand::Redo.execute(&mut doc));
    assert_eq!(doc.shape_count(), 2);
}

#[test]
fn test_restack_and_deselect() {
    let mut doc = Document::new();
    let bottom = doc.add_shape(square(0.0));
    doc.add_shape(square(0.0));
    doc.select_shape(bottom, false);

    assert!(EditorCommand::BringToFront.execute(&mut doc));
    assert_eq!(doc.index_of(bottom), Some(1));
    assert!(EditorCommand::SendToBack.execute(&mut doc));
    assert_eq!(doc.index_of(bottom), Some(0));

    assert!(EditorCommand::DeselectAll.execute(&mut doc));
    assert!(!EditorCommand::DeselectAll.execute(&mut doc));
    assert!(!EditorCommand::BringToFront.execute(&mut doc));
}

#[test]
fn test_undo_with_empty_history_reports_nothing_done() {
    let mut doc = Document::new();
    assert!(!EditorCommand::Undo.execute(&mut doc));
    assert!(!EditorCommand::Redo.execute(&mut doc));
    assert_eq!(EditorCommand::Undo.name(), "Undo");
}
