//! Keyboard-driven editor commands.

use crate::document::Document;
use crate::input::{Key, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    Undo,
    Redo,
    DeleteSelection,
    CloneSelection,
    SelectAll,
    DeselectAll,
    BringToFront,
    SendToBack,
}

impl EditorCommand {
    /// Default key binding, if any.
    pub fn from_key(event: &KeyEvent) -> Option<Self> {
        let m = event.modifiers;
        let command = match event.key {
            Key::Delete | Key::Backspace => EditorCommand::DeleteSelection,
            Key::Escape => EditorCommand::DeselectAll,
            Key::Char(c) if m.ctrl => match c.to_ascii_lowercase() {
                'z' if m.shift => EditorCommand::Redo,
                'z' => EditorCommand::Undo,
                'y' => EditorCommand::Redo,
                'c' => EditorCommand::CloneSelection,
                'a' => EditorCommand::SelectAll,
                ']' => EditorCommand::BringToFront,
                '[' => EditorCommand::SendToBack,
                _ => return None,
            },
            Key::Char(_) => return None,
        };
        Some(command)
    }

    /// Runs the command. Returns false when it had nothing to act on.
    pub fn execute(self, doc: &mut Document) -> bool {
        tracing::debug!("Executing {}", self.name());
        match self {
            EditorCommand::Undo => doc.undo(),
            EditorCommand::Redo => doc.redo(),
            EditorCommand::DeleteSelection => doc.delete_selected() > 0,
            EditorCommand::CloneSelection => !doc.clone_selected().is_empty(),
            EditorCommand::SelectAll => {
                doc.select_all();
                doc.selection_count() > 0
            }
            EditorCommand::DeselectAll => {
                let had_selection = doc.selection_count() > 0;
                doc.deselect_all();
                had_selection
            }
            EditorCommand::BringToFront => doc.bring_to_front(),
            EditorCommand::SendToBack => doc.send_to_back(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::Undo => "Undo",
            EditorCommand::Redo => "Redo",
            EditorCommand::DeleteSelection => "Delete",
            EditorCommand::CloneSelection => "Clone",
            EditorCommand::SelectAll => "Select All",
            EditorCommand::DeselectAll => "Deselect All",
            EditorCommand::BringToFront => "Bring to Front",
            EditorCommand::SendToBack => "Send to Back",
        }
    }
}
