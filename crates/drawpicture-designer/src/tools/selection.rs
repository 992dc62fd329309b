use drawpicture_settings::HandleSettings;

use super::{Tool, ToolKind};
use crate::document::Document;
use crate::handles::{CursorIcon, HandleController, HandleId, HandleState};
use crate::history::HistorySnapshot;
use crate::hit_test::HitFilter;
use crate::input::PointerEvent;
use crate::model::Point;
use crate::renderer::Renderer;

/// Drag of a whole multi-shape selection.
#[derive(Debug)]
struct MoveDrag {
    origin: Point,
    last: Point,
    moving: bool,
    was_modified: bool,
    snapshot: HistorySnapshot,
}

/// Click to select, Shift-click to extend, drag to move. A single selected
/// shape also gets scale and rotate handles.
#[derive(Debug, Default)]
pub struct SelectionTool {
    handles: HandleController,
    drag: Option<MoveDrag>,
    over_shape: bool,
}

impl SelectionTool {
    pub fn new(settings: HandleSettings) -> Self {
        Self {
            handles: HandleController::new(settings),
            drag: None,
            over_shape: false,
        }
    }

    pub fn handles(&self) -> &HandleController {
        &self.handles
    }

    fn translate_selection(doc: &mut Document, dx: f64, dy: f64) {
        let ids = doc.selected_ids().to_vec();
        for id in ids {
            let Some(mut transform) = doc.shape(id).map(|s| s.transform) else {
                continue;
            };
            transform.translate_by(dx, dy);
            doc.set_shape_transform(id, transform);
        }
    }
}

impl Tool for SelectionTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Select
    }

    fn pointer_down(&mut self, doc: &mut Document, event: &PointerEvent) -> bool {
        if !event.is_left() {
            return false;
        }
        let p = event.position;
        let hit = doc.shape_at(p, HitFilter::selectable());
        // A shape stacked above the selected one wins over its body.
        let to_handles = match self.handles.handle_at(doc, p) {
            Some(HandleId::Body) => hit.is_none() || hit == doc.single_selection(),
            Some(_) => true,
            None => false,
        };
        if to_handles && self.handles.pointer_down(doc, event) {
            return true;
        }

        match hit {
            Some(id) => {
                if !doc.is_selected(id) {
                    doc.select_shape(id, event.modifiers.shift);
                }
                self.drag = Some(MoveDrag {
                    origin: p,
                    last: p,
                    moving: false,
                    was_modified: doc.is_modified(),
                    snapshot: doc.snapshot(),
                });
            }
            None if !event.modifiers.shift => doc.deselect_all(),
            None => {}
        }
        true
    }

    fn pointer_move(&mut self, doc: &mut Document, event: &PointerEvent) -> bool {
        if self.handles.is_dragging() {
            return self.handles.pointer_move(doc, event);
        }

        let Some(drag) = self.drag.as_mut() else {
            self.handles.pointer_move(doc, event);
            self.over_shape = doc
                .shape_at(event.position, HitFilter::selectable())
                .is_some();
            return false;
        };

        let p = event.position;
        if !drag.moving {
            if p.distance_to(&drag.origin) <= self.handles.settings().move_threshold {
                return true;
            }
            drag.moving = true;
        }
        Self::translate_selection(doc, p.x - drag.last.x, p.y - drag.last.y);
        drag.last = p;
        true
    }

    fn pointer_up(&mut self, doc: &mut Document, event: &PointerEvent) -> bool {
        if self.handles.is_dragging() {
            return self.handles.pointer_up(doc, event);
        }
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if drag.moving {
            let p = event.position;
            Self::translate_selection(doc, p.x - drag.last.x, p.y - drag.last.y);
            doc.commit_snapshot(drag.snapshot);
            tracing::debug!("Moved {} shapes", doc.selection_count());
        }
        true
    }

    fn cancel(&mut self, doc: &mut Document) {
        self.handles.cancel(doc);
        if let Some(drag) = self.drag.take() {
            if drag.moving {
                Self::translate_selection(
                    doc,
                    drag.origin.x - drag.last.x,
                    drag.origin.y - drag.last.y,
                );
                doc.set_modified(drag.was_modified);
            }
        }
    }

    fn cursor(&self, doc: &Document) -> CursorIcon {
        match self.handles.state() {
            HandleState::Idle if self.drag.as_ref().is_some_and(|d| d.moving) => {
                CursorIcon::Grabbing
            }
            HandleState::Idle if self.over_shape => CursorIcon::Move,
            _ => self.handles.cursor(doc),
        }
    }

    fn paint_overlay(&self, doc: &Document, renderer: &mut dyn Renderer) {
        self.handles.paint_overlay(doc, renderer);
    }
}
