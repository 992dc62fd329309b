//! Snapshot-based undo/redo.
//!
//! A [`HistorySnapshot`] is a deep copy of everything undo can restore: the
//! shape list, the layer list and the current layer name. Snapshots are
//! captured *before* a mutation, so undoing restores the state that existed
//! just prior to the recorded action.
//!
//! Both stacks are bounded; once full, the oldest entry is dropped.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use drawpicture_settings::HistorySettings;

use crate::layer::Layer;
use crate::model::Shape;

/// Deep copy of the undoable document state.
///
/// Also the logical shape of a saved document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub shapes: Vec<Shape>,
    pub layers: Vec<Layer>,
    pub current_layer: String,
}

/// Bounded undo and redo stacks of document snapshots.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    undo_stack: VecDeque<HistorySnapshot>,
    redo_stack: VecDeque<HistorySnapshot>,
    max_depth: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::from_settings(&HistorySettings::default())
    }
}

impl HistoryManager {
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn from_settings(settings: &HistorySettings) -> Self {
        Self::with_depth(settings.max_depth)
    }

    /// Records a pre-mutation snapshot. Clears the redo stack.
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.redo_stack.clear();
        Self::push_bounded(&mut self.undo_stack, snapshot, self.max_depth);
        tracing::trace!("History push, undo depth {}", self.undo_stack.len());
    }

    /// Swaps `current` onto the redo stack and returns the state to restore,
    /// or `None` (leaving both stacks alone) when there is nothing to undo.
    pub fn undo(&mut self, current: HistorySnapshot) -> Option<HistorySnapshot> {
        let previous = self.undo_stack.pop_back()?;
        Self::push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(previous)
    }

    /// Mirror of [`HistoryManager::undo`].
    pub fn redo(&mut self, current: HistorySnapshot) -> Option<HistorySnapshot> {
        let next = self.redo_stack.pop_back()?;
        Self::push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_bounded(stack: &mut VecDeque<HistorySnapshot>, snapshot: HistorySnapshot, max: usize) {
        stack.push_back(snapshot);
        while stack.len() > max {
            stack.pop_front();
        }
    }
}
