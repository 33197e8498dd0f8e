//! Structural edits on the diaporama.
//!
//! Every edit is a pure transform: the input diaporama is left untouched and
//! a new one is produced. Requests that make no sense for the current
//! sequence (moving past a boundary, removing a transition that is not
//! there, targeting a removed id) are no-ops rather than errors.

use tracing::debug;
use uuid::Uuid;

use crate::diaporama::Diaporama;
use crate::item::{TimelineItem, TransitionNext};
use crate::pointer::SelectionPointer;

// ── Diaporama actions ───────────────────────────────────────────

/// An edit applied to the diaporama as a whole.
#[derive(Debug, Clone, PartialEq)]
pub enum DiaporamaAction {
    /// Replace the item with the same id, keeping its position.
    SetItem(TimelineItem),
    /// Remove an item, or only its transition for a transition pointer.
    RemoveItem(SelectionPointer),
    /// Swap an item with its left neighbour.
    MoveLeft(Uuid),
    /// Swap an item with its right neighbour.
    MoveRight(Uuid),
    /// Insert a new item at `index` (clamped to the sequence length).
    InsertItem { index: usize, item: TimelineItem },
    /// Add a new item at the end.
    AppendItem(TimelineItem),
}

impl DiaporamaAction {
    /// The effect of dropping a dragged element outside the timeline.
    pub fn drop_to_remove(pointer: SelectionPointer) -> Self {
        Self::RemoveItem(pointer)
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetItem(_) => "setItem",
            Self::RemoveItem(_) => "removeItem",
            Self::MoveLeft(_) => "moveLeft",
            Self::MoveRight(_) => "moveRight",
            Self::InsertItem { .. } => "insertItem",
            Self::AppendItem(_) => "appendItem",
        }
    }
}

// ── Selection actions ───────────────────────────────────────────

/// An edit applied to whatever the selection currently points at.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionAction {
    /// Replace the selected item.
    SetItem(TimelineItem),
    /// Replace the transition of the selected item.
    SetTransition(TransitionNext),
    /// Remove the selected element and clear the selection.
    Remove,
}

impl SelectionAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetItem(_) => "setItem",
            Self::SetTransition(_) => "setTransition",
            Self::Remove => "removeItem",
        }
    }
}

// ── Transforms ──────────────────────────────────────────────────

impl Diaporama {
    /// Apply an action, producing a new diaporama.
    ///
    /// A no-op yields a clone of `self`.
    pub fn alter(&self, action: &DiaporamaAction) -> Diaporama {
        self.alter_checked(action).unwrap_or_else(|| self.clone())
    }

    /// Apply an action. `None` means the request was a no-op.
    pub fn alter_checked(&self, action: &DiaporamaAction) -> Option<Diaporama> {
        let altered = match action {
            DiaporamaAction::SetItem(item) => self.set_item(item),
            DiaporamaAction::RemoveItem(pointer) => self.remove_item(pointer),
            DiaporamaAction::MoveLeft(id) => self.move_by(*id, -1),
            DiaporamaAction::MoveRight(id) => self.move_by(*id, 1),
            DiaporamaAction::InsertItem { index, item } => self.insert_item(*index, item),
            DiaporamaAction::AppendItem(item) => self.insert_item(self.len(), item),
        };
        if altered.is_none() {
            debug!(action = action.name(), "diaporama action was a no-op");
        }
        altered
    }

    /// Apply a selection action. Returns the new diaporama (`None` for a
    /// no-op) and the selection that should follow it.
    pub fn alter_selection_checked(
        &self,
        selected: Option<SelectionPointer>,
        action: &SelectionAction,
    ) -> (Option<Diaporama>, Option<SelectionPointer>) {
        let Some(pointer) = selected else {
            debug!(action = action.name(), "selection action without a selection");
            return (None, None);
        };
        match action {
            SelectionAction::SetItem(item) => (self.set_item(item), selected),
            SelectionAction::SetTransition(transition) => {
                (self.set_transition(pointer.id, transition), selected)
            }
            SelectionAction::Remove => (self.remove_item(&pointer), None),
        }
    }

    /// Apply a selection action, always producing a diaporama.
    pub fn alter_selection(
        &self,
        selected: Option<SelectionPointer>,
        action: &SelectionAction,
    ) -> (Diaporama, Option<SelectionPointer>) {
        let (altered, selection) = self.alter_selection_checked(selected, action);
        (altered.unwrap_or_else(|| self.clone()), selection)
    }

    fn set_item(&self, item: &TimelineItem) -> Option<Diaporama> {
        let index = self.position(item.id)?;
        if let Err(e) = item.validate() {
            debug!(id = %item.id, error = %e, "rejecting invalid item");
            return None;
        }
        let mut timeline = self.timeline.clone();
        timeline[index] = item.clone();
        Some(Diaporama { timeline })
    }

    fn set_transition(&self, id: Uuid, transition: &TransitionNext) -> Option<Diaporama> {
        let index = self.position(id)?;
        if !transition.duration.is_positive() {
            return None;
        }
        let mut timeline = self.timeline.clone();
        timeline[index].transition_next = Some(transition.clone());
        Some(Diaporama { timeline })
    }

    fn remove_item(&self, pointer: &SelectionPointer) -> Option<Diaporama> {
        let index = self.position(pointer.id)?;
        let mut timeline = self.timeline.clone();
        if pointer.transition {
            // Only the transition goes; the owning item stays in place.
            timeline[index].transition_next.take()?;
        } else {
            timeline.remove(index);
        }
        Some(Diaporama { timeline })
    }

    fn move_by(&self, id: Uuid, delta: isize) -> Option<Diaporama> {
        let index = self.position(id)?;
        let target = index.checked_add_signed(delta)?;
        if target >= self.len() {
            return None;
        }
        let mut timeline = self.timeline.clone();
        timeline.swap(index, target);
        Some(Diaporama { timeline })
    }

    fn insert_item(&self, index: usize, item: &TimelineItem) -> Option<Diaporama> {
        if self.position(item.id).is_some() || item.validate().is_err() {
            return None;
        }
        let mut timeline = self.timeline.clone();
        timeline.insert(index.min(timeline.len()), item.clone());
        Some(Diaporama { timeline })
    }
}

// ── Tests ───────────────────────────────────────────────────────
