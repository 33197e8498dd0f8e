//! Undo/redo history.
//!
//! Edits are pure transforms, so history keeps whole diaporama snapshots
//! instead of invertible commands.

use crate::diaporama::Diaporama;

/// Undo/redo history of diaporama snapshots.
#[derive(Debug)]
pub struct History {
    /// States before each applied edit (most recent last).
    undo: Vec<Diaporama>,
    /// States that were undone (most recent last).
    redo: Vec<Diaporama>,
    /// Maximum history depth.
    max_depth: usize,
}

impl History {
    /// Create a new history with the given maximum depth.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            max_depth,
        }
    }

    /// Record the state an edit replaced.
    /// Clears the redo stack (new action invalidates redo history).
    pub fn push(&mut self, previous: Diaporama) {
        self.redo.clear();
        self.undo.push(previous);
        if self.undo.len() > self.max_depth {
            self.undo.remove(0);
        }
    }

    /// Step back. `current` is moved to the redo stack and the previous
    /// state is returned.
    pub fn undo(&mut self, current: Diaporama) -> Option<Diaporama> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: Diaporama) -> Option<Diaporama> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo steps available.
    pub fn undo_count(&self) -> usize {
        self.undo.len()
    }

    /// Number of redo steps available.
    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alter::DiaporamaAction;
    use crate::item::{ImageRef, TimelineItem};
    use diapo_core::RationalTime;

    fn item(path: &str) -> TimelineItem {
        TimelineItem::image(ImageRef::new(path), RationalTime::from_secs(2)).unwrap()
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = History::new(100);
        let d0 = Diaporama::new();
        let d1 = d0.alter(&DiaporamaAction::AppendItem(item("a.jpg")));
        history.push(d0.clone());
        assert!(history.can_undo());
        assert!(!history.can_redo());

        let back = history.undo(d1.clone()).unwrap();
        assert_eq!(back, d0);
        assert!(!history.can_undo());
        assert!(history.can_redo());

        let forward = history.redo(back).unwrap();
        assert_eq!(forward, d1);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut history = History::new(100);
        let d0 = Diaporama::new();
        let d1 = d0.alter(&DiaporamaAction::AppendItem(item("a.jpg")));
        history.push(d0);
        let d0 = history.undo(d1).unwrap();
        assert!(history.can_redo());

        history.push(d0);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_depth() {
        let mut history = History::new(3);
        let mut d = Diaporama::new();
        for i in 0..5 {
            let next = d.alter(&DiaporamaAction::AppendItem(item(&format!("{i}.jpg"))));
            history.push(d);
            d = next;
        }
        assert_eq!(history.undo_count(), 3);
    }

    #[test]
    fn test_undo_on_empty_keeps_nothing() {
        let mut history = History::default();
        assert!(history.undo(Diaporama::new()).is_none());
        assert_eq!(history.redo_count(), 0);
    }
}
