//! Top-level editor state.
//!
//! Events are applied synchronously, one at a time, in dispatch order. Every
//! edit replaces the diaporama snapshot; readers holding a `PanelContext`
//! see a consistent state for as long as they borrow it.

use diapo_core::{RationalTime, Result};
use diapo_panels::{
    Dimensions, NavEntry, NavError, Navigator, PanelContext, PanelMode, PanelRegistry, PanelView,
};
use diapo_timeline::{
    Diaporama, DiaporamaAction, History, ImageRef, SelectionAction, SelectionPointer, TimelineItem,
    TransitionNext,
};
use smallvec::SmallVec;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::EditorConfig;

/// Owner of the diaporama, the selection and the navigation mode.
#[derive(Debug)]
pub struct EditorState {
    diaporama: Diaporama,
    selection: Option<SelectionPointer>,
    navigator: Navigator,
    registry: PanelRegistry,
    history: History,
    error: Option<String>,
    time: RationalTime,
    item_duration: RationalTime,
    default_transition: Option<TransitionNext>,
}

impl EditorState {
    /// Create an empty editor.
    pub fn new(config: &EditorConfig) -> Result<Self> {
        Self::with_diaporama(config, Diaporama::new())
    }

    /// Create an editor over an existing diaporama.
    pub fn with_diaporama(config: &EditorConfig, diaporama: Diaporama) -> Result<Self> {
        config.validate()?;
        diaporama.validate()?;
        Ok(Self {
            diaporama,
            selection: None,
            navigator: Navigator::default(),
            registry: PanelRegistry::with_layout(config.layout()),
            history: History::new(config.history_depth),
            error: None,
            time: RationalTime::ZERO,
            item_duration: config.item_duration(),
            default_transition: config.transition()?,
        })
    }

    // ── Snapshots ───────────────────────────────────────────────

    pub fn diaporama(&self) -> &Diaporama {
        &self.diaporama
    }

    pub fn selection(&self) -> Option<SelectionPointer> {
        self.selection
    }

    pub fn mode(&self) -> PanelMode {
        self.navigator.mode()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// State the panels are evaluated against.
    pub fn context(&self) -> PanelContext<'_> {
        panel_context(&self.diaporama, self.selection, self.error.as_deref(), self.time)
    }

    pub fn is_accessible(&self, mode: PanelMode) -> bool {
        self.registry.is_accessible(mode, &self.context())
    }

    pub fn nav_entries(&self) -> SmallVec<[NavEntry; 8]> {
        self.registry.nav_entries(self.mode(), &self.context())
    }

    /// Render the active panel inside `bound`.
    pub fn render(&self, bound: Dimensions) -> Option<PanelView> {
        self.registry.render(self.mode(), &self.context(), bound)
    }

    // ── Selection and playback ──────────────────────────────────

    /// Select an element. Dangling pointers are accepted as-is.
    pub fn select(&mut self, pointer: SelectionPointer) {
        self.selection = Some(pointer);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn set_time(&mut self, time: RationalTime) {
        self.time = time;
    }

    // ── Edits ───────────────────────────────────────────────────

    /// Apply a diaporama action. Returns whether anything changed.
    pub fn alter_diaporama(&mut self, action: DiaporamaAction) -> bool {
        match self.diaporama.alter_checked(&action) {
            Some(next) => {
                info!(action = action.name(), items = next.len(), "diaporama altered");
                self.commit(next);
                true
            }
            None => false,
        }
    }

    /// Apply an action to the current selection. Returns whether the
    /// diaporama changed.
    pub fn alter_selection(&mut self, action: SelectionAction) -> bool {
        let (next, selection) = self
            .diaporama
            .alter_selection_checked(self.selection, &action);
        self.selection = selection;
        match next {
            Some(next) => {
                info!(action = action.name(), items = next.len(), "selection altered");
                self.commit(next);
                true
            }
            None => false,
        }
    }

    /// Effect of dropping a dragged timeline element on the panel area.
    pub fn drop_to_remove(&mut self, pointer: SelectionPointer) -> bool {
        self.alter_diaporama(DiaporamaAction::drop_to_remove(pointer))
    }

    /// Append an image with the configured duration and transition.
    pub fn add_image(&mut self, image: ImageRef) -> Result<Uuid> {
        let mut item = TimelineItem::image(image, self.item_duration)?;
        item.transition_next = self.default_transition.clone();
        let id = item.id;
        self.alter_diaporama(DiaporamaAction::AppendItem(item));
        Ok(id)
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.diaporama.clone()) {
            Some(previous) => {
                self.diaporama = previous;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.diaporama.clone()) {
            Some(next) => {
                self.diaporama = next;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn commit(&mut self, next: Diaporama) {
        let previous = std::mem::replace(&mut self.diaporama, next);
        self.history.push(previous);
    }

    // ── Navigation ──────────────────────────────────────────────

    /// Switch panels unconditionally.
    pub fn on_nav(&mut self, mode: PanelMode) {
        self.navigator.on_nav(mode);
    }

    /// Switch panels only if the target is accessible.
    pub fn try_nav(&mut self, mode: PanelMode) -> std::result::Result<(), NavError> {
        let ctx = panel_context(&self.diaporama, self.selection, self.error.as_deref(), self.time);
        self.navigator.try_nav(mode, &self.registry, &ctx)
    }

    /// Record an unexpected application error and show the error panel.
    pub fn report_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "application error");
        self.error = Some(message);
        self.navigator.enter_error();
    }

    /// Leave the error panel and return to the library.
    pub fn recover(&mut self) {
        self.error = None;
        self.navigator.recover();
    }
}

fn panel_context<'a>(
    diaporama: &'a Diaporama,
    selection: Option<SelectionPointer>,
    error: Option<&'a str>,
    time: RationalTime,
) -> PanelContext<'a> {
    PanelContext::new(diaporama)
        .with_selection(selection)
        .with_error(error)
        .with_time(time)
}
