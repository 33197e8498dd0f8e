//! Panel descriptors.

use std::fmt;

use diapo_core::RationalTime;
use diapo_timeline::{Diaporama, SelectionPointer};
use serde::{Deserialize, Serialize};

use crate::view::PanelView;

/// Name of an editing panel. Declaration order is navigation order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum PanelMode {
    About,
    Error,
    Config,
    #[default]
    Library,
    Generate,
    EditSlide2d,
    EditImage,
    EditTransition,
}

impl PanelMode {
    pub const ALL: [PanelMode; 8] = [
        PanelMode::About,
        PanelMode::Error,
        PanelMode::Config,
        PanelMode::Library,
        PanelMode::Generate,
        PanelMode::EditSlide2d,
        PanelMode::EditImage,
        PanelMode::EditTransition,
    ];

    /// Stable identifier used in logs and config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Error => "error",
            Self::Config => "config",
            Self::Library => "library",
            Self::Generate => "generate",
            Self::EditSlide2d => "editSlide2d",
            Self::EditImage => "editImage",
            Self::EditTransition => "editTransition",
        }
    }
}

impl fmt::Display for PanelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width and height available to a panel body.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Snapshot of the state panels are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct PanelContext<'a> {
    /// Current selection, possibly dangling
    pub selected: Option<SelectionPointer>,
    pub diaporama: &'a Diaporama,
    /// Message of the last unexpected application error
    pub error: Option<&'a str>,
    /// Playhead position
    pub time: RationalTime,
}

impl<'a> PanelContext<'a> {
    pub fn new(diaporama: &'a Diaporama) -> Self {
        Self {
            selected: None,
            diaporama,
            error: None,
            time: RationalTime::ZERO,
        }
    }

    pub fn with_selection(mut self, selected: Option<SelectionPointer>) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn with_time(mut self, time: RationalTime) -> Self {
        self.time = time;
        self
    }
}

/// Accessibility predicate over the current state.
pub type AccessibleFn = fn(&PanelContext<'_>) -> bool;

/// Produces the view model of a panel for the given body size.
pub type RenderFn = fn(&PanelContext<'_>, Dimensions) -> PanelView;

/// An immutable panel descriptor.
#[derive(Clone)]
pub struct Panel {
    pub mode: PanelMode,
    /// Navigation tooltip
    pub title: &'static str,
    /// Navigation icon name
    pub icon: &'static str,
    /// Panel scrolls its own content, so no scroll bar is reserved
    pub internal_scroll: bool,
    pub accessible: AccessibleFn,
    pub render: RenderFn,
}

impl Panel {
    /// Evaluate the accessibility predicate.
    pub fn is_accessible(&self, ctx: &PanelContext<'_>) -> bool {
        (self.accessible)(ctx)
    }

    /// Render the panel body.
    pub fn render(&self, ctx: &PanelContext<'_>, dims: Dimensions) -> PanelView {
        (self.render)(ctx, dims)
    }
}

impl fmt::Debug for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("mode", &self.mode)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("internal_scroll", &self.internal_scroll)
            .finish_non_exhaustive()
    }
}
