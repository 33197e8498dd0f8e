//! View models produced by panel render functions.

use diapo_core::RationalTime;
use diapo_timeline::{ImageRef, Slide2d, TimelineItem, TransitionNext};
use uuid::Uuid;

use crate::panel::Dimensions;

/// What a removed selection used to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovedKind {
    Slide,
    Transition,
}

impl RemovedKind {
    /// Placeholder text shown in place of the editor.
    pub fn message(self) -> &'static str {
        match self {
            Self::Slide => "Slide Removed.",
            Self::Transition => "Transition Removed.",
        }
    }
}

/// Rendered content of a panel body.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    About,
    Error {
        message: String,
    },
    Config {
        dims: Dimensions,
        item_count: usize,
    },
    Library {
        dims: Dimensions,
        used_images: Vec<ImageRef>,
    },
    Generate {
        dims: Dimensions,
        item_count: usize,
        duration: RationalTime,
    },
    EditSlide2d {
        dims: Dimensions,
        item_id: Uuid,
        slide2d: Slide2d,
    },
    EditImage {
        dims: Dimensions,
        item: TimelineItem,
        progress: f64,
    },
    EditTransition {
        dims: Dimensions,
        item_id: Uuid,
        transition: TransitionNext,
        from: Option<ImageRef>,
        to: Option<ImageRef>,
        progress: f64,
    },
    /// The selection target no longer exists.
    Removed(RemovedKind),
}

impl PanelView {
    /// Placeholder text for views that show no editor.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Removed(kind) => Some(kind.message()),
            _ => None,
        }
    }
}
