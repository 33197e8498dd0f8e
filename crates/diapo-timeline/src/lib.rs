//! Diapo Timeline - Slideshow data model
//!
//! Implements the diaporama structure:
//! - An ordered sequence of timeline items, each optionally followed by a transition
//! - Selection pointers and their resolution against the sequence
//! - Playback interval derivation
//! - Pure edit operations and snapshot undo/redo

pub mod alter;
pub mod diaporama;
pub mod history;
pub mod interval;
pub mod item;
pub mod pointer;

pub use alter::{DiaporamaAction, SelectionAction};
pub use diaporama::{Diaporama, Resolved, TransitionInfo};
pub use history::History;
pub use item::{ImageRef, Slide2d, TimelineItem, TransitionNext};
pub use pointer::SelectionPointer;
