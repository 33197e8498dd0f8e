//! Diaporama Maker application layer.
//!
//! `EditorState` is the single owner of the diaporama, the selection and
//! the navigation mode. The rendering layer reads snapshots from it and sends
//! it discrete events.

pub mod config;
pub mod state;

pub use config::{EditorConfig, TransitionDefaults};
pub use state::EditorState;
