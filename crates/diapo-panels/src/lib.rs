//! Diapo Panels - Editing panels and navigation
//!
//! Provides:
//! - Panel descriptors with accessibility predicates and render functions
//! - The ordered panel registry and its navigation entries
//! - The navigation state machine

pub mod nav;
pub mod panel;
pub mod registry;
pub mod view;

pub use nav::{NavError, Navigator};
pub use panel::{Dimensions, Panel, PanelContext, PanelMode};
pub use registry::{Layout, NavEntry, PanelRegistry};
pub use view::{PanelView, RemovedKind};
