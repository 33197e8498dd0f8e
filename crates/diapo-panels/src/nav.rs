//! Navigation state machine.
//!
//! The current mode is a single named state. `on_nav` always transitions;
//! gating on accessibility is the caller's job via `try_nav`.

use thiserror::Error;
use tracing::{debug, warn};

use crate::panel::{PanelContext, PanelMode};
use crate::registry::PanelRegistry;

/// Why a gated navigation was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavError {
    #[error("panel {0} is not accessible in the current state")]
    Inaccessible(PanelMode),

    #[error("no panel registered for {0}")]
    Unknown(PanelMode),
}

/// Holds the active panel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    mode: PanelMode,
}

impl Navigator {
    pub fn new(mode: PanelMode) -> Self {
        Self { mode }
    }

    /// The active mode.
    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    /// Switch to `mode` unconditionally.
    pub fn on_nav(&mut self, mode: PanelMode) {
        if mode != self.mode {
            debug!(from = %self.mode, to = %mode, "navigate");
        }
        self.mode = mode;
    }

    /// Switch to `mode` only if its panel is accessible.
    pub fn try_nav(
        &mut self,
        mode: PanelMode,
        registry: &PanelRegistry,
        ctx: &PanelContext<'_>,
    ) -> Result<(), NavError> {
        if registry.active_panel(mode).is_none() {
            return Err(NavError::Unknown(mode));
        }
        if !registry.is_accessible(mode, ctx) {
            warn!(mode = %mode, "refusing navigation to inaccessible panel");
            return Err(NavError::Inaccessible(mode));
        }
        self.on_nav(mode);
        Ok(())
    }

    /// Enter the error panel.
    pub fn enter_error(&mut self) {
        self.on_nav(PanelMode::Error);
    }

    /// Leave the error panel for the library.
    pub fn recover(&mut self) {
        self.on_nav(PanelMode::Library);
    }

    pub fn is_in_error(&self) -> bool {
        self.mode == PanelMode::Error
    }
}
