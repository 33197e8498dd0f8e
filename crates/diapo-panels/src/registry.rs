//! Panel registry and navigation entries.
//!
//! Every editing screen is a `Panel` registered under its `PanelMode`. The
//! registry reports accessibility; it never blocks or redirects navigation.

use std::collections::HashMap;

use diapo_timeline::SelectionPointer;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::panel::{Dimensions, Panel, PanelContext, PanelMode};
use crate::view::{PanelView, RemovedKind};

// ── Layout ──────────────────────────────────────────────────────

/// Space reserved around panel bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Width of the navigation column
    pub nav_width: f32,
    /// Width reserved for the body scroll bar
    pub scroll_bar_width: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            nav_width: 40.0,
            scroll_bar_width: 20.0,
        }
    }
}

// ── Navigation entries ──────────────────────────────────────────

/// One icon in the navigation column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub mode: PanelMode,
    pub title: &'static str,
    pub icon: &'static str,
    /// This is the current mode
    pub selected: bool,
    /// Clicking navigates (the panel is accessible)
    pub enabled: bool,
}

// ── Registry ────────────────────────────────────────────────────

/// Ordered set of panels keyed by mode.
#[derive(Debug)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    by_mode: HashMap<PanelMode, usize>,
    layout: Layout,
}

impl PanelRegistry {
    /// Create a registry with all built-in panels.
    pub fn new() -> Self {
        Self::with_layout(Layout::default())
    }

    /// Create a registry with all built-in panels and a custom layout.
    pub fn with_layout(layout: Layout) -> Self {
        let mut reg = Self {
            panels: Vec::new(),
            by_mode: HashMap::new(),
            layout,
        };
        reg.register_builtins();
        reg
    }

    /// Register a panel. A panel already registered for the mode is
    /// replaced in place, keeping its navigation position.
    pub fn register(&mut self, panel: Panel) {
        match self.by_mode.get(&panel.mode) {
            Some(&idx) => self.panels[idx] = panel,
            None => {
                self.by_mode.insert(panel.mode, self.panels.len());
                self.panels.push(panel);
            }
        }
    }

    /// The panel for a mode. No fallback is applied.
    pub fn active_panel(&self, mode: PanelMode) -> Option<&Panel> {
        self.by_mode.get(&mode).map(|&i| &self.panels[i])
    }

    /// All registered panels, in navigation order.
    pub fn all(&self) -> &[Panel] {
        &self.panels
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Whether `mode` may be navigated to in the given state.
    pub fn is_accessible(&self, mode: PanelMode, ctx: &PanelContext<'_>) -> bool {
        self.active_panel(mode)
            .is_some_and(|panel| panel.is_accessible(ctx))
    }

    /// Navigation column for the current mode.
    ///
    /// Inaccessible panels are hidden, except the current mode which stays
    /// visible (disabled) so the UI does not vanish mid-interaction.
    pub fn nav_entries(
        &self,
        current: PanelMode,
        ctx: &PanelContext<'_>,
    ) -> SmallVec<[NavEntry; 8]> {
        self.panels
            .iter()
            .filter_map(|panel| {
                let selected = panel.mode == current;
                let enabled = panel.is_accessible(ctx);
                (selected || enabled).then_some(NavEntry {
                    mode: panel.mode,
                    title: panel.title,
                    icon: panel.icon,
                    selected,
                    enabled,
                })
            })
            .collect()
    }

    /// Body size left for a panel inside `bound`.
    pub fn inner_dimensions(&self, panel: &Panel, bound: Dimensions) -> Dimensions {
        let scroll = if panel.internal_scroll {
            0.0
        } else {
            self.layout.scroll_bar_width
        };
        Dimensions::new(
            (bound.width - self.layout.nav_width - scroll).max(0.0),
            bound.height,
        )
    }

    /// Render the panel for `mode` inside `bound`.
    pub fn render(
        &self,
        mode: PanelMode,
        ctx: &PanelContext<'_>,
        bound: Dimensions,
    ) -> Option<PanelView> {
        let panel = self.active_panel(mode)?;
        Some(panel.render(ctx, self.inner_dimensions(panel, bound)))
    }

    /// Register all built-in panels.
    fn register_builtins(&mut self) {
        use PanelMode::*;

        self.register(Panel {
            mode: About,
            title: "About",
            icon: "info-circle",
            internal_scroll: false,
            accessible: always,
            render: |_, _| PanelView::About,
        });
        self.register(Panel {
            mode: Error,
            title: "Error",
            icon: "bug",
            internal_scroll: false,
            // Entered only through an application error.
            accessible: |_| false,
            render: |ctx, _| PanelView::Error {
                message: ctx.error.unwrap_or_default().to_string(),
            },
        });
        self.register(Panel {
            mode: Config,
            title: "Configuration",
            icon: "cogs",
            internal_scroll: false,
            accessible: always,
            render: |ctx, dims| PanelView::Config {
                dims,
                item_count: ctx.diaporama.len(),
            },
        });
        self.register(Panel {
            mode: Library,
            title: "Library",
            icon: "folder-open",
            internal_scroll: true,
            accessible: always,
            render: |ctx, dims| PanelView::Library {
                dims,
                used_images: ctx.diaporama.used_images().into_iter().cloned().collect(),
            },
        });
        self.register(Panel {
            mode: Generate,
            title: "Save / Generate",
            icon: "download",
            internal_scroll: false,
            accessible: always,
            render: |ctx, dims| PanelView::Generate {
                dims,
                item_count: ctx.diaporama.len(),
                duration: ctx.diaporama.duration(),
            },
        });
        self.register(Panel {
            mode: EditSlide2d,
            title: "Edit Slide",
            icon: "newspaper-o",
            internal_scroll: false,
            accessible: |ctx| selected_item(ctx).is_some_and(|item| item.slide2d.is_some()),
            render: render_slide2d,
        });
        self.register(Panel {
            mode: EditImage,
            title: "Edit Image",
            icon: "picture-o",
            internal_scroll: false,
            accessible: |ctx| selected_item(ctx).is_some_and(|item| item.image.is_some()),
            render: render_image,
        });
        self.register(Panel {
            mode: EditTransition,
            title: "Edit Transition",
            icon: "magic",
            internal_scroll: false,
            accessible: |ctx| ctx.selected.is_some_and(|p| p.transition),
            render: render_transition,
        });
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Built-in predicates and renderers ───────────────────────────

fn always(_: &PanelContext<'_>) -> bool {
    true
}

/// The selected item, when the selection is a live item pointer.
fn selected_item<'a>(ctx: &PanelContext<'a>) -> Option<&'a diapo_timeline::TimelineItem> {
    let pointer = ctx.selected.filter(|p| !p.transition)?;
    ctx.diaporama.timeline_for_id(pointer.id)
}

fn progress(ctx: &PanelContext<'_>, pointer: &SelectionPointer) -> f64 {
    ctx.diaporama.progress_for(pointer, ctx.time).unwrap_or(0.0)
}

// Editors look the selection up by id only; the placeholder is shown when
// that lookup finds nothing.

fn render_slide2d(ctx: &PanelContext<'_>, dims: Dimensions) -> PanelView {
    let item = ctx
        .selected
        .and_then(|pointer| ctx.diaporama.timeline_for_id(pointer.id));
    match item.and_then(|item| item.slide2d.as_ref().map(|slide2d| (item.id, slide2d))) {
        Some((item_id, slide2d)) => PanelView::EditSlide2d {
            dims,
            item_id,
            slide2d: slide2d.clone(),
        },
        None => PanelView::Removed(RemovedKind::Slide),
    }
}

fn render_image(ctx: &PanelContext<'_>, dims: Dimensions) -> PanelView {
    let item = ctx
        .selected
        .and_then(|pointer| ctx.diaporama.timeline_for_id(pointer.id));
    match item {
        Some(item) => PanelView::EditImage {
            dims,
            item: item.clone(),
            progress: progress(ctx, &SelectionPointer::item(item.id)),
        },
        None => PanelView::Removed(RemovedKind::Slide),
    }
}

fn render_transition(ctx: &PanelContext<'_>, dims: Dimensions) -> PanelView {
    let info = ctx
        .selected
        .and_then(|pointer| ctx.diaporama.timeline_transition_for_id(pointer.id));
    match info.and_then(|info| info.transition_next.map(|t| (info, t))) {
        Some((info, transition)) => PanelView::EditTransition {
            dims,
            item_id: info.item_id,
            transition: transition.clone(),
            from: info.from.cloned(),
            to: info.to.cloned(),
            progress: progress(ctx, &SelectionPointer::transition(info.item_id)),
        },
        None => PanelView::Removed(RemovedKind::Transition),
    }
}

// ── Tests ───────────────────────────────────────────────────────
