//! Diaporama Maker - slideshow authoring
//!
//! Entry point. Builds a diaporama from the images given on the command
//! line, walks the editing panels and logs what each one would show.
//!
//! Usage: `diapo [--config PATH] IMAGE...`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use diapo_app::{EditorConfig, EditorState};
use diapo_panels::{Dimensions, PanelMode};
use diapo_timeline::{ImageRef, SelectionPointer};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut images = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => bail!("--config requires a path"),
            },
            _ => images.push(ImageRef::new(arg)),
        }
    }

    let config = match &config_path {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EditorConfig::load_default().context("loading default config")?,
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Diaporama Maker starting...");

    let mut editor = EditorState::new(&config)?;
    for image in images {
        editor.add_image(image)?;
    }
    info!(
        items = editor.diaporama().len(),
        duration = %editor.diaporama().duration(),
        "timeline ready"
    );

    for (pointer, interval) in editor.diaporama().intervals() {
        info!(id = %pointer.id, transition = pointer.transition, %interval, "element");
    }

    let bound = Dimensions::new(800.0, 600.0);
    if let Some(first) = editor.diaporama().items().first().map(|item| item.id) {
        editor.select(SelectionPointer::item(first));
        editor.try_nav(PanelMode::EditImage)?;
        log_panel(&editor, bound);

        editor.select(SelectionPointer::transition(first));
        if editor.try_nav(PanelMode::EditTransition).is_ok() {
            log_panel(&editor, bound);
        }
    } else {
        log_panel(&editor, bound);
    }

    Ok(())
}

fn log_panel(editor: &EditorState, bound: Dimensions) {
    let nav: Vec<_> = editor
        .nav_entries()
        .iter()
        .map(|entry| entry.mode.name())
        .collect();
    info!(mode = %editor.mode(), ?nav, "navigation");
    match editor.render(bound) {
        Some(view) => match view.placeholder() {
            Some(text) => info!(placeholder = text, "panel"),
            None => info!(?view, "panel"),
        },
        None => info!("no panel registered"),
    }
}
