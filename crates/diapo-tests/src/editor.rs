//! Integration tests for the editor state and panel navigation.

use diapo_app::{EditorConfig, EditorState};
use diapo_core::RationalTime;
use diapo_panels::{Dimensions, NavError, PanelMode, PanelView, RemovedKind};
use diapo_timeline::{
    DiaporamaAction, ImageRef, SelectionAction, SelectionPointer, Slide2d, TransitionNext,
};
use uuid::Uuid;

const BOUND: Dimensions = Dimensions::new(800.0, 600.0);

fn editor(images: &[&str]) -> (EditorState, Vec<Uuid>) {
    let mut editor = EditorState::new(&EditorConfig::default()).unwrap();
    let ids = images
        .iter()
        .map(|path| editor.add_image(ImageRef::new(*path)).unwrap())
        .collect();
    (editor, ids)
}

fn nav_modes(editor: &EditorState) -> Vec<PanelMode> {
    editor.nav_entries().iter().map(|e| e.mode).collect()
}

#[test]
fn fresh_editor_starts_in_library() {
    let (editor, _) = editor(&[]);
    assert_eq!(editor.mode(), PanelMode::Library);
    assert_eq!(
        nav_modes(&editor),
        vec![PanelMode::About, PanelMode::Config, PanelMode::Library, PanelMode::Generate]
    );
    match editor.render(BOUND) {
        Some(PanelView::Library { dims, used_images }) => {
            assert_eq!(dims, Dimensions::new(760.0, 600.0));
            assert!(used_images.is_empty());
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn selecting_item_unlocks_image_editor() {
    let (mut editor, ids) = editor(&["a.jpg", "b.jpg"]);
    assert_eq!(
        editor.try_nav(PanelMode::EditImage),
        Err(NavError::Inaccessible(PanelMode::EditImage))
    );

    editor.select(SelectionPointer::item(ids[1]));
    assert!(nav_modes(&editor).contains(&PanelMode::EditImage));
    assert!(!nav_modes(&editor).contains(&PanelMode::EditSlide2d));
    editor.try_nav(PanelMode::EditImage).unwrap();

    // b starts after a (3s) and a's transition (1s).
    editor.set_time(RationalTime::new(11, 2));
    match editor.render(BOUND) {
        Some(PanelView::EditImage { item, progress, dims }) => {
            assert_eq!(item.id, ids[1]);
            assert!((progress - 0.5).abs() < 1e-12);
            assert_eq!(dims, Dimensions::new(740.0, 600.0));
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn transition_selection_gates_panels() {
    let (mut editor, ids) = editor(&["a.jpg", "b.jpg"]);
    editor.select(SelectionPointer::transition(ids[0]));

    assert!(editor.is_accessible(PanelMode::EditTransition));
    assert!(!editor.is_accessible(PanelMode::EditImage));
    assert!(!editor.is_accessible(PanelMode::EditSlide2d));

    editor.try_nav(PanelMode::EditTransition).unwrap();
    match editor.render(BOUND) {
        Some(PanelView::EditTransition { from, to, transition, .. }) => {
            assert_eq!(from, Some(ImageRef::new("a.jpg")));
            assert_eq!(to, Some(ImageRef::new("b.jpg")));
            assert_eq!(transition.kind, "fade");
        }
        other => panic!("unexpected view: {other:?}"),
    }

    let wipe = TransitionNext::new("wipe", RationalTime::from_millis(500)).unwrap();
    assert!(editor.alter_selection(SelectionAction::SetTransition(wipe)));
    let interval = editor
        .diaporama()
        .time_interval_for(&SelectionPointer::transition(ids[0]))
        .unwrap();
    assert_eq!(interval.duration(), RationalTime::from_millis(500));

    assert!(editor.alter_selection(SelectionAction::Remove));
    assert!(editor.selection().is_none());
    assert_eq!(editor.mode(), PanelMode::EditTransition);
    assert_eq!(
        editor.render(BOUND),
        Some(PanelView::Removed(RemovedKind::Transition))
    );
}

#[test]
fn open_editor_follows_live_element_across_pointer_kinds() {
    let (mut editor, ids) = editor(&["a.jpg", "b.jpg"]);

    editor.select(SelectionPointer::item(ids[0]));
    editor.try_nav(PanelMode::EditImage).unwrap();
    editor.select(SelectionPointer::transition(ids[0]));
    let view = editor.render(BOUND).unwrap();
    assert!(view.placeholder().is_none(), "{view:?}");
    assert!(matches!(view, PanelView::EditImage { ref item, .. } if item.id == ids[0]));

    editor.try_nav(PanelMode::EditTransition).unwrap();
    editor.select(SelectionPointer::item(ids[0]));
    let view = editor.render(BOUND).unwrap();
    assert!(view.placeholder().is_none(), "{view:?}");
    assert!(matches!(view, PanelView::EditTransition { item_id, .. } if item_id == ids[0]));

    // Once the transition is gone the item pointer has nothing to edit.
    editor.select(SelectionPointer::transition(ids[0]));
    assert!(editor.alter_selection(SelectionAction::Remove));
    editor.select(SelectionPointer::item(ids[0]));
    assert_eq!(editor.render(BOUND), Some(PanelView::Removed(RemovedKind::Transition)));
    assert_eq!(editor.render(BOUND).and_then(|v| v.placeholder()), Some("Transition Removed."));
}

#[test]
fn slide_editor_needs_slide_content() {
    let (mut editor, ids) = editor(&["a.jpg"]);
    editor.select(SelectionPointer::item(ids[0]));
    assert!(!editor.is_accessible(PanelMode::EditSlide2d));

    let mut item = editor.diaporama().timeline_for_id(ids[0]).unwrap().clone();
    item.slide2d = Some(Slide2d::new("#fff"));
    assert!(editor.alter_selection(SelectionAction::SetItem(item)));

    assert!(editor.is_accessible(PanelMode::EditSlide2d));
    editor.try_nav(PanelMode::EditSlide2d).unwrap();
    match editor.render(BOUND) {
        Some(PanelView::EditSlide2d { item_id, slide2d, .. }) => {
            assert_eq!(item_id, ids[0]);
            assert_eq!(slide2d.background, "#fff");
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn drop_to_remove_leaves_current_panel_visible() {
    let (mut editor, ids) = editor(&["a.jpg", "b.jpg", "c.jpg"]);
    editor.select(SelectionPointer::item(ids[1]));
    editor.try_nav(PanelMode::EditImage).unwrap();

    assert!(editor.drop_to_remove(SelectionPointer::item(ids[1])));
    assert_eq!(editor.diaporama().len(), 2);

    let entry = editor
        .nav_entries()
        .into_iter()
        .find(|e| e.mode == PanelMode::EditImage)
        .expect("current mode stays in the nav");
    assert!(entry.selected);
    assert!(!entry.enabled);
    assert_eq!(editor.render(BOUND), Some(PanelView::Removed(RemovedKind::Slide)));

    // Dropping the same element again is a no-op.
    assert!(!editor.drop_to_remove(SelectionPointer::item(ids[1])));
}

#[test]
fn undo_restores_removed_item() {
    let (mut editor, ids) = editor(&["a.jpg", "b.jpg"]);
    editor.select(SelectionPointer::item(ids[0]));
    assert!(editor.alter_selection(SelectionAction::Remove));
    assert!(editor.diaporama().timeline_for_id(ids[0]).is_none());

    assert!(editor.undo());
    assert_eq!(editor.diaporama().position(ids[0]), Some(0));
    assert!(editor.can_redo());

    assert!(editor.alter_diaporama(DiaporamaAction::MoveRight(ids[0])));
    assert!(!editor.can_redo());
}

#[test]
fn error_panel_is_entered_only_by_errors() {
    let (mut editor, _) = editor(&["a.jpg"]);
    assert_eq!(
        editor.try_nav(PanelMode::Error),
        Err(NavError::Inaccessible(PanelMode::Error))
    );

    editor.report_error("thumbnail service unavailable");
    assert_eq!(editor.mode(), PanelMode::Error);
    assert!(nav_modes(&editor).contains(&PanelMode::Error));

    editor.recover();
    assert_eq!(editor.mode(), PanelMode::Library);
    assert!(!nav_modes(&editor).contains(&PanelMode::Error));
}
