//! Integration tests for the timeline model.
//!
//! Exercises interval derivation, lookups and edits together, the way the
//! panels consume them.

use diapo_core::{step, RationalTime, TimeInterval};
use diapo_timeline::{
    Diaporama, DiaporamaAction, ImageRef, Resolved, SelectionAction, SelectionPointer,
    TimelineItem, TransitionNext,
};
use uuid::Uuid;

// ── Helpers ────────────────────────────────────────────────────

fn secs(s: i64) -> RationalTime {
    RationalTime::from_secs(s)
}

fn item(path: &str, duration: i64) -> TimelineItem {
    TimelineItem::image(ImageRef::new(path), secs(duration)).unwrap()
}

/// [A(5), B(3, transition 2), C(4)]
fn build_diaporama() -> (Diaporama, Uuid, Uuid, Uuid) {
    let a = item("images/a.jpg", 5);
    let b = item("images/b.jpg", 3)
        .with_transition(TransitionNext::new("fade", secs(2)).unwrap());
    let c = item("images/c.jpg", 4);
    let (a_id, b_id, c_id) = (a.id, b.id, c.id);
    (Diaporama::from_items(vec![a, b, c]).unwrap(), a_id, b_id, c_id)
}

// ── Interval derivation ────────────────────────────────────────

#[test]
fn reference_scenario_intervals() {
    let (d, a, b, c) = build_diaporama();

    assert_eq!(
        d.time_interval_for(&SelectionPointer::item(a)),
        Some(TimeInterval::new(secs(0), secs(5)))
    );
    assert_eq!(
        d.time_interval_for(&SelectionPointer::item(b)),
        Some(TimeInterval::new(secs(5), secs(8)))
    );
    assert_eq!(
        d.time_interval_for(&SelectionPointer::transition(b)),
        Some(TimeInterval::new(secs(8), secs(10)))
    );
    assert_eq!(
        d.time_interval_for(&SelectionPointer::item(c)),
        Some(TimeInterval::new(secs(10), secs(14)))
    );
    assert_eq!(d.duration(), secs(14));
}

#[test]
fn intervals_shift_after_move() {
    let (d, a, b, _) = build_diaporama();
    let moved = d.alter(&DiaporamaAction::MoveLeft(b));

    // B and its transition now open the show.
    assert_eq!(
        moved.time_interval_for(&SelectionPointer::item(b)),
        Some(TimeInterval::new(secs(0), secs(3)))
    );
    assert_eq!(
        moved.time_interval_for(&SelectionPointer::item(a)),
        Some(TimeInterval::new(secs(5), secs(10)))
    );
    assert_eq!(moved.duration(), d.duration());
}

#[test]
fn progress_through_transition() {
    let (d, _, b, _) = build_diaporama();
    let interval = d.time_interval_for(&SelectionPointer::transition(b)).unwrap();
    assert_eq!(step(interval.start, interval.end, secs(7)), 0.0);
    assert_eq!(step(interval.start, interval.end, RationalTime::new(17, 2)), 0.25);
    assert_eq!(step(interval.start, interval.end, secs(10)), 1.0);
}

// ── Stale selections ───────────────────────────────────────────

#[test]
fn removed_item_resolves_to_nothing() {
    let (d, _, b, _) = build_diaporama();
    let after = d.alter(&DiaporamaAction::RemoveItem(SelectionPointer::item(b)));

    assert_eq!(after.len(), 2);
    assert!(after.timeline_for_id(b).is_none());
    assert!(after.timeline_transition_for_id(b).is_none());
    assert!(after.time_interval_for(&SelectionPointer::transition(b)).is_none());
    assert_eq!(after.resolve(&SelectionPointer::item(b)), Resolved::Removed);
    assert_eq!(after.duration(), secs(9));
}

#[test]
fn removed_transition_keeps_item_selectable() {
    let (d, _, b, c) = build_diaporama();
    let (after, selection) =
        d.alter_selection(Some(SelectionPointer::transition(b)), &SelectionAction::Remove);

    assert!(selection.is_none());
    assert!(matches!(after.resolve(&SelectionPointer::item(b)), Resolved::Item(_)));
    assert_eq!(after.resolve(&SelectionPointer::transition(b)), Resolved::Removed);
    assert_eq!(
        after.time_interval_for(&SelectionPointer::item(c)),
        Some(TimeInterval::new(secs(8), secs(12)))
    );
}

// ── Edit sequences ─────────────────────────────────────────────

#[test]
fn move_round_trip_restores_order() {
    let (d, a, b, c) = build_diaporama();
    let back = d
        .alter(&DiaporamaAction::MoveRight(a))
        .alter(&DiaporamaAction::MoveLeft(a));
    assert_eq!(back, d);

    assert_eq!(d.alter(&DiaporamaAction::MoveLeft(a)), d);
    assert_eq!(d.alter(&DiaporamaAction::MoveRight(c)), d);
    assert_eq!(d.alter(&DiaporamaAction::MoveRight(b)).position(b), Some(2));
}

#[test]
fn set_item_through_selection_keeps_position() {
    let (d, _, b, _) = build_diaporama();
    let mut edited = d.timeline_for_id(b).unwrap().clone();
    edited.image = Some(ImageRef::new("images/b2.jpg"));

    let pointer = SelectionPointer::item(b);
    let (after, selection) = d.alter_selection(Some(pointer), &SelectionAction::SetItem(edited));
    assert_eq!(selection, Some(pointer));
    assert_eq!(after.position(b), Some(1));
    assert_eq!(
        after.timeline_for_id(b).unwrap().image,
        Some(ImageRef::new("images/b2.jpg"))
    );
}
