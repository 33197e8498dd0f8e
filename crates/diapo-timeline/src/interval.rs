//! Playback interval derivation.
//!
//! Intervals are never stored. An element starts where the spans (item plus
//! attached transition) of everything before it end.

use diapo_core::{RationalTime, TimeInterval};

use crate::diaporama::Diaporama;
use crate::pointer::SelectionPointer;

impl Diaporama {
    /// Total playback length: every item and every attached transition.
    pub fn duration(&self) -> RationalTime {
        self.timeline.iter().map(|item| item.span()).sum()
    }

    /// Playback start of the item at `index`.
    pub fn offset_of(&self, index: usize) -> RationalTime {
        self.timeline[..index.min(self.timeline.len())]
            .iter()
            .map(|item| item.span())
            .sum()
    }

    /// Interval occupied by the element a pointer denotes.
    ///
    /// `None` when the pointer is dangling, or asks for a transition the item
    /// does not have.
    pub fn time_interval_for(&self, pointer: &SelectionPointer) -> Option<TimeInterval> {
        let index = self.position(pointer.id)?;
        let item = &self.timeline[index];
        let body = TimeInterval::from_start_duration(self.offset_of(index), item.duration);
        if pointer.transition {
            let transition = item.transition_next.as_ref()?;
            Some(TimeInterval::from_start_duration(body.end, transition.duration))
        } else {
            Some(body)
        }
    }

    /// Progress of `time` through the element a pointer denotes.
    pub fn progress_for(&self, pointer: &SelectionPointer, time: RationalTime) -> Option<f64> {
        self.time_interval_for(pointer).map(|i| i.progress(time))
    }

    /// Every element in playback order with its interval.
    pub fn intervals(&self) -> impl Iterator<Item = (SelectionPointer, TimeInterval)> + '_ {
        self.timeline
            .iter()
            .scan(RationalTime::ZERO, |offset, item| {
                let start = *offset;
                *offset = start + item.span();
                Some((item, start))
            })
            .flat_map(|(item, start)| {
                let body = TimeInterval::from_start_duration(start, item.duration);
                let transition = item.transition_next.as_ref().map(|t| {
                    (
                        SelectionPointer::transition(item.id),
                        TimeInterval::from_start_duration(body.end, t.duration),
                    )
                });
                std::iter::once((SelectionPointer::item(item.id), body)).chain(transition)
            })
    }

    /// Which element is playing at `time`.
    pub fn element_at_time(&self, time: RationalTime) -> Option<SelectionPointer> {
        self.intervals()
            .find(|(_, interval)| interval.contains(time))
            .map(|(pointer, _)| pointer)
    }
}
