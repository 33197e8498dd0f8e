//! The diaporama: an ordered sequence of timeline items.
//!
//! Lookups are by id and never fail loudly. A selection that refers to a
//! removed item simply resolves to nothing.

use std::collections::HashSet;

use diapo_core::{DiapoError, RationalTime, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::{ImageRef, TimelineItem, TransitionNext};
use crate::pointer::SelectionPointer;

/// The slideshow model. Sequence order is playback order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diaporama {
    /// Items in playback order
    pub(crate) timeline: Vec<TimelineItem>,
}

/// The transition attached to an item, with the images on either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionInfo<'a> {
    /// Item owning the transition
    pub item_id: Uuid,
    /// The transition, if the item has one
    pub transition_next: Option<&'a TransitionNext>,
    /// Image the transition leaves
    pub from: Option<&'a ImageRef>,
    /// Image the transition enters (next item)
    pub to: Option<&'a ImageRef>,
}

/// A selection pointer resolved against a diaporama.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Item(&'a TimelineItem),
    Transition(TransitionInfo<'a>),
    /// The referenced item, or its transition, no longer exists.
    Removed,
}

impl Diaporama {
    /// Create an empty diaporama.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diaporama from items, checking durations and id uniqueness.
    pub fn from_items(items: Vec<TimelineItem>) -> Result<Self> {
        let diaporama = Self { timeline: items };
        diaporama.validate()?;
        Ok(diaporama)
    }

    /// Build a timeline from images, one item each.
    ///
    /// Every item except the last receives a copy of `transition`.
    pub fn from_images<I>(
        images: I,
        item_duration: RationalTime,
        transition: Option<TransitionNext>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = ImageRef>,
    {
        let mut timeline = images
            .into_iter()
            .map(|image| TimelineItem::image(image, item_duration))
            .collect::<Result<Vec<_>>>()?;
        if let Some(transition) = transition {
            let last = timeline.len().saturating_sub(1);
            for item in &mut timeline[..last] {
                item.transition_next = Some(transition.clone());
            }
        }
        Self::from_items(timeline)
    }

    /// Check that every duration is positive and every id is unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.timeline.len());
        for item in &self.timeline {
            item.validate()?;
            if !seen.insert(item.id) {
                return Err(DiapoError::DuplicateId(item.id.to_string()));
            }
        }
        Ok(())
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Items in playback order.
    pub fn items(&self) -> &[TimelineItem] {
        &self.timeline
    }

    /// Sequence position of the item with this id.
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.timeline.iter().position(|item| item.id == id)
    }

    /// Find an item by id.
    pub fn timeline_for_id(&self, id: Uuid) -> Option<&TimelineItem> {
        self.timeline.iter().find(|item| item.id == id)
    }

    /// Find the transition slot owned by an item.
    ///
    /// Returns `None` only when the item is gone; an item without a
    /// transition yields `transition_next: None`.
    pub fn timeline_transition_for_id(&self, id: Uuid) -> Option<TransitionInfo<'_>> {
        let index = self.position(id)?;
        let item = &self.timeline[index];
        let next = self.timeline.get(index + 1);
        Some(TransitionInfo {
            item_id: item.id,
            transition_next: item.transition_next.as_ref(),
            from: item.image.as_ref(),
            to: next.and_then(|n| n.image.as_ref()),
        })
    }

    /// Resolve a selection pointer to the element it denotes.
    pub fn resolve(&self, pointer: &SelectionPointer) -> Resolved<'_> {
        if pointer.transition {
            match self.timeline_transition_for_id(pointer.id) {
                Some(info) if info.transition_next.is_some() => Resolved::Transition(info),
                _ => Resolved::Removed,
            }
        } else {
            self.timeline_for_id(pointer.id)
                .map_or(Resolved::Removed, Resolved::Item)
        }
    }

    /// Whether the pointer still denotes an existing element.
    pub fn contains(&self, pointer: &SelectionPointer) -> bool {
        !matches!(self.resolve(pointer), Resolved::Removed)
    }

    /// Images used by the timeline, in order.
    pub fn used_images(&self) -> Vec<&ImageRef> {
        self.timeline
            .iter()
            .filter_map(|item| item.image.as_ref())
            .collect()
    }
}
