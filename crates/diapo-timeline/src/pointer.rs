//! Selection pointers into the timeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A position-independent reference to a timeline element.
///
/// `transition == false` denotes the item itself (its image or slide);
/// `transition == true` denotes the transition attached to the item, leading
/// into the next one. The referenced id may no longer exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionPointer {
    pub id: Uuid,
    pub transition: bool,
}

impl SelectionPointer {
    /// Point at an item.
    pub fn item(id: Uuid) -> Self {
        Self {
            id,
            transition: false,
        }
    }

    /// Point at the transition following an item.
    pub fn transition(id: Uuid) -> Self {
        Self {
            id,
            transition: true,
        }
    }
}
