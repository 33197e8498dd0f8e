//! Timeline item types.

use std::collections::BTreeMap;
use std::fmt;

use diapo_core::{DiapoError, RationalTime, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to an image asset, relative to the project directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Create a new image reference.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 2D slide content drawn over (or instead of) the image.
///
/// Draw operations are opaque to the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide2d {
    /// Background fill (CSS-style color)
    pub background: String,
    /// Canvas size the draws are expressed in
    pub size: [f64; 2],
    /// Draw operations
    pub draws: Vec<serde_json::Value>,
}

impl Slide2d {
    /// An empty slide with the given background.
    pub fn new(background: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            size: [800.0, 600.0],
            draws: Vec::new(),
        }
    }
}

impl Default for Slide2d {
    fn default() -> Self {
        Self::new("#000")
    }
}

/// Transition leading from an item into the one after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionNext {
    /// Transition length
    pub duration: RationalTime,
    /// Transition name (e.g. "fade", "wipe")
    pub kind: String,
    /// Transition-specific uniforms
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
}

impl TransitionNext {
    /// Create a transition. The duration must be positive.
    pub fn new(kind: impl Into<String>, duration: RationalTime) -> Result<Self> {
        if !duration.is_positive() {
            return Err(DiapoError::InvalidParameter(format!(
                "transition duration must be positive, got {duration}"
            )));
        }
        Ok(Self {
            duration,
            kind: kind.into(),
            parameters: BTreeMap::new(),
        })
    }

    /// Set a parameter, returning the updated transition.
    pub fn with_parameter(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }
}

/// One image-bearing unit of the slideshow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Stable identity, survives every edit
    pub id: Uuid,
    /// Image shown by this item
    pub image: Option<ImageRef>,
    /// Slide content
    pub slide2d: Option<Slide2d>,
    /// Playback length of the item itself
    pub duration: RationalTime,
    /// Transition into the following item
    pub transition_next: Option<TransitionNext>,
}

impl TimelineItem {
    /// Create an image item. The duration must be positive.
    pub fn image(image: ImageRef, duration: RationalTime) -> Result<Self> {
        check_duration(duration)?;
        Ok(Self {
            id: Uuid::new_v4(),
            image: Some(image),
            slide2d: None,
            duration,
            transition_next: None,
        })
    }

    /// Create a slide-only item. The duration must be positive.
    pub fn slide(slide2d: Slide2d, duration: RationalTime) -> Result<Self> {
        check_duration(duration)?;
        Ok(Self {
            id: Uuid::new_v4(),
            image: None,
            slide2d: Some(slide2d),
            duration,
            transition_next: None,
        })
    }

    /// Attach a transition to this item.
    pub fn with_transition(mut self, transition: TransitionNext) -> Self {
        self.transition_next = Some(transition);
        self
    }

    /// Attach slide content to this item.
    pub fn with_slide2d(mut self, slide2d: Slide2d) -> Self {
        self.slide2d = Some(slide2d);
        self
    }

    /// Duration of the attached transition, zero when there is none.
    pub fn transition_duration(&self) -> RationalTime {
        self.transition_next
            .as_ref()
            .map_or(RationalTime::ZERO, |t| t.duration)
    }

    /// Item duration plus its transition.
    pub fn span(&self) -> RationalTime {
        self.duration + self.transition_duration()
    }

    /// Check the duration invariants of this item.
    pub fn validate(&self) -> Result<()> {
        check_duration(self.duration)?;
        if let Some(t) = &self.transition_next {
            if !t.duration.is_positive() {
                return Err(DiapoError::InvalidParameter(format!(
                    "item {}: transition duration must be positive, got {}",
                    self.id, t.duration
                )));
            }
        }
        Ok(())
    }
}

fn check_duration(duration: RationalTime) -> Result<()> {
    if duration.is_positive() {
        Ok(())
    } else {
        Err(DiapoError::InvalidParameter(format!(
            "item duration must be positive, got {duration}"
        )))
    }
}
