//! Typed animation requests.
//!
//! A [`Tween`] names everything one `animate` call needs: the target style
//! state, an optional starting state, and the transition timing. Timing
//! directives are dedicated fields rather than magic keys inside the style
//! maps, so a request is unambiguous by construction.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::types::StyleMap;

/// A single animation request: where to end up and how to get there.
///
/// # Example
///
/// ```
/// use glide::{Easing, StyleMap, Tween};
///
/// let tween = Tween::new(1000, StyleMap::new().with("opacity", 1.0))
///     .with_from(StyleMap::new().with("opacity", 0.0))
///     .with_easing(Easing::EaseOut)
///     .with_delay(100)
///     .with_stagger(50);
///
/// assert_eq!(tween.delay_for(0), 100);
/// assert_eq!(tween.delay_for(2), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    /// Target styles, applied with transitions armed.
    pub to: StyleMap,

    /// Optional starting styles, applied instantly before the transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<StyleMap>,

    /// Duration of the transition in milliseconds.
    pub duration_ms: u32,

    /// Base delay before the transition starts in milliseconds.
    #[serde(default)]
    pub delay_ms: u32,

    /// Extra delay per element based on its position in the target list,
    /// producing a cascading effect across multiple elements.
    #[serde(default)]
    pub stagger_ms: u32,

    /// Timing function handed to the styling surface.
    #[serde(default)]
    pub easing: Easing,
}

impl Tween {
    /// Create a new request transitioning to `to` over `duration_ms`.
    pub fn new(duration_ms: u32, to: StyleMap) -> Self {
        Self {
            to,
            from: None,
            duration_ms,
            delay_ms: 0,
            stagger_ms: 0,
            easing: Easing::Ease,
        }
    }

    /// Set the starting styles.
    pub fn with_from(mut self, from: StyleMap) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the base delay in milliseconds.
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the per-element stagger interval in milliseconds.
    pub fn with_stagger(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Set the timing function.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Total transition delay for the element at `index` in the target list.
    ///
    /// Stagger is zero-based: the first element gets no stagger contribution.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_ms + self.stagger_ms * index as u32
    }
}
