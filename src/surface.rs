//! Host collaborator traits: styling and transition-event capabilities.
//!
//! The driver owns no rendering. It consumes two capabilities from the host
//! that owns the visual elements:
//! - [`StyleSurface`]: set style properties, configure transitions, flush layout
//! - [`EventSurface`]: subscribe and unsubscribe transition-end listeners
//!
//! Hosts range from a real style/layout engine to the recording fakes used in
//! tests; the driver behaves identically against either.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::types::{ElementId, StyleValue};

/// Transition configuration applied to an element's style.
///
/// Mirrors the CSS `transition` shorthand: either disabled entirely, or armed
/// for all property changes with a duration, timing function and delay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionStyle {
    /// Transitions disabled; style writes take effect instantly.
    None,
    /// Transition every property change with the given timing.
    All {
        /// Duration of the transition in milliseconds.
        duration_ms: u32,
        /// Timing function for the transition.
        easing: Easing,
        /// Delay before the transition starts in milliseconds.
        delay_ms: u32,
    },
}

/// Notification that a transition finished on some element.
///
/// `target` is the element the transition actually ran on. It can differ from
/// the element a listener is attached to when the host propagates
/// notifications upward from nested elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEnd {
    /// The element whose transition finished.
    pub target: ElementId,
}

/// Handle for a subscribed transition-end listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

/// What the host should do with a listener after dispatching to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerAction {
    /// Leave the listener attached for further notifications.
    Keep,
    /// Drop the listener; it must not be invoked again.
    Detach,
}

/// Listener invoked with transition-end notifications.
pub type TransitionEndListener = Box<dyn FnMut(&TransitionEnd) -> ListenerAction + Send>;

/// Styling capability of the host.
pub trait StyleSurface {
    /// Set a named style property on an element.
    fn set_property(&mut self, element: ElementId, name: &str, value: &StyleValue);

    /// Apply a transition configuration to an element.
    fn set_transition(&mut self, element: ElementId, transition: &TransitionStyle);

    /// Force a synchronous layout recalculation.
    ///
    /// Equivalent to reading a layout-triggering property: the host must
    /// commit pending style writes, so that later writes start a fresh
    /// transition instead of being coalesced with them.
    fn flush_layout(&mut self, element: ElementId);
}

/// Transition-event capability of the host.
pub trait EventSurface {
    /// Subscribe a transition-end listener on an element.
    ///
    /// The host must drop a listener once it returns
    /// [`ListenerAction::Detach`].
    fn subscribe_transition_end(
        &mut self,
        element: ElementId,
        listener: TransitionEndListener,
    ) -> ListenerId;

    /// Remove a previously subscribed listener.
    ///
    /// Unsubscribing an id that is unknown or already detached must be a
    /// no-op; the driver relies on this when replacing listeners that may
    /// have already detached themselves.
    fn unsubscribe_transition_end(&mut self, element: ElementId, listener: ListenerId);
}
