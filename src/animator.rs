//! The animation driver.
//!
//! [`Animator`] orchestrates the from/flush/to sequence over a target list
//! and wires a one-shot completion signal to the last target's transition
//! end. It holds the only cross-call state in the crate: the map from an
//! element to its currently pending completion listener.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, trace};

use crate::signal::Completion;
use crate::surface::{EventSurface, ListenerAction, ListenerId, StyleSurface, TransitionStyle};
use crate::tween::Tween;
use crate::types::{ElementId, StyleMap};

/// Style-map keys that carry timing directives in map-shaped payloads rather
/// than style values. They are stripped before a map is forwarded, since a
/// styling surface may reject unknown property names; timing always travels
/// through the typed fields on [`Tween`].
const RESERVED_DIRECTIVES: [&str; 2] = ["ease", "delay"];

/// Errors for animation requests.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimateError {
    /// The target list was empty. Completion is defined by the last target,
    /// so an empty list could only ever produce a signal that never fulfils.
    #[error("animation requires at least one target element")]
    EmptyTargets,
}

/// Drives style transitions on host-owned elements.
///
/// The animator owns the record of pending completion listeners, keyed by
/// element. Restarting an animation on an element detaches its stale
/// listener before the new one is attached, so a prior unfinished animation
/// can neither fire a stale completion nor visually conflict with the new
/// one. The restarted element's earlier [`Completion`] will never fulfil.
#[derive(Debug, Default)]
pub struct Animator {
    /// Pending completion listeners keyed by the element they are attached to.
    pending: HashMap<ElementId, ListenerId>,
}

impl Animator {
    /// Create a new animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate `targets` to the styles in `tween`, returning a signal that
    /// fulfils when the last target reports its transition finished.
    ///
    /// Target order is significant: it determines stagger offsets, and the
    /// *last* element is the one whose transition end fulfils the signal.
    /// That is only correct when every target shares the same total
    /// delay-plus-duration, which holds for a plain linear stagger; callers
    /// mixing timings per element own that invariant.
    ///
    /// Setup runs synchronously; the returned [`Completion`] is pending
    /// until the host dispatches the matching transition-end notification.
    /// If it never does (zero duration, no actual style delta, element
    /// removed), the signal never fulfils.
    pub fn animate<S>(
        &mut self,
        surface: &mut S,
        targets: &[ElementId],
        tween: &Tween,
    ) -> Result<Completion, AnimateError>
    where
        S: StyleSurface + EventSurface,
    {
        let (&last, _) = targets.split_last().ok_or(AnimateError::EmptyTargets)?;

        debug!(
            targets = targets.len(),
            duration_ms = tween.duration_ms,
            stagger_ms = tween.stagger_ms,
            "starting animation"
        );

        // Freeze: stop transitions, drop stale completion listeners, then put
        // every element into its starting state.
        for &element in targets {
            surface.set_transition(element, &TransitionStyle::None);
            if let Some(stale) = self.pending.remove(&element) {
                surface.unsubscribe_transition_end(element, stale);
            }
            if let Some(from) = &tween.from {
                apply_style_map(surface, element, from);
            }
        }

        // A single layout read commits the frozen state. Without it the host
        // may coalesce the starting styles with the target styles and skip
        // straight to the final state with no visible animation.
        surface.flush_layout(targets[0]);

        // Arm transitions and apply target styles, staggering delays by index.
        for (index, &element) in targets.iter().enumerate() {
            surface.set_transition(
                element,
                &TransitionStyle::All {
                    duration_ms: tween.duration_ms,
                    easing: tween.easing,
                    delay_ms: tween.delay_for(index),
                },
            );
            apply_style_map(surface, element, &tween.to);
        }

        // One listener, on the last target only. The guard skips
        // notifications propagated from nested elements; a matching one
        // fulfils the signal and detaches the listener in the same dispatch.
        let (completion, handle) = Completion::new();
        let listener_id = surface.subscribe_transition_end(
            last,
            Box::new(move |end| {
                if end.target != last {
                    return ListenerAction::Keep;
                }
                handle.fulfil();
                ListenerAction::Detach
            }),
        );
        self.pending.insert(last, listener_id);
        trace!(element = last.0, "completion listener attached");

        Ok(completion)
    }

    /// Whether a completion listener has been recorded for an element.
    ///
    /// The record can outlive the listener: once a listener fires it detaches
    /// itself, leaving a stale id here until the element is animated again.
    /// Unsubscribing a stale id is a no-op by the [`EventSurface`] contract.
    pub fn has_pending(&self, element: ElementId) -> bool {
        self.pending.contains_key(&element)
    }

    /// Number of elements with a recorded completion listener.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

fn apply_style_map<S: StyleSurface>(surface: &mut S, element: ElementId, styles: &StyleMap) {
    for (name, value) in styles.iter() {
        if RESERVED_DIRECTIVES.contains(&name.as_str()) {
            continue;
        }
        surface.set_property(element, name, value);
    }
}
