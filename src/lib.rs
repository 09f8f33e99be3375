//! Transition-driven animation for host-owned visual elements.
//!
//! `glide` drives CSS-style transitions on one or more visual elements and
//! exposes completion as an awaitable signal. It owns none of the rendering:
//! styling and event delivery are capabilities the host provides through the
//! [`StyleSurface`] and [`EventSurface`] traits.
//!
//! A call to [`Animator::animate`] runs three strictly ordered steps, then
//! returns a pending [`Completion`]:
//!
//! ```text
//! Animator
//!   ├── freeze pass  (transitions off, stale listeners detached, "from" styles)
//!   ├── layout flush (single read, commits the starting state)
//!   ├── arm pass     (transitions on with staggered delays, "to" styles)
//!   └── completion   (one-shot listener on the last target → Completion)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use glide::{Animator, Easing, StyleMap, Tween};
//!
//! let mut animator = Animator::new();
//! let fade_in = Tween::new(1000, StyleMap::new().with("opacity", 1.0))
//!     .with_from(StyleMap::new().with("opacity", 0.0))
//!     .with_easing(Easing::EaseOut)
//!     .with_stagger(50);
//!
//! let done = animator.animate(&mut surface, &elements, &fade_in)?;
//! done.await;
//! ```

pub mod animator;
pub mod easing;
pub mod signal;
pub mod surface;
pub mod tween;
pub mod types;

pub use animator::{AnimateError, Animator};
pub use easing::Easing;
pub use signal::Completion;
pub use surface::{
    EventSurface, ListenerAction, ListenerId, StyleSurface, TransitionEnd, TransitionEndListener,
    TransitionStyle,
};
pub use tween::Tween;
pub use types::{ElementId, StyleMap, StyleValue};
