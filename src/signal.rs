//! One-shot completion signal.
//!
//! [`Completion`] is the future returned from an `animate` call. It fulfils
//! at most once, with no payload and no error path, when the last target
//! element reports its transition finished. The fulfilling side is the
//! crate-internal [`CompletionHandle`] captured by the transition-end
//! listener.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll, Waker};

#[derive(Debug, Default)]
struct Shared {
    fulfilled: bool,
    waker: Option<Waker>,
}

/// Awaitable completion signal for one animation.
///
/// The signal fulfils when the host reports the last target's transition
/// end. If the host never reports it (zero duration, no actual style delta,
/// element removed before finishing), the signal never fulfils; there is no
/// timeout fallback.
#[derive(Debug)]
pub struct Completion {
    shared: Arc<Mutex<Shared>>,
}

impl Completion {
    /// Create a pending signal together with its fulfilling handle.
    pub(crate) fn new() -> (Self, CompletionHandle) {
        let shared = Arc::new(Mutex::new(Shared::default()));
        (
            Self {
                shared: shared.clone(),
            },
            CompletionHandle { shared },
        )
    }

    /// Non-blocking probe: has the signal fulfilled yet?
    pub fn is_fulfilled(&self) -> bool {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fulfilled
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut shared = self
            .shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if shared.fulfilled {
            Poll::Ready(())
        } else {
            shared.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

/// Fulfilling side of a [`Completion`], held by the transition-end listener.
#[derive(Debug, Clone)]
pub(crate) struct CompletionHandle {
    shared: Arc<Mutex<Shared>>,
}

impl CompletionHandle {
    /// Fulfil the signal and wake a pending awaiter. Repeat calls are no-ops.
    pub(crate) fn fulfil(&self) {
        let waker = {
            let mut shared = self
                .shared
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if shared.fulfilled {
                return;
            }
            shared.fulfilled = true;
            shared.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}
