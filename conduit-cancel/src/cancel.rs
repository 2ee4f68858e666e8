use alloc::sync::Arc;
use core::{
    fmt::Debug,
    pin::Pin,
    sync::atomic::{AtomicBool, Ordering},
    task::{Context, Poll, ready},
};
use event_listener::{Event, EventListener};
use pin_project_lite::pin_project;

use crate::watch::Watch;

struct Inner {
    cancelled: AtomicBool,
    event: Event,
}

/// Cooperative cancellation signal shared by every task of a pipeline.
///
/// Cloning is cheap and every clone observes the same signal. Once
/// [`Cancel::cancel`] has been called the token stays cancelled.
#[derive(Clone)]
pub struct Cancel {
    inner: Arc<Inner>,
}

impl Debug for Cancel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cancel")
            .field("cancelled", &self.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl Default for Cancel {
    fn default() -> Self {
        Cancel::new()
    }
}

impl Cancel {
    pub fn new() -> Self {
        Cancel {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Fire the token and wake everything waiting on it.
    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::AcqRel) {
            self.inner.event.notify(usize::MAX);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Resolves once the token has fired. Resolves immediately if it already has.
    pub fn cancelled(&self) -> Cancelled<'_> {
        Cancelled {
            token: self,
            listener: None,
        }
    }

    /// Race `future` against this token.
    ///
    /// The token is checked first on every poll, so a fired token wins even
    /// when `future` is ready at the same time. Yields `None` when cancelled.
    pub fn watch<F: Future>(&self, future: F) -> Watch<'_, F> {
        Watch::new(self.cancelled(), future)
    }
}

pin_project! {
    pub struct Cancelled<'a> {
        token: &'a Cancel,
        #[pin]
        listener: Option<EventListener>,
    }
}

impl Future for Cancelled<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            if this.token.is_cancelled() {
                return Poll::Ready(());
            }

            match this.listener.as_mut().as_pin_mut() {
                Some(listener) => {
                    ready!(listener.poll(cx));
                    this.listener.set(None);
                }
                // Register before the flag is checked again so a concurrent
                // cancel cannot slip between the check and the listen.
                None => this.listener.set(Some(this.token.inner.event.listen())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
    use futures::executor::block_on;

    fn dummy_waker() -> Waker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        fn dummy_raw_waker() -> RawWaker {
            RawWaker::new(core::ptr::null(), &VTABLE)
        }
        unsafe { Waker::from_raw(dummy_raw_waker()) }
    }

    #[test]
    fn test_cancelled_waits_for_cancel() {
        let token = Cancel::new();
        let mut fut = token.cancelled();

        let waker = dummy_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(Pin::new(&mut fut).poll(&mut cx).is_pending());

        token.cancel();

        assert!(Pin::new(&mut fut).poll(&mut cx).is_ready());
    }

    #[test]
    fn test_cancelled_after_cancel_is_ready() {
        let token = Cancel::new();
        token.cancel();

        let waker = dummy_waker();
        let mut cx = Context::from_waker(&waker);
        let mut fut = token.cancelled();
        assert_eq!(Pin::new(&mut fut).poll(&mut cx), Poll::Ready(()));
    }

    #[test]
    fn test_cancel_is_monotonic() {
        let token = Cancel::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());

        token.cancel();
        token.cancel();

        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
        block_on(clone.cancelled());
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let token = Cancel::new();
        let remote = token.clone();

        let handle = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(10));
            remote.cancel();
        });

        block_on(token.cancelled());
        assert!(token.is_cancelled());
        handle.join().unwrap();
    }
}
