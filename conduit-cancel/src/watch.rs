use core::{
    pin::Pin,
    task::{Context, Poll},
};
use pin_project_lite::pin_project;

use crate::cancel::Cancelled;

pin_project! {
    /// Future returned by [`Cancel::watch`](crate::Cancel::watch).
    pub struct Watch<'a, F> {
        #[pin]
        cancelled: Cancelled<'a>,
        #[pin]
        future: F,
    }
}

impl<'a, F> Watch<'a, F> {
    pub(crate) fn new(cancelled: Cancelled<'a>, future: F) -> Watch<'a, F> {
        Watch { cancelled, future }
    }
}

impl<F> Future for Watch<'_, F>
where
    F: Future,
{
    type Output = Option<F::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if this.cancelled.poll(cx).is_ready() {
            return Poll::Ready(None);
        }

        this.future.poll(cx).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use crate::Cancel;
    use core::future::{Future, pending, ready};
    use core::pin::pin;
    use core::task::{Context, Poll};
    use futures::executor::block_on;
    use futures::task::noop_waker;

    #[test]
    fn test_watch_passes_output_through() {
        let token = Cancel::new();
        assert_eq!(block_on(token.watch(ready(42))), Some(42));
    }

    #[test]
    fn test_watch_yields_none_once_cancelled() {
        let token = Cancel::new();
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        let mut fut = pin!(token.watch(pending::<u32>()));
        assert!(fut.as_mut().poll(&mut cx).is_pending());

        token.cancel();

        assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(None));
    }

    #[test]
    fn test_cancellation_wins_over_ready_future() {
        let token = Cancel::new();
        token.cancel();
        assert_eq!(block_on(token.watch(ready("item"))), None);
    }
}
