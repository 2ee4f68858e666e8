use std::sync::Arc;

use conduit_cancel::Cancel;
use core::task::{Poll, ready};
use futures_core::TryFuture;
use pin_project_lite::pin_project;

/// A transform applied to every item by a [`pool`](crate::pool) worker.
///
/// The token is handed to the work so long running calls can give up early;
/// the pool itself only checks it around the call.
pub trait Work<T> {
    type Output;
    type Error;
    type Future: Future<Output = Result<Self::Output, Self::Error>>;

    fn call(&self, token: &Cancel, item: T) -> Self::Future;
}

impl<W, T> Work<T> for Arc<W>
where
    W: Work<T> + ?Sized,
{
    type Output = W::Output;
    type Error = W::Error;
    type Future = W::Future;

    fn call(&self, token: &Cancel, item: T) -> Self::Future {
        (**self).call(token, item)
    }
}

pub fn work_fn<F, T, U>(func: F) -> WorkFn<F>
where
    F: Fn(Cancel, T) -> U,
    U: TryFuture,
{
    WorkFn(func)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkFn<F>(pub(crate) F);

impl<F, T, U> Work<T> for WorkFn<F>
where
    F: Fn(Cancel, T) -> U,
    U: TryFuture,
{
    type Output = U::Ok;
    type Error = U::Error;
    type Future = WorkFnFuture<U>;

    fn call(&self, token: &Cancel, item: T) -> Self::Future {
        WorkFnFuture {
            future: (self.0)(token.clone(), item),
        }
    }
}

pin_project! {
  pub struct WorkFnFuture<U> {
    #[pin]
    future: U
  }
}

impl<U> Future for WorkFnFuture<U>
where
    U: TryFuture,
{
    type Output = Result<U::Ok, U::Error>;
    fn poll(
        self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Self::Output> {
        let this = self.project();
        match ready!(this.future.try_poll(cx)) {
            Ok(ret) => Poll::Ready(Ok(ret)),
            Err(err) => Poll::Ready(Err(err)),
        }
    }
}
