use conduit_cancel::Cancel;

use crate::{Receiver, Work, copy, filter, merge, pool};

/// Method-chaining versions of the combinators.
pub trait PipeExt<T>: Sized {
    fn filter<F>(self, token: &Cancel, predicate: F) -> Receiver<T>
    where
        F: FnMut(&T) -> bool + Send + 'static;

    fn merge(self, token: &Cancel, other: Receiver<T>) -> Receiver<T>;

    fn tee(self, token: &Cancel) -> (Receiver<T>, Receiver<T>)
    where
        T: Clone;

    fn pool<W>(self, token: &Cancel, size: usize, work: W) -> Receiver<Result<W::Output, W::Error>>
    where
        W: Work<T> + Send + Sync + 'static,
        W::Future: Send,
        W::Output: Send + 'static,
        W::Error: Send + 'static;
}

impl<T> PipeExt<T> for Receiver<T>
where
    T: Send + 'static,
{
    fn filter<F>(self, token: &Cancel, predicate: F) -> Receiver<T>
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        filter::filter(token, self, predicate)
    }

    fn merge(self, token: &Cancel, other: Receiver<T>) -> Receiver<T> {
        merge::merge(token, [self, other])
    }

    fn tee(self, token: &Cancel) -> (Receiver<T>, Receiver<T>)
    where
        T: Clone,
    {
        copy::tee(token, self)
    }

    fn pool<W>(self, token: &Cancel, size: usize, work: W) -> Receiver<Result<W::Output, W::Error>>
    where
        W: Work<T> + Send + Sync + 'static,
        W::Future: Send,
        W::Output: Send + 'static,
        W::Error: Send + 'static,
    {
        pool::pool(token, self, size, work)
    }
}
