use conduit_cancel::Cancel;

use crate::{
    channel::{Receiver, channel},
    task::{Exit, spawn},
};

/// Turn a pull-style producer into a channel.
///
/// `produce` is called by a single task, one call at a time, until it returns
/// `None` or `token` fires. The returned channel closes when that happens.
pub fn make<T, F>(token: &Cancel, mut produce: F) -> Receiver<T>
where
    T: Send + 'static,
    F: FnMut() -> Option<T> + Send + 'static,
{
    let (sx, rx) = channel();
    let token = token.clone();

    spawn("make", 0, async move {
        loop {
            if token.is_cancelled() {
                break Exit::Cancelled;
            }

            let Some(item) = produce() else {
                break Exit::Drained;
            };

            if let Err(err) = sx.send_with(&token, item).await {
                break Exit::after_send(&err);
            }
        }
    });

    rx
}

/// Feed the items of `iter` into a channel.
pub fn from_iter<I>(token: &Cancel, iter: I) -> Receiver<I::Item>
where
    I: IntoIterator,
    I::Item: Send + 'static,
    I::IntoIter: Send + 'static,
{
    let mut iter = iter.into_iter();
    make(token, move || iter.next())
}
