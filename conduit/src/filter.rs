use conduit_cancel::Cancel;

use crate::{
    channel::{Receiver, channel},
    task::{Exit, spawn},
};

/// Forward the items of `input` for which `predicate` holds.
///
/// Order is preserved. The returned channel closes when `input` closes or
/// `token` fires.
pub fn filter<T, F>(token: &Cancel, input: Receiver<T>, mut predicate: F) -> Receiver<T>
where
    T: Send + 'static,
    F: FnMut(&T) -> bool + Send + 'static,
{
    let (sx, rx) = channel();
    let token = token.clone();

    spawn("filter", 0, async move {
        loop {
            if sx.is_closed() {
                break Exit::HungUp;
            }

            let Some(item) = input.recv_with(&token).await else {
                break Exit::after_recv(&token);
            };

            if !predicate(&item) {
                continue;
            }

            if let Err(err) = sx.send_with(&token, item).await {
                break Exit::after_send(&err);
            }
        }
    });

    rx
}

pub fn less_than<T>(token: &Cancel, input: Receiver<T>, bound: T) -> Receiver<T>
where
    T: PartialOrd + Send + 'static,
{
    filter(token, input, move |item| *item < bound)
}

pub fn less_or_equal<T>(token: &Cancel, input: Receiver<T>, bound: T) -> Receiver<T>
where
    T: PartialOrd + Send + 'static,
{
    filter(token, input, move |item| *item <= bound)
}

pub fn greater_than<T>(token: &Cancel, input: Receiver<T>, bound: T) -> Receiver<T>
where
    T: PartialOrd + Send + 'static,
{
    filter(token, input, move |item| *item > bound)
}

pub fn greater_or_equal<T>(token: &Cancel, input: Receiver<T>, bound: T) -> Receiver<T>
where
    T: PartialOrd + Send + 'static,
{
    filter(token, input, move |item| *item >= bound)
}

pub fn equal<T>(token: &Cancel, input: Receiver<T>, value: T) -> Receiver<T>
where
    T: PartialEq + Send + 'static,
{
    filter(token, input, move |item| *item == value)
}

pub fn not_equal<T>(token: &Cancel, input: Receiver<T>, value: T) -> Receiver<T>
where
    T: PartialEq + Send + 'static,
{
    filter(token, input, move |item| *item != value)
}
