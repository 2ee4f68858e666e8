use conduit_cancel::Cancel;

use crate::{
    channel::{Receiver, Sender, channel},
    task::{Exit, spawn},
};

/// Broadcast every item of `input` to all `outputs`.
///
/// A single task receives an item and hands it to each output in turn before
/// taking the next one, so every output sees the whole sequence in input
/// order. Outputs whose receivers are gone are skipped from then on. All
/// outputs close when the task ends.
pub fn copy<T, O>(token: &Cancel, input: Receiver<T>, outputs: O)
where
    T: Clone + Send + 'static,
    O: IntoIterator<Item = Sender<T>>,
{
    let mut outputs: Vec<Option<Sender<T>>> = outputs.into_iter().map(Some).collect();
    let token = token.clone();

    spawn("copy", 0, async move {
        loop {
            if outputs.iter().all(Option::is_none) {
                break Exit::HungUp;
            }

            let Some(item) = input.recv_with(&token).await else {
                break Exit::after_recv(&token);
            };

            for slot in outputs.iter_mut() {
                let Some(output) = slot else {
                    continue;
                };

                let sent = output.send_with(&token, item.clone()).await;
                match sent {
                    Ok(()) => {}
                    Err(err) if err.is_cancelled() => return Exit::Cancelled,
                    Err(_) => *slot = None,
                }
            }
        }
    });
}

/// Duplicate `input` onto two fresh channels.
///
/// Both halves have to be read concurrently: an item is only released to the
/// second channel once the first one has taken it.
pub fn tee<T>(token: &Cancel, input: Receiver<T>) -> (Receiver<T>, Receiver<T>)
where
    T: Clone + Send + 'static,
{
    let (left_sx, left) = channel();
    let (right_sx, right) = channel();
    copy(token, input, [left_sx, right_sx]);
    (left, right)
}
