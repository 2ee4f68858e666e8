use conduit_cancel::Cancel;

use crate::{
    channel::{Receiver, Sender},
    task::{forward, spawn},
};

/// Distribute the items of `input` over `outputs`.
///
/// Every output gets its own task racing to receive from `input`, so each
/// item lands on exactly one output. Each task closes its output when
/// `input` closes or `token` fires.
pub fn split<T, O>(token: &Cancel, input: Receiver<T>, outputs: O)
where
    T: Send + 'static,
    O: IntoIterator<Item = Sender<T>>,
{
    for (index, output) in outputs.into_iter().enumerate() {
        let input = input.clone();
        let token = token.clone();
        spawn("split", index, async move {
            forward(&token, &input, &output).await
        });
    }
}
