use conduit_cancel::Cancel;

use crate::{
    channel::{Receiver, channel},
    task::{forward, spawn},
};

/// Combine every input into one channel.
///
/// One task forwards each input. Items of a single input keep their order,
/// the interleaving between inputs is unspecified. Every forwarding task owns
/// a sender of the output, so the output closes after the last of them has
/// returned. Without inputs the output is closed right away.
pub fn merge<T, I>(token: &Cancel, inputs: I) -> Receiver<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = Receiver<T>>,
{
    let (sx, rx) = channel();

    for (index, input) in inputs.into_iter().enumerate() {
        let sx = sx.clone();
        let token = token.clone();
        spawn("merge", index, async move { forward(&token, &input, &sx).await });
    }

    rx
}
