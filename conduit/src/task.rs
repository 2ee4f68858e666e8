use conduit_cancel::Cancel;
use tracing::{Instrument, trace_span};

use crate::channel::{Receiver, Sender};

/// Why a pipeline task returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exit {
    /// The input closed.
    Drained,
    Cancelled,
    /// Nobody is reading the output anymore.
    HungUp,
}

impl Exit {
    /// Classify a receive that came back empty.
    pub(crate) fn after_recv(token: &Cancel) -> Exit {
        if token.is_cancelled() {
            Exit::Cancelled
        } else {
            Exit::Drained
        }
    }

    pub(crate) fn after_send(err: &conduit_error::Error) -> Exit {
        if err.is_cancelled() {
            Exit::Cancelled
        } else {
            Exit::HungUp
        }
    }
}

pub(crate) fn spawn<F>(name: &'static str, index: usize, future: F)
where
    F: Future<Output = Exit> + Send + 'static,
{
    let span = trace_span!("conduit", task = name, index);
    tokio::spawn(
        async move {
            let exit = future.await;
            tracing::trace!(?exit, "task finished");
        }
        .instrument(span),
    );
}

/// Move items from `input` to `output` until either side is done.
///
/// A hung up output stops the loop before the next receive, so the task stops
/// taking items from a shared input it can no longer deliver.
pub(crate) async fn forward<T>(token: &Cancel, input: &Receiver<T>, output: &Sender<T>) -> Exit {
    loop {
        if output.is_closed() {
            return Exit::HungUp;
        }

        let Some(item) = input.recv_with(token).await else {
            return Exit::after_recv(token);
        };

        if let Err(err) = output.send_with(token, item).await {
            return Exit::after_send(&err);
        }
    }
}
