use std::sync::Arc;

use conduit_cancel::Cancel;
use tracing::{trace, warn};

use crate::{
    channel::{Receiver, Sender, channel},
    task::{Exit, spawn},
    work::Work,
};

/// Apply `work` to every item of `input` and send each outcome to `output`.
///
/// Errors returned by `work` are delivered like any other value and do not
/// stop the worker. Returns once `input` closes, `token` fires or nobody
/// reads `output` anymore. The call to `work` itself is not raced against
/// `token`.
pub async fn worker<T, W>(
    token: Cancel,
    input: Receiver<T>,
    work: W,
    output: Sender<Result<W::Output, W::Error>>,
) where
    W: Work<T>,
{
    let exit = run(&token, &input, &work, &output).await;
    trace!(?exit, "worker finished");
}

async fn run<T, W>(
    token: &Cancel,
    input: &Receiver<T>,
    work: &W,
    output: &Sender<Result<W::Output, W::Error>>,
) -> Exit
where
    W: Work<T>,
{
    loop {
        if output.is_closed() {
            return Exit::HungUp;
        }

        let Some(item) = input.recv_with(token).await else {
            return Exit::after_recv(token);
        };

        let ret = work.call(token, item).await;

        if let Err(err) = output.send_with(token, ret).await {
            return Exit::after_send(&err);
        }
    }
}

/// Run `size` workers over `input`.
///
/// Workers share `input`, so whichever worker is idle takes the next item.
/// The outcomes arrive in completion order, not input order. The returned
/// channel closes once every worker has returned and must be read until then,
/// otherwise the workers stay blocked on their sends.
pub fn pool<T, W>(
    token: &Cancel,
    input: Receiver<T>,
    size: usize,
    work: W,
) -> Receiver<Result<W::Output, W::Error>>
where
    T: Send + 'static,
    W: Work<T> + Send + Sync + 'static,
    W::Future: Send,
    W::Output: Send + 'static,
    W::Error: Send + 'static,
{
    let (sx, rx) = channel();

    if size == 0 {
        warn!("pool started without workers, output is closed");
    }

    let work = Arc::new(work);

    for index in 0..size {
        let token = token.clone();
        let input = input.clone();
        let work = work.clone();
        let sx = sx.clone();
        spawn("worker", index, async move {
            run(&token, &input, &work, &sx).await
        });
    }

    rx
}
