use conduit_cancel::Cancel;
use conduit_error::Error;
use flume::r#async::RecvStream;
use futures_core::Stream;
use pin_project_lite::pin_project;

/// Create an unbuffered channel.
///
/// A send completes only once a receiver has taken the item. The channel
/// closes when the last [`Sender`] is dropped or closed; receivers then see
/// `None` forever.
pub fn channel<T>() -> (Sender<T>, Receiver<T>) {
    let (sx, rx) = flume::bounded(0);
    (Sender { sx }, Receiver { rx })
}

/// The producing side of a channel. Only senders can close a channel.
pub struct Sender<T> {
    sx: flume::Sender<T>,
}

impl<T> Sender<T> {
    pub async fn send(&self, item: T) -> Result<(), Error> {
        self.sx
            .send_async(item)
            .await
            .map_err(|_| Error::closed())
    }

    /// Send `item` unless `token` fires first.
    pub async fn send_with(&self, token: &Cancel, item: T) -> Result<(), Error> {
        match token.watch(self.send(item)).await {
            Some(ret) => ret,
            None => Err(Error::cancelled()),
        }
    }

    pub fn send_blocking(&self, item: T) -> Result<(), Error> {
        self.sx.send(item).map_err(|_| Error::closed())
    }

    /// Give up this handle. The channel closes once no sender is left.
    pub fn close(self) {}

    /// Returns `true` when every receiver has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sx.is_disconnected()
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Sender {
            sx: self.sx.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Sender<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sender")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

/// The consuming side of a channel.
///
/// Receivers can be cloned; every item goes to exactly one of the clones.
pub struct Receiver<T> {
    rx: flume::Receiver<T>,
}

impl<T> Receiver<T> {
    /// Wait for the next item. `None` once the channel is closed.
    pub async fn recv(&self) -> Option<T> {
        self.rx.recv_async().await.ok()
    }

    /// Wait for the next item unless `token` fires first.
    pub async fn recv_with(&self, token: &Cancel) -> Option<T> {
        token.watch(self.recv()).await.flatten()
    }

    pub fn recv_blocking(&self) -> Option<T> {
        self.rx.recv().ok()
    }

    /// Returns `true` when every sender is gone.
    pub fn is_closed(&self) -> bool {
        self.rx.is_disconnected()
    }

    pub fn into_stream(self) -> ReceiverStream<T>
    where
        T: 'static,
    {
        ReceiverStream {
            rx: self.rx.into_stream(),
        }
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        Receiver {
            rx: self.rx.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Receiver")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

pin_project! {
    pub struct ReceiverStream<T: 'static> {
        #[pin]
        rx: RecvStream<'static, T>
    }
}

impl<T: 'static> Stream for ReceiverStream<T> {
    type Item = T;

    fn poll_next(
        self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Option<Self::Item>> {
        let this = self.project();
        this.rx.poll_next(cx)
    }
}
