use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream wrapper that ends after forwarding the first `Err`.
///
/// The inner stream is dropped as soon as it fails or ends.
pub struct StopAfterError<S> {
    inner: Option<S>,
}

/// Wraps `stream` so that nothing is yielded after its first error.
pub fn stop_after_error<S>(stream: S) -> StopAfterError<S> {
    StopAfterError {
        inner: Some(stream),
    }
}

impl<S, T, E> Stream for StopAfterError<S>
where
    S: Stream<Item = Result<T, E>> + Unpin,
{
    type Item = Result<T, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let Some(inner) = self.inner.as_mut() else {
            return Poll::Ready(None);
        };

        match inner.poll_next_unpin(cx) {
            Poll::Ready(Some(Ok(value))) => Poll::Ready(Some(Ok(value))),
            Poll::Ready(Some(Err(err))) => {
                self.inner = None;
                Poll::Ready(Some(Err(err)))
            }
            Poll::Ready(None) => {
                self.inner = None;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
