use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Combine-latest over two fallible streams.
///
/// Keeps one latest-value cell per source. Whenever either source produces
/// a value and both cells are filled, `combine` runs on the pair and its
/// output is yielded. Values arriving from both sides in the same poll
/// produce a single recombination.
///
/// The first `Err` from either side is yielded unchanged and ends the
/// stream; both sources are dropped at that point. A source that ends
/// normally leaves its last value in place. The combined stream ends when
/// both sources have ended, or as soon as one ends without ever producing a
/// value.
pub struct CombineLatest<A, B, L, R, F> {
    left: Option<A>,
    right: Option<B>,
    latest_left: Option<L>,
    latest_right: Option<R>,
    combine: F,
    terminated: bool,
}

/// Combines `left` and `right` with combine-latest semantics.
pub fn combine_latest<A, B, L, R, E, F, T>(
    left: A,
    right: B,
    combine: F,
) -> CombineLatest<A, B, L, R, F>
where
    A: Stream<Item = Result<L, E>>,
    B: Stream<Item = Result<R, E>>,
    F: FnMut(&L, &R) -> T,
{
    CombineLatest {
        left: Some(left),
        right: Some(right),
        latest_left: None,
        latest_right: None,
        combine,
        terminated: false,
    }
}

impl<A, B, L, R, F> CombineLatest<A, B, L, R, F> {
    /// Pre-fills the right-hand cell so the first left value emits at once.
    pub fn with_right_seed(mut self, seed: R) -> Self {
        self.latest_right = Some(seed);
        self
    }

    fn terminate(&mut self) {
        self.terminated = true;
        self.left = None;
        self.right = None;
    }

    fn is_starved(&self) -> bool {
        (self.left.is_none() && self.latest_left.is_none())
            || (self.right.is_none() && self.latest_right.is_none())
    }
}

enum Side<T, E> {
    Value(T),
    Failed(E),
    Ended,
    Idle,
}

fn poll_side<S, T, E>(source: &mut Option<S>, cx: &mut Context<'_>) -> Side<T, E>
where
    S: Stream<Item = Result<T, E>> + Unpin,
{
    let Some(stream) = source.as_mut() else {
        return Side::Idle;
    };
    match stream.poll_next_unpin(cx) {
        Poll::Ready(Some(Ok(value))) => Side::Value(value),
        Poll::Ready(Some(Err(err))) => Side::Failed(err),
        Poll::Ready(None) => {
            *source = None;
            Side::Ended
        }
        Poll::Pending => Side::Idle,
    }
}

impl<A, B, L, R, E, F, T> Stream for CombineLatest<A, B, L, R, F>
where
    A: Stream<Item = Result<L, E>> + Unpin,
    B: Stream<Item = Result<R, E>> + Unpin,
    F: FnMut(&L, &R) -> T,
    Self: Unpin,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.terminated {
            return Poll::Ready(None);
        }

        loop {
            let mut progressed = false;
            let mut updated = false;

            match poll_side(&mut this.left, cx) {
                Side::Value(value) => {
                    this.latest_left = Some(value);
                    progressed = true;
                    updated = true;
                }
                Side::Failed(err) => {
                    this.terminate();
                    return Poll::Ready(Some(Err(err)));
                }
                Side::Ended => progressed = true,
                Side::Idle => {}
            }

            match poll_side(&mut this.right, cx) {
                Side::Value(value) => {
                    this.latest_right = Some(value);
                    progressed = true;
                    updated = true;
                }
                Side::Failed(err) => {
                    this.terminate();
                    return Poll::Ready(Some(Err(err)));
                }
                Side::Ended => progressed = true,
                Side::Idle => {}
            }

            if updated {
                if let (Some(left), Some(right)) = (&this.latest_left, &this.latest_right) {
                    return Poll::Ready(Some(Ok((this.combine)(left, right))));
                }
            }

            if (this.left.is_none() && this.right.is_none()) || this.is_starved() {
                this.terminate();
                return Poll::Ready(None);
            }

            if !progressed {
                return Poll::Pending;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::combine_latest;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::stream::{self, StreamExt};
    use futures::FutureExt;

    type Item = Result<u32, &'static str>;

    fn sum(left: &u32, right: &u32) -> u32 {
        left * 10 + right
    }

    #[test]
    fn waits_for_both_sides_then_tracks_latest() {
        let (left_tx, left_rx) = mpsc::unbounded::<Item>();
        let (right_tx, right_rx) = mpsc::unbounded::<Item>();
        let mut combined = combine_latest(left_rx, right_rx, sum);

        left_tx.unbounded_send(Ok(1)).unwrap();
        assert!(combined.next().now_or_never().is_none());

        right_tx.unbounded_send(Ok(2)).unwrap();
        assert_eq!(block_on(combined.next()), Some(Ok(12)));

        right_tx.unbounded_send(Ok(3)).unwrap();
        assert_eq!(block_on(combined.next()), Some(Ok(13)));

        left_tx.unbounded_send(Ok(4)).unwrap();
        assert_eq!(block_on(combined.next()), Some(Ok(43)));
    }

    #[test]
    fn simultaneous_updates_emit_once() {
        let (left_tx, left_rx) = mpsc::unbounded::<Item>();
        let (right_tx, right_rx) = mpsc::unbounded::<Item>();
        let mut combined = combine_latest(left_rx, right_rx, sum);

        left_tx.unbounded_send(Ok(1)).unwrap();
        right_tx.unbounded_send(Ok(1)).unwrap();
        assert_eq!(block_on(combined.next()), Some(Ok(11)));
        assert!(combined.next().now_or_never().is_none());
    }

    #[test]
    fn seed_allows_left_to_emit_alone() {
        let (left_tx, left_rx) = mpsc::unbounded::<Item>();
        let (_right_tx, right_rx) = mpsc::unbounded::<Item>();
        let mut combined = combine_latest(left_rx, right_rx, sum).with_right_seed(0);

        left_tx.unbounded_send(Ok(7)).unwrap();
        assert_eq!(block_on(combined.next()), Some(Ok(70)));
    }

    #[test]
    fn error_is_forwarded_and_ends_stream() {
        let (left_tx, left_rx) = mpsc::unbounded::<Item>();
        let (right_tx, right_rx) = mpsc::unbounded::<Item>();
        let mut combined = combine_latest(left_rx, right_rx, sum);

        left_tx.unbounded_send(Ok(1)).unwrap();
        right_tx.unbounded_send(Ok(1)).unwrap();
        assert_eq!(block_on(combined.next()), Some(Ok(11)));

        right_tx.unbounded_send(Err("store down")).unwrap();
        assert_eq!(block_on(combined.next()), Some(Err("store down")));
        assert_eq!(block_on(combined.next()), None);

        // Both receivers were dropped on failure.
        assert!(left_tx.is_closed());
        assert!(right_tx.is_closed());
    }

    #[test]
    fn ended_side_keeps_last_value() {
        let left = stream::iter(vec![Ok::<u32, &str>(1)]);
        let (right_tx, right_rx) = mpsc::unbounded::<Item>();
        let mut combined = combine_latest(left, right_rx, sum);

        right_tx.unbounded_send(Ok(2)).unwrap();
        assert_eq!(block_on(combined.next()), Some(Ok(12)));
        right_tx.unbounded_send(Ok(3)).unwrap();
        assert_eq!(block_on(combined.next()), Some(Ok(13)));

        drop(right_tx);
        assert_eq!(block_on(combined.next()), None);
    }

    #[test]
    fn side_ending_without_value_ends_stream() {
        let left = stream::empty::<Item>();
        let (right_tx, right_rx) = mpsc::unbounded::<Item>();
        let mut combined = combine_latest(left, right_rx, sum);

        right_tx.unbounded_send(Ok(2)).unwrap();
        assert_eq!(block_on(combined.next()), None);
        assert!(right_tx.is_closed());
    }

    #[test]
    fn dropping_releases_both_sources() {
        let (left_tx, left_rx) = mpsc::unbounded::<Item>();
        let (right_tx, right_rx) = mpsc::unbounded::<Item>();
        let combined = combine_latest(left_rx, right_rx, sum);

        drop(combined);
        assert!(left_tx.is_closed());
        assert!(right_tx.is_closed());
    }
}
