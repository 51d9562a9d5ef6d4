//! Wall-clock measurement primitives

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use pin_project::pin_project;

/// Run `op` and return its output together with the time it took
pub fn measure<T>(op: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = op();
    (output, start.elapsed())
}

/// Extension trait for measuring futures
pub trait Measured: IntoFuture + Sized {
    /// Resolve to `(output, elapsed)`, timed from first poll to completion
    ///
    /// Time spent suspended counts, so the result reflects real latency
    /// rather than CPU time.
    fn measured(self) -> MeasuredFuture<Self::IntoFuture> {
        MeasuredFuture {
            inner: self.into_future(),
            start: None,
        }
    }
}

impl<F> Measured for F where F: IntoFuture {}

/// A future that measures how long its inner future takes
#[pin_project]
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct MeasuredFuture<F> {
    #[pin]
    inner: F,
    start: Option<Instant>,
}

impl<F: Future> Future for MeasuredFuture<F> {
    type Output = (F::Output, Duration);

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let start = *this.start.get_or_insert_with(Instant::now);

        match this.inner.poll(cx) {
            Poll::Ready(output) => Poll::Ready((output, start.elapsed())),
            Poll::Pending => Poll::Pending,
        }
    }
}
