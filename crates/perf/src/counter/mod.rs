//! Performance counters
//!
//! [`PerformanceCounter`] is the capability every counter offers. [`Counter`]
//! is the handle the factory returns: either an [`ActiveCounter`] that times
//! and reports, or a [`NoopCounter`] that just runs the steps. The variant is
//! chosen once, at construction.
//!
//! Counters are owned by one logical execution context at a time. Every
//! mutating method takes `&mut self`, so sharing one counter between
//! concurrent tasks does not compile without an explicit lock.

mod active;
mod noop;

use std::future::{Future, IntoFuture};

pub use active::ActiveCounter;
pub use noop::NoopCounter;

/// Record named steps and report their timings
pub trait PerformanceCounter {
    /// Time `step` and record it under `name`
    ///
    /// Returns whatever `step` returns. A panic inside `step` unwinds through
    /// the counter and nothing is recorded. A returned `Err` is not inspected
    /// and is recorded like any other value; use
    /// [`try_record_step`](Self::try_record_step) for fallible steps.
    fn record_step<T>(&mut self, name: impl Into<String>, step: impl FnOnce() -> T) -> T;

    /// Time a fallible `step`, recording it only when it returns `Ok`
    ///
    /// An `Err` is returned unchanged and its timing is discarded.
    fn try_record_step<T, E>(
        &mut self,
        name: impl Into<String>,
        step: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E>;

    /// Time an asynchronous `step` from first poll to completion
    ///
    /// Dropping the returned future before it completes records nothing.
    fn record_step_async<F>(
        &mut self,
        name: impl Into<String>,
        step: F,
    ) -> impl Future<Output = F::Output>
    where
        F: IntoFuture;

    /// Asynchronous form of [`try_record_step`](Self::try_record_step)
    fn try_record_step_async<F, T, E>(
        &mut self,
        name: impl Into<String>,
        step: F,
    ) -> impl Future<Output = Result<T, E>>
    where
        F: IntoFuture<Output = Result<T, E>>;

    /// Emit every step recorded so far plus the total
    ///
    /// Calling this again re-emits the whole buffer, including steps that were
    /// already reported.
    fn report(&self);

    /// Stop accruing time, then [`report`](Self::report)
    fn stop_and_report(&mut self);

    /// Clear all steps and start over, optionally under a new name
    ///
    /// A `None` or blank name keeps the current one.
    fn restart(&mut self, new_name: Option<&str>);

    /// Whether this counter records anything
    fn is_active(&self) -> bool;
}

/// Counter handle returned by the factory
#[derive(Debug)]
pub enum Counter {
    /// Counting and reporting
    Active(ActiveCounter),
    /// Counting disabled
    Noop(NoopCounter),
}

impl Counter {
    /// The active counter, if counting is enabled
    pub fn as_active(&self) -> Option<&ActiveCounter> {
        match self {
            Self::Active(counter) => Some(counter),
            Self::Noop(_) => None,
        }
    }
}

impl From<ActiveCounter> for Counter {
    fn from(counter: ActiveCounter) -> Self {
        Self::Active(counter)
    }
}

impl From<NoopCounter> for Counter {
    fn from(counter: NoopCounter) -> Self {
        Self::Noop(counter)
    }
}

impl PerformanceCounter for Counter {
    fn record_step<T>(&mut self, name: impl Into<String>, step: impl FnOnce() -> T) -> T {
        match self {
            Self::Active(counter) => counter.record_step(name, step),
            Self::Noop(counter) => counter.record_step(name, step),
        }
    }

    fn try_record_step<T, E>(
        &mut self,
        name: impl Into<String>,
        step: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        match self {
            Self::Active(counter) => counter.try_record_step(name, step),
            Self::Noop(counter) => counter.try_record_step(name, step),
        }
    }

    fn record_step_async<F>(
        &mut self,
        name: impl Into<String>,
        step: F,
    ) -> impl Future<Output = F::Output>
    where
        F: IntoFuture,
    {
        async move {
            match self {
                Self::Active(counter) => counter.record_step_async(name, step).await,
                Self::Noop(counter) => counter.record_step_async(name, step).await,
            }
        }
    }

    fn try_record_step_async<F, T, E>(
        &mut self,
        name: impl Into<String>,
        step: F,
    ) -> impl Future<Output = Result<T, E>>
    where
        F: IntoFuture<Output = Result<T, E>>,
    {
        async move {
            match self {
                Self::Active(counter) => counter.try_record_step_async(name, step).await,
                Self::Noop(counter) => counter.try_record_step_async(name, step).await,
            }
        }
    }

    fn report(&self) {
        match self {
            Self::Active(counter) => counter.report(),
            Self::Noop(counter) => counter.report(),
        }
    }

    fn stop_and_report(&mut self) {
        match self {
            Self::Active(counter) => counter.stop_and_report(),
            Self::Noop(counter) => counter.stop_and_report(),
        }
    }

    fn restart(&mut self, new_name: Option<&str>) {
        match self {
            Self::Active(counter) => counter.restart(new_name),
            Self::Noop(counter) => counter.restart(new_name),
        }
    }

    fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}
