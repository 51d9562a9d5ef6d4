//! Inert counter

use std::future::{Future, IntoFuture};

use super::PerformanceCounter;

/// Counter used when counting is disabled
///
/// Steps run exactly as they would without instrumentation. Nothing is timed
/// and no sink is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCounter;

impl PerformanceCounter for NoopCounter {
    #[inline]
    fn record_step<T>(&mut self, _name: impl Into<String>, step: impl FnOnce() -> T) -> T {
        step()
    }

    #[inline]
    fn try_record_step<T, E>(
        &mut self,
        _name: impl Into<String>,
        step: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        step()
    }

    #[inline]
    fn record_step_async<F>(
        &mut self,
        _name: impl Into<String>,
        step: F,
    ) -> impl Future<Output = F::Output>
    where
        F: IntoFuture,
    {
        step.into_future()
    }

    #[inline]
    fn try_record_step_async<F, T, E>(
        &mut self,
        _name: impl Into<String>,
        step: F,
    ) -> impl Future<Output = Result<T, E>>
    where
        F: IntoFuture<Output = Result<T, E>>,
    {
        step.into_future()
    }

    fn report(&self) {}

    fn stop_and_report(&mut self) {}

    fn restart(&mut self, _new_name: Option<&str>) {}

    fn is_active(&self) -> bool {
        false
    }
}
