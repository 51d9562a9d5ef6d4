//! The recording counter

use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use super::PerformanceCounter;
use crate::config::Level;
use crate::report::{ReportMessage, StepRecord};
use crate::sink::Sink;
use crate::timing::{Measured, measure};

/// Counter that times steps and reports them through a [`Sink`]
///
/// The total is the sum of the recorded steps' own durations. Time spent
/// between steps is not counted. After [`stop_and_report`] the counter is
/// frozen: further steps still run but are not recorded until
/// [`restart`].
///
/// [`stop_and_report`]: PerformanceCounter::stop_and_report
/// [`restart`]: PerformanceCounter::restart
pub struct ActiveCounter {
    name: String,
    level: Level,
    sink: Arc<dyn Sink>,
    steps: Vec<StepRecord>,
    total: Duration,
    running: bool,
}

impl ActiveCounter {
    pub(crate) fn new(sink: Arc<dyn Sink>, name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level,
            sink,
            steps: Vec::new(),
            total: Duration::ZERO,
            running: true,
        }
    }

    /// Header name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Report level
    pub fn level(&self) -> Level {
        self.level
    }

    /// Steps recorded since start or the last restart
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Sum of recorded step durations
    pub fn total_elapsed(&self) -> Duration {
        self.total
    }

    /// `false` once stopped, until restarted
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Build the report without emitting it
    pub fn message(&self) -> ReportMessage {
        ReportMessage::build(&self.name, &self.steps, self.total)
    }

    fn push(&mut self, name: String, elapsed: Duration) {
        if !self.running {
            tracing::trace!(
                target: "nebula_perf",
                counter = %self.name,
                step = %name,
                "counter stopped, step not recorded"
            );
            return;
        }

        self.total += elapsed;
        self.steps.push(StepRecord { name, elapsed });
    }

    fn discard(&self, name: &str) {
        tracing::trace!(
            target: "nebula_perf",
            counter = %self.name,
            step = %name,
            "step failed, timing discarded"
        );
    }
}

impl PerformanceCounter for ActiveCounter {
    fn record_step<T>(&mut self, name: impl Into<String>, step: impl FnOnce() -> T) -> T {
        let (output, elapsed) = measure(step);
        self.push(name.into(), elapsed);
        output
    }

    fn try_record_step<T, E>(
        &mut self,
        name: impl Into<String>,
        step: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let (output, elapsed) = measure(step);
        let name = name.into();
        match output {
            Ok(_) => self.push(name, elapsed),
            Err(_) => self.discard(&name),
        }
        output
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
            let (output, elapsed) = step.measured().await;
            self.push(name.into(), elapsed);
            output
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
            let (output, elapsed) = step.measured().await;
            let name = name.into();
            match output {
                Ok(_) => self.push(name, elapsed),
                Err(_) => self.discard(&name),
            }
            output
        }
    }

    fn report(&self) {
        if !self.sink.is_enabled(self.level) {
            return;
        }

        let message = self.message();
        self.sink
            .emit(self.level, &message.template, &message.args, None);
    }

    fn stop_and_report(&mut self) {
        self.running = false;
        self.report();
    }

    fn restart(&mut self, new_name: Option<&str>) {
        if let Some(name) = new_name.filter(|name| !name.trim().is_empty()) {
            self.name = name.to_string();
        }

        self.steps.clear();
        self.total = Duration::ZERO;
        self.running = true;

        tracing::debug!(target: "nebula_perf", counter = %self.name, "performance counter restarted");
    }

    fn is_active(&self) -> bool {
        true
    }
}

impl fmt::Debug for ActiveCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveCounter")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("steps", &self.steps)
            .field("total", &self.total)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Arg, MemorySink};
    use pretty_assertions::assert_eq;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::thread::sleep;

    fn counter(name: &str) -> (ActiveCounter, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let counter = ActiveCounter::new(sink.clone(), name, Level::Information);
        (counter, sink)
    }

    #[test]
    fn test_record_step_returns_result_and_records() {
        let (mut counter, _) = counter("unit");

        let value = counter.record_step("compute", || 40 + 2);

        assert_eq!(value, 42);
        assert_eq!(counter.steps().len(), 1);
        assert_eq!(counter.steps()[0].name, "compute");
    }

    #[test]
    fn test_total_is_sum_of_steps() {
        let (mut counter, _) = counter("unit");

        counter.record_step("a", || (0..100).sum::<u64>());
        sleep(Duration::from_millis(30));
        counter.record_step("b", || (0..100).sum::<u64>());

        let sum: Duration = counter.steps().iter().map(|s| s.elapsed).sum();
        assert_eq!(counter.total_elapsed(), sum);
        assert!(counter.total_elapsed() < Duration::from_millis(30));
    }

    #[test]
    fn test_failed_step_is_not_recorded() {
        let (mut counter, _) = counter("unit");

        let result: Result<(), &str> = counter.try_record_step("fails", || Err("boom"));

        assert_eq!(result, Err("boom"));
        assert!(counter.steps().is_empty());
        assert_eq!(counter.total_elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_successful_fallible_step_is_recorded() {
        let (mut counter, _) = counter("unit");

        let result: Result<u8, &str> = counter.try_record_step("ok", || Ok(1));

        assert_eq!(result, Ok(1));
        assert_eq!(counter.steps().len(), 1);
    }

    #[test]
    fn test_plain_record_keeps_err_values() {
        let (mut counter, _) = counter("unit");

        let result = counter.record_step("parse", || "x".parse::<u32>());

        assert!(result.is_err());
        assert_eq!(counter.steps().len(), 1);
        assert_eq!(counter.steps()[0].name, "parse");
    }

    #[test]
    fn test_panicking_step_is_not_recorded() {
        let (mut counter, _) = counter("unit");

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            counter.record_step("panics", || -> u32 { panic!("step blew up") });
        }));

        assert!(outcome.is_err());
        assert!(counter.steps().is_empty());
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let (mut counter, _) = counter("unit");

        counter.record_step("io", || ());
        counter.record_step("io", || ());

        assert_eq!(counter.steps().len(), 2);
    }

    #[test]
    fn test_report_emits_message() {
        let (mut counter, sink) = counter("unit");
        counter.record_step("a", || ());

        counter.report();

        let emission = sink.last().unwrap();
        assert_eq!(emission.level, Level::Information);
        assert_eq!(emission.template, counter.message().template);
        assert_eq!(emission.args[0], Arg::from("unit"));
        assert_eq!(emission.args[1], Arg::from("a"));
        assert_eq!(emission.args.len(), 4);
    }

    #[test]
    fn test_report_twice_is_identical() {
        let (mut counter, sink) = counter("unit");
        counter.record_step("a", || ());

        counter.report();
        counter.report();

        let emissions = sink.emissions();
        assert_eq!(emissions.len(), 2);
        assert_eq!(emissions[0], emissions[1]);
    }

    #[test]
    fn test_report_skipped_when_sink_disabled() {
        let sink = Arc::new(MemorySink::with_min_level(Level::Warning));
        let counter = ActiveCounter::new(sink.clone(), "quiet", Level::Debug);

        counter.report();

        assert!(sink.is_empty());
    }

    #[test]
    fn test_stop_freezes_recording() {
        let (mut counter, sink) = counter("unit");
        counter.record_step("before", || ());

        counter.stop_and_report();
        let value = counter.record_step("after", || "still runs");

        assert_eq!(value, "still runs");
        assert!(!counter.is_running());
        assert_eq!(counter.steps().len(), 1);
        assert_eq!(sink.len(), 1);

        counter.report();
        assert_eq!(sink.emissions()[0], sink.emissions()[1]);
    }

    #[test]
    fn test_restart_clears_and_renames() {
        let (mut counter, sink) = counter("first");
        counter.record_step("old", || sleep(Duration::from_millis(2)));
        counter.stop_and_report();

        counter.restart(Some("second"));
        assert!(counter.is_running());
        assert!(counter.steps().is_empty());
        assert_eq!(counter.total_elapsed(), Duration::ZERO);

        counter.record_step("new", || ());
        counter.report();

        let emission = sink.last().unwrap();
        assert_eq!(emission.args[0], Arg::from("second"));
        assert_eq!(emission.args[1], Arg::from("new"));
        assert_eq!(emission.args.len(), 4);
    }

    #[test]
    fn test_restart_keeps_name() {
        let (mut counter, _) = counter("first");

        counter.restart(Some("renamed"));
        counter.restart(None);
        assert_eq!(counter.name(), "renamed");

        counter.restart(Some("   "));
        assert_eq!(counter.name(), "renamed");
    }

    #[tokio::test]
    async fn test_async_step_spans_suspension() {
        let (mut counter, _) = counter("unit");

        let value = counter
            .record_step_async("wait", async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                "waited"
            })
            .await;

        assert_eq!(value, "waited");
        assert!(counter.steps()[0].elapsed >= Duration::from_millis(15));
    }

    #[tokio::test]
    async fn test_async_failure_is_not_recorded() {
        let (mut counter, _) = counter("unit");

        let result: Result<(), String> = counter
            .try_record_step_async("fails", async { Err("nope".to_string()) })
            .await;

        assert_eq!(result, Err("nope".to_string()));
        assert!(counter.steps().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_async_step_is_not_recorded() {
        let (mut counter, _) = counter("unit");

        let outcome = tokio::time::timeout(
            Duration::from_millis(5),
            counter.record_step_async("slow", tokio::time::sleep(Duration::from_secs(5))),
        )
        .await;

        assert!(outcome.is_err());
        assert!(counter.steps().is_empty());
    }
}
