//! Report message construction
//!
//! A report is a template plus its ordered arguments:
//!
//! ```text
//! Reporting performance counter {CounterName}
//! - Step {StepName1}: {StepElapsedMs1} ms
//! - Step {StepName2}: {StepElapsedMs2} ms
//! - Total elapsed: {TotalElapsedMs} ms
//! ```
//!
//! with arguments `[name, step1, ms1, step2, ms2, total_ms]`. Placeholders are
//! numbered rather than derived from step names so arbitrary names (spaces,
//! braces, duplicates) never corrupt the template.

use std::fmt::Write;
use std::time::Duration;

use crate::format::render;
use crate::sink::Arg;

/// Timing of one recorded step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Step name as given by the caller
    pub name: String,
    /// Wall-clock time spent in the step
    pub elapsed: Duration,
}

impl StepRecord {
    /// Elapsed time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        millis(self.elapsed)
    }
}

/// A fully built report, ready to hand to a sink
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMessage {
    /// Message template with numbered placeholders
    pub template: String,
    /// Flattened arguments in placeholder order
    pub args: Vec<Arg>,
}

impl ReportMessage {
    /// Build the report for a counter named `name`
    pub fn build(name: &str, steps: &[StepRecord], total: Duration) -> Self {
        let mut template = String::from("Reporting performance counter {CounterName}\n");
        let mut args = Vec::with_capacity(2 + steps.len() * 2);
        args.push(Arg::from(name));

        for (index, step) in steps.iter().enumerate() {
            let n = index + 1;
            let _ = writeln!(template, "- Step {{StepName{n}}}: {{StepElapsedMs{n}}} ms");
            args.push(Arg::from(step.name.as_str()));
            args.push(Arg::Millis(step.elapsed_ms()));
        }

        template.push_str("- Total elapsed: {TotalElapsedMs} ms");
        args.push(Arg::Millis(millis(total)));

        Self { template, args }
    }

    /// Template with arguments substituted
    pub fn rendered(&self) -> String {
        render(&self.template, &self.args)
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}
