// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in report sinks.

use std::sync::Mutex;

use crate::observability::messages::interceptor::{
    FailureAbsorbed, OutcomeReported, TimingReportEmitted,
};
use crate::observability::messages::StructuredLog;
use crate::reports::{Report, ReportSink};

/// Routes reports into structured `tracing` events.
///
/// Timing and successful outcomes log at `info!`; absorbed failures
/// additionally log at `warn!` so swallowed errors keep an audit trail.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for TracingSink {
    fn emit(&self, report: Report) {
        match report {
            Report::Timing(timing) => {
                TimingReportEmitted {
                    operation: &timing.operation,
                    elapsed_ms: timing.elapsed_ms,
                }
                .log();
            }
            Report::Outcome(outcome) => {
                OutcomeReported {
                    operation: &outcome.operation,
                    success: outcome.success,
                }
                .log();

                if let Some(error) = &outcome.error {
                    FailureAbsorbed {
                        operation: &outcome.operation,
                        error,
                    }
                    .log();
                }
            }
        }
    }
}

/// Captures reports in memory, in emission order.
///
/// Intended for assertions: tests emit through a wrapped call, then inspect
/// the captured sequence.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<Report>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every report emitted so far.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    /// Drain the captured reports, leaving the sink empty.
    pub fn take(&self) -> Vec<Report> {
        std::mem::take(&mut *self.reports.lock().unwrap())
    }

    pub fn len(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, report: Report) {
        self.reports.lock().unwrap().push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::TimingReport;

    #[test]
    fn memory_sink_preserves_emission_order() {
        let sink = MemorySink::new();

        sink.emit(Report::Timing(TimingReport {
            operation: "first".to_string(),
            elapsed_ms: 1,
        }));
        sink.emit(Report::Timing(TimingReport {
            operation: "second".to_string(),
            elapsed_ms: 2,
        }));

        let reports = sink.reports();
        assert_eq!(reports.len(), 2);
        match &reports[0] {
            Report::Timing(t) => assert_eq!(t.operation, "first"),
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn take_drains_the_sink() {
        let sink = MemorySink::new();
        sink.emit(Report::Timing(TimingReport {
            operation: "op".to_string(),
            elapsed_ms: 0,
        }));

        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }
}
