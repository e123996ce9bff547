// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wall-clock timing around a wrapped call.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;

use crate::chain::Next;
use crate::errors::InvocationError;
use crate::invocation::Invocation;
use crate::reports::{Report, ReportSink, TimingReport};
use crate::traits::Interceptor;

/// Measures how long a wrapped call takes, millisecond resolution.
///
/// Failure policy: pass-through. The report is emitted on both the success
/// and failure paths, and a failure is re-signaled to the caller unchanged
/// after the report. Nested calls each produce their own report.
pub struct TimingInterceptor {
    sink: Arc<dyn ReportSink>,
}

impl TimingInterceptor {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Interceptor for TimingInterceptor {
    async fn around(
        &self,
        invocation: Invocation,
        next: Next<'_>,
    ) -> Result<Value, InvocationError> {
        let operation = invocation.operation.clone();
        let start = Instant::now();

        let result = next.run(invocation).await;

        // Emitted before the result is handed back, success or failure.
        let elapsed_ms = start.elapsed().as_millis() as u64;
        self.sink.emit(Report::Timing(TimingReport {
            operation,
            elapsed_ms,
        }));

        result
    }

    fn name(&self) -> &'static str {
        "timing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::InterceptorChain;
    use crate::operations::{FnOperation, StubOperation};
    use crate::reports::MemorySink;
    use std::time::Duration;

    fn timing_report(report: &Report) -> &TimingReport {
        match report {
            Report::Timing(timing) => timing,
            other => panic!("expected timing report, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn one_report_per_successful_call() {
        let sink = Arc::new(MemorySink::new());
        let mut chain = InterceptorChain::new(Arc::new(StubOperation::new("fast")));
        chain.register(Arc::new(TimingInterceptor::new(sink.clone())));

        chain.invoke(vec![]).await.unwrap();

        let reports = sink.reports();
        assert_eq!(reports.len(), 1);
        let timing = timing_report(&reports[0]);
        assert_eq!(timing.operation, "fast");
        // Zero-duration calls report 0, never underflow.
        assert!(timing.elapsed_ms < 1_000);
    }

    #[tokio::test]
    async fn report_emitted_and_failure_still_reaches_the_caller() {
        let sink = Arc::new(MemorySink::new());
        let operation = FnOperation::new("slow_failure", |_args: Vec<Value>| async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Err(InvocationError::Failed {
                operation: "slow_failure".to_string(),
                message: "boom".to_string(),
            })
        });

        let mut chain = InterceptorChain::new(Arc::new(operation));
        chain.register(Arc::new(TimingInterceptor::new(sink.clone())));

        let err = chain.invoke(vec![]).await.unwrap_err();
        assert_eq!(
            err,
            InvocationError::Failed {
                operation: "slow_failure".to_string(),
                message: "boom".to_string(),
            }
        );

        let reports = sink.reports();
        assert_eq!(reports.len(), 1);
        assert!(timing_report(&reports[0]).elapsed_ms >= 5);
    }

    #[tokio::test]
    async fn nested_timed_calls_report_independently() {
        let inner_sink = Arc::new(MemorySink::new());
        let mut inner = InterceptorChain::new(Arc::new(StubOperation::new("inner")));
        inner.register(Arc::new(TimingInterceptor::new(inner_sink.clone())));
        let inner = Arc::new(inner);

        let outer_sink = Arc::new(MemorySink::new());
        let inner_for_op = inner.clone();
        let operation = FnOperation::new("outer", move |_args: Vec<Value>| {
            let inner = inner_for_op.clone();
            async move { inner.invoke(vec![]).await }
        });
        let mut outer = InterceptorChain::new(Arc::new(operation));
        outer.register(Arc::new(TimingInterceptor::new(outer_sink.clone())));

        outer.invoke(vec![]).await.unwrap();

        assert_eq!(inner_sink.reports().len(), 1);
        assert_eq!(outer_sink.reports().len(), 1);
        assert_eq!(timing_report(&inner_sink.reports()[0]).operation, "inner");
        assert_eq!(timing_report(&outer_sink.reports()[0]).operation, "outer");
    }
}
