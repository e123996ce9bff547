// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured success/failure reporting for async operations.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::chain::Next;
use crate::errors::InvocationError;
use crate::invocation::Invocation;
use crate::reports::{OutcomeReport, Report, ReportSink};
use crate::traits::Interceptor;

/// Captures arguments and outcome of an async call into exactly one report.
///
/// Failure policy: absorbing. A delegate failure is normalized into the
/// report's `error` field and the caller receives `Ok(Value::Null)` instead;
/// nothing downstream of this layer ever observes the raw failure. The
/// report is the audit trail for the swallowed error.
///
/// This makes the outcome logger an error boundary, not a transparent
/// pass-through. Stack it outside a [`TimingInterceptor`] and the timing
/// layer still sees the original failure; stack it inside and the timing
/// layer only ever sees success.
///
/// [`TimingInterceptor`]: crate::interceptors::TimingInterceptor
pub struct OutcomeLogger {
    sink: Arc<dyn ReportSink>,
}

impl OutcomeLogger {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Interceptor for OutcomeLogger {
    async fn around(
        &self,
        invocation: Invocation,
        next: Next<'_>,
    ) -> Result<Value, InvocationError> {
        let operation = invocation.operation.clone();
        let args = invocation.args.clone();

        match next.run(invocation).await {
            Ok(value) => {
                self.sink.emit(Report::Outcome(OutcomeReport {
                    operation,
                    success: true,
                    args,
                    value: Some(value.clone()),
                    error: None,
                }));
                Ok(value)
            }
            Err(error) => {
                self.sink.emit(Report::Outcome(OutcomeReport {
                    operation,
                    success: false,
                    args,
                    value: None,
                    error: Some(error.to_string()),
                }));
                Ok(Value::Null)
            }
        }
    }

    fn name(&self) -> &'static str {
        "outcome_logger"
    }
}
