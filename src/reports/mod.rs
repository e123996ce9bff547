// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Report types and the injected report sink.
//!
//! Reports are the observable side channel of the framework: interceptors
//! describe what happened during a call and hand the description to a
//! [`ReportSink`] supplied at construction time. The framework never decides
//! where reports go; that is the collaborator's job.

mod sinks;

pub use sinks::{MemorySink, TracingSink};

use serde::Serialize;
use serde_json::Value;

/// Wall-clock measurement of a single wrapped call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingReport {
    /// Name of the measured operation.
    pub operation: String,
    /// Elapsed wall-clock time, millisecond resolution. Zero-duration calls
    /// report 0.
    pub elapsed_ms: u64,
}

/// Structured success/failure summary of a single wrapped call.
///
/// Exactly one of `value` and `error` is populated, matching the `success`
/// flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeReport {
    /// Name of the reported operation.
    pub operation: String,
    /// Whether the underlying call completed successfully.
    pub success: bool,
    /// The original argument list, captured before delegation.
    pub args: Vec<Value>,
    /// The resolved value, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// The normalized failure, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A report emitted by a built-in interceptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Timing(TimingReport),
    Outcome(OutcomeReport),
}

/// Injected sink that receives every emitted report.
///
/// Implementations must be cheap and must not fail: report emission sits on
/// the hot path of every wrapped call, including failure paths.
pub trait ReportSink: Send + Sync {
    fn emit(&self, report: Report);
}
