// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for built-in interceptor events.
//!
//! This module contains message types for logging events related to:
//! * Timing report emission
//! * Outcome report emission
//! * Failure absorption by the outcome logger

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A timing report was emitted for a wrapped call.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use interpose::observability::messages::interceptor::TimingReportEmitted;
///
/// let msg = TimingReportEmitted {
///     operation: "request",
///     elapsed_ms: 12,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct TimingReportEmitted<'a> {
    pub operation: &'a str,
    pub elapsed_ms: u64,
}

impl Display for TimingReportEmitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "'{}' took {}ms", self.operation, self.elapsed_ms)
    }
}

impl StructuredLog for TimingReportEmitted<'_> {
    fn log(&self) {
        tracing::info!(
            operation = self.operation,
            elapsed_ms = self.elapsed_ms,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "timing",
            span_name = name,
            operation = self.operation,
            elapsed_ms = self.elapsed_ms,
        )
    }
}

/// An outcome report was emitted for a wrapped call.
///
/// # Log Level
/// `info!` - Important operational event
pub struct OutcomeReported<'a> {
    pub operation: &'a str,
    pub success: bool,
}

impl Display for OutcomeReported<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.success {
            write!(f, "'{}' succeeded", self.operation)
        } else {
            write!(f, "'{}' failed", self.operation)
        }
    }
}

impl StructuredLog for OutcomeReported<'_> {
    fn log(&self) {
        tracing::info!(
            operation = self.operation,
            success = self.success,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "outcome",
            span_name = name,
            operation = self.operation,
            success = self.success,
        )
    }
}

/// The outcome logger absorbed a failure instead of re-signaling it.
///
/// Downstream callers observe a successful completion with a null value;
/// this message is the audit trail for the swallowed error.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use interpose::observability::messages::interceptor::FailureAbsorbed;
///
/// let msg = FailureAbsorbed {
///     operation: "request",
///     error: "connection refused",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct FailureAbsorbed<'a> {
    pub operation: &'a str,
    pub error: &'a str,
}

impl Display for FailureAbsorbed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Absorbed failure from '{}': {}",
            self.operation, self.error
        )
    }
}

impl StructuredLog for FailureAbsorbed<'_> {
    fn log(&self) {
        tracing::warn!(
            operation = self.operation,
            error = self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("outcome", span_name = name, operation = self.operation)
    }
}
