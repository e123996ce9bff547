// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for chain invocation lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Entry into an interceptor chain
//! * Successful and failed completion of a chained invocation
//! * Operation and interceptor registration

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A wrapped operation was entered through its interceptor chain.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use interpose::observability::messages::chain::InvocationStarted;
///
/// let msg = InvocationStarted {
///     operation: "request",
///     interceptor_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct InvocationStarted<'a> {
    pub operation: &'a str,
    pub interceptor_count: usize,
}

impl Display for InvocationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invoking '{}' through {} interceptor(s)",
            self.operation, self.interceptor_count
        )
    }
}

impl StructuredLog for InvocationStarted<'_> {
    fn log(&self) {
        tracing::info!(
            operation = self.operation,
            interceptor_count = self.interceptor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "invocation",
            span_name = name,
            operation = self.operation,
            interceptor_count = self.interceptor_count,
        )
    }
}

/// A chained invocation completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct InvocationCompleted<'a> {
    pub operation: &'a str,
}

impl Display for InvocationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invocation of '{}' completed", self.operation)
    }
}

impl StructuredLog for InvocationCompleted<'_> {
    fn log(&self) {
        tracing::info!(operation = self.operation, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("invocation", span_name = name, operation = self.operation)
    }
}

/// A chained invocation failed.
///
/// The failure has already been through every interceptor's declared policy
/// by the time this message is logged; it is re-signaled to the caller
/// unchanged.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use interpose::observability::messages::chain::InvocationFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// let msg = InvocationFailed {
///     operation: "request",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct InvocationFailed<'a> {
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for InvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invocation of '{}' failed: {}", self.operation, self.error)
    }
}

impl StructuredLog for InvocationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("invocation", span_name = name, operation = self.operation)
    }
}

/// An interceptor was attached to a registered operation.
///
/// # Log Level
/// `debug!` - Registration detail
pub struct InterceptorRegistered<'a> {
    pub operation: &'a str,
    pub interceptor: &'a str,
    pub position: usize,
}

impl Display for InterceptorRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interceptor '{}' registered on '{}' at position {}",
            self.interceptor, self.operation, self.position
        )
    }
}

impl StructuredLog for InterceptorRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            operation = self.operation,
            interceptor = self.interceptor,
            position = self.position,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "registration",
            span_name = name,
            operation = self.operation,
            interceptor = self.interceptor,
        )
    }
}
