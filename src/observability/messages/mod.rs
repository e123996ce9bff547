// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! This module contains all message types used by the interception framework
//! for diagnostic and operational logging. Each message type implements the
//! `Display` trait to provide consistent, human-readable output while
//! enabling future internationalization.
//!
//! # Organization
//!
//! Messages are organized by subsystem to maintain Single Responsibility
//! Principle:
//!
//! * `chain` - Chain invocation lifecycle events
//! * `interceptor` - Built-in interceptor events
//! * `property` - Observable field and setter transform events
//!
//! # Usage Pattern
//!
//! ```rust
//! use interpose::observability::messages::chain::InvocationStarted;
//!
//! let msg = InvocationStarted {
//!     operation: "request",
//!     interceptor_count: 2,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

pub mod chain;
pub mod interceptor;
pub mod property;

use tracing::Span;

/// Structured emission for a log message type.
///
/// `log()` records the message with its fields attached as structured
/// key/value pairs; `span()` opens a span carrying the same fields so nested
/// events inherit the context.
pub trait StructuredLog {
    /// Log this message at its designated level with structured fields.
    fn log(&self);

    /// Create a span carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
