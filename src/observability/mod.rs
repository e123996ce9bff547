// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the interception framework. Message types follow a
//! struct-based pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Maintain Single Responsibility Principle (SRP)
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::chain` - Chain invocation lifecycle events
//! * `messages::interceptor` - Built-in interceptor events
//! * `messages::property` - Observable field and setter transform events
//!
//! # Usage
//!
//! ```rust
//! use interpose::observability::messages::chain::InvocationFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = InvocationFailed {
//!     operation: "request",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
