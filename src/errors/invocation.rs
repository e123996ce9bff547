// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced to callers of wrapped operations.
//!
//! All variants implement `std::error::Error` via the `thiserror` crate for
//! consistent error handling.

use thiserror::Error;

/// Error type for invoking a wrapped operation.
///
/// Interceptors declare their failure policy against this type: the timing
/// interceptor re-signals it unchanged, while the outcome logger absorbs it
/// after reporting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvocationError {
    /// The underlying operation failed.
    #[error("Operation '{operation}' failed: {message}")]
    Failed { operation: String, message: String },

    /// The argument list did not match what the operation expects.
    #[error("Invalid arguments for operation '{operation}': {reason}")]
    InvalidArguments { operation: String, reason: String },

    /// No operation is registered under the requested name.
    #[error("No operation registered under '{operation}'")]
    UnknownOperation { operation: String },
}

impl InvocationError {
    /// Name of the operation this error originated from.
    pub fn operation(&self) -> &str {
        match self {
            InvocationError::Failed { operation, .. }
            | InvocationError::InvalidArguments { operation, .. }
            | InvocationError::UnknownOperation { operation } => operation,
        }
    }
}
