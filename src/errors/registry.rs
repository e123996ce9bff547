// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for operation registration and interceptor attachment.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building an interception registry
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// An operation with the same name was already registered
    DuplicateOperation {
        /// The duplicate operation name
        operation: String,
    },

    /// An interceptor was attached to a target that does not exist
    UnknownTarget {
        /// The missing target operation name
        target: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateOperation { operation } => {
                write!(f, "Duplicate operation name: '{}'", operation)
            }
            RegistryError::UnknownTarget { target } => {
                write!(
                    f,
                    "Cannot attach interceptor: no operation registered under '{}'",
                    target
                )
            }
        }
    }
}

impl Error for RegistryError {}
