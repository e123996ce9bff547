// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for observable field and setter transform events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An observable field was assigned and its listener notified.
///
/// # Log Level
/// `debug!` - Per-assignment detail
pub struct FieldAssigned<'a> {
    pub field: &'a str,
    pub first_assignment: bool,
}

impl Display for FieldAssigned<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.first_assignment {
            write!(f, "Field '{}' assigned for the first time", self.field)
        } else {
            write!(f, "Field '{}' reassigned", self.field)
        }
    }
}

impl StructuredLog for FieldAssigned<'_> {
    fn log(&self) {
        tracing::debug!(
            field = self.field,
            first_assignment = self.first_assignment,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("field_assignment", span_name = name, field = self.field)
    }
}

/// A transformed property committed a value after applying its setter chain.
///
/// # Log Level
/// `debug!` - Per-assignment detail
pub struct SetterTransformed<'a> {
    pub property: &'a str,
    pub transform_count: usize,
}

impl Display for SetterTransformed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Property '{}' committed after {} transform(s)",
            self.property, self.transform_count
        )
    }
}

impl StructuredLog for SetterTransformed<'_> {
    fn log(&self) {
        tracing::debug!(
            property = self.property,
            transform_count = self.transform_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("setter_transform", span_name = name, property = self.property)
    }
}
