// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in interception behaviors.
//!
//! Each interceptor here is produced by a factory that closes over its
//! configuration (the report sink, the offset amount) at creation time and
//! never mutates it afterwards. The same configured interceptor can be
//! attached to any number of targets.

pub mod outcome;
pub mod timing;

pub use outcome::OutcomeLogger;
pub use timing::TimingInterceptor;

use std::sync::Arc;

use crate::reports::ReportSink;
use crate::traits::Interceptor;

/// Factory: a timing interceptor reporting into `sink`.
pub fn timing(sink: Arc<dyn ReportSink>) -> Arc<dyn Interceptor> {
    Arc::new(TimingInterceptor::new(sink))
}

/// Factory: an outcome logger reporting into `sink`.
pub fn outcome_logger(sink: Arc<dyn ReportSink>) -> Arc<dyn Interceptor> {
    Arc::new(OutcomeLogger::new(sink))
}
