// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod chain;         // interceptor composition + registry
pub mod errors;        // error handling
pub mod interceptors;  // built-in interception behaviors
pub mod invocation;    // per-call state
pub mod observability;
pub mod operations;    // operation adapters + test doubles
pub mod property;      // observable fields + setter transforms
pub mod reports;       // report types + sinks
pub mod traits;        // unified abstractions
