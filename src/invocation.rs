//! Per-call invocation state.
//!
//! An [`Invocation`] is created when a wrapped operation is entered and is
//! discarded as soon as the call completes and any reports have been emitted.
//! It is never persisted.

use serde_json::Value;

/// The ephemeral record of a single call through an interceptor chain.
///
/// Arguments are carried as [`serde_json::Value`]s so interceptors can
/// observe and report them without knowing the operation's concrete
/// signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Name of the target operation being invoked.
    pub operation: String,
    /// The caller-supplied argument list, in call order.
    pub args: Vec<Value>,
}

impl Invocation {
    pub fn new(operation: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            operation: operation.into(),
            args,
        }
    }
}
