// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Operation adapters and test doubles.

use std::future::Future;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::InvocationError;
use crate::traits::Operation;

/// Adapts an async closure into an [`Operation`].
///
/// This is the usual way call sites hand their existing behavior to the
/// framework: the closure closes over whatever owning instance it needs.
///
/// # Example
/// ```
/// use interpose::operations::FnOperation;
/// use interpose::traits::Operation;
/// use serde_json::{json, Value};
///
/// # #[tokio::main]
/// # async fn main() {
/// let double = FnOperation::new("double", |args: Vec<Value>| async move {
///     let n = args[0].as_i64().unwrap_or(0);
///     Ok(json!(n * 2))
/// });
///
/// assert_eq!(double.invoke(vec![json!(21)]).await.unwrap(), json!(42));
/// # }
/// ```
pub struct FnOperation<F> {
    name: String,
    func: F,
}

impl<F> FnOperation<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

#[async_trait]
impl<F, Fut> Operation for FnOperation<F>
where
    F: Fn(Vec<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, InvocationError>> + Send,
{
    async fn invoke(&self, args: Vec<Value>) -> Result<Value, InvocationError> {
        (self.func)(args).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A stub operation for testing and placeholder purposes.
///
/// Returns its configured value (null by default) and echoes nothing.
pub struct StubOperation {
    name: String,
    value: Value,
}

impl StubOperation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Value::Null,
        }
    }

    pub fn returning(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[async_trait]
impl Operation for StubOperation {
    async fn invoke(&self, _args: Vec<Value>) -> Result<Value, InvocationError> {
        Ok(self.value.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// An operation that always fails, for testing failure scenarios.
pub struct FailingOperation {
    name: String,
    message: String,
}

impl FailingOperation {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl Operation for FailingOperation {
    async fn invoke(&self, _args: Vec<Value>) -> Result<Value, InvocationError> {
        Err(InvocationError::Failed {
            operation: self.name.clone(),
            message: self.message.clone(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
