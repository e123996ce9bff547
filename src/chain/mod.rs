//! Interceptor composition engine.
//!
//! An [`InterceptorChain`] binds one target operation to the interceptors
//! registered against it. Registration order determines the effective call
//! chain: the first interceptor registered runs outermost (first on the way
//! in, last on the way out) and the original operation runs innermost.
//!
//! Delegation is always explicit. Each interceptor is handed a [`Next`]
//! handle and decides whether to call through; the chain itself never invokes
//! the original on an interceptor's behalf. This is what lets independent
//! behaviors compose without interfering: each layer sees exactly the
//! arguments and result its outer neighbor chose to pass along.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use interpose::chain::InterceptorChain;
//! use interpose::interceptors::TimingInterceptor;
//! use interpose::operations::StubOperation;
//! use interpose::reports::MemorySink;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sink = Arc::new(MemorySink::new());
//! let mut chain = InterceptorChain::new(Arc::new(StubOperation::new("attack")));
//! chain.register(Arc::new(TimingInterceptor::new(sink.clone())));
//!
//! chain.invoke(vec![json!("dao")]).await?;
//!
//! // One timing report per call, success or failure.
//! assert_eq!(sink.reports().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod registry;
#[cfg(test)]
pub mod integration_tests;

pub use registry::InterceptionRegistry;

use std::sync::Arc;

use serde_json::Value;
use tracing::Instrument;

use crate::errors::InvocationError;
use crate::invocation::Invocation;
use crate::observability::messages::chain::{
    InvocationCompleted, InvocationFailed, InvocationStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Interceptor, Operation};

/// Handle for the remainder of an interceptor chain.
///
/// Consumed by [`Next::run`]: an interceptor delegates at most once, which
/// keeps the one-invocation-record-per-call property trivially true at every
/// layer.
pub struct Next<'a> {
    interceptors: &'a [Arc<dyn Interceptor>],
    operation: &'a dyn Operation,
}

impl<'a> Next<'a> {
    /// Run the rest of the chain with the given invocation.
    ///
    /// Enters the next interceptor inward, or the original operation when no
    /// interceptors remain.
    pub async fn run(self, invocation: Invocation) -> Result<Value, InvocationError> {
        match self.interceptors.split_first() {
            Some((outer, rest)) => {
                let next = Next {
                    interceptors: rest,
                    operation: self.operation,
                };
                outer.around(invocation, next).await
            }
            None => self.operation.invoke(invocation.args).await,
        }
    }
}

/// One target operation plus its registered interceptors.
pub struct InterceptorChain {
    operation: Arc<dyn Operation>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChain {
    pub fn new(operation: Arc<dyn Operation>) -> Self {
        Self {
            operation,
            interceptors: Vec::new(),
        }
    }

    /// Register an interceptor on this chain.
    ///
    /// Registration happens once, at definition time; there is no
    /// unregister. The first interceptor registered runs outermost.
    pub fn register(&mut self, interceptor: Arc<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Name of the wrapped operation.
    pub fn operation_name(&self) -> &str {
        self.operation.name()
    }

    /// Number of registered interceptors.
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Invoke the wrapped operation through the full chain.
    pub async fn invoke(&self, args: Vec<Value>) -> Result<Value, InvocationError> {
        let operation = self.operation.name();
        let start_msg = InvocationStarted {
            operation,
            interceptor_count: self.interceptors.len(),
        };
        let span = start_msg.span("chain_invocation");

        let invocation = Invocation::new(operation, args);
        let next = Next {
            interceptors: &self.interceptors,
            operation: self.operation.as_ref(),
        };

        async move {
            start_msg.log();

            let result = next.run(invocation).await;

            match &result {
                Ok(_) => InvocationCompleted { operation }.log(),
                Err(error) => InvocationFailed { operation, error }.log(),
            }

            result
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("operation", &self.operation.name())
            .field(
                "interceptors",
                &self.interceptors.iter().map(|i| i.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
