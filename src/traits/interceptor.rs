use async_trait::async_trait;
use serde_json::Value;

use crate::chain::Next;
use crate::errors::InvocationError;
use crate::invocation::Invocation;

/// Cross-cutting behavior wrapped around a target operation.
///
/// The interceptor receives the in-flight [`Invocation`] and a [`Next`]
/// handle for the remainder of the chain. The framework never delegates
/// automatically: the interceptor decides if, when, and with what arguments
/// to call `next.run(..)`. Not delegating short-circuits the chain and the
/// original operation's side effects never occur.
///
/// Each implementation must declare a deterministic failure policy: either
/// it re-signals a delegate failure unchanged (pass-through) or it converts
/// the failure into a successful completion (absorbing). The policy must
/// never depend on runtime state.
#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn around(
        &self,
        invocation: Invocation,
        next: Next<'_>,
    ) -> Result<Value, InvocationError>;

    fn name(&self) -> &'static str;
}
