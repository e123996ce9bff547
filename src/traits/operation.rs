use async_trait::async_trait;
use serde_json::Value;

use crate::errors::InvocationError;

/// A target operation: the original unit of behavior being wrapped.
///
/// The calling contract is deliberately dynamic (arguments in, value or
/// failure out) so interceptors can observe and report arguments without
/// knowing the operation's concrete signature. The owning instance, if any,
/// is captured by the implementor at construction time.
#[async_trait]
pub trait Operation: Send + Sync {
    async fn invoke(&self, args: Vec<Value>) -> Result<Value, InvocationError>;

    /// Identity of the operation, fixed at registration time.
    fn name(&self) -> &str;
}
