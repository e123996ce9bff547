use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::chain::InterceptorChain;
use crate::errors::{InvocationError, RegistryError};
use crate::observability::messages::chain::InterceptorRegistered;
use crate::observability::messages::StructuredLog;
use crate::traits::{Interceptor, Operation};

/// Resolves operation names to their interceptor chains.
///
/// The registry is the single registration surface: operations are added
/// once at definition time, interceptors are attached to them by name, and
/// every external call is routed through [`InterceptionRegistry::invoke`].
/// There is no runtime API to unregister.
pub struct InterceptionRegistry {
    chains: HashMap<String, InterceptorChain>,
}

impl InterceptionRegistry {
    pub fn new() -> Self {
        Self {
            chains: HashMap::new(),
        }
    }

    /// Register a target operation under its own name.
    pub fn register_operation(
        &mut self,
        operation: Arc<dyn Operation>,
    ) -> Result<(), RegistryError> {
        let name = operation.name().to_string();
        if self.chains.contains_key(&name) {
            return Err(RegistryError::DuplicateOperation { operation: name });
        }
        self.chains.insert(name, InterceptorChain::new(operation));
        Ok(())
    }

    /// Attach an interceptor to a registered operation.
    ///
    /// Attachment order determines the call chain: the first interceptor
    /// attached to a target runs outermost.
    pub fn register(
        &mut self,
        target: &str,
        interceptor: Arc<dyn Interceptor>,
    ) -> Result<(), RegistryError> {
        let chain = self
            .chains
            .get_mut(target)
            .ok_or_else(|| RegistryError::UnknownTarget {
                target: target.to_string(),
            })?;

        InterceptorRegistered {
            operation: target,
            interceptor: interceptor.name(),
            position: chain.interceptor_count(),
        }
        .log();

        chain.register(interceptor);
        Ok(())
    }

    /// Invoke a registered operation through its interceptor chain.
    pub async fn invoke(
        &self,
        target: &str,
        args: Vec<Value>,
    ) -> Result<Value, InvocationError> {
        let chain = self
            .chains
            .get(target)
            .ok_or_else(|| InvocationError::UnknownOperation {
                operation: target.to_string(),
            })?;
        chain.invoke(args).await
    }

    /// Look up the chain registered under a name.
    pub fn get(&self, target: &str) -> Option<&InterceptorChain> {
        self.chains.get(target)
    }

    /// Check if an operation is registered.
    pub fn contains(&self, target: &str) -> bool {
        self.chains.contains_key(target)
    }

    /// Get all registered operation names.
    pub fn operations(&self) -> impl Iterator<Item = &String> {
        self.chains.keys()
    }
}

impl Default for InterceptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InterceptionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptionRegistry")
            .field("operation_count", &self.chains.len())
            .field("operations", &self.chains.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::StubOperation;
    use serde_json::json;

    #[tokio::test]
    async fn invoke_routes_to_the_registered_operation() {
        let mut registry = InterceptionRegistry::new();
        registry
            .register_operation(Arc::new(StubOperation::returning("answer", json!(42))))
            .unwrap();

        let result = registry.invoke("answer", vec![]).await.unwrap();
        assert_eq!(result, json!(42));
    }

    #[tokio::test]
    async fn invoke_unknown_operation_fails() {
        let registry = InterceptionRegistry::new();
        let err = registry.invoke("missing", vec![]).await.unwrap_err();
        assert_eq!(
            err,
            InvocationError::UnknownOperation {
                operation: "missing".to_string()
            }
        );
    }

    #[test]
    fn duplicate_operation_names_are_rejected() {
        let mut registry = InterceptionRegistry::new();
        registry
            .register_operation(Arc::new(StubOperation::new("attack")))
            .unwrap();

        let err = registry
            .register_operation(Arc::new(StubOperation::new("attack")))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateOperation {
                operation: "attack".to_string()
            }
        );
    }

    #[test]
    fn attaching_to_an_unknown_target_fails() {
        let mut registry = InterceptionRegistry::new();
        let err = registry
            .register(
                "missing",
                Arc::new(crate::interceptors::TimingInterceptor::new(Arc::new(
                    crate::reports::MemorySink::new(),
                ))),
            )
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownTarget {
                target: "missing".to_string()
            }
        );
    }
}
