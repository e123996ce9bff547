//! Integration tests for interceptor composition.
//!
//! These exercise whole chains and the registry together, rather than one
//! interceptor in isolation.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use crate::chain::{InterceptionRegistry, InterceptorChain};
    use crate::errors::InvocationError;
    use crate::interceptors::{outcome_logger, timing, OutcomeLogger, TimingInterceptor};
    use crate::operations::{FailingOperation, FnOperation, StubOperation};
    use crate::reports::{MemorySink, Report};

    #[tokio::test]
    async fn timing_and_outcome_compose_into_independent_reports() {
        let sink = Arc::new(MemorySink::new());
        let mut chain = InterceptorChain::new(Arc::new(StubOperation::returning(
            "request",
            json!("ok"),
        )));
        chain.register(timing(sink.clone()));
        chain.register(outcome_logger(sink.clone()));

        let result = chain.invoke(vec![json!(1)]).await.unwrap();
        assert_eq!(result, json!("ok"));

        let reports = sink.reports();
        assert_eq!(reports.len(), 2);

        // Outcome (inner) emits on the way out before timing (outer).
        match &reports[0] {
            Report::Outcome(outcome) => {
                assert!(outcome.success);
                assert_eq!(outcome.args, vec![json!(1)]);
                assert_eq!(outcome.value, Some(json!("ok")));
            }
            other => panic!("expected outcome report first, got {:?}", other),
        }
        match &reports[1] {
            Report::Timing(timing) => assert_eq!(timing.operation, "request"),
            other => panic!("expected timing report second, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn outer_outcome_logger_absorbs_after_inner_timing_reports() {
        let sink = Arc::new(MemorySink::new());
        let mut chain = InterceptorChain::new(Arc::new(FailingOperation::new(
            "request",
            "backend down",
        )));
        // Outcome outermost: timing still observes the raw failure, the
        // caller does not.
        chain.register(Arc::new(OutcomeLogger::new(sink.clone())));
        chain.register(Arc::new(TimingInterceptor::new(sink.clone())));

        let result = chain.invoke(vec![]).await.unwrap();
        assert_eq!(result, Value::Null);

        let reports = sink.reports();
        assert_eq!(reports.len(), 2);
        assert!(matches!(&reports[0], Report::Timing(_)));
        match &reports[1] {
            Report::Outcome(outcome) => {
                assert!(!outcome.success);
                assert!(outcome.error.as_deref().unwrap().contains("backend down"));
            }
            other => panic!("expected outcome report, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn inner_outcome_logger_makes_the_failure_invisible_to_timing() {
        let sink = Arc::new(MemorySink::new());
        let mut chain = InterceptorChain::new(Arc::new(FailingOperation::new(
            "request",
            "backend down",
        )));
        chain.register(Arc::new(TimingInterceptor::new(sink.clone())));
        chain.register(Arc::new(OutcomeLogger::new(sink.clone())));

        // The absorbing layer sits inside; everything above it, the timing
        // interceptor and the caller alike, sees a successful completion.
        let result = chain.invoke(vec![]).await.unwrap();
        assert_eq!(result, Value::Null);
        assert_eq!(sink.reports().len(), 2);
    }

    #[tokio::test]
    async fn registry_routes_calls_through_registered_interceptors() {
        let sink = Arc::new(MemorySink::new());
        let mut registry = InterceptionRegistry::new();

        registry
            .register_operation(Arc::new(FnOperation::new(
                "double",
                |args: Vec<Value>| async move {
                    let n = args.first().and_then(Value::as_i64).ok_or_else(|| {
                        InvocationError::InvalidArguments {
                            operation: "double".to_string(),
                            reason: "expected one integer".to_string(),
                        }
                    })?;
                    Ok(json!(n * 2))
                },
            )))
            .unwrap();
        registry.register("double", timing(sink.clone())).unwrap();
        registry
            .register("double", outcome_logger(sink.clone()))
            .unwrap();

        let result = registry.invoke("double", vec![json!(21)]).await.unwrap();
        assert_eq!(result, json!(42));
        assert_eq!(sink.reports().len(), 2);

        // Invalid arguments are absorbed by the outcome logger like any
        // other failure, and still reported.
        let result = registry.invoke("double", vec![]).await.unwrap();
        assert_eq!(result, Value::Null);
        assert_eq!(sink.reports().len(), 4);
    }

    #[tokio::test]
    async fn concurrent_invocations_each_report_once() {
        let sink = Arc::new(MemorySink::new());
        let mut chain = InterceptorChain::new(Arc::new(StubOperation::new("request")));
        chain.register(timing(sink.clone()));
        let chain = Arc::new(chain);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let chain = chain.clone();
            handles.push(tokio::spawn(async move { chain.invoke(vec![]).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(sink.reports().len(), 8);
    }
}
