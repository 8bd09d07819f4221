//! Span helpers for common arena operations

use tracing::Span;

/// Create a span covering one comparison
///
/// # Example
/// ```
/// use arena_telemetry::comparison_span;
/// let span = comparison_span("cmp-123", "us-west-2", 2);
/// let _enter = span.enter();
/// ```
pub fn comparison_span(comparison_id: &str, region: &str, agent_count: usize) -> Span {
    tracing::info_span!(
        "arena.compare",
        comparison.id = comparison_id,
        region = region,
        agent.count = agent_count,
        otel.kind = "internal"
    )
}

/// Create a span for one remote agent call
pub fn invocation_span(agent_name: &str, agent_id: &str) -> Span {
    tracing::info_span!(
        "arena.invoke",
        agent.name = agent_name,
        agent.id = agent_id,
        otel.kind = "client"
    )
}
