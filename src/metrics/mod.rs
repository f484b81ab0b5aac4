//! Metrics module for tierllm
//!
//! This module provides optional metrics emission for monitoring routing
//! decisions and usage accounting. Enable with the `metrics` feature flag.
//!
//! # Example
//!
//! ```ignore
//! use tierllm::metrics::describe_metrics;
//! use metrics_exporter_prometheus::PrometheusBuilder;
//!
//! // User sets up their preferred exporter
//! // Note: requires `metrics-exporter-prometheus` in your dependencies
//! PrometheusBuilder::new()
//!     .with_http_listener(([127, 0, 0, 1], 9090))
//!     .install()
//!     .expect("prometheus setup");
//!
//! // Describe metrics (optional, improves Prometheus discovery)
//! describe_metrics();
//! ```

pub mod labels;
mod recorder;

pub use recorder::*;

/// Metric name constants
pub mod names {
    /// Total number of routed tasks
    pub const ROUTES_TOTAL: &str = "router_routes_total";
    /// Total number of availability gate failures
    pub const GATE_FAILURES_TOTAL: &str = "router_gate_failures_total";
    /// Total number of fallback chain engagements
    pub const FALLBACKS_TOTAL: &str = "router_fallbacks_total";
    /// Total number of routing requests with every candidate gated
    pub const EXHAUSTIONS_TOTAL: &str = "router_exhaustions_total";
    /// Total tokens recorded against providers
    pub const TOKENS_TOTAL: &str = "router_tokens_total";
    /// Dollar cost per recorded call
    pub const CALL_COST: &str = "router_call_cost_usd";
}

/// Describe all metrics with their units and descriptions.
/// Call this after setting up your metrics exporter for better discovery.
pub fn describe_metrics() {
    use metrics::{describe_counter, describe_histogram, Unit};

    describe_counter!(
        names::ROUTES_TOTAL,
        Unit::Count,
        "Total number of routed tasks"
    );
    describe_counter!(
        names::GATE_FAILURES_TOTAL,
        Unit::Count,
        "Total number of availability gate failures"
    );
    describe_counter!(
        names::FALLBACKS_TOTAL,
        Unit::Count,
        "Total number of fallback chain engagements"
    );
    describe_counter!(
        names::EXHAUSTIONS_TOTAL,
        Unit::Count,
        "Total number of routing requests with every candidate gated"
    );
    describe_counter!(
        names::TOKENS_TOTAL,
        Unit::Count,
        "Total tokens recorded against providers"
    );
    describe_histogram!(names::CALL_COST, "Dollar cost per recorded call");
}
