//! Metric recording functions

use crate::router::gate::Availability;
use crate::tier::ProviderTier;

use super::{labels, names};

/// Record a successfully routed task
pub fn record_route(tier: ProviderTier, task_type: &str) {
    metrics::counter!(
        names::ROUTES_TOTAL,
        labels::keys::TIER => labels::tier_label(tier),
        labels::keys::TASK_TYPE => task_type.to_string()
    )
    .increment(1);
}

/// Record an availability gate failure
pub fn record_gate_failure(tier: ProviderTier, verdict: &Availability) {
    metrics::counter!(
        names::GATE_FAILURES_TOTAL,
        labels::keys::TIER => labels::tier_label(tier),
        labels::keys::REASON => labels::gate_reason_label(verdict)
    )
    .increment(1);
}

/// Record a fallback chain engagement
pub fn record_fallback(preferred: ProviderTier) {
    metrics::counter!(
        names::FALLBACKS_TOTAL,
        labels::keys::TIER => labels::tier_label(preferred)
    )
    .increment(1);
}

/// Record a routing request that exhausted every candidate
pub fn record_exhaustion() {
    metrics::counter!(names::EXHAUSTIONS_TOTAL).increment(1);
}

/// Record usage accounting for one completed provider call
pub fn record_api_call(tier: ProviderTier, tokens: u64, cost: f64) {
    metrics::counter!(
        names::TOKENS_TOTAL,
        labels::keys::TIER => labels::tier_label(tier)
    )
    .increment(tokens);

    metrics::histogram!(
        names::CALL_COST,
        labels::keys::TIER => labels::tier_label(tier)
    )
    .record(cost);
}
