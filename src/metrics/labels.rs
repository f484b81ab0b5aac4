//! Label helpers for consistent metric labeling

use crate::router::gate::Availability;
use crate::tier::ProviderTier;

/// Standard label keys
pub mod keys {
    /// Provider tier label key
    pub const TIER: &str = "tier";
    /// Task type label key
    pub const TASK_TYPE: &str = "task_type";
    /// Gate failure reason label key
    pub const REASON: &str = "reason";
}

/// Convert ProviderTier to label value string
pub fn tier_label(tier: ProviderTier) -> &'static str {
    tier.as_str()
}

/// Convert a gate verdict to a reason label string
pub fn gate_reason_label(verdict: &Availability) -> &'static str {
    match verdict {
        Availability::Available => "available",
        Availability::BudgetExhausted { .. } => "budget_exhausted",
        Availability::RateLimited { .. } => "rate_limited",
    }
}
