use serde::{Deserialize, Serialize};

use crate::router::gate::Availability;
use crate::tier::ProviderTier;

/// A unit of work to be routed to a provider tier.
///
/// Tasks arrive as plain structured values from the calling application;
/// only the fields below influence routing. `task_type` is an open string
/// tag: types without a scoring rule score at the baseline.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    #[serde(rename = "type")]
    pub task_type: String,
    pub estimated_tokens: Option<u32>,
    pub priority: Option<String>,
    #[serde(default)]
    pub involves_multiple_sources: bool,
    #[serde(default)]
    pub requires_reasoning: bool,
}

impl Task {
    // Standard constructor
    pub fn new(task_type: impl Into<String>) -> Self {
        Task {
            task_type: task_type.into(),
            estimated_tokens: None,
            priority: None,
            involves_multiple_sources: false,
            requires_reasoning: false,
        }
    }

    /// Sets the estimated token count for this task.
    pub fn estimated_tokens(mut self, tokens: u32) -> Self {
        self.estimated_tokens = Some(tokens);
        self
    }

    /// Sets the priority tag for this task.
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Marks this task as drawing on multiple sources.
    pub fn multiple_sources(mut self, flag: bool) -> Self {
        self.involves_multiple_sources = flag;
        self
    }

    /// Marks this task as requiring multi-step reasoning.
    pub fn requires_reasoning(mut self, flag: bool) -> Self {
        self.requires_reasoning = flag;
        self
    }
}

/// Derived scoring result for a single task. Ephemeral, never persisted.
#[derive(Debug, Serialize, Clone)]
pub struct Assessment {
    pub task_type: String,
    /// Complexity score, always within 1-10.
    pub complexity: u8,
    pub estimated_tokens: u32,
    pub estimated_cost: f64,
    pub priority: String,
}

/// The configuration for a single provider tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub tier: ProviderTier,
    pub model: String,
    pub quotas: QuotaConfig,
}

/// Quota ceilings for a provider tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotaConfig {
    pub daily_budget: f64,
    pub requests_per_minute: u32,
}

/// Diagnostic events emitted while a selection proceeds.
///
/// Selection itself is pure; the router turns these into log warnings (and
/// optional metrics) after the fact, so the decision logic stays testable
/// without capturing log output.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteEvent {
    /// A candidate tier failed its availability gate.
    GateFailed {
        tier: ProviderTier,
        verdict: Availability,
    },
    /// The preferred tier was gated and the fallback chain was entered.
    FallbackEngaged { preferred: ProviderTier },
}

/// The outcome of a successful routing decision.
#[derive(Debug, Clone)]
pub struct RoutingDecision {
    /// The selected provider tier and its configuration.
    pub provider: ProviderConfig,
    /// The assessment that drove the decision.
    pub assessment: Assessment,
    /// Gate failures and fallback transitions observed along the way.
    pub events: Vec<RouteEvent>,
}

impl RoutingDecision {
    /// The tier the task was routed to.
    pub fn tier(&self) -> ProviderTier {
        self.provider.tier
    }

    /// Whether the decision had to leave the preferred tier.
    pub fn used_fallback(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, RouteEvent::FallbackEngaged { .. }))
    }
}
