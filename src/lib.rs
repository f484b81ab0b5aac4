//! tierllm routes LLM tasks across provider tiers by heuristic complexity,
//! gated on each tier's remaining daily budget and per-minute rate limit.
//!
//! A task is scored on a 1-10 complexity scale, mapped to a preferred tier
//! (Opus for the hardest work, Haiku for the lightest), and checked against
//! that tier's quotas. When the preferred tier is out of budget or rate
//! limited, a configured fallback chain is walked in order; when nothing
//! passes, routing fails loudly rather than silently picking a gated
//! provider. Completed calls are reported back and accounted per tier for
//! downstream dashboards.
//!
//! # Features
//!
//! - **Complexity assessment**: additive scoring rules over task attributes
//! - **Budget gating**: daily spend and requests-per-minute ceilings per tier
//! - **Deterministic fallback**: an ordered chain, never a silent downgrade
//! - **Usage accounting**: per-tier counters with lazy minute/day rollover
//! - **Dashboard reporting**: aggregate the usage log into budget alerts
//!
//! # Example
//!
//! ```
//! use tierllm::{ProviderTier, Task, TierRouter};
//!
//! fn example() -> tierllm::RouterResult<()> {
//!     let mut router = TierRouter::builder()
//!         .provider(ProviderTier::AnthropicOpus, "claude-opus-4-5", 2.0, 5)
//!         .provider(ProviderTier::AnthropicSonnet, "claude-sonnet-4-5", 1.5, 10)
//!         .provider(ProviderTier::AnthropicHaiku, "claude-haiku-4-5", 1.0, 20)
//!         .fallback_chain([ProviderTier::AnthropicSonnet, ProviderTier::AnthropicHaiku])
//!         .build()?;
//!
//!     let task = Task::new("financial_analysis")
//!         .estimated_tokens(2000)
//!         .requires_reasoning(true);
//!
//!     let decision = router.route(&task)?;
//!     println!("routing to {}", decision.provider.model);
//!
//!     // After the caller has invoked the provider externally:
//!     router.log_api_call(decision.tier(), 2000, decision.assessment.estimated_cost);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod report;
pub mod router;
pub mod tier;

#[cfg(feature = "metrics")]
pub mod metrics;

pub use errors::{RouterError, RouterResult};

pub use tier::{ProviderTier, TierTable};

pub use router::{
    Assessment,
    Availability,
    ProviderConfig,
    QuotaConfig,
    RouteEvent,
    RouterBuilder,
    RoutingDecision,
    Task,
    TierRouter,
    UsageRecord,
    UsageTracker,
};

pub use report::{format_usage_line, parse_usage_line, DashboardData};

#[cfg(feature = "metrics")]
pub use metrics::describe_metrics;

/// Initialize the logging system
///
/// This should be called at the start of your application in case
/// you want to activate the library's debug and info logging.
pub fn use_logging() {
    env_logger::init();
}
