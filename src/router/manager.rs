use std::path::Path;
use std::time::SystemTime;

use log::{debug, info, warn};

use crate::config;
use crate::errors::{RouterError, RouterResult};
use crate::router::builder::RouterBuilder;
use crate::router::gate::{self, Availability};
use crate::router::selection;
use crate::router::tracker::{UsageRecord, UsageTracker};
use crate::router::types::{ProviderConfig, RouteEvent, RoutingDecision, Task};
use crate::router::assessment;
use crate::tier::{ProviderTier, TierTable};
use crate::report;

/// Routes tasks to provider tiers by complexity, gated on each tier's
/// remaining budget and rate limit.
///
/// The router owns its usage state; construct one per process (or one per
/// logical session) rather than sharing counters ambiently. All operations
/// are synchronous and sub-millisecond, and mutating operations take
/// `&mut self`, which is the single-writer discipline the counters need.
#[derive(Debug)]
pub struct TierRouter {
    providers: TierTable<ProviderConfig>,
    fallback_chain: Vec<ProviderTier>,
    usage: UsageTracker,
}

impl TierRouter {
    pub(crate) fn from_parts(
        providers: TierTable<ProviderConfig>,
        fallback_chain: Vec<ProviderTier>,
    ) -> Self {
        Self {
            providers,
            fallback_chain,
            usage: UsageTracker::new(SystemTime::now()),
        }
    }

    /// Creates a builder for a `TierRouter`.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Construct a router from a TOML configuration string.
    pub fn from_config_str(content: &str) -> RouterResult<Self> {
        let config = config::parse_config(content)?;
        Self::from_config(config)
    }

    /// Construct a router from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> RouterResult<Self> {
        let config = config::load_config(path)?;
        Self::from_config(config)
    }

    /// Construct a router from an already-parsed configuration.
    pub fn from_config(config: config::Config) -> RouterResult<Self> {
        let mut builder = Self::builder();
        for entry in &config.providers {
            let tier: ProviderTier = entry.tier.parse()?;
            let model = entry
                .model
                .clone()
                .unwrap_or_else(|| tier.default_model().to_string());
            builder = builder.provider(
                tier,
                model,
                entry.quotas.daily_budget,
                entry.quotas.requests_per_minute,
            );
        }

        let chain = config
            .routing
            .fallback_chain
            .iter()
            .map(|key| key.parse())
            .collect::<RouterResult<Vec<ProviderTier>>>()?;

        builder.fallback_chain(chain).build()
    }

    /// Route a task to a provider tier.
    ///
    /// Assesses the task, maps complexity to a preferred tier, and walks
    /// the fallback chain when the preferred tier is gated. Gate failures
    /// and the fallback transition are logged as warnings and returned in
    /// the decision's event list. Errors with
    /// [`RouterError::NoProviderAvailable`] when every candidate is gated;
    /// a gated provider is never returned.
    pub fn route(&mut self, task: &Task) -> RouterResult<RoutingDecision> {
        let assessment = assessment::assess(task);
        debug!(
            "[ROUTER] task: {}, complexity: {}",
            assessment.task_type, assessment.complexity
        );

        let preferred = ProviderTier::for_complexity(assessment.complexity);
        let now = SystemTime::now();

        let providers = &self.providers;
        let usage = &mut self.usage;
        let (selected, events) =
            selection::select_tier(preferred, &self.fallback_chain, |tier| {
                usage.reset_if_elapsed(tier, now);
                gate::check(&providers.get(tier).quotas, usage.usage(tier))
            });

        for event in &events {
            match event {
                RouteEvent::GateFailed { tier, verdict } => {
                    warn!("[ROUTER] {} unavailable: {}", tier, verdict);
                    #[cfg(feature = "metrics")]
                    crate::metrics::record_gate_failure(*tier, verdict);
                }
                RouteEvent::FallbackEngaged { preferred } => {
                    warn!("[ROUTER] {} unavailable, trying fallback chain", preferred);
                    #[cfg(feature = "metrics")]
                    crate::metrics::record_fallback(*preferred);
                }
            }
        }

        match selected {
            Some(tier) => {
                #[cfg(feature = "metrics")]
                crate::metrics::record_route(tier, &assessment.task_type);

                Ok(RoutingDecision {
                    provider: self.providers.get(tier).clone(),
                    assessment,
                    events,
                })
            }
            None => {
                #[cfg(feature = "metrics")]
                crate::metrics::record_exhaustion();

                Err(RouterError::NoProviderAvailable(format!(
                    "preferred tier {} and {} fallback candidate(s) all gated",
                    preferred,
                    self.fallback_chain.len()
                )))
            }
        }
    }

    /// Check whether a tier currently passes its availability gate.
    ///
    /// Applies the lazy window rollover first, then reads the counters.
    /// Repeated calls without an intervening [`TierRouter::log_api_call`]
    /// return the same verdict.
    pub fn availability(&mut self, tier: ProviderTier) -> Availability {
        self.usage.reset_if_elapsed(tier, SystemTime::now());
        gate::check(&self.providers.get(tier).quotas, self.usage.usage(tier))
    }

    /// Record a completed provider call and emit the usage-log line.
    ///
    /// Must be called exactly once per completed external call, after it
    /// succeeds or is billed. Returns the formatted line so callers can
    /// append it to their own log sink; the line is also emitted at `info`
    /// level. The line's shape is a stable contract with downstream
    /// dashboard consumers.
    pub fn log_api_call(&mut self, tier: ProviderTier, tokens: u64, cost: f64) -> String {
        self.usage.record(tier, tokens, cost);

        #[cfg(feature = "metrics")]
        crate::metrics::record_api_call(tier, tokens, cost);

        let line = report::format_usage_line(tier, tokens, cost);
        info!("{}", line);
        line
    }

    /// Configuration for a tier.
    pub fn provider(&self, tier: ProviderTier) -> &ProviderConfig {
        self.providers.get(tier)
    }

    /// The configured fallback chain, in trial order.
    pub fn fallback_chain(&self) -> &[ProviderTier] {
        &self.fallback_chain
    }

    /// Current usage counters for a tier.
    pub fn usage(&self, tier: ProviderTier) -> &UsageRecord {
        self.usage.usage(tier)
    }

    /// The full usage tracker, for reporting.
    pub fn usage_tracker(&self) -> &UsageTracker {
        &self.usage
    }
}
