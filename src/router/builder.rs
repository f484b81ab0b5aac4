use crate::errors::{RouterError, RouterResult};
use crate::router::manager::TierRouter;
use crate::router::types::{ProviderConfig, QuotaConfig};
use crate::tier::{ProviderTier, TierTable};

/// TierRouter builder.
///
/// Collects per-tier quota settings and the fallback chain, then validates
/// the configuration contract at `build()`: every tier must be configured,
/// exactly once, with usable quotas.
pub struct RouterBuilder {
    providers: Vec<ProviderConfig>,
    fallback_chain: Vec<ProviderTier>,
}

impl RouterBuilder {
    /// Creates a new builder with no providers configured.
    pub fn new() -> Self {
        RouterBuilder {
            providers: Vec::new(),
            fallback_chain: Vec::new(),
        }
    }

    /// Configure a provider tier with its model and quotas.
    pub fn provider(
        mut self,
        tier: ProviderTier,
        model: impl Into<String>,
        daily_budget: f64,
        requests_per_minute: u32,
    ) -> Self {
        self.providers.push(ProviderConfig {
            tier,
            model: model.into(),
            quotas: QuotaConfig {
                daily_budget,
                requests_per_minute,
            },
        });
        self
    }

    /// Set the fallback chain, tried in the given order when the preferred
    /// tier is gated.
    pub fn fallback_chain(mut self, chain: impl IntoIterator<Item = ProviderTier>) -> Self {
        self.fallback_chain = chain.into_iter().collect();
        self
    }

    /// Consumes the builder and constructs the `TierRouter`.
    ///
    /// Fails with `ConfigError` if a tier is missing or duplicated, or if a
    /// tier's quotas are unusable (zero requests per minute, negative or
    /// non-finite budget).
    pub fn build(self) -> RouterResult<TierRouter> {
        let mut opus: Option<ProviderConfig> = None;
        let mut sonnet: Option<ProviderConfig> = None;
        let mut haiku: Option<ProviderConfig> = None;

        for provider in self.providers {
            if provider.quotas.requests_per_minute == 0 {
                return Err(RouterError::ConfigError(format!(
                    "requests_per_minute must be at least 1 for tier '{}'",
                    provider.tier
                )));
            }
            if !provider.quotas.daily_budget.is_finite() || provider.quotas.daily_budget < 0.0 {
                return Err(RouterError::ConfigError(format!(
                    "daily_budget must be a non-negative amount for tier '{}', got {}",
                    provider.tier, provider.quotas.daily_budget
                )));
            }

            let slot = match provider.tier {
                ProviderTier::AnthropicOpus => &mut opus,
                ProviderTier::AnthropicSonnet => &mut sonnet,
                ProviderTier::AnthropicHaiku => &mut haiku,
            };
            if slot.is_some() {
                return Err(RouterError::ConfigError(format!(
                    "Tier '{}' configured more than once",
                    provider.tier
                )));
            }
            *slot = Some(provider);
        }

        match (opus, sonnet, haiku) {
            (Some(opus), Some(sonnet), Some(haiku)) => Ok(TierRouter::from_parts(
                TierTable::new(opus, sonnet, haiku),
                self.fallback_chain,
            )),
            (opus, sonnet, haiku) => {
                let mut missing: Vec<&str> = Vec::new();
                if opus.is_none() {
                    missing.push(ProviderTier::AnthropicOpus.as_str());
                }
                if sonnet.is_none() {
                    missing.push(ProviderTier::AnthropicSonnet.as_str());
                }
                if haiku.is_none() {
                    missing.push(ProviderTier::AnthropicHaiku.as_str());
                }
                Err(RouterError::ConfigError(format!(
                    "Missing provider configuration for: {}\n  \
                     → Selection can prefer any tier, so every tier needs quotas",
                    missing.join(", ")
                )))
            }
        }
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
