use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{OPUS_COMPLEXITY_THRESHOLD, SONNET_COMPLEXITY_THRESHOLD};
use crate::errors::RouterError;

/// The closed set of provider tiers a task can be routed to.
///
/// Keys in configuration files and usage-log lines use the wire form
/// returned by [`ProviderTier::as_str`] (`anthropic_opus`, `anthropic_sonnet`,
/// `anthropic_haiku`). Unknown keys are rejected when the configuration is
/// loaded, never at selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderTier {
    AnthropicOpus,
    AnthropicSonnet,
    AnthropicHaiku,
}

impl ProviderTier {
    /// Every tier, in descending capability order.
    pub const ALL: [ProviderTier; 3] = [
        ProviderTier::AnthropicOpus,
        ProviderTier::AnthropicSonnet,
        ProviderTier::AnthropicHaiku,
    ];

    /// The wire key used in configuration and usage-log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderTier::AnthropicOpus => "anthropic_opus",
            ProviderTier::AnthropicSonnet => "anthropic_sonnet",
            ProviderTier::AnthropicHaiku => "anthropic_haiku",
        }
    }

    /// Short human-readable name, used in reports.
    pub fn short_name(&self) -> &'static str {
        match self {
            ProviderTier::AnthropicOpus => "Opus",
            ProviderTier::AnthropicSonnet => "Sonnet",
            ProviderTier::AnthropicHaiku => "Haiku",
        }
    }

    /// Default model identifier when the configuration does not name one.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderTier::AnthropicOpus => "claude-opus-4-5",
            ProviderTier::AnthropicSonnet => "claude-sonnet-4-5",
            ProviderTier::AnthropicHaiku => "claude-haiku-4-5",
        }
    }

    /// Map a complexity score to the preferred tier.
    ///
    /// Thresholds are inclusive lower bounds; the ranges are contiguous and
    /// exhaustive over the 1-10 complexity scale.
    pub fn for_complexity(complexity: u8) -> ProviderTier {
        if complexity >= OPUS_COMPLEXITY_THRESHOLD {
            ProviderTier::AnthropicOpus
        } else if complexity >= SONNET_COMPLEXITY_THRESHOLD {
            ProviderTier::AnthropicSonnet
        } else {
            ProviderTier::AnthropicHaiku
        }
    }
}

impl fmt::Display for ProviderTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderTier {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anthropic_opus" => Ok(ProviderTier::AnthropicOpus),
            "anthropic_sonnet" => Ok(ProviderTier::AnthropicSonnet),
            "anthropic_haiku" => Ok(ProviderTier::AnthropicHaiku),
            _ => Err(RouterError::UnknownTier(s.to_string())),
        }
    }
}

/// A total lookup table with one slot per tier.
///
/// Having a slot for every tier is what makes the configuration contract
/// hold by construction: any tier the selection logic or fallback chain can
/// name has an entry here.
#[derive(Debug, Clone)]
pub struct TierTable<T> {
    opus: T,
    sonnet: T,
    haiku: T,
}

impl<T> TierTable<T> {
    pub fn new(opus: T, sonnet: T, haiku: T) -> Self {
        Self { opus, sonnet, haiku }
    }

    /// Build a table by evaluating `f` once per tier.
    pub fn from_fn(mut f: impl FnMut(ProviderTier) -> T) -> Self {
        Self {
            opus: f(ProviderTier::AnthropicOpus),
            sonnet: f(ProviderTier::AnthropicSonnet),
            haiku: f(ProviderTier::AnthropicHaiku),
        }
    }

    pub fn get(&self, tier: ProviderTier) -> &T {
        match tier {
            ProviderTier::AnthropicOpus => &self.opus,
            ProviderTier::AnthropicSonnet => &self.sonnet,
            ProviderTier::AnthropicHaiku => &self.haiku,
        }
    }

    pub fn get_mut(&mut self, tier: ProviderTier) -> &mut T {
        match tier {
            ProviderTier::AnthropicOpus => &mut self.opus,
            ProviderTier::AnthropicSonnet => &mut self.sonnet,
            ProviderTier::AnthropicHaiku => &mut self.haiku,
        }
    }

    /// Iterate over `(tier, value)` pairs in descending capability order.
    pub fn iter(&self) -> impl Iterator<Item = (ProviderTier, &T)> {
        ProviderTier::ALL.iter().map(move |&tier| (tier, self.get(tier)))
    }
}
