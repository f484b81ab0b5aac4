//! Configuration types for TOML-based configuration.
//!
//! These types map directly to the TOML configuration file structure.

use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Provider tier configurations.
    #[serde(default)]
    pub providers: Vec<ProviderEntry>,

    /// Routing settings (fallback chain).
    #[serde(default)]
    pub routing: RoutingEntry,
}

/// Configuration for a single provider tier.
#[derive(Debug, Deserialize)]
pub struct ProviderEntry {
    /// Tier key: "anthropic_opus", "anthropic_sonnet", or "anthropic_haiku".
    pub tier: String,

    /// Model identifier for this tier (defaults per tier when omitted).
    pub model: Option<String>,

    /// Quota limits for this tier.
    pub quotas: QuotasEntry,
}

/// Quota limits for a provider tier.
#[derive(Debug, Deserialize)]
pub struct QuotasEntry {
    /// Maximum dollar spend per day.
    pub daily_budget: f64,

    /// Maximum number of requests per minute.
    pub requests_per_minute: u32,
}

/// Routing settings.
#[derive(Debug, Deserialize, Default)]
pub struct RoutingEntry {
    /// Ordered list of tier keys tried when the preferred tier is gated.
    #[serde(default)]
    pub fallback_chain: Vec<String>,
}
