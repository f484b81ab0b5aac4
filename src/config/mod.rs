//! Configuration module for TOML-based router configuration.
//!
//! This module provides the ability to configure the router using TOML
//! files instead of the builder pattern, making it easier to manage
//! quota settings declaratively.
//!
//! # Example Configuration File
//!
//! ```toml
//! [[providers]]
//! tier = "anthropic_opus"
//! model = "claude-opus-4-5"
//! quotas = { daily_budget = 2.0, requests_per_minute = 5 }
//!
//! [[providers]]
//! tier = "anthropic_sonnet"
//! quotas = { daily_budget = 1.5, requests_per_minute = 10 }
//!
//! [[providers]]
//! tier = "anthropic_haiku"
//! quotas = { daily_budget = 1.0, requests_per_minute = 20 }
//!
//! [routing]
//! fallback_chain = ["anthropic_sonnet", "anthropic_haiku"]
//! ```
//!
//! Every tier must carry a `[[providers]]` entry: the complexity preference
//! map can select any of them, and a tier without quotas would only be
//! discovered at routing time.

mod types;
mod loader;

pub use types::{Config, ProviderEntry, QuotasEntry, RoutingEntry};
pub use loader::{load_config, parse_config};
