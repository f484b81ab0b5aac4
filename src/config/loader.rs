//! Configuration file loading and validation.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::errors::{RouterError, RouterResult};
use crate::tier::ProviderTier;
use super::types::Config;

/// Load and parse a TOML configuration file.
///
/// # Arguments
/// * `path` - Path to the TOML configuration file
///
/// # Returns
/// * `RouterResult<Config>` - Parsed and validated configuration
///
/// # Example
/// ```no_run
/// use tierllm::config::load_config;
///
/// let config = load_config("tierllm.toml").unwrap();
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> RouterResult<Config> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        RouterError::ConfigError(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&content)
}

/// Parse a TOML configuration string.
///
/// # Arguments
/// * `content` - TOML configuration string
///
/// # Returns
/// * `RouterResult<Config>` - Parsed and validated configuration
pub fn parse_config(content: &str) -> RouterResult<Config> {
    let config: Config = toml::from_str(content).map_err(|e| {
        RouterError::ConfigError(format!("Failed to parse TOML: {}", e))
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Validate the configuration for consistency.
///
/// The tier preference map can produce any tier, so every tier must carry a
/// quota entry; the fallback chain may only reference configured tiers.
fn validate_config(config: &Config) -> RouterResult<()> {
    let valid_keys: Vec<&str> = ProviderTier::ALL.iter().map(|t| t.as_str()).collect();

    let mut seen: Vec<ProviderTier> = Vec::new();
    for (idx, provider) in config.providers.iter().enumerate() {
        let tier = ProviderTier::from_str(&provider.tier).map_err(|_| {
            RouterError::ConfigError(format!(
                "Unknown tier '{}' in providers[{}]\n  \
                 → Valid tiers: {}",
                provider.tier,
                idx,
                valid_keys.join(", ")
            ))
        })?;

        if seen.contains(&tier) {
            return Err(RouterError::ConfigError(format!(
                "Tier '{}' configured more than once (providers[{}])\n  \
                 → Each tier takes exactly one [[providers]] entry",
                provider.tier, idx
            )));
        }
        seen.push(tier);

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
    }

    for tier in ProviderTier::ALL {
        if !seen.contains(&tier) {
            return Err(RouterError::ConfigError(format!(
                "Missing [[providers]] entry for tier '{}'\n  \
                 → Selection can prefer any tier, so all of {} must be configured",
                tier,
                valid_keys.join(", ")
            )));
        }
    }

    for (idx, key) in config.routing.fallback_chain.iter().enumerate() {
        ProviderTier::from_str(key).map_err(|_| {
            RouterError::ConfigError(format!(
                "Unknown tier '{}' in routing.fallback_chain[{}]\n  \
                 → Valid tiers: {}",
                key,
                idx,
                valid_keys.join(", ")
            ))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
[[providers]]
tier = "anthropic_opus"
quotas = { daily_budget = 2.0, requests_per_minute = 5 }

[[providers]]
tier = "anthropic_sonnet"
quotas = { daily_budget = 1.5, requests_per_minute = 10 }

[[providers]]
tier = "anthropic_haiku"
quotas = { daily_budget = 1.0, requests_per_minute = 20 }

[routing]
fallback_chain = ["anthropic_sonnet", "anthropic_haiku"]
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(FULL_CONFIG).unwrap();
        assert_eq!(config.providers.len(), 3);
        assert_eq!(config.providers[0].quotas.daily_budget, 2.0);
        assert_eq!(config.routing.fallback_chain.len(), 2);
    }

    #[test]
    fn test_missing_routing_section_defaults_to_empty_chain() {
        let toml = FULL_CONFIG
            .replace("[routing]", "")
            .replace("fallback_chain = [\"anthropic_sonnet\", \"anthropic_haiku\"]", "");
        let config = parse_config(&toml).unwrap();
        assert!(config.routing.fallback_chain.is_empty());
    }

    #[test]
    fn test_unknown_tier_key() {
        let toml = FULL_CONFIG.replace("anthropic_opus", "anthropic_ultra");
        let result = parse_config(&toml);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Unknown tier"));
        assert!(err.contains("anthropic_ultra"));
    }

    #[test]
    fn test_missing_tier_entry() {
        let toml = r#"
[[providers]]
tier = "anthropic_opus"
quotas = { daily_budget = 2.0, requests_per_minute = 5 }
"#;
        let result = parse_config(toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Missing"));
    }

    #[test]
    fn test_duplicate_tier_entry() {
        let toml = FULL_CONFIG.replace("anthropic_haiku\"\nquotas", "anthropic_opus\"\nquotas");
        let result = parse_config(&toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("more than once"));
    }

    #[test]
    fn test_zero_requests_per_minute() {
        let toml = FULL_CONFIG.replace("requests_per_minute = 5", "requests_per_minute = 0");
        let result = parse_config(&toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at least 1"));
    }

    #[test]
    fn test_negative_daily_budget() {
        let toml = FULL_CONFIG.replace("daily_budget = 2.0", "daily_budget = -2.0");
        let result = parse_config(&toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("non-negative"));
    }

    #[test]
    fn test_unknown_fallback_entry() {
        let toml = FULL_CONFIG.replace(
            "fallback_chain = [\"anthropic_sonnet\", \"anthropic_haiku\"]",
            "fallback_chain = [\"anthropic_sonnet\", \"gpt4\"]",
        );
        let result = parse_config(&toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("fallback_chain"));
    }
}
