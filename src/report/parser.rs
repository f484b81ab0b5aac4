//! Usage-log line formatting and parsing.
//!
//! The line shape is a stable contract between the router (producer) and
//! dashboard tooling (consumer): `[API] <tier>: <tokens> tokens, $<cost>`
//! with the cost carrying four decimals. Change both sides together or not
//! at all.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::tier::ProviderTier;

/// One successfully parsed usage-log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCall {
    pub tier: ProviderTier,
    pub tokens: u64,
    pub cost: f64,
}

/// Format the usage-log line for one completed call.
pub fn format_usage_line(tier: ProviderTier, tokens: u64, cost: f64) -> String {
    format!("[API] {}: {} tokens, ${:.4}", tier.as_str(), tokens, cost)
}

fn usage_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[API\] (\w+): (\d+) tokens, \$([0-9.]+)").unwrap())
}

/// Parse a usage-log line.
///
/// Returns `None` for anything that does not match the contract — an
/// unknown tier key, a non-numeric field, or unrelated log noise. Malformed
/// lines are skipped by aggregation, never fatal.
pub fn parse_usage_line(line: &str) -> Option<ParsedCall> {
    let caps = usage_line_regex().captures(line)?;
    let tier = ProviderTier::from_str(caps.get(1)?.as_str()).ok()?;
    let tokens = caps.get(2)?.as_str().parse().ok()?;
    let cost = caps.get(3)?.as_str().parse().ok()?;
    Some(ParsedCall { tier, tokens, cost })
}
