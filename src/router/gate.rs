//! The availability gate: pass/fail against a tier's quotas.

use std::fmt;

use crate::router::tracker::UsageRecord;
use crate::router::types::QuotaConfig;

/// The verdict of a gate check.
///
/// Budget is checked before the rate limit, so when both ceilings are hit
/// the budget verdict wins (it is the more actionable diagnostic).
#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    Available,
    BudgetExhausted { spent: f64, budget: f64 },
    RateLimited { requests: u32, limit: u32 },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::BudgetExhausted { spent, budget } => {
                write!(f, "daily budget exceeded (${:.4} spent, ${:.4} budget)", spent, budget)
            }
            Availability::RateLimited { requests, limit } => {
                write!(f, "rate limit reached ({}/{} requests this minute)", requests, limit)
            }
        }
    }
}

/// Check a tier's current usage against its quotas.
///
/// Pure and idempotent: repeated checks without an intervening usage record
/// return the same verdict.
pub fn check(quotas: &QuotaConfig, usage: &UsageRecord) -> Availability {
    if usage.daily_spend >= quotas.daily_budget {
        return Availability::BudgetExhausted {
            spent: usage.daily_spend,
            budget: quotas.daily_budget,
        };
    }

    if usage.requests_this_minute >= quotas.requests_per_minute {
        return Availability::RateLimited {
            requests: usage.requests_this_minute,
            limit: quotas.requests_per_minute,
        };
    }

    Availability::Available
}
