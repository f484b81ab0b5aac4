//! Dashboard aggregation over the usage log.
//!
//! Downstream reporting: reads `[API]` usage lines, aggregates per-tier and
//! total spend against fixed daily budgets, and derives status labels and
//! alerts. This consumer depends only on the log line contract in
//! [`parser`], not on router internals, so it can run over a log file long
//! after the producing process is gone.

mod parser;

pub use parser::{format_usage_line, parse_usage_line, ParsedCall};

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::errors::{RouterError, RouterResult};
use crate::tier::{ProviderTier, TierTable};

/// Total daily budget across all tiers.
pub const DAILY_TOTAL_BUDGET: f64 = 4.5;

/// Fraction of a budget at which status turns to WARNING.
pub const WARNING_RATIO: f64 = 0.8;

/// Fixed daily budget for a tier.
pub fn tier_budget(tier: ProviderTier) -> f64 {
    match tier {
        ProviderTier::AnthropicOpus => 2.0,
        ProviderTier::AnthropicSonnet => 1.5,
        ProviderTier::AnthropicHaiku => 1.0,
    }
}

/// Budget health label: OK below 80%, WARNING at 80%, EXCEEDED at 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetStatus {
    Ok,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn for_spend(spend: f64, budget: f64) -> Self {
        if spend >= budget {
            BudgetStatus::Exceeded
        } else if spend >= budget * WARNING_RATIO {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Ok
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetStatus::Ok => write!(f, "OK"),
            BudgetStatus::Warning => write!(f, "WARNING"),
            BudgetStatus::Exceeded => write!(f, "EXCEEDED"),
        }
    }
}

/// Overall daily totals.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_requests_today: usize,
    pub total_cost_today: f64,
    pub daily_budget: f64,
    pub budget_remaining: f64,
    pub budget_percentage: f64,
    pub status: BudgetStatus,
}

/// Per-tier daily totals against that tier's budget.
#[derive(Debug, Clone, Serialize)]
pub struct TierStats {
    pub name: String,
    pub requests_today: usize,
    pub cost_today: f64,
    pub daily_budget: f64,
    pub budget_percentage: f64,
    pub status: BudgetStatus,
}

/// A tier's share of the total spend.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderShare {
    pub cost: f64,
    pub percentage: f64,
}

/// Spend split across tiers.
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    pub by_provider: BTreeMap<String, ProviderShare>,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Error,
    Warning,
    Success,
}

/// A budget alert derived from the aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub description: String,
}

/// Aggregated dashboard view over one day's usage log.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub summary: Summary,
    pub providers: BTreeMap<String, TierStats>,
    pub costs: CostBreakdown,
    pub alerts: Vec<Alert>,
}

impl DashboardData {
    /// Aggregate usage-log lines. Malformed lines are skipped and omitted
    /// from every count.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut requests: TierTable<usize> = TierTable::from_fn(|_| 0);
        let mut spend: TierTable<f64> = TierTable::from_fn(|_| 0.0);

        for line in lines {
            if let Some(call) = parse_usage_line(line.as_ref()) {
                *requests.get_mut(call.tier) += 1;
                *spend.get_mut(call.tier) += call.cost;
            }
        }

        let total_requests: usize = ProviderTier::ALL.iter().map(|&t| *requests.get(t)).sum();
        let total_cost: f64 = ProviderTier::ALL.iter().map(|&t| *spend.get(t)).sum();

        let summary = Summary {
            total_requests_today: total_requests,
            total_cost_today: round_to(total_cost, 4),
            daily_budget: DAILY_TOTAL_BUDGET,
            budget_remaining: round_to(DAILY_TOTAL_BUDGET - total_cost, 4),
            budget_percentage: round_to(total_cost / DAILY_TOTAL_BUDGET * 100.0, 1),
            status: BudgetStatus::for_spend(total_cost, DAILY_TOTAL_BUDGET),
        };

        let mut providers = BTreeMap::new();
        for tier in ProviderTier::ALL {
            let cost = *spend.get(tier);
            let budget = tier_budget(tier);
            providers.insert(
                tier.as_str().to_string(),
                TierStats {
                    name: tier.short_name().to_string(),
                    requests_today: *requests.get(tier),
                    cost_today: round_to(cost, 4),
                    daily_budget: budget,
                    budget_percentage: round_to(cost / budget * 100.0, 1),
                    status: BudgetStatus::for_spend(cost, budget),
                },
            );
        }

        let mut by_provider = BTreeMap::new();
        for tier in ProviderTier::ALL {
            let cost = *spend.get(tier);
            let percentage = if total_cost > 0.0 {
                round_to(cost / total_cost * 100.0, 1)
            } else {
                0.0
            };
            by_provider.insert(
                tier.short_name().to_string(),
                ProviderShare {
                    cost: round_to(cost, 4),
                    percentage,
                },
            );
        }
        let costs = CostBreakdown {
            by_provider,
            total: round_to(total_cost, 4),
        };

        let alerts = build_alerts(&summary, &providers);

        DashboardData {
            summary,
            providers,
            costs,
            alerts,
        }
    }

    /// Aggregate a usage-log file, one `[API]` line per completed call.
    pub fn from_log_file<P: AsRef<Path>>(path: P) -> RouterResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RouterError::ConfigError(format!(
                "Failed to read usage log '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_lines(
            content.lines().filter(|line| !line.trim().is_empty()),
        ))
    }

    /// Serialize for a dashboard frontend.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn build_alerts(summary: &Summary, providers: &BTreeMap<String, TierStats>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    match summary.status {
        BudgetStatus::Exceeded => alerts.push(Alert {
            level: AlertLevel::Error,
            message: "Daily budget exceeded".to_string(),
            description: format!(
                "Spent ${:.4} of ${:.2}",
                summary.total_cost_today, summary.daily_budget
            ),
        }),
        BudgetStatus::Warning => alerts.push(Alert {
            level: AlertLevel::Warning,
            message: "80% of the daily budget used".to_string(),
            description: format!(
                "Spent ${:.4} of ${:.2}",
                summary.total_cost_today, summary.daily_budget
            ),
        }),
        BudgetStatus::Ok => {}
    }

    for tier in ProviderTier::ALL {
        let Some(stats) = providers.get(tier.as_str()) else {
            continue;
        };
        match stats.status {
            BudgetStatus::Exceeded => alerts.push(Alert {
                level: AlertLevel::Error,
                message: format!("{} budget exceeded", stats.name),
                description: format!(
                    "Spent ${:.4} of ${:.2}",
                    stats.cost_today, stats.daily_budget
                ),
            }),
            BudgetStatus::Warning => alerts.push(Alert {
                level: AlertLevel::Warning,
                message: format!("{} at 80% of budget", stats.name),
                description: format!(
                    "Spent ${:.4} of ${:.2}",
                    stats.cost_today, stats.daily_budget
                ),
            }),
            BudgetStatus::Ok => {}
        }
    }

    if alerts.is_empty() {
        alerts.push(Alert {
            level: AlertLevel::Success,
            message: "All within budget".to_string(),
            description: format!(
                "{} requests processed, ${:.4} spent",
                summary.total_requests_today, summary.total_cost_today
            ),
        });
    }

    alerts
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
