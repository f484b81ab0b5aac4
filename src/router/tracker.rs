//! Per-tier usage accounting.

use std::time::SystemTime;

use crate::constants::{DAY_WINDOW, MINUTE_WINDOW};
use crate::tier::{ProviderTier, TierTable};

/// Usage counters for a single provider tier.
///
/// Counters only grow between resets; a reset event zeroes its window's
/// counters and stamps the reset time. The minute and day windows carry
/// separate stamps so a minute rollover cannot slide the day window.
#[derive(Debug, Clone)]
pub struct UsageRecord {
    pub daily_spend: f64,
    pub requests_this_minute: u32,
    pub requests_today: u32,
    pub tokens_used: u64,
    pub last_minute_reset: SystemTime,
    pub last_day_reset: SystemTime,
}

impl UsageRecord {
    /// A zeroed record with both reset stamps at `now`.
    pub fn new(now: SystemTime) -> Self {
        Self {
            daily_spend: 0.0,
            requests_this_minute: 0,
            requests_today: 0,
            tokens_used: 0,
            last_minute_reset: now,
            last_day_reset: now,
        }
    }
}

/// Explicitly owned usage state for every tier.
///
/// Mutated only through [`UsageTracker::record`] and
/// [`UsageTracker::reset_if_elapsed`]; the availability gate reads it but
/// never writes. One instance per router keeps tests isolated and allows
/// several independent routers in one process.
#[derive(Debug, Clone)]
pub struct UsageTracker {
    records: TierTable<UsageRecord>,
}

impl UsageTracker {
    /// Initialize every tier's record to the zero state at `now`.
    pub fn new(now: SystemTime) -> Self {
        Self {
            records: TierTable::from_fn(|_| UsageRecord::new(now)),
        }
    }

    /// Account for one completed provider call.
    ///
    /// Called exactly once per completed external call, after it succeeds
    /// or is billed; the router never calls this on its own.
    pub fn record(&mut self, tier: ProviderTier, tokens: u64, cost: f64) {
        let record = self.records.get_mut(tier);
        record.daily_spend += cost;
        record.requests_this_minute += 1;
        record.requests_today += 1;
        record.tokens_used += tokens;
    }

    /// Lazily roll the minute and day windows for a tier.
    ///
    /// A minute elapsed since the last minute reset zeroes
    /// `requests_this_minute`; a day elapsed since the last day reset zeroes
    /// `daily_spend`, `requests_today`, and `tokens_used`. Windows are
    /// elapsed durations, not calendar boundaries. The router applies this
    /// before every gate read, so saturated counters clear themselves
    /// without a scheduler.
    pub fn reset_if_elapsed(&mut self, tier: ProviderTier, now: SystemTime) {
        let record = self.records.get_mut(tier);

        let since_minute = now
            .duration_since(record.last_minute_reset)
            .unwrap_or_default();
        if since_minute >= MINUTE_WINDOW {
            record.requests_this_minute = 0;
            record.last_minute_reset = now;
        }

        let since_day = now.duration_since(record.last_day_reset).unwrap_or_default();
        if since_day >= DAY_WINDOW {
            record.daily_spend = 0.0;
            record.requests_today = 0;
            record.tokens_used = 0;
            record.last_day_reset = now;
        }
    }

    /// Current usage for a tier.
    pub fn usage(&self, tier: ProviderTier) -> &UsageRecord {
        self.records.get(tier)
    }

    /// Iterate over `(tier, record)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ProviderTier, &UsageRecord)> {
        self.records.iter()
    }
}
