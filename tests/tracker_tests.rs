//! Tests for per-tier usage accounting and window rollover.

use std::time::{Duration, SystemTime};

use tierllm::{ProviderTier, UsageTracker};

fn tracker_at(now: SystemTime) -> UsageTracker {
    UsageTracker::new(now)
}

// ============================================================================
// Initialization Tests
// ============================================================================

#[test]
fn test_all_tiers_start_zeroed() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let tracker = tracker_at(now);

    for tier in ProviderTier::ALL {
        let usage = tracker.usage(tier);
        assert_eq!(usage.daily_spend, 0.0);
        assert_eq!(usage.requests_this_minute, 0);
        assert_eq!(usage.requests_today, 0);
        assert_eq!(usage.tokens_used, 0);
        assert_eq!(usage.last_minute_reset, now);
        assert_eq!(usage.last_day_reset, now);
    }
}

// ============================================================================
// Recording Tests
// ============================================================================

#[test]
fn test_record_increments_all_counters() {
    let now = SystemTime::now();
    let mut tracker = tracker_at(now);

    tracker.record(ProviderTier::AnthropicSonnet, 1200, 0.036);

    let usage = tracker.usage(ProviderTier::AnthropicSonnet);
    assert!((usage.daily_spend - 0.036).abs() < 1e-12);
    assert_eq!(usage.requests_this_minute, 1);
    assert_eq!(usage.requests_today, 1);
    assert_eq!(usage.tokens_used, 1200);
}

#[test]
fn test_record_accumulates() {
    let now = SystemTime::now();
    let mut tracker = tracker_at(now);

    tracker.record(ProviderTier::AnthropicHaiku, 100, 0.003);
    tracker.record(ProviderTier::AnthropicHaiku, 200, 0.006);
    tracker.record(ProviderTier::AnthropicHaiku, 300, 0.009);

    let usage = tracker.usage(ProviderTier::AnthropicHaiku);
    assert!((usage.daily_spend - 0.018).abs() < 1e-12);
    assert_eq!(usage.requests_this_minute, 3);
    assert_eq!(usage.requests_today, 3);
    assert_eq!(usage.tokens_used, 600);
}

#[test]
fn test_record_does_not_touch_other_tiers() {
    let now = SystemTime::now();
    let mut tracker = tracker_at(now);

    tracker.record(ProviderTier::AnthropicOpus, 2000, 0.06);

    for tier in [ProviderTier::AnthropicSonnet, ProviderTier::AnthropicHaiku] {
        let usage = tracker.usage(tier);
        assert_eq!(usage.daily_spend, 0.0);
        assert_eq!(usage.requests_today, 0);
        assert_eq!(usage.tokens_used, 0);
    }
}

// ============================================================================
// Window Rollover Tests
// ============================================================================

#[test]
fn test_no_reset_within_windows() {
    let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let mut tracker = tracker_at(start);

    tracker.record(ProviderTier::AnthropicOpus, 500, 0.015);
    tracker.reset_if_elapsed(ProviderTier::AnthropicOpus, start + Duration::from_secs(59));

    let usage = tracker.usage(ProviderTier::AnthropicOpus);
    assert_eq!(usage.requests_this_minute, 1);
    assert_eq!(usage.requests_today, 1);
    assert_eq!(usage.last_minute_reset, start);
}

#[test]
fn test_minute_rollover_clears_only_minute_counter() {
    let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let mut tracker = tracker_at(start);

    tracker.record(ProviderTier::AnthropicOpus, 500, 0.015);
    let later = start + Duration::from_secs(61);
    tracker.reset_if_elapsed(ProviderTier::AnthropicOpus, later);

    let usage = tracker.usage(ProviderTier::AnthropicOpus);
    assert_eq!(usage.requests_this_minute, 0);
    assert_eq!(usage.last_minute_reset, later);

    // Day-window counters survive a minute rollover
    assert!((usage.daily_spend - 0.015).abs() < 1e-12);
    assert_eq!(usage.requests_today, 1);
    assert_eq!(usage.tokens_used, 500);
    assert_eq!(usage.last_day_reset, start);
}

#[test]
fn test_day_rollover_clears_daily_counters() {
    let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let mut tracker = tracker_at(start);

    tracker.record(ProviderTier::AnthropicSonnet, 500, 0.015);
    let next_day = start + Duration::from_secs(25 * 60 * 60);
    tracker.reset_if_elapsed(ProviderTier::AnthropicSonnet, next_day);

    let usage = tracker.usage(ProviderTier::AnthropicSonnet);
    assert_eq!(usage.daily_spend, 0.0);
    assert_eq!(usage.requests_today, 0);
    assert_eq!(usage.tokens_used, 0);
    assert_eq!(usage.requests_this_minute, 0);
    assert_eq!(usage.last_day_reset, next_day);
    assert_eq!(usage.last_minute_reset, next_day);
}

#[test]
fn test_rollover_is_per_tier() {
    let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let mut tracker = tracker_at(start);

    tracker.record(ProviderTier::AnthropicOpus, 500, 0.015);
    tracker.record(ProviderTier::AnthropicHaiku, 100, 0.003);
    tracker.reset_if_elapsed(ProviderTier::AnthropicOpus, start + Duration::from_secs(120));

    // Haiku was not rolled over; its minute counter still stands
    assert_eq!(tracker.usage(ProviderTier::AnthropicOpus).requests_this_minute, 0);
    assert_eq!(tracker.usage(ProviderTier::AnthropicHaiku).requests_this_minute, 1);
}

#[test]
fn test_counters_grow_again_after_reset() {
    let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let mut tracker = tracker_at(start);

    tracker.record(ProviderTier::AnthropicOpus, 500, 0.015);
    tracker.reset_if_elapsed(ProviderTier::AnthropicOpus, start + Duration::from_secs(90));
    tracker.record(ProviderTier::AnthropicOpus, 700, 0.021);

    let usage = tracker.usage(ProviderTier::AnthropicOpus);
    assert_eq!(usage.requests_this_minute, 1);
    assert_eq!(usage.requests_today, 2);
    assert_eq!(usage.tokens_used, 1200);
}
