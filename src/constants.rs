use std::time::Duration;

// Complexity scoring
pub const BASELINE_COMPLEXITY: i32 = 5;
pub const MIN_COMPLEXITY: u8 = 1;
pub const MAX_COMPLEXITY: u8 = 10;

// Cost estimation (currency units per token)
pub const DEFAULT_ESTIMATED_TOKENS: u32 = 500;
pub const INPUT_TOKEN_RATE: f64 = 0.00001;
pub const OUTPUT_TOKEN_RATE: f64 = 0.00002;

// Tier preference thresholds (inclusive lower bounds)
pub const OPUS_COMPLEXITY_THRESHOLD: u8 = 8;
pub const SONNET_COMPLEXITY_THRESHOLD: u8 = 5;

// Usage reset windows
pub const MINUTE_WINDOW: Duration = Duration::from_secs(60);
pub const DAY_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);
