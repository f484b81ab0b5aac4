//! Projected dollar cost for a task.

use crate::constants::{DEFAULT_ESTIMATED_TOKENS, INPUT_TOKEN_RATE, OUTPUT_TOKEN_RATE};
use crate::router::types::Task;

/// Estimate the dollar cost of running a task.
///
/// The `complexity` argument does not currently enter the formula; it is
/// kept in the signature so tier-dependent pricing can be introduced
/// without an API break. No rounding happens here: values are rounded at
/// display time only.
pub fn estimate_cost(task: &Task, _complexity: u8) -> f64 {
    let tokens = task.estimated_tokens.unwrap_or(DEFAULT_ESTIMATED_TOKENS) as f64;
    tokens * INPUT_TOKEN_RATE + tokens * OUTPUT_TOKEN_RATE
}
