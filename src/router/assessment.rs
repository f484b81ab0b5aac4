//! Task complexity scoring.

use crate::constants::{BASELINE_COMPLEXITY, MAX_COMPLEXITY, MIN_COMPLEXITY};
use crate::router::cost::estimate_cost;
use crate::router::types::{Assessment, Task};

/// Score a task's complexity on the 1-10 scale.
///
/// Starts from the baseline and applies fixed deltas. The type-keyed deltas
/// are mutually exclusive (a task has one type); the boolean-keyed deltas
/// stack on top of whichever type delta applied. The raw sum is clamped to
/// the scale, so any input combination stays within 1-10.
pub fn complexity_score(task: &Task) -> u8 {
    let mut score = BASELINE_COMPLEXITY;

    // Factors that raise complexity
    if task.task_type == "financial_analysis" {
        score += 4;
    }
    if task.task_type == "strategic_planning" {
        score += 3;
    }
    if task.involves_multiple_sources {
        score += 2;
    }
    if task.requires_reasoning {
        score += 1;
    }

    // Factors that lower complexity
    if task.task_type == "classification" {
        score -= 3;
    }
    if task.task_type == "validation" {
        score -= 2;
    }
    if task.task_type == "formatting" {
        score -= 2;
    }

    score.clamp(MIN_COMPLEXITY as i32, MAX_COMPLEXITY as i32) as u8
}

/// Assess a task: complexity, estimated tokens, and projected cost.
///
/// Pure derivation over the task's fields; no side effects.
pub fn assess(task: &Task) -> Assessment {
    let complexity = complexity_score(task);
    let estimated_cost = estimate_cost(task, complexity);

    Assessment {
        task_type: task.task_type.clone(),
        complexity,
        estimated_tokens: task
            .estimated_tokens
            .unwrap_or(crate::constants::DEFAULT_ESTIMATED_TOKENS),
        estimated_cost,
        priority: task.priority.clone().unwrap_or_else(|| "normal".to_string()),
    }
}
