//! Tests for task construction, complexity assessment, and cost estimation.

use tierllm::router::assessment::{assess, complexity_score};
use tierllm::router::cost::estimate_cost;
use tierllm::Task;

// ============================================================================
// Task Construction Tests
// ============================================================================

#[test]
fn test_task_new_defaults() {
    let task = Task::new("summary");

    assert_eq!(task.task_type, "summary");
    assert!(task.estimated_tokens.is_none());
    assert!(task.priority.is_none());
    assert!(!task.involves_multiple_sources);
    assert!(!task.requires_reasoning);
}

#[test]
fn test_task_builder_methods() {
    let task = Task::new("financial_analysis")
        .estimated_tokens(2000)
        .priority("high")
        .multiple_sources(true)
        .requires_reasoning(true);

    assert_eq!(task.estimated_tokens, Some(2000));
    assert_eq!(task.priority.as_deref(), Some("high"));
    assert!(task.involves_multiple_sources);
    assert!(task.requires_reasoning);
}

#[test]
fn test_task_deserializes_from_plain_json() {
    let task: Task = serde_json::from_str(
        r#"{
            "type": "classification",
            "estimated_tokens": 100
        }"#,
    )
    .unwrap();

    assert_eq!(task.task_type, "classification");
    assert_eq!(task.estimated_tokens, Some(100));
    assert!(!task.involves_multiple_sources);
    assert!(!task.requires_reasoning);
}

// ============================================================================
// Complexity Scoring Tests
// ============================================================================

#[test]
fn test_baseline_complexity() {
    // No special fields: exactly the baseline
    assert_eq!(complexity_score(&Task::new("data_extraction")), 5);
}

#[test]
fn test_financial_analysis_score() {
    assert_eq!(complexity_score(&Task::new("financial_analysis")), 9);
}

#[test]
fn test_strategic_planning_score() {
    assert_eq!(complexity_score(&Task::new("strategic_planning")), 8);
}

#[test]
fn test_boolean_deltas_stack_on_type_delta() {
    let task = Task::new("strategic_planning").multiple_sources(true);
    assert_eq!(complexity_score(&task), 10);

    let task = Task::new("data_extraction")
        .multiple_sources(true)
        .requires_reasoning(true);
    assert_eq!(complexity_score(&task), 8);
}

#[test]
fn test_complexity_clamped_to_upper_bound() {
    // Raw score 5 + 4 + 2 + 1 = 12, clamped to 10
    let task = Task::new("financial_analysis")
        .multiple_sources(true)
        .requires_reasoning(true);

    assert_eq!(complexity_score(&task), 10);
}

#[test]
fn test_classification_score() {
    assert_eq!(complexity_score(&Task::new("classification")), 2);
}

#[test]
fn test_validation_score() {
    assert_eq!(complexity_score(&Task::new("validation")), 3);
}

#[test]
fn test_formatting_score() {
    assert_eq!(complexity_score(&Task::new("formatting")), 3);
}

#[test]
fn test_complexity_always_in_range() {
    let types = [
        "financial_analysis",
        "strategic_planning",
        "classification",
        "validation",
        "formatting",
        "data_extraction",
        "",
    ];

    for task_type in types {
        for sources in [false, true] {
            for reasoning in [false, true] {
                let task = Task::new(task_type)
                    .multiple_sources(sources)
                    .requires_reasoning(reasoning);
                let score = complexity_score(&task);
                assert!((1..=10).contains(&score), "score {} out of range", score);
            }
        }
    }
}

// ============================================================================
// Assessment Tests
// ============================================================================

#[test]
fn test_assess_populates_defaults() {
    let assessment = assess(&Task::new("data_extraction"));

    assert_eq!(assessment.task_type, "data_extraction");
    assert_eq!(assessment.complexity, 5);
    assert_eq!(assessment.estimated_tokens, 500);
    assert_eq!(assessment.priority, "normal");
}

#[test]
fn test_assess_carries_task_fields() {
    let task = Task::new("financial_analysis")
        .estimated_tokens(2000)
        .priority("urgent");
    let assessment = assess(&task);

    assert_eq!(assessment.complexity, 9);
    assert_eq!(assessment.estimated_tokens, 2000);
    assert_eq!(assessment.priority, "urgent");
    assert!((assessment.estimated_cost - 0.06).abs() < 1e-12);
}

// ============================================================================
// Cost Estimation Tests
// ============================================================================

#[test]
fn test_cost_for_2000_tokens() {
    let task = Task::new("any").estimated_tokens(2000);

    // 2000 * 0.00001 + 2000 * 0.00002 = 0.06
    assert!((estimate_cost(&task, 1) - 0.06).abs() < 1e-12);
}

#[test]
fn test_cost_ignores_complexity() {
    let task = Task::new("any").estimated_tokens(2000);

    let low = estimate_cost(&task, 1);
    let high = estimate_cost(&task, 10);
    assert_eq!(low, high);
}

#[test]
fn test_cost_defaults_to_500_tokens() {
    let task = Task::new("any");

    // 500 * 0.00001 + 500 * 0.00002 = 0.015
    assert!((estimate_cost(&task, 5) - 0.015).abs() < 1e-12);
}
