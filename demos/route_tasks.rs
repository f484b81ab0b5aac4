use log::info;
use tierllm::{
    use_logging, DashboardData, ProviderTier, RouterResult, Task, TierRouter,
};

fn main() -> RouterResult<()> {
    use_logging();

    info!("Starting tier routing example");

    let mut router = TierRouter::builder()
        .provider(ProviderTier::AnthropicOpus, "claude-opus-4-5", 2.0, 5)
        .provider(ProviderTier::AnthropicSonnet, "claude-sonnet-4-5", 1.5, 10)
        .provider(ProviderTier::AnthropicHaiku, "claude-haiku-4-5", 1.0, 20)
        .fallback_chain([ProviderTier::AnthropicSonnet, ProviderTier::AnthropicHaiku])
        .build()?;

    let tasks = vec![
        (
            "Complex financial analysis",
            Task::new("financial_analysis")
                .multiple_sources(true)
                .requires_reasoning(true)
                .estimated_tokens(2000),
        ),
        (
            "Data extraction",
            Task::new("data_extraction").estimated_tokens(1000),
        ),
        (
            "Simple classification",
            Task::new("classification").estimated_tokens(100),
        ),
        ("Formatting", Task::new("formatting").estimated_tokens(200)),
    ];

    let mut usage_log = Vec::new();

    for (label, task) in &tasks {
        let decision = router.route(task)?;
        println!(
            "{}: complexity {}/10 -> {} (est. ${:.4})",
            label,
            decision.assessment.complexity,
            decision.provider.model,
            decision.assessment.estimated_cost
        );

        // The caller would invoke the provider here; we just report the
        // estimated usage back as if the call completed.
        let line = router.log_api_call(
            decision.tier(),
            decision.assessment.estimated_tokens as u64,
            decision.assessment.estimated_cost,
        );
        usage_log.push(line);
    }

    let dashboard = DashboardData::from_lines(&usage_log);
    println!("\nDashboard:");
    match dashboard.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to serialize dashboard data: {}", e),
    }

    Ok(())
}
