//! End-to-end agent scenarios: construction → think cycles → mode and log.

use cef_core::{
    AgentMode, CefConfig, ComponentName, ContextAgent, ContextFields, Regime, Thresholds,
    aggregate_density, classify_regime, density, pressure, validate_context,
};

const ATHENA_DNA: &str = "\
You are Athena, a rational and analytical agent with minimalist reasoning. \
Your mission is to keep coherence and inferential precision in every context. \
Avoid redundancy and verbosity. Every token must carry meaning.";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn unique_words(prefix: &str, n: usize) -> String {
    (0..n)
        .map(|i| format!("{prefix}{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn short_prompt_agent_starts_incomplete() {
    init_tracing();
    let agent = ContextAgent::new("Athena", AgentMode::Minimal, "x y z");
    let summary = agent.state().summary();
    assert!(summary.density < 0.05, "density {}", summary.density);
    assert_eq!(summary.regime, Regime::Incomplete);
    assert_eq!(agent.mode(), AgentMode::Minimal);
}

#[test]
fn mode_is_not_adjusted_at_construction() {
    let mut agent = ContextAgent::new("Orion", AgentMode::Equilibrium, ATHENA_DNA);
    assert_eq!(agent.mode(), AgentMode::Equilibrium);
    agent.adjust_mode();
    assert_eq!(agent.mode(), AgentMode::Minimal);
}

#[test]
fn twenty_five_thinks_keep_last_twenty() {
    init_tracing();
    let mut agent = ContextAgent::new("Athena", AgentMode::Minimal, ATHENA_DNA);
    for i in 0..25 {
        agent.think(&format!("question number {i}"));
    }
    assert_eq!(agent.memory().len(), 20);

    let contents: Vec<&str> = agent.memory().map(|e| e.content.as_str()).collect();
    for evicted in 0..5 {
        assert!(!contents.contains(&format!("question number {evicted}").as_str()));
    }
    assert_eq!(contents[0], "question number 5");
    assert_eq!(agent.recall_memory(1), "question number 24");
    assert_eq!(agent.recall_memory(100).lines().count(), 20);
    assert_eq!(agent.recall_memory(0), "");
}

#[test]
fn think_summary_matches_state() {
    let mut agent = ContextAgent::new("Athena", AgentMode::Adaptive, ATHENA_DNA);
    let result = agent.think("Analyse the impact of semantic density on generative models.");
    assert_eq!(result.name, "Athena");
    assert_eq!(result.summary, agent.state().summary());
    assert_eq!(result.mode, agent.mode());
    assert_eq!(
        result.summary.regime,
        classify_regime(result.summary.density, result.summary.pressure)
    );
}

#[test]
fn saturated_context_falls_to_adaptive_mode() {
    init_tracing();
    let mut agent = ContextAgent::new("Nemea", AgentMode::Minimal, &unique_words("s", 4000));
    {
        let state = agent.state_mut();
        state
            .component_mut(ComponentName::History)
            .set_content(unique_words("h", 4000));
        state
            .component_mut(ComponentName::Rag)
            .set_content(unique_words("r", 4000));
    }
    // user (0.25) + system (0.30) + history (0.15) + rag (0.20), tools ~0.004
    let result = agent.think(&unique_words("u", 4000));
    assert!(result.summary.density > 0.9);
    assert_eq!(result.summary.pressure, 1.0);
    assert_eq!(result.summary.regime, Regime::Entropic);
    assert_eq!(result.mode, AgentMode::Adaptive);
    assert_eq!(result.summary.token_count, 16_002);
}

#[test]
fn mid_pressure_context_reaches_saturation() {
    // Four dense 2000-token components: density ~0.9, pressure ~0.72.
    let mut agent = ContextAgent::new("Orion", AgentMode::Minimal, &unique_words("s", 2000));
    agent
        .state_mut()
        .component_mut(ComponentName::History)
        .set_content(unique_words("h", 2000));
    agent
        .state_mut()
        .component_mut(ComponentName::Rag)
        .set_content(unique_words("r", 2000));
    let result = agent.think(&unique_words("u", 2000));
    let s = result.summary;
    assert!((0.7..0.9).contains(&s.pressure), "pressure {}", s.pressure);
    assert_eq!(s.regime, Regime::Saturation);
    assert_eq!(result.mode, AgentMode::Saturation);
}

#[test]
fn state_edits_wait_for_recompute() {
    let mut agent = ContextAgent::new("Athena", AgentMode::Minimal, "x y z");
    let before = agent.state().summary();
    agent
        .state_mut()
        .component_mut(ComponentName::Rag)
        .set_content(unique_words("r", 500));
    assert_eq!(agent.state().summary(), before);
    agent.state_mut().recompute();
    assert!(agent.state().summary().token_count > before.token_count);
}

#[test]
fn free_functions_agree_with_state() {
    let agent = ContextAgent::new("Athena", AgentMode::Minimal, ATHENA_DNA);
    let fields = agent.state().fields();
    assert_eq!(aggregate_density(&fields), agent.state().density());
    assert_eq!(pressure(&fields), agent.state().pressure());
}

#[test]
fn aggregate_density_system_only() {
    let fields = ContextFields::new().with("system", ATHENA_DNA);
    let expected = (density(ATHENA_DNA) * 0.30 * 10_000.0).round() / 10_000.0;
    assert_eq!(aggregate_density(&fields), expected);
}

#[test]
fn config_driven_agent_and_validation() {
    let config = CefConfig::from_toml_str(
        r#"
        [thresholds]
        sd_min = 0.0
        pc_min = 0.0

        [agent]
        memory_capacity = 3
        tools = "semantic_search, code_runner"
        "#,
    )
    .unwrap();

    let mut agent =
        ContextAgent::with_config("Athena", AgentMode::Minimal, ATHENA_DNA, &config.agent);
    for i in 0..5 {
        agent.think(&format!("turn {i}"));
    }
    assert_eq!(agent.recall_memory(10), "turn 2\nturn 3\nturn 4");

    let report = validate_context(&agent.state().fields(), &config.thresholds);
    assert!(report.is_healthy(), "{report}");

    let strict = validate_context(&agent.state().fields(), &Thresholds::default());
    assert!(!strict.is_healthy());
}
