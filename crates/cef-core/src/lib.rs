//! Context engineering core.
//!
//! Scores text with surface-level heuristics: semantic density (unique-token
//! ratio damped for short texts), normalized Shannon entropy, and contextual
//! pressure (density scaled by token volume, saturating at 10k tokens). Those
//! two numbers classify a context into a regime and drive a small agent
//! mode-adaptation cycle.
//!
//! Zero I/O apart from optional config loading. No embeddings, no retrieval,
//! no persistence.

pub mod agent;
pub mod aggregate;
pub mod coherence;
pub mod component;
pub mod config;
pub mod constants;
pub mod error;
pub mod fields;
pub mod metrics;
pub mod pressure;
pub mod regime;
pub mod state;
pub mod time;
pub mod tokenizer;

pub use agent::{ContextAgent, MemoryEntry, ThinkResult};
pub use aggregate::aggregate_density;
pub use coherence::{CoherenceIssue, CoherenceReport, infer_regime, validate_context};
pub use component::ContextComponent;
pub use config::{AgentConfig, CefConfig, Thresholds};
pub use error::{CefError, Result};
pub use fields::{ComponentName, ContextFields, FieldValue};
pub use metrics::{coherence, density, entropy, round4};
pub use pressure::pressure;
pub use regime::{AgentMode, Regime, classify_regime, select_mode};
pub use state::{ContextState, ContextSummary};
pub use tokenizer::{tokenize, word_count};

/// One-paragraph description of this build: name, version, license, and the
/// public building blocks.
pub fn framework_info() -> String {
    format!(
        "{} {}\nLicense: {}\nComponents: ContextComponent, ContextState, ContextAgent\n\
         Metrics: density, entropy, coherence, aggregate_density, pressure, classify_regime",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_LICENSE"),
    )
}
