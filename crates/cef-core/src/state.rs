use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate_density;
use crate::component::ContextComponent;
use crate::constants::TOKENS_KEY;
use crate::fields::{ComponentName, ContextFields};
use crate::pressure::pressure;
use crate::regime::{Regime, classify_regime};
use crate::tokenizer::word_count;

/// Snapshot of a state's derived metrics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContextSummary {
    pub density: f64,
    pub pressure: f64,
    pub regime: Regime,
    pub token_count: usize,
}

/// The five components of an agent's context plus their aggregate metrics.
///
/// Derived metrics follow a manual-refresh model: they are valid right after
/// `recompute()` and go stale on any component edit until it runs again.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContextState {
    system: ContextComponent,
    user: ContextComponent,
    history: ContextComponent,
    rag: ContextComponent,
    tools: ContextComponent,

    density: f64,
    pressure: f64,
    regime: Regime,
    token_count: usize,
}

impl ContextState {
    /// Build a state from one content string per component. Metrics start
    /// zeroed with `Regime::Undefined`.
    pub fn new(system: &str, user: &str, history: &str, rag: &str, tools: &str) -> Self {
        Self {
            system: ContextComponent::new(ComponentName::System, system),
            user: ContextComponent::new(ComponentName::User, user),
            history: ContextComponent::new(ComponentName::History, history),
            rag: ContextComponent::new(ComponentName::Rag, rag),
            tools: ContextComponent::new(ComponentName::Tools, tools),
            density: 0.0,
            pressure: 0.0,
            regime: Regime::Undefined,
            token_count: 0,
        }
    }

    pub fn component(&self, name: ComponentName) -> &ContextComponent {
        match name {
            ComponentName::System => &self.system,
            ComponentName::User => &self.user,
            ComponentName::History => &self.history,
            ComponentName::Rag => &self.rag,
            ComponentName::Tools => &self.tools,
        }
    }

    /// Mutable access to a component. Edits do not touch the derived metrics.
    pub fn component_mut(&mut self, name: ComponentName) -> &mut ContextComponent {
        match name {
            ComponentName::System => &mut self.system,
            ComponentName::User => &mut self.user,
            ComponentName::History => &mut self.history,
            ComponentName::Rag => &mut self.rag,
            ComponentName::Tools => &mut self.tools,
        }
    }

    pub fn components(&self) -> impl Iterator<Item = &ContextComponent> {
        ComponentName::ALL.into_iter().map(|name| self.component(name))
    }

    /// Current component contents keyed by component name.
    pub fn fields(&self) -> ContextFields {
        self.components()
            .map(|c| (c.name().as_str(), c.content()))
            .collect()
    }

    /// Recompute density, token count, pressure and regime from the current
    /// component contents.
    pub fn recompute(&mut self) {
        let mut fields = self.fields();
        self.density = aggregate_density(&fields);
        self.token_count = fields.texts().map(word_count).sum();
        // Recorded alongside the texts; pressure only tokenizes text values.
        fields.insert(TOKENS_KEY, self.token_count);
        self.pressure = pressure(&fields);
        self.regime = classify_regime(self.density, self.pressure);

        tracing::debug!(
            density = self.density,
            pressure = self.pressure,
            tokens = self.token_count,
            regime = %self.regime,
            "context state recomputed"
        );
    }

    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            density: self.density,
            pressure: self.pressure,
            regime: self.regime,
            token_count: self.token_count,
        }
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }
}

impl fmt::Display for ContextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ContextState SD={:.2} PC={:.2} Regime={}>",
            self.density, self.pressure, self.regime
        )
    }
}
