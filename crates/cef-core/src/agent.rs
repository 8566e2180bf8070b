use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AgentConfig;
use crate::fields::ComponentName;
use crate::regime::{AgentMode, select_mode};
use crate::state::{ContextState, ContextSummary};
use crate::time::now_iso8601;

/// One interaction log record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub role: String,
    pub content: String,
    pub timestamp: String,
}

/// Outcome of one `think` cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThinkResult {
    pub name: String,
    pub mode: AgentMode,
    pub summary: ContextSummary,
}

/// A conversational agent that owns one context state, a bounded FIFO
/// interaction log, and an operating mode.
///
/// `mode` is only changed by `adjust_mode` (directly or via `think`); state
/// updates alone never move it.
#[derive(Clone, Debug)]
pub struct ContextAgent {
    id: Uuid,
    name: String,
    mode: AgentMode,
    state: ContextState,
    memory: VecDeque<MemoryEntry>,
    capacity: usize,
}

impl ContextAgent {
    pub fn new(name: &str, mode: AgentMode, system_prompt: &str) -> Self {
        Self::with_config(name, mode, system_prompt, &AgentConfig::default())
    }

    /// Build an agent whose log capacity and tools seed come from `config`.
    /// A zero capacity is treated as one.
    pub fn with_config(
        name: &str,
        mode: AgentMode,
        system_prompt: &str,
        config: &AgentConfig,
    ) -> Self {
        let mut state = ContextState::new(system_prompt, "", "", "", &config.tools);
        state.recompute();
        let capacity = config.memory_capacity.max(1);
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            mode,
            state,
            memory: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// First 8 hex characters of the id, for display.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> AgentMode {
        self.mode
    }

    pub fn state(&self) -> &ContextState {
        &self.state
    }

    /// Direct state access for collaborators that fill history, rag or tools.
    /// Call `ContextState::recompute` afterwards to refresh the metrics.
    pub fn state_mut(&mut self) -> &mut ContextState {
        &mut self.state
    }

    pub fn memory(&self) -> impl ExactSizeIterator<Item = &MemoryEntry> {
        self.memory.iter()
    }

    pub fn memory_capacity(&self) -> usize {
        self.capacity
    }

    /// Replace the user component, refresh its own density, then recompute
    /// the aggregate state.
    pub fn update_user_input(&mut self, text: &str) {
        let user = self.state.component_mut(ComponentName::User);
        user.set_content(text);
        user.analyze();
        self.state.recompute();
    }

    /// Append to the interaction log, evicting the oldest entry past capacity.
    pub fn memorize(&mut self, role: &str, content: &str) {
        self.memory.push_back(MemoryEntry {
            role: role.to_string(),
            content: content.to_string(),
            timestamp: now_iso8601(),
        });
        while self.memory.len() > self.capacity {
            if let Some(evicted) = self.memory.pop_front() {
                tracing::trace!(
                    agent = %self.name,
                    role = %evicted.role,
                    "evicted oldest memory entry"
                );
            }
        }
    }

    /// Contents of the last `k` log entries, newline-joined, oldest first.
    /// `k = 0` yields an empty string; `k` past the log length yields all of it.
    pub fn recall_memory(&self, k: usize) -> String {
        let skip = self.memory.len().saturating_sub(k);
        self.memory
            .iter()
            .skip(skip)
            .map(|entry| entry.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Set `mode` from the state's current density and pressure.
    pub fn adjust_mode(&mut self) {
        let next = select_mode(self.state.density(), self.state.pressure());
        if next != self.mode {
            tracing::debug!(agent = %self.name, from = %self.mode, to = %next, "mode changed");
        }
        self.mode = next;
    }

    /// One reasoning cycle: take the input, log it verbatim, re-derive mode.
    pub fn think(&mut self, input: &str) -> ThinkResult {
        self.update_user_input(input);
        self.memorize("user", input);
        self.adjust_mode();

        ThinkResult {
            name: self.name.clone(),
            mode: self.mode,
            summary: self.state.summary(),
        }
    }

    /// Two-line status. Metrics are already rounded and print as stored.
    pub fn describe_state(&self) -> String {
        let s = self.state.summary();
        format!(
            "Agent: {} ({})\nSD: {:?} | PC: {:?} | Regime: {} | Tokens: {}",
            self.name, self.mode, s.density, s.pressure, s.regime, s.token_count
        )
    }
}

impl fmt::Display for ContextAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ContextAgent {} Mode={} SD={:.2} PC={:.2}>",
            self.name,
            self.mode,
            self.state.density(),
            self.state.pressure()
        )
    }
}
