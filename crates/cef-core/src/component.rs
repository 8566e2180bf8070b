use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::ComponentName;
use crate::metrics::density;
use crate::time::now_iso8601;

/// One named slot of an agent's context.
///
/// `density` is a cached value: it reflects `content` only after `analyze()`
/// has run since the last `set_content()`. Reads never recompute it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContextComponent {
    name: ComponentName,
    content: String,
    timestamp: String,
    density: f64,
}

impl ContextComponent {
    pub fn new(name: ComponentName, content: impl Into<String>) -> Self {
        Self {
            name,
            content: content.into(),
            timestamp: now_iso8601(),
            density: 0.0,
        }
    }

    pub fn name(&self) -> ComponentName {
        self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content and stamp the edit time. Leaves `density` stale.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.timestamp = now_iso8601();
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Recompute this component's own density from its current content.
    pub fn analyze(&mut self) {
        self.density = density(&self.content);
    }
}

impl fmt::Display for ContextComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} SD={:.2}>",
            self.name.as_str().to_uppercase(),
            self.density
        )
    }
}
