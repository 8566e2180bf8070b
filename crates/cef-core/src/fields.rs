//! Named text fields that make up an agent's context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{WEIGHT_HISTORY, WEIGHT_RAG, WEIGHT_SYSTEM, WEIGHT_TOOLS, WEIGHT_USER};
use crate::error::CefError;

/// One of the five fixed context slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentName {
    System,
    User,
    History,
    Rag,
    Tools,
}

impl ComponentName {
    pub const ALL: [ComponentName; 5] = [
        ComponentName::System,
        ComponentName::User,
        ComponentName::History,
        ComponentName::Rag,
        ComponentName::Tools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentName::System => "system",
            ComponentName::User => "user",
            ComponentName::History => "history",
            ComponentName::Rag => "rag",
            ComponentName::Tools => "tools",
        }
    }

    /// Fixed aggregation weight. The five weights sum to 1.0.
    pub fn weight(self) -> f64 {
        match self {
            ComponentName::System => WEIGHT_SYSTEM,
            ComponentName::User => WEIGHT_USER,
            ComponentName::History => WEIGHT_HISTORY,
            ComponentName::Rag => WEIGHT_RAG,
            ComponentName::Tools => WEIGHT_TOOLS,
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentName {
    type Err = CefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| CefError::UnknownComponent(s.to_string()))
    }
}

/// A field value. Only text takes part in tokenization; counts ride along
/// as metadata and are skipped by every metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Count(usize),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Count(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<usize> for FieldValue {
    fn from(n: usize) -> Self {
        FieldValue::Count(n)
    }
}

/// Key/value map of context fields. Keys are free-form; the five component
/// names are the ones that carry aggregation weight.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextFields {
    entries: BTreeMap<String, FieldValue>,
}

impl ContextFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `insert`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn set_component(&mut self, name: ComponentName, text: impl Into<String>) {
        self.entries
            .insert(name.as_str().to_string(), FieldValue::Text(text.into()));
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// Value stored under a component name, if any.
    pub fn component(&self, name: ComponentName) -> Option<&FieldValue> {
        self.entries.get(name.as_str())
    }

    /// Every text value, regardless of key.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.values().filter_map(FieldValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ContextFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = ContextFields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}
