use serde::{Deserialize, Serialize};

use super::Relevance;

/// A single user question. Lives for one pipeline submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    #[serde(default)]
    pub relevance: Relevance,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            relevance: Relevance::General,
        }
    }

    pub fn with_relevance(mut self, relevance: Relevance) -> Self {
        self.relevance = relevance;
        self
    }

    /// Whitespace-only text counts as empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
