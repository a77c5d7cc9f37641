use serde::{Deserialize, Serialize};

/// One addressable unit of statute text. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique key, e.g. `"§ 12 Abs. 1"`.
    pub id: String,
    /// Paragraphs in statute order.
    pub paragraphs: Vec<String>,
    /// Name of the governing law, when known.
    pub law: Option<String>,
    pub tags: Vec<String>,
}

impl Section {
    pub fn new(id: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            id: id.into(),
            paragraphs,
            law: None,
            tags: Vec::new(),
        }
    }

    pub fn with_law(mut self, law: impl Into<String>) -> Self {
        self.law = Some(law.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Paragraphs joined with single spaces.
    pub fn content(&self) -> String {
        self.paragraphs.join(" ")
    }

    /// Whether any tag contains `needle` as a substring.
    pub fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags.iter().any(|tag| tag.contains(needle))
    }
}
