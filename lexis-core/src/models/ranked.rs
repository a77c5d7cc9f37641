use serde::{Deserialize, Serialize};

/// A section id with its cosine similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSection {
    pub id: String,
    pub score: f64,
}

impl RankedSection {
    pub fn new(id: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}
