use serde::{Deserialize, Serialize};

/// Result of the answering step as seen by the caller.
///
/// `Unavailable` covers transport failures and empty model responses alike,
/// so the surface can render "no answer" without treating it as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Answered(String),
    Unavailable { reason: String },
}

impl AnswerOutcome {
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Answered(text) => Some(text),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }
}
