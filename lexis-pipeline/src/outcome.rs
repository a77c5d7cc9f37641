use lexis_core::models::{AnswerOutcome, RankedSection};

/// Result of one [`Pipeline::submit`](crate::Pipeline::submit).
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Whitespace-only input. Nothing was called.
    EmptyQuery,
    /// Prompt-only mode: the composed prompt, not sent anywhere.
    Prompt {
        prompt: String,
        ranked: Vec<RankedSection>,
    },
    Answer {
        outcome: AnswerOutcome,
        prompt: String,
        ranked: Vec<RankedSection>,
    },
}

impl PipelineOutcome {
    pub fn prompt(&self) -> Option<&str> {
        match self {
            Self::EmptyQuery => None,
            Self::Prompt { prompt, .. } | Self::Answer { prompt, .. } => Some(prompt),
        }
    }

    pub fn ranked(&self) -> &[RankedSection] {
        match self {
            Self::EmptyQuery => &[],
            Self::Prompt { ranked, .. } | Self::Answer { ranked, .. } => ranked,
        }
    }
}
