use std::fmt;

/// Where a submission currently is. Back at `Idle` once it returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PipelineState {
    #[default]
    Idle,
    AwaitingEmbedding,
    AwaitingAnswer,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::AwaitingEmbedding => "awaiting_embedding",
            Self::AwaitingAnswer => "awaiting_answer",
        })
    }
}
