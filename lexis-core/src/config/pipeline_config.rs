use serde::{Deserialize, Serialize};

/// What the pipeline does with a composed prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineMode {
    /// Send the prompt to the answering client.
    #[default]
    Answer,
    /// Return the prompt for manual inspection.
    PromptOnly,
}

/// Pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub mode: PipelineMode,
}
