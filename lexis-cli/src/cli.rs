use std::path::{Path, PathBuf};

use clap::Parser;
use lexis_core::config::{LexisConfig, PipelineMode};
use lexis_core::errors::LexisResult;
use lexis_core::models::Relevance;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "lexis.toml";

#[derive(Parser, Debug)]
#[command(
    name = "lexis",
    version,
    about = "Answer questions about statutes using the most similar law sections"
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, env = "LEXIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Relevance category: assembly, mail-voting, or none
    #[arg(long, default_value = "none")]
    pub relevance: Relevance,

    /// Print the composed prompt instead of asking the model
    #[arg(long, default_value_t = false)]
    pub prompt_only: bool,

    /// Answer a single question and exit
    #[arg(long)]
    pub query: Option<String>,
}

impl Cli {
    /// Explicit `--config`, else `lexis.toml` if present, else defaults.
    pub fn load_config(&self) -> LexisResult<LexisConfig> {
        match &self.config {
            Some(path) => LexisConfig::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                LexisConfig::load(DEFAULT_CONFIG_FILE)
            }
            None => Ok(LexisConfig::default()),
        }
    }

    pub fn mode(&self, config: &LexisConfig) -> PipelineMode {
        if self.prompt_only {
            PipelineMode::PromptOnly
        } else {
            config.pipeline.mode
        }
    }
}
