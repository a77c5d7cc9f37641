//! `lexis`: ask questions about a statute corpus from the terminal.

mod cli;
mod observability;
mod session;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use lexis_answer::create_client;
use lexis_core::config::PipelineMode;
use lexis_embeddings::EmbeddingEngine;
use lexis_pipeline::{AppContext, Pipeline};
use tracing::info;

use crate::cli::Cli;
use crate::session::{Session, WELCOME};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = cli.load_config().context("failed to load configuration")?;
    observability::init_tracing(&config.observability);
    let mode = cli.mode(&config);

    let context = AppContext::load(config).context("failed to load corpus")?;
    info!(sections = context.corpus.len(), mode = ?mode, "lexis ready");

    let embedding_key = std::env::var(&context.config.embedding.api_key_env).ok();
    let embedder = EmbeddingEngine::from_config(&context.config.embedding, embedding_key.as_deref())
        .context("failed to set up the embedding provider")?;

    let mut pipeline = Pipeline::new(&context, Box::new(embedder)).with_mode(mode);
    if mode == PipelineMode::Answer {
        let answer_key = std::env::var(&context.config.answer.api_key_env).ok();
        let client = create_client(&context.config.answer, answer_key.as_deref())
            .context("failed to set up the answering client")?;
        pipeline = pipeline.with_answerer(client);
    }

    if cli.query.is_none() {
        println!("{WELCOME}\n");
    }

    let mut session = Session::new(pipeline, cli.relevance, io::stdout().lock());
    match cli.query.as_deref() {
        Some(question) => session.handle_line(question)?,
        None => session.run_interactive(io::stdin().lock())?,
    }
    Ok(())
}
