//! Text surface over a [`Pipeline`]: one question in, one rendered reply out.

use std::io::{self, BufRead, Write};

use lexis_core::models::{AnswerOutcome, Query, Relevance};
use lexis_pipeline::{Pipeline, PipelineOutcome};
use tracing::error;

pub const WELCOME: &str = "Willkommen bei ChatG-TG!

Diese Anwendung ermöglicht es Ihnen, rechtliche Anfragen im Zusammenhang mit dem \
Thurgauer Lehrpersonalrecht zu stellen und auf Basis relevanter Gesetzestexte \
AI-generierte Antworten zu erhalten.

So funktioniert's:
1. Geben Sie Ihre rechtliche Frage ein und bestätigen Sie mit Enter.
2. Die Anwendung analysiert Ihre Frage und findet relevante Gesetzesartikel.
3. Sie erhalten eine AI-generierte Antwort basierend auf den gefundenen Artikeln.

Beenden mit Ctrl-D.";

pub const INPUT_LABEL: &str = "Ihre Frage zum Thurgauer Lehrpersonalrecht: ";
pub const EMPTY_QUERY_WARNING: &str = "Bitte geben Sie eine Frage ein.";
pub const ANSWER_PREFIX: &str = "Antwort basierend auf der Rechtsstellungsverordnung: ";
pub const NO_ANSWER: &str = "Keine Antwort verfügbar.";

pub struct Session<'a, W: Write> {
    pipeline: Pipeline<'a>,
    relevance: Relevance,
    out: W,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(pipeline: Pipeline<'a>, relevance: Relevance, out: W) -> Self {
        Self {
            pipeline,
            relevance,
            out,
        }
    }

    /// Run one question and print the result. Pipeline errors are printed,
    /// not returned; only output failures end the session.
    pub fn handle_line(&mut self, line: &str) -> io::Result<()> {
        let query = Query::new(line.trim()).with_relevance(self.relevance);
        match self.pipeline.submit(&query) {
            Ok(PipelineOutcome::EmptyQuery) => writeln!(self.out, "{EMPTY_QUERY_WARNING}"),
            Ok(PipelineOutcome::Prompt { prompt, .. }) => writeln!(self.out, "{prompt}"),
            Ok(PipelineOutcome::Answer { outcome, .. }) => match outcome {
                AnswerOutcome::Answered(text) => writeln!(self.out, "{ANSWER_PREFIX}{text}"),
                AnswerOutcome::Unavailable { .. } => writeln!(self.out, "{NO_ANSWER}"),
            },
            Err(e) => {
                error!(error = %e, "query failed");
                writeln!(self.out, "Fehler: {e}")
            }
        }
    }

    /// Read questions line by line until EOF.
    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        write!(self.out, "{INPUT_LABEL}")?;
        self.out.flush()?;
        for line in input.lines() {
            self.handle_line(&line?)?;
            write!(self.out, "\n{INPUT_LABEL}")?;
            self.out.flush()?;
        }
        writeln!(self.out)
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}
