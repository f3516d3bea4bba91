//! CLI support for gq
//!
//! Provides programmatic access to the gq command so a whole run can be
//! driven with an in-memory writer.

mod docs;
mod run;

pub use docs::{DocTopic, USAGE, get_doc_topic, get_docs_overview};
pub use run::{RunOptions, execute_run, run_query};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    #[error(transparent)]
    Fetch(#[from] crate::FetchError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No document source was given
    #[error("No input provided. Use --file, --url, or pipe HTML to stdin.")]
    NoInput,

    #[error("Unknown topic: '{0}'\nRun 'gq --docs' to see available topics.")]
    UnknownTopic(String),
}
