//! Execute gq queries or generate code for them

use std::io::Write;

use tracing::debug;

use super::CliError;
use crate::{
    Document, Evaluator, Presenter,
    ast::Query,
    codegen::{self, Language, PLACEHOLDER_LOCATION},
    evaluator::EvalMode,
    fetch::{self, Source},
    parser::{ParseMode, parse_query_with},
};

/// Options for one gq invocation
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// The query to run
    pub query: String,
    /// Where the document comes from
    pub source: Option<Source>,
    /// Print generated code instead of running the query
    pub gencode: bool,
    /// Target language for generated code
    pub language: Language,
    /// Fail on unknown steps, unbalanced braces and invalid selectors
    pub strict: bool,
}

impl RunOptions {
    fn parse_mode(&self) -> ParseMode {
        if self.strict { ParseMode::Strict } else { ParseMode::Lenient }
    }

    fn eval_mode(&self) -> EvalMode {
        if self.strict { EvalMode::Strict } else { EvalMode::Lenient }
    }
}

/// Run the query, or generate code for it, writing everything to `out`.
pub fn execute_run<W: Write>(options: &RunOptions, presenter: &Presenter, out: &mut W) -> Result<(), CliError> {
    let query = parse_query_with(&options.query, options.parse_mode())?;
    debug!(%query, steps = query.steps.len(), "parsed query");

    if options.gencode {
        let location = match &options.source {
            Some(Source::Stdin) | None => PLACEHOLDER_LOCATION.to_string(),
            Some(source) => source.to_string(),
        };
        let code = codegen::generate(&query, &location, options.language);
        presenter.write_code(out, &code, options.language)?;
        return Ok(());
    }

    let source = options.source.as_ref().ok_or(CliError::NoInput)?;
    let document = fetch::load_source(source)?;
    run_query(&document, &query, options.eval_mode(), presenter, out)
}

/// Evaluate a parsed query against a document and write its output.
///
/// Output is written as it is produced; a strict-mode error stops the run
/// after whatever was already written.
pub fn run_query<W: Write>(
    document: &Document,
    query: &Query,
    mode: EvalMode,
    presenter: &Presenter,
    out: &mut W,
) -> Result<(), CliError> {
    for output in Evaluator::with_mode(mode).eval(query, document.root()) {
        presenter.write_output(out, &output?)?;
    }
    out.flush()?;
    Ok(())
}
