use tracing::trace;

use crate::{
    ast::{Query, Step},
    document::{Selection, SelectorError},
};

/// One output event of a query run.
///
/// `Text` and `Html` each become one printed line. `Index` is the
/// `"<i>: "` prefix written before each `Each{...}` iteration, with no
/// line break after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// 1-based position of the node an `Each` body is about to run on
    Index(usize),
    /// Plain text: an attribute value or text content
    Text(String),
    /// Markup from `Html` or `OuterHtml`
    Html(String),
}

/// How evaluation treats recoverable failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvalMode {
    /// An invalid selector matches nothing
    #[default]
    Lenient,
    /// An invalid selector stops the run with an error
    Strict,
}

/// Errors that can occur during query evaluation (strict mode only).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    InvalidSelector(#[from] SelectorError),
}

/// The query evaluator.
///
/// Runs a parsed query against a selection and yields its output lazily.
/// Nothing is written anywhere; the caller decides what to do with the
/// events.
///
/// # Examples
///
/// ```
/// use gq::{Document, Evaluator, Output, parse_query};
///
/// let doc = Document::parse(r#"<a href="x">hi</a><a href="y">bye</a>"#);
/// let query = parse_query("Find a|Each{Attrib href}").unwrap();
///
/// let outputs: Vec<Output> = Evaluator::new()
///     .eval(&query, doc.root())
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(outputs, vec![
///     Output::Index(1),
///     Output::Text("x".to_string()),
///     Output::Index(2),
///     Output::Text("y".to_string()),
/// ]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    mode: EvalMode,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: EvalMode) -> Self {
        Evaluator { mode }
    }

    /// Lazily evaluate `query` starting from `selection`.
    pub fn eval<'q, 'a>(&self, query: &'q Query, selection: Selection<'a>) -> Outputs<'q, 'a> {
        Outputs {
            stack: vec![Work::Run {
                steps: &query.steps,
                selection,
            }],
            mode: self.mode,
        }
    }

    /// Evaluate eagerly, stopping at the first error.
    pub fn eval_all(&self, query: &Query, selection: Selection<'_>) -> Result<Vec<Output>, EvalError> {
        self.eval(query, selection).collect()
    }
}

enum Work<'q, 'a> {
    Run {
        steps: &'q [Step],
        selection: Selection<'a>,
    },
    Emit(Output),
}

/// Iterator over the output of a query run.
///
/// `Each` bodies are expanded onto an explicit work stack, so nested
/// iterations are produced in document order without recursion.
pub struct Outputs<'q, 'a> {
    stack: Vec<Work<'q, 'a>>,
    mode: EvalMode,
}

impl<'q, 'a> Outputs<'q, 'a> {
    /// Apply steps until one terminates the pipeline.
    fn run(&mut self, steps: &'q [Step], mut selection: Selection<'a>) -> Result<Option<Output>, EvalError> {
        for step in steps {
            trace!(%step, nodes = selection.len(), "step");
            match step {
                Step::Find(css) => {
                    selection = match self.mode {
                        EvalMode::Strict => selection.try_find(css)?,
                        EvalMode::Lenient => selection.find(css),
                    }
                }
                Step::First => selection = selection.first(),
                Step::Last => selection = selection.last(),
                Step::Parent => selection = selection.parent(),
                Step::Children => selection = selection.children(),
                Step::Each(body) => {
                    let nodes: Vec<Selection<'a>> = selection.iter().collect();
                    // Pushed in reverse so the first node is popped first
                    for (i, node) in nodes.into_iter().enumerate().rev() {
                        self.stack.push(Work::Run {
                            steps: &body.steps,
                            selection: node,
                        });
                        self.stack.push(Work::Emit(Output::Index(i + 1)));
                    }
                    return Ok(None);
                }
                Step::Attrib(name) => {
                    return Ok(selection.attr(name).map(|value| Output::Text(value.to_string())));
                }
                Step::Text => return Ok(Some(Output::Text(selection.text()))),
                Step::Html => {
                    let html = selection.inner_html();
                    return Ok(Some(Output::Html(trim_space_and_newline(&html).to_string())));
                }
                Step::OuterHtml => {
                    let html = selection.outer_html();
                    return Ok(Some(Output::Html(trim_space_and_newline(&html).to_string())));
                }
            }
        }

        Ok(None)
    }
}

impl Iterator for Outputs<'_, '_> {
    type Item = Result<Output, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(work) = self.stack.pop() {
            match work {
                Work::Emit(output) => return Some(Ok(output)),
                Work::Run { steps, selection } => match self.run(steps, selection) {
                    Ok(Some(output)) => return Some(Ok(output)),
                    Ok(None) => {}
                    Err(e) => {
                        self.stack.clear();
                        return Some(Err(e));
                    }
                },
            }
        }
        None
    }
}

/// Trim spaces and newlines (only those) from both ends.
pub fn trim_space_and_newline(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\n')
}
