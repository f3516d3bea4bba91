//! Source code generation for queries.
//!
//! The generator walks a parsed [`Query`] the same way the evaluator does,
//! but instead of running each step it writes the equivalent call. The
//! running selection is kept as an expression string that transforming
//! steps extend (`doc.Find("a").First()`); a terminal step turns it into a
//! print statement. If a pipeline has no terminal step the expression
//! itself is printed, so every branch prints exactly once.

pub mod go;
pub mod rust;

use std::{fmt, str::FromStr};

use crate::ast::{Query, Step};

/// Target language of the generated program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    /// Go, using goquery
    #[default]
    Go,
    /// Rust, using this crate
    Rust,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" | "golang" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            other => Err(format!("unknown language '{}' (expected 'go' or 'rust')", other)),
        }
    }
}

/// Location embedded in programs generated without a source.
pub const PLACEHOLDER_LOCATION: &str = "page.html";

/// Generate a complete program that loads `location` and runs `query`.
pub fn generate(query: &Query, location: &str, language: Language) -> String {
    match language {
        Language::Go => go::program(query, location),
        Language::Rust => rust::program(query, location),
    }
}

/// Generate only the statements for `query`, indented `depth` levels and
/// starting from the selection expression `selection`.
pub fn generate_query_code(query: &Query, selection: &str, depth: usize, language: Language) -> String {
    let mut out = String::new();
    match language {
        Language::Go => write_query(&go::Go, &mut out, query, selection.to_string(), depth, 0),
        Language::Rust => write_query(&rust::Rust, &mut out, query, selection.to_string(), depth, 0),
    }
    out
}

/// Per-language statement templates.
///
/// Methods return lines without base indentation; nested lines carry one
/// extra [`Emitter::indent`] of their own.
pub trait Emitter {
    /// One level of indentation.
    fn indent(&self) -> &'static str;

    /// Expression for `step` applied to `selection`. Only called for
    /// transforming steps.
    fn transform(&self, selection: &str, step: &Step) -> String;

    /// Loop header for `Each`, including the index prefix print.
    fn each_open(&self, selection: &str, index: &str, node: &str) -> Vec<String>;

    fn each_close(&self) -> Vec<String>;

    fn attrib(&self, selection: &str, name: &str) -> Vec<String>;

    fn text(&self, selection: &str) -> Vec<String>;

    /// Inner HTML when `outer` is false, outer HTML otherwise.
    fn html(&self, selection: &str, outer: bool) -> Vec<String>;

    /// Fallback print of a selection no terminal step consumed.
    fn print_selection(&self, selection: &str) -> Vec<String>;
}

/// Loop variable names for the `level`-th nested `Each`.
fn loop_vars(level: usize) -> (String, String) {
    if level == 0 {
        ("i".to_string(), "s".to_string())
    } else {
        (format!("i{}", level), format!("s{}", level))
    }
}

fn push_lines(out: &mut String, indent: &str, lines: Vec<String>) {
    for line in lines {
        out.push_str(indent);
        out.push_str(&line);
        out.push('\n');
    }
}

/// Write the statements for one (sub)query.
pub(crate) fn write_query<E: Emitter + ?Sized>(
    emitter: &E,
    out: &mut String,
    query: &Query,
    mut selection: String,
    depth: usize,
    level: usize,
) {
    let indent = emitter.indent().repeat(depth);

    for step in &query.steps {
        match step {
            Step::Find(_) | Step::First | Step::Last | Step::Parent | Step::Children => {
                selection = emitter.transform(&selection, step);
            }
            Step::Each(body) => {
                let (index, node) = loop_vars(level);
                push_lines(out, &indent, emitter.each_open(&selection, &index, &node));
                write_query(emitter, out, body, node, depth + 1, level + 1);
                push_lines(out, &indent, emitter.each_close());
                return;
            }
            Step::Attrib(name) => {
                push_lines(out, &indent, emitter.attrib(&selection, name));
                return;
            }
            Step::Text => {
                push_lines(out, &indent, emitter.text(&selection));
                return;
            }
            Step::Html => {
                push_lines(out, &indent, emitter.html(&selection, false));
                return;
            }
            Step::OuterHtml => {
                push_lines(out, &indent, emitter.html(&selection, true));
                return;
            }
        }
    }

    push_lines(out, &indent, emitter.print_selection(&selection));
}
