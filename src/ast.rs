//! # gq Query Language - Abstract Syntax Tree
//!
//! A query is a pipeline of steps separated by `|`. Each step either narrows
//! the current selection of DOM nodes or ends the pipeline by producing
//! output.
//!
//! ```text
//! Find a|Each{Attrib href}
//! ```
//!
//! This query selects every `<a>` element in the document and prints the
//! `href` attribute of each one, prefixed with its 1-based position.
//!
//! ## Submodules
//!
//! - **[step]** - The individual pipeline steps
//! - **[query]** - A parsed pipeline, possibly nested inside `Each{...}`
//!
//! ## Transforming steps
//!
//! `Find <selector>`, `First`, `Last`, `Parent` and `Children` replace the
//! current selection and pass it on to the next step.
//!
//! ## Terminal steps
//!
//! `Each{...}`, `Attrib <name>`, `Text`, `Html` and `OuterHtml` consume the
//! selection. Anything after a terminal step is ignored.
pub mod query;
pub mod step;

pub use query::Query;
pub use step::Step;
