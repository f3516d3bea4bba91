pub mod ast;
pub mod cli;
pub mod codegen;
pub mod document;
pub mod evaluator;
pub mod fetch;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{Query, Step};
pub use codegen::Language;
pub use document::{Document, Selection, SelectorError};
pub use evaluator::{EvalError, EvalMode, Evaluator, Output, trim_space_and_newline};
pub use fetch::{FetchError, Source, load};
pub use lexer::{Lexer, parse_parts};
pub use output::{ContentKind, Presenter};
pub use parser::{ParseError, ParseMode, Parser, parse_query};
