//! Writing query results and generated code to a terminal or any writer.
//!
//! Extracted markup is pretty-printed and text is tidied before it is
//! written; with colour enabled both are highlighted by their content kind.
//!
//! # Examples
//!
//! ```
//! use gq::{Output, Presenter};
//!
//! let outputs = vec![
//!     Output::Index(1),
//!     Output::Text("x".to_string()),
//!     Output::Index(2),
//!     Output::Text("y".to_string()),
//! ];
//!
//! let mut buffer = Vec::new();
//! Presenter::plain().write_all(&mut buffer, &outputs).unwrap();
//! assert_eq!(String::from_utf8(buffer).unwrap(), "1: x\n2: y\n");
//! ```

mod highlight;
mod html;

use std::io::{self, Write};

use crate::{codegen::Language, evaluator::Output};

pub use highlight::highlight;
pub use html::{format_html, format_text};

/// What a piece of output contains, for formatting and highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Html,
    Go,
    Rust,
}

impl From<Language> for ContentKind {
    fn from(language: Language) -> Self {
        match language {
            Language::Go => ContentKind::Go,
            Language::Rust => ContentKind::Rust,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presenter {
    /// Emit ANSI colours
    pub color: bool,
    /// Pretty-print markup and tidy text
    pub pretty: bool,
}

impl Default for Presenter {
    fn default() -> Self {
        Presenter {
            color: false,
            pretty: true,
        }
    }
}

impl Presenter {
    pub fn new(color: bool, pretty: bool) -> Self {
        Presenter { color, pretty }
    }

    /// No colour and no reformatting: output exactly as extracted.
    pub fn plain() -> Self {
        Presenter::new(false, false)
    }

    /// Format and highlight `text` according to the settings.
    pub fn render(&self, text: &str, kind: ContentKind) -> String {
        let formatted = match kind {
            ContentKind::Html if self.pretty => format_html(text),
            ContentKind::Text if self.pretty => format_text(text),
            _ => text.to_string(),
        };

        if self.color {
            highlight(&formatted, kind)
        } else {
            formatted
        }
    }

    /// Write one event. Values end with a newline; index prefixes do not.
    pub fn write_output<W: Write>(&self, out: &mut W, output: &Output) -> io::Result<()> {
        match output {
            Output::Index(i) => write!(out, "{}: ", i),
            Output::Text(text) => writeln!(out, "{}", self.render(text, ContentKind::Text)),
            Output::Html(html) => writeln!(out, "{}", self.render(html, ContentKind::Html)),
        }
    }

    pub fn write_all<W: Write>(&self, out: &mut W, outputs: &[Output]) -> io::Result<()> {
        for output in outputs {
            self.write_output(out, output)?;
        }
        Ok(())
    }

    /// Write a generated program. Code is highlighted, never reformatted.
    pub fn write_code<W: Write>(&self, out: &mut W, code: &str, language: Language) -> io::Result<()> {
        let kind = ContentKind::from(language);
        let code = if self.color {
            highlight(code, kind)
        } else {
            code.to_string()
        };
        writeln!(out, "{}", code)
    }
}
