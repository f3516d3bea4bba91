//! HTML pretty-printing.
//!
//! Markup is split into tags, text, comments and doctypes with a small
//! scanner, then re-emitted one node per line at two spaces per nesting
//! level. An element holding nothing but one short text run is condensed
//! onto a single line:
//!
//! ```
//! use gq::output::format_html;
//!
//! let html = "<ul><li>one</li>\n   <li>two\n   </li></ul>";
//! assert_eq!(format_html(html), "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>");
//! ```

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Longest text run kept on the same line as its tags.
const CONDENSE_LIMIT: usize = 80;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Markup {
    Doctype(String),
    Comment(String),
    Open {
        name: String,
        raw: String,
        self_closing: bool,
    },
    Close {
        name: String,
        raw: String,
    },
    Text(String),
    /// Body of a `script` or `style` element
    RawText(String),
}

pub(crate) struct MarkupLexer {
    input: Vec<char>,
    position: usize,
    raw_text_end: Option<String>,
}

impl MarkupLexer {
    pub(crate) fn new(input: &str) -> Self {
        MarkupLexer {
            input: input.chars().collect(),
            position: 0,
            raw_text_end: None,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn starts_with(&self, s: &str) -> bool {
        s.chars()
            .enumerate()
            .all(|(i, c)| self.peek_char(i).is_some_and(|p| p.eq_ignore_ascii_case(&c)))
    }

    fn take_until(&mut self, terminator: &str) -> String {
        let mut result = String::new();
        while self.current_char().is_some() {
            if self.starts_with(terminator) {
                for _ in terminator.chars() {
                    result.push(self.input[self.position]);
                    self.position += 1;
                }
                return result;
            }
            result.push(self.input[self.position]);
            self.position += 1;
        }
        result
    }

    /// Read a tag up to its closing `>`, skipping over quoted values.
    fn read_tag(&mut self) -> String {
        let mut result = String::new();
        let mut quote = None;
        while let Some(ch) = self.current_char() {
            result.push(ch);
            self.position += 1;
            match (quote, ch) {
                (None, '"' | '\'') => quote = Some(ch),
                (Some(q), c) if c == q => quote = None,
                (None, '>') => break,
                _ => {}
            }
        }
        result
    }

    fn read_text(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '<' && self.peek_char(1).is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!') {
                break;
            }
            result.push(ch);
            self.position += 1;
        }
        result
    }

    pub(crate) fn next_markup(&mut self) -> Option<Markup> {
        self.current_char()?;

        if let Some(name) = self.raw_text_end.take() {
            let close = format!("</{}", name);
            let mut body = String::new();
            while self.current_char().is_some() && !self.starts_with(&close) {
                body.push(self.input[self.position]);
                self.position += 1;
            }
            if !body.is_empty() {
                return Some(Markup::RawText(body));
            }
        }

        if self.starts_with("<!--") {
            return Some(Markup::Comment(self.take_until("-->")));
        }
        if self.starts_with("<!") {
            return Some(Markup::Doctype(self.read_tag()));
        }
        if self.starts_with("</") {
            let raw = self.read_tag();
            let name = tag_name(&raw[2..]);
            return Some(Markup::Close { name, raw });
        }
        if self.current_char() == Some('<') && self.peek_char(1).is_some_and(|c| c.is_ascii_alphabetic()) {
            let raw = self.read_tag();
            let name = tag_name(&raw[1..]);
            let self_closing = raw.ends_with("/>");
            if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                self.raw_text_end = Some(name.clone());
            }
            return Some(Markup::Open {
                name,
                raw,
                self_closing,
            });
        }

        Some(Markup::Text(self.read_text()))
    }
}

impl Iterator for MarkupLexer {
    type Item = Markup;

    fn next(&mut self) -> Option<Markup> {
        self.next_markup()
    }
}

fn tag_name(rest: &str) -> String {
    rest.chars()
        .take_while(|c| !c.is_whitespace() && *c != '/' && *c != '>')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn collapse(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Re-indent markup, one node per line.
pub fn format_html(source: &str) -> String {
    let tokens: Vec<Markup> = MarkupLexer::new(source).collect();
    let mut lines: Vec<String> = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        let indent = "  ".repeat(depth);
        match &tokens[i] {
            Markup::Open {
                name,
                raw,
                self_closing,
            } => {
                if *self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
                    lines.push(format!("{}{}", indent, raw));
                } else if let Some((inline, consumed)) = condensed(&tokens[i..], name, raw) {
                    lines.push(format!("{}{}", indent, inline));
                    i += consumed;
                    continue;
                } else {
                    lines.push(format!("{}{}", indent, raw));
                    depth += 1;
                }
            }
            Markup::Close { raw, .. } => {
                depth = depth.saturating_sub(1);
                lines.push(format!("{}{}", "  ".repeat(depth), raw));
            }
            Markup::Text(text) => {
                let text = collapse(text);
                if !text.is_empty() {
                    lines.push(format!("{}{}", indent, text));
                }
            }
            Markup::RawText(body) => {
                for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
                    lines.push(format!("{}{}", indent, line));
                }
            }
            Markup::Comment(raw) | Markup::Doctype(raw) => lines.push(format!("{}{}", indent, raw.trim())),
        }
        i += 1;
    }

    lines.join("\n")
}

/// `<tag>short text</tag>` or `<tag></tag>` as one line, with the number of
/// tokens it spans.
fn condensed(tokens: &[Markup], name: &str, raw: &str) -> Option<(String, usize)> {
    match tokens.get(1..3) {
        Some([Markup::Text(text), Markup::Close { name: close, raw: close_raw }]) if close == name => {
            let text = collapse(text);
            (text.chars().count() <= CONDENSE_LIMIT).then(|| (format!("{}{}{}", raw, text, close_raw), 3))
        }
        _ => match tokens.get(1) {
            Some(Markup::Close { name: close, raw: close_raw }) if close == name => {
                Some((format!("{}{}", raw, close_raw), 2))
            }
            _ => None,
        },
    }
}

/// Trim every line and drop blank ones.
pub fn format_text(source: &str) -> String {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanner_splits_tags_text_and_comments() {
        let tokens: Vec<Markup> = MarkupLexer::new("<!DOCTYPE html><p class=\"a>b\">hi<!-- c --></p>").collect();
        assert_eq!(
            tokens,
            vec![
                Markup::Doctype("<!DOCTYPE html>".to_string()),
                Markup::Open {
                    name: "p".to_string(),
                    raw: "<p class=\"a>b\">".to_string(),
                    self_closing: false,
                },
                Markup::Text("hi".to_string()),
                Markup::Comment("<!-- c -->".to_string()),
                Markup::Close {
                    name: "p".to_string(),
                    raw: "</p>".to_string(),
                },
            ]
        );
    }

    #[test]
    fn script_bodies_are_not_parsed_as_markup() {
        let tokens: Vec<Markup> = MarkupLexer::new("<script>if (a < b) {}</script>").collect();
        assert_eq!(tokens[1], Markup::RawText("if (a < b) {}".to_string()));
        assert!(matches!(&tokens[2], Markup::Close { name, .. } if name == "script"));
    }

    #[test]
    fn lone_angle_bracket_is_text() {
        let tokens: Vec<Markup> = MarkupLexer::new("a < b").collect();
        assert_eq!(tokens, vec![Markup::Text("a < b".to_string())]);
    }
}
