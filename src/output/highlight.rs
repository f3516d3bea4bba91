//! Terminal syntax highlighting.

use std::sync::LazyLock;

use crossterm::style::{Color, Stylize};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;
use tracing::debug;

use super::ContentKind;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

static THEME: LazyLock<Theme> =
    LazyLock::new(|| ThemeSet::load_defaults().themes["base16-ocean.dark"].clone());

fn syntax_for(kind: ContentKind) -> Option<&'static SyntaxReference> {
    let token = match kind {
        ContentKind::Text => return None,
        ContentKind::Html => "html",
        ContentKind::Go => "go",
        ContentKind::Rust => "rs",
    };
    SYNTAX_SET.find_syntax_by_token(token)
}

/// Colour `source` for a terminal. Plain text is returned unchanged.
pub fn highlight(source: &str, kind: ContentKind) -> String {
    let Some(syntax) = syntax_for(kind) else {
        return source.to_string();
    };

    let mut highlighter = HighlightLines::new(syntax, &THEME);
    let mut out = String::with_capacity(source.len() * 2);

    for line in LinesWithEndings::from(source) {
        match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(regions) => {
                for (style, text) in regions {
                    let fg = style.foreground;
                    let color = Color::Rgb {
                        r: fg.r,
                        g: fg.g,
                        b: fg.b,
                    };
                    out.push_str(&text.with(color).to_string());
                }
            }
            Err(e) => {
                debug!(error = %e, "highlighting failed, writing line as is");
                out.push_str(line);
            }
        }
    }

    out
}
