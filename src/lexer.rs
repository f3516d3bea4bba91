/// Splits a query into raw step tokens.
///
/// Pipes separate steps only at brace depth 0, so the body of
/// `Each{Find b|Text}` stays inside a single token. A token also ends right
/// after the `}` that brings the depth back to 0.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    depth: isize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            depth: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Brace depth after the characters consumed so far.
    ///
    /// Non-zero once the input is exhausted means the braces were unbalanced.
    /// A stray `}` makes it negative.
    pub fn depth(&self) -> isize {
        self.depth
    }

    /// The query being tokenized.
    pub fn input(&self) -> String {
        self.input.iter().collect()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Next raw token, or `None` at end of input.
    ///
    /// Empty tokens (as in `a||b` or a leading `|`) are never returned.
    pub fn next_token(&mut self) -> Option<String> {
        let mut current = String::new();

        while let Some(ch) = self.current_char() {
            self.advance();
            match ch {
                '{' => {
                    self.depth += 1;
                    current.push(ch);
                }
                '}' => {
                    self.depth -= 1;
                    current.push(ch);
                    if self.depth == 0 {
                        return Some(current);
                    }
                }
                '|' if self.depth == 0 => {
                    if !current.is_empty() {
                        return Some(current);
                    }
                }
                _ => current.push(ch),
            }
        }

        if current.is_empty() {
            None
        } else {
            Some(current)
        }
    }
}

impl Iterator for Lexer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token()
    }
}

/// Tokenize a whole query.
pub fn parse_parts(query: &str) -> Vec<String> {
    Lexer::new(query).collect()
}

#[test]
fn test_nested_pipes_stay_in_brace_token() {
    assert_eq!(
        parse_parts("Find a|Each{Find b|Text}"),
        vec!["Find a".to_string(), "Each{Find b|Text}".to_string()]
    );
}

#[test]
fn test_empty_tokens_dropped() {
    assert_eq!(
        parse_parts("Find a||Text"),
        vec!["Find a".to_string(), "Text".to_string()]
    );
    assert_eq!(parse_parts("|Text|"), vec!["Text".to_string()]);
}

#[test]
fn test_depth_tracks_unbalanced_input() {
    let mut lexer = Lexer::new("Each{Text");
    assert_eq!(lexer.next_token(), Some("Each{Text".to_string()));
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.depth(), 1);

    let mut lexer = Lexer::new("Text}|Html");
    assert_eq!(lexer.next_token(), Some("Text}|Html".to_string()));
    assert_eq!(lexer.depth(), -1);
}
