use tracing::debug;

use crate::{
    ast::{Query, Step},
    lexer::Lexer,
};

/// How the parser treats tokens it cannot make sense of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip unknown steps and accept unbalanced braces on a best-effort basis
    #[default]
    Lenient,
    /// Reject unknown steps and unbalanced braces
    Strict,
}

/// Errors produced in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token matches none of the known steps
    #[error("Unknown step '{token}'")]
    UnknownStep { token: String },

    /// `{` and `}` do not pair up
    #[error("Unbalanced braces in '{query}'")]
    UnbalancedBraces { query: String },
}

pub struct Parser {
    lexer: Lexer,
    mode: ParseMode,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_mode(lexer, ParseMode::default())
    }

    pub fn with_mode(lexer: Lexer, mode: ParseMode) -> Self {
        Parser { lexer, mode }
    }

    /// Parse every remaining token into a query.
    pub fn parse_query(&mut self) -> Result<Query, ParseError> {
        let mut steps = Vec::new();

        while let Some(token) = self.lexer.next_token() {
            if let Some(step) = self.parse_step(&token)? {
                steps.push(step);
            }
        }

        if self.mode == ParseMode::Strict && self.lexer.depth() != 0 {
            return Err(ParseError::UnbalancedBraces {
                query: self.lexer.input(),
            });
        }

        Ok(Query::new(steps))
    }

    /// Match one raw token against the step keywords.
    ///
    /// Order matters: prefixed forms are tried in the same sequence the
    /// exact keywords are listed in, and the first match wins.
    fn parse_step(&self, token: &str) -> Result<Option<Step>, ParseError> {
        if let Some(selector) = token.strip_prefix("Find ") {
            return Ok(Some(Step::Find(selector.to_string())));
        }

        if let Some(rest) = token.strip_prefix("Each{") {
            let body = rest.strip_suffix('}').unwrap_or(rest);
            let mut inner = Parser::with_mode(Lexer::new(body), self.mode);
            return Ok(Some(Step::Each(inner.parse_query()?)));
        }

        let step = match token {
            "First" => Step::First,
            "Last" => Step::Last,
            "Parent" => Step::Parent,
            "Children" => Step::Children,
            "Text" => Step::Text,
            "Html" => Step::Html,
            "OuterHtml" => Step::OuterHtml,
            _ => match token.strip_prefix("Attrib ") {
                Some(name) => Step::Attrib(name.to_string()),
                None => return self.unknown(token),
            },
        };

        Ok(Some(step))
    }

    fn unknown(&self, token: &str) -> Result<Option<Step>, ParseError> {
        match self.mode {
            ParseMode::Strict => Err(ParseError::UnknownStep {
                token: token.to_string(),
            }),
            ParseMode::Lenient => {
                debug!(token, "skipping unknown step");
                Ok(None)
            }
        }
    }
}

/// Parse a query leniently.
pub fn parse_query(query: &str) -> Result<Query, ParseError> {
    Parser::new(Lexer::new(query)).parse_query()
}

/// Parse a query in the given mode.
pub fn parse_query_with(query: &str, mode: ParseMode) -> Result<Query, ParseError> {
    Parser::with_mode(Lexer::new(query), mode).parse_query()
}
