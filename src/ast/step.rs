use crate::ast::Query;

/// A single pipeline step.
///
/// Steps are produced by the parser from raw tokens. The selector and
/// attribute name are kept verbatim; their syntax is checked only when the
/// step is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Descendants matching a CSS selector
    ///
    /// # Example
    /// ```text
    /// Find div.content > a
    /// ```
    Find(String),

    /// Run a sub-query once per node of the selection
    ///
    /// # Example
    /// ```text
    /// Each{Find span|Text}
    /// ```
    Each(Query),

    /// First node of the selection
    First,

    /// Last node of the selection
    Last,

    /// Element parents of the selection
    Parent,

    /// Element children of the selection
    Children,

    /// Value of an attribute on the first node
    ///
    /// # Example
    /// ```text
    /// Attrib href
    /// ```
    Attrib(String),

    /// Concatenated text content
    Text,

    /// Inner HTML of the first node
    Html,

    /// Outer HTML of the first node
    OuterHtml,
}

impl Step {
    /// Whether the step ends its pipeline.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Step::Each(_) | Step::Attrib(_) | Step::Text | Step::Html | Step::OuterHtml
        )
    }

    /// Keyword as written in a query.
    pub fn keyword(&self) -> &'static str {
        match self {
            Step::Find(_) => "Find",
            Step::Each(_) => "Each",
            Step::First => "First",
            Step::Last => "Last",
            Step::Parent => "Parent",
            Step::Children => "Children",
            Step::Attrib(_) => "Attrib",
            Step::Text => "Text",
            Step::Html => "Html",
            Step::OuterHtml => "OuterHtml",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Find(selector) => write!(f, "Find {}", selector),
            Step::Each(query) => write!(f, "Each{{{}}}", query),
            Step::Attrib(name) => write!(f, "Attrib {}", name),
            other => f.write_str(other.keyword()),
        }
    }
}
