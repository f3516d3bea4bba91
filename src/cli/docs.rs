//! Query language reference for the gq CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Syntax,
    Traversal,
    Output,
    Each,
    Codegen,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "traversal" | "find" | "steps" => Some(Self::Traversal),
            "output" | "terminal" => Some(Self::Output),
            "each" | "loops" => Some(Self::Each),
            "codegen" | "gencode" | "code" => Some(Self::Codegen),
            _ => None,
        }
    }
}

/// Printed when the required flags are missing
pub const USAGE: &str = r#"Usage:
  gq --file <html_file> --query <query, e.g. 'Find a|Each{Attrib href}'>
  gq --url <html_url> --query <query>
  cat page.html | gq --query <query>

The optional --gencode flag prints a program that runs the query instead:
  gq --file <html_file> --query <query> --gencode [--lang go|rust]

Run 'gq --docs' for the query language reference."#;

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"GQ DOCUMENTATION

gq extracts data from HTML with a pipeline of steps separated by '|'. The
pipeline starts at the document; traversal steps narrow the selection and
one output step ends the pipeline.

  Find a|Each{Attrib href}

DOCUMENTATION TOPICS

  syntax       Grammar, separators and braces
  traversal    Find, First, Last, Parent, Children
  output       Attrib, Text, Html, OuterHtml
  each         Per-node sub-queries with Each{...}
  codegen      Generating Go or Rust programs with --gencode

QUICK REFERENCE

  Find <css>       Descendants matching a CSS selector
  First / Last     First / last node
  Parent           Parent elements
  Children         Child elements
  Each{<query>}    Run <query> on every node, numbered from 1
  Attrib <name>    Attribute of the first node
  Text             Text of all nodes
  Html             Inner HTML of the first node
  OuterHtml        Outer HTML of the first node

Run 'gq --doc <topic>' for detailed documentation.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Syntax) => Ok(SYNTAX_DOC),
        Some(DocTopic::Traversal) => Ok(TRAVERSAL_DOC),
        Some(DocTopic::Output) => Ok(OUTPUT_DOC),
        Some(DocTopic::Each) => Ok(EACH_DOC),
        Some(DocTopic::Codegen) => Ok(CODEGEN_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Pipelines

GRAMMAR
  query := step ('|' step)*
  step  := 'Find ' selector | 'Each{' query '}' | 'First' | 'Last'
         | 'Parent' | 'Children' | 'Attrib ' name | 'Text' | 'Html'
         | 'OuterHtml'

SEPARATORS
  '|' separates steps. Inside braces it belongs to the sub-query:

    Find li|Each{Find a|Attrib href}
    => steps: "Find li", "Each{Find a|Attrib href}"

  Empty steps are ignored: 'Find a||Text' is 'Find a|Text'.

KEYWORDS
  Keywords are case-sensitive. 'Find' and 'Attrib' take everything after
  the first space verbatim, spaces included:

    Find div.post > h2

MALFORMED QUERIES
  By default unknown steps are skipped and unbalanced braces are read on a
  best-effort basis. With --strict both are errors.
"#;

const TRAVERSAL_DOC: &str = r#"TRAVERSAL - Narrowing the selection

  Find <css>
    All descendants of the current nodes that match the CSS selector.
    With --strict an invalid selector is an error; otherwise it matches
    nothing.

  First, Last
    The first or last node of the selection.

  Parent
    The parent element of every node, without duplicates.

  Children
    The child elements of every node. Text and comments are skipped.

EXAMPLE
  Find table.stats|Find tr|Last|Children|Text
"#;

const OUTPUT_DOC: &str = r#"OUTPUT - Ending the pipeline

  Attrib <name>
    Value of the attribute on the first node. Prints nothing when the
    attribute is missing.

  Text
    Text content of every node, concatenated. An empty selection prints
    an empty line.

  Html
    Markup inside the first node.

  OuterHtml
    Markup of the first node, its own tag included.

  Steps after an output step are ignored. A query without an output step
  prints nothing.

FORMATTING
  Markup is re-indented and text is trimmed line by line. Use --raw to
  print exactly what was extracted, and --color to control highlighting.
"#;

const EACH_DOC: &str = r#"EACH - Per-node sub-queries

  Each{<query>}
    Runs <query> once for every node of the selection, in document order,
    starting from that single node. Each run is prefixed with its 1-based
    position.

EXAMPLE
  Input:  <a href="x">hi</a><a href="y">bye</a>
  Query:  Find a|Each{Attrib href}
  Output:
    1: x
    2: y

  Each blocks nest:
    Find ul|Each{Find li|Each{Text}}
"#;

const CODEGEN_DOC: &str = r#"CODEGEN - Generating programs

  gq --file page.html --query 'Find a|Each{Attrib href}' --gencode

  prints a complete program that loads the same document and prints the
  same result.

LANGUAGES
  --lang go      Go using github.com/PuerkitoBio/goquery (default)
  --lang rust    Rust using the gq library

  A pipeline with no output step prints the final selection value.
"#;
