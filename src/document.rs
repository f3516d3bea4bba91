//! Parsed HTML documents and node selections.
//!
//! A [`Selection`] is an ordered set of nodes from one [`Document`]. It
//! starts out as the document node itself; every traversal returns a new
//! selection of element nodes in document order, without duplicates.
//!
//! ```
//! use gq::Document;
//!
//! let doc = Document::parse(r#"<ul><li><a href="/a">A</a></li><li>B</li></ul>"#);
//! let items = doc.root().find("li");
//!
//! assert_eq!(items.len(), 2);
//! assert_eq!(items.find("a").attr("href"), Some("/a"));
//! assert_eq!(items.last().text(), "B");
//! ```

use std::collections::HashSet;
use std::fmt;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// A CSS selector that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid selector '{selector}': {reason}")]
pub struct SelectorError {
    pub selector: String,
    pub reason: String,
}

/// An owned, parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document. Malformed markup is repaired, never rejected.
    pub fn parse(source: &str) -> Self {
        Document {
            html: Html::parse_document(source),
        }
    }

    /// Selection holding just the document node.
    pub fn root(&self) -> Selection<'_> {
        Selection {
            html: &self.html,
            nodes: Nodes::Document,
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

#[derive(Clone)]
enum Nodes<'a> {
    Document,
    Elements(Vec<ElementRef<'a>>),
}

/// Ordered set of nodes within a document.
#[derive(Clone)]
pub struct Selection<'a> {
    html: &'a Html,
    nodes: Nodes<'a>,
}

impl<'a> Selection<'a> {
    fn elements(&self, elements: Vec<ElementRef<'a>>) -> Selection<'a> {
        Selection {
            html: self.html,
            nodes: Nodes::Elements(elements),
        }
    }

    /// Number of nodes in the selection.
    pub fn len(&self) -> usize {
        match &self.nodes {
            Nodes::Document => 1,
            Nodes::Elements(elements) => elements.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Descendants matching `css`. An invalid selector matches nothing.
    pub fn find(&self, css: &str) -> Selection<'a> {
        match self.try_find(css) {
            Ok(found) => found,
            Err(e) => {
                warn!("{}", e);
                self.elements(Vec::new())
            }
        }
    }

    /// Descendants matching `css`, failing on an invalid selector.
    pub fn try_find(&self, css: &str) -> Result<Selection<'a>, SelectorError> {
        let selector = Selector::parse(css).map_err(|e| SelectorError {
            selector: css.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.find_matching(&selector))
    }

    fn find_matching(&self, selector: &Selector) -> Selection<'a> {
        let found = match &self.nodes {
            // Tree order, not parse order: the parser may move nodes
            Nodes::Document => self
                .html
                .root_element()
                .descendants()
                .filter_map(ElementRef::wrap)
                .filter(|candidate| selector.matches(candidate))
                .collect(),
            Nodes::Elements(elements) => {
                let mut seen = HashSet::new();
                let mut found = Vec::new();
                for element in elements {
                    // descendants() starts with the node itself
                    for node in element.descendants().skip(1) {
                        if let Some(candidate) = ElementRef::wrap(node) {
                            if selector.matches(&candidate) && seen.insert((*candidate).id()) {
                                found.push(candidate);
                            }
                        }
                    }
                }
                found
            }
        };
        self.elements(found)
    }

    pub fn first(&self) -> Selection<'a> {
        match &self.nodes {
            Nodes::Document => self.clone(),
            Nodes::Elements(elements) => self.elements(elements.first().copied().into_iter().collect()),
        }
    }

    pub fn last(&self) -> Selection<'a> {
        match &self.nodes {
            Nodes::Document => self.clone(),
            Nodes::Elements(elements) => self.elements(elements.last().copied().into_iter().collect()),
        }
    }

    /// Element parents of every node. The document node has none.
    pub fn parent(&self) -> Selection<'a> {
        let Nodes::Elements(elements) = &self.nodes else {
            return self.elements(Vec::new());
        };

        let mut seen = HashSet::new();
        let parents = elements
            .iter()
            .filter_map(|element| element.parent().and_then(ElementRef::wrap))
            .filter(|parent| seen.insert((**parent).id()))
            .collect();
        self.elements(parents)
    }

    /// Element children of every node, skipping text and comments.
    pub fn children(&self) -> Selection<'a> {
        let children = match &self.nodes {
            Nodes::Document => vec![self.html.root_element()],
            Nodes::Elements(elements) => elements
                .iter()
                .flat_map(|element| element.children().filter_map(ElementRef::wrap))
                .collect(),
        };
        self.elements(children)
    }

    /// Attribute value on the first node, if it is an element and has one.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        match &self.nodes {
            Nodes::Document => None,
            Nodes::Elements(elements) => {
                let element = *elements.first()?;
                element.value().attr(name)
            }
        }
    }

    /// Text content of every node, concatenated.
    pub fn text(&self) -> String {
        match &self.nodes {
            Nodes::Document => self.html.root_element().text().collect(),
            Nodes::Elements(elements) => elements.iter().flat_map(|element| element.text()).collect(),
        }
    }

    /// Markup inside the first node. Empty for an empty selection.
    pub fn inner_html(&self) -> String {
        match &self.nodes {
            Nodes::Document => self.html.html(),
            Nodes::Elements(elements) => elements
                .first()
                .map(|element| element.inner_html())
                .unwrap_or_default(),
        }
    }

    /// Markup of the first node, tag included. Empty for an empty selection.
    pub fn outer_html(&self) -> String {
        match &self.nodes {
            Nodes::Document => self.html.html(),
            Nodes::Elements(elements) => elements
                .first()
                .map(|element| element.html())
                .unwrap_or_default(),
        }
    }

    /// One single-node selection per node, in order.
    pub fn iter(&self) -> impl Iterator<Item = Selection<'a>> + '_ {
        let singles: Vec<Selection<'a>> = match &self.nodes {
            Nodes::Document => vec![self.clone()],
            Nodes::Elements(elements) => elements
                .iter()
                .map(|element| self.elements(vec![*element]))
                .collect(),
        };
        singles.into_iter()
    }
}

impl fmt::Debug for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.nodes {
            Nodes::Document => f.write_str("Selection[#document]"),
            Nodes::Elements(elements) => {
                f.write_str("Selection")?;
                f.debug_list()
                    .entries(elements.iter().map(|element| Tag(element.value().name())))
                    .finish()
            }
        }
    }
}

struct Tag<'a>(&'a str);

impl fmt::Debug for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div id="outer"><div id="inner"><span>one</span></div><span>two</span></div>
        <p class="note">three</p>
    </body></html>"#;

    #[test]
    fn find_from_nested_context_has_no_duplicates() {
        let doc = Document::parse(PAGE);
        let spans = doc.root().find("div").find("span");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans.text(), "onetwo");
    }

    #[test]
    fn parent_of_document_is_empty() {
        let doc = Document::parse(PAGE);
        assert!(doc.root().parent().is_empty());
        assert_eq!(doc.root().find("html").parent().len(), 0);
    }

    #[test]
    fn parents_are_deduplicated() {
        let doc = Document::parse(PAGE);
        let parents = doc.root().find("#outer > *").parent();
        assert_eq!(parents.len(), 1);
        assert_eq!(parents.attr("id"), Some("outer"));
    }

    #[test]
    fn invalid_selector_is_reported_by_try_find() {
        let doc = Document::parse(PAGE);
        assert!(doc.root().try_find("div[").is_err());
        assert!(doc.root().find("div[").is_empty());
    }

    #[test]
    fn debug_lists_tag_names() {
        let doc = Document::parse(PAGE);
        let found = doc.root().find("p");
        assert_eq!(format!("{:?}", found), "Selection[<p>]");
    }
}
