//! SVG markup data model

use indexmap::IndexMap;

/// A markup element: tag name, ordered attributes, nested content.
///
/// Trees are never mutated in place; each pipeline stage produces a new
/// tree so stages stay independently testable.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }
}

/// One content node inside an element (or at the fragment top level)
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Content {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}
