//! Markup optimizer
//!
//! A single bottom-up pass that lowers parsed content into the element
//! sequence codegen consumes. Comment and text nodes never carry icon
//! geometry and are always dropped; with pruning enabled, containers
//! left with no children and no attributes after normalization are
//! dropped too. Children are processed before their parent is evaluated
//! for emptiness, so one pass suffices.

use crate::svg::{Content, Element};

/// Element tags that are pure grouping wrappers: meaningless when left
/// with no attributes and no children.
const CONTAINER_TAGS: &[&str] = &["g", "defs", "clipPath", "mask", "svg"];

/// Lower a content sequence into elements, optionally pruning
/// redundant nodes.
pub fn optimize(contents: &[Content], prune: bool) -> Vec<Element> {
    contents
        .iter()
        .filter_map(|content| match content {
            Content::Element(el) => optimize_element(el, prune),
            Content::Text(_) | Content::Comment(_) => None,
        })
        .collect()
}

fn optimize_element(element: &Element, prune: bool) -> Option<Element> {
    let children: Vec<Content> = optimize(&element.children, prune)
        .into_iter()
        .map(Content::Element)
        .collect();

    if prune
        && children.is_empty()
        && element.attributes.is_empty()
        && CONTAINER_TAGS.contains(&element.name.as_str())
    {
        return None;
    }

    Some(Element {
        name: element.name.clone(),
        attributes: element.attributes.clone(),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::Parser;

    fn parse(input: &str) -> Vec<Content> {
        Parser::new(input.as_bytes()).parse().unwrap()
    }

    #[test]
    fn test_comments_removed() {
        let contents = parse("<!-- header --><path d='M0 0'/><!-- footer -->");
        let elements = optimize(&contents, true);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "path");
    }

    #[test]
    fn test_text_removed() {
        let contents = parse("<g>stray text<path d='M0 0'/></g>");
        let elements = optimize(&contents, true);
        assert_eq!(elements[0].children.len(), 1);
    }

    #[test]
    fn test_empty_container_pruned() {
        let contents = parse("<g><!-- only a comment --></g><path d='M0 0'/>");
        let elements = optimize(&contents, true);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "path");
    }

    #[test]
    fn test_nested_empty_containers_pruned_bottom_up() {
        let contents = parse("<g><g><g/></g></g>");
        assert!(optimize(&contents, true).is_empty());
    }

    #[test]
    fn test_container_with_attributes_kept() {
        let contents = parse(r#"<g transform="rotate(45)"/>"#);
        let elements = optimize(&contents, true);
        assert_eq!(elements.len(), 1);
    }

    #[test]
    fn test_empty_shape_not_pruned() {
        // an empty path is odd but not a grouping wrapper
        let contents = parse("<path/>");
        assert_eq!(optimize(&contents, true).len(), 1);
    }

    #[test]
    fn test_prune_disabled_keeps_empty_containers() {
        let contents = parse("<g></g><path d='M0 0'/>");
        let elements = optimize(&contents, false);
        assert_eq!(elements.len(), 2);
    }
}
