//! Attribute normalizer
//!
//! Rewrites each element's attributes into the form the generated
//! component expects. Pure and total: unknown attributes pass through
//! unchanged, and a new tree is returned rather than mutating the input.

use indexmap::IndexMap;

use crate::config::AttributeCasing;
use crate::svg::{Content, Element};

/// Attributes the generated component supplies dynamically. Hard-coded
/// literals for these must never leak into generated source.
const DYNAMIC_ATTRS: &[&str] = &["class", "id", "stroke", "fill"];

/// Size-fixing attributes stripped from root-level shapes; sizing is a
/// component prop, not a per-shape literal.
const ROOT_SIZE_ATTRS: &[&str] = &["width", "height"];

/// Normalize one element and, recursively, its element children.
///
/// `depth` is 0 for a variant's top-level shapes.
pub fn normalize(element: &Element, depth: usize, casing: AttributeCasing) -> Element {
    let mut attributes = IndexMap::new();
    for (key, value) in &element.attributes {
        if DYNAMIC_ATTRS.contains(&key.as_str()) {
            continue;
        }
        if depth == 0 && ROOT_SIZE_ATTRS.contains(&key.as_str()) {
            continue;
        }
        let key = match casing {
            AttributeCasing::Camel => to_camel_case(key),
            AttributeCasing::Kebab => key.clone(),
        };
        attributes.insert(key, value.clone());
    }

    let children = element
        .children
        .iter()
        .map(|child| match child {
            Content::Element(el) => Content::Element(normalize(el, depth + 1, casing)),
            other => other.clone(),
        })
        .collect();

    Element {
        name: element.name.clone(),
        attributes,
        children,
    }
}

/// Rewrite a separator-delimited key into a single camelCase token
/// (`stroke-width` → `strokeWidth`).
fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '-' || ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::Parser;

    fn parse_one(input: &str) -> Element {
        let contents = Parser::new(input.as_bytes()).parse().unwrap();
        match contents.into_iter().next() {
            Some(Content::Element(el)) => el,
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_kebab_key_becomes_camel() {
        let el = parse_one(r#"<path stroke-width="2" stroke-linecap="round" d="M0 0"/>"#);
        let normalized = normalize(&el, 0, AttributeCasing::Camel);
        let keys: Vec<&String> = normalized.attributes.keys().collect();
        assert_eq!(keys, ["strokeWidth", "strokeLinecap", "d"]);
    }

    #[test]
    fn test_kebab_casing_passes_keys_through() {
        let el = parse_one(r#"<path stroke-width="2" d="M0 0"/>"#);
        let normalized = normalize(&el, 0, AttributeCasing::Kebab);
        assert!(normalized.attributes.contains_key("stroke-width"));
    }

    #[test]
    fn test_dynamic_attributes_stripped() {
        let el = parse_one(r##"<path class="icon" id="p1" stroke="#333" fill="#000" d="M0 0"/>"##);
        let normalized = normalize(&el, 0, AttributeCasing::Camel);
        for attr in ["class", "id", "stroke", "fill"] {
            assert!(
                !normalized.attributes.contains_key(attr),
                "{attr} should be stripped"
            );
        }
        assert!(normalized.attributes.contains_key("d"));
    }

    #[test]
    fn test_dynamic_attributes_stripped_at_depth() {
        let el = parse_one(r##"<g><path fill="#000" d="M0 0"/></g>"##);
        let normalized = normalize(&el, 0, AttributeCasing::Camel);
        let child = normalized.children[0].as_element().unwrap();
        assert!(!child.attributes.contains_key("fill"));
    }

    #[test]
    fn test_size_stripped_only_at_root() {
        let el = parse_one(r#"<g width="24" height="24"><rect width="4" height="4"/></g>"#);
        let normalized = normalize(&el, 0, AttributeCasing::Camel);
        assert!(!normalized.attributes.contains_key("width"));
        let rect = normalized.children[0].as_element().unwrap();
        assert_eq!(rect.attributes.get("width"), Some(&"4".to_string()));
    }

    #[test]
    fn test_unknown_attributes_pass_through() {
        let el = parse_one(r#"<path data-custom="x" d="M0 0"/>"#);
        let normalized = normalize(&el, 0, AttributeCasing::Camel);
        assert_eq!(normalized.attributes.get("dataCustom"), Some(&"x".to_string()));
    }

    #[test]
    fn test_input_not_mutated() {
        let el = parse_one(r##"<path fill="#000" d="M0 0"/>"##);
        let _ = normalize(&el, 0, AttributeCasing::Camel);
        assert!(el.attributes.contains_key("fill"));
    }
}
