//! Component renderer
//!
//! Serializes one icon's merged variant trees into a TSX component
//! module. Output is deterministic: attribute order follows the
//! normalized tree's insertion order and the template contains nothing
//! run-dependent, so the same input always yields byte-identical text.
//!
//! The generated component instantiates exactly one variant's node list
//! at render time (a runtime ternary on the `variant` prop); the other
//! variant's nodes never reach the DOM.

use std::fmt::Write;

use crate::error::{Error, ErrorKind, Result, Span};
use crate::name::IconName;
use crate::svg::Element;
use crate::variant::VariantSet;

/// Element tags codegen is allowed to emit. Anything else reaching the
/// renderer signals a pipeline bug upstream.
const ALLOWED_TAGS: &[&str] = &[
    "path",
    "circle",
    "rect",
    "ellipse",
    "line",
    "polyline",
    "polygon",
    "g",
    "defs",
    "use",
    "clipPath",
    "mask",
    "linearGradient",
    "radialGradient",
    "stop",
];

/// Render one icon's component module source
pub fn render(name: &IconName, variants: &VariantSet) -> Result<String> {
    let filled = render_children(&variants.filled, 8)?;
    let outline = render_children(&variants.outline, 8)?;

    let mut out = String::new();
    let _ = write!(
        out,
        "\
import React, {{ createElement, forwardRef }} from 'react';

export interface IconProps extends React.SVGProps<SVGSVGElement> {{
  size?: string | number;
  variant?: 'outline' | 'filled';
  strokeWidth?: number;
}}

const {name} = forwardRef<SVGSVGElement, IconProps>(
  ({{ color = 'currentColor', size = 24, variant = 'outline', strokeWidth = 1.5, ...props }}, ref) =>
    createElement(
      'svg',
      {{
        ref,
        xmlns: 'http://www.w3.org/2000/svg',
        viewBox: '0 0 24 24',
        width: size,
        height: size,
        ...(variant === 'filled'
          ? {{ fill: color }}
          : {{ fill: 'none', stroke: color, strokeWidth }}),
        ...props,
      }},
      ...(variant === 'filled'
        ? {filled}
        : {outline}),
    ),
);

{name}.displayName = '{name}';
export default {name};
"
    );

    Ok(out)
}

fn render_children(nodes: &[Element], indent: usize) -> Result<String> {
    if nodes.is_empty() {
        return Ok("[]".to_string());
    }

    let pad = " ".repeat(indent);
    let mut out = String::from("[\n");
    for node in nodes {
        let _ = writeln!(out, "{pad}  {},", render_node(node, indent + 2)?);
    }
    let _ = write!(out, "{pad}]");
    Ok(out)
}

fn render_node(element: &Element, indent: usize) -> Result<String> {
    if !ALLOWED_TAGS.contains(&element.name.as_str()) {
        return Err(Error::new(
            ErrorKind::UnsupportedNode {
                tag: element.name.clone(),
            },
            Span::empty(),
        ));
    }

    let attrs = render_attributes(element);

    let child_elements: Vec<&Element> = element
        .children
        .iter()
        .filter_map(|c| c.as_element())
        .collect();

    if child_elements.is_empty() {
        return Ok(format!("createElement('{}', {attrs})", element.name));
    }

    let pad = " ".repeat(indent);
    let mut out = String::from("createElement(\n");
    let _ = writeln!(out, "{pad}  '{}',", element.name);
    let _ = writeln!(out, "{pad}  {attrs},");
    for child in child_elements {
        let _ = writeln!(out, "{pad}  {},", render_node(child, indent + 2)?);
    }
    let _ = write!(out, "{pad})");
    Ok(out)
}

fn render_attributes(element: &Element) -> String {
    if element.attributes.is_empty() {
        return "{}".to_string();
    }

    let pairs: Vec<String> = element
        .attributes
        .iter()
        .map(|(key, value)| format!("{}: '{}'", render_key(key), escape_js(value)))
        .collect();
    format!("{{ {} }}", pairs.join(", "))
}

fn render_key(key: &str) -> String {
    if is_js_identifier(key) {
        key.to_string()
    } else {
        format!("'{}'", escape_js(key))
    }
}

fn is_js_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn escape_js(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AttributeCasing;
    use crate::normalize::normalize;
    use crate::optimize::optimize;
    use crate::svg::{Element, Parser};
    use crate::variant::VariantSet;

    fn elements(input: &str) -> Vec<Element> {
        let contents = Parser::new(input.as_bytes()).parse().unwrap();
        let elements = optimize(&contents, true);
        elements
            .iter()
            .map(|el| normalize(el, 0, AttributeCasing::Camel))
            .collect()
    }

    fn arrow_up() -> (IconName, VariantSet) {
        let outline = elements(r#"<path d="M12 19V5"/><path d="m5 12 7-7 7 7"/>"#);
        let filled = elements(r##"<path d="M12 19V5" fill="#000"/>"##);
        (
            IconName::canonicalize("arrow-up"),
            VariantSet::merge(outline, filled),
        )
    }

    #[test]
    fn test_render_is_deterministic() {
        let (name, set) = arrow_up();
        let first = render(&name, &set).unwrap();
        let second = render(&name, &set).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_component_contract_surface() {
        let (name, set) = arrow_up();
        let source = render(&name, &set).unwrap();
        assert!(source.contains("const ArrowUp = forwardRef<SVGSVGElement, IconProps>"));
        assert!(source.contains("color = 'currentColor'"));
        assert!(source.contains("size = 24"));
        assert!(source.contains("variant = 'outline'"));
        assert!(source.contains("strokeWidth = 1.5"));
        assert!(source.contains("...props,"));
        assert!(source.contains("ArrowUp.displayName = 'ArrowUp';"));
        assert!(source.contains("export default ArrowUp;"));
    }

    #[test]
    fn test_variant_branch_is_runtime_ternary() {
        let (name, set) = arrow_up();
        let source = render(&name, &set).unwrap();
        assert!(source.contains("...(variant === 'filled'\n        ?"));
        // outline strokes with the color prop, filled fills with it
        assert!(source.contains("? { fill: color }"));
        assert!(source.contains(": { fill: 'none', stroke: color, strokeWidth }"));
    }

    #[test]
    fn test_stripped_fill_literal_never_reappears() {
        let (name, set) = arrow_up();
        let source = render(&name, &set).unwrap();
        assert!(!source.contains("#000"));
    }

    #[test]
    fn test_nested_children_render_recursively() {
        let outline = elements(r#"<g transform="rotate(45 12 12)"><path d="M0 0"/></g>"#);
        let set = VariantSet::merge(outline, Vec::new());
        let source = render(&IconName::canonicalize("spin"), &set).unwrap();
        assert!(source.contains("'g',"));
        assert!(source.contains("{ transform: 'rotate(45 12 12)' }"));
        assert!(source.contains("createElement('path', { d: 'M0 0' })"));
    }

    #[test]
    fn test_empty_variant_renders_empty_list() {
        let set = VariantSet::merge(elements(r#"<path d="M0 0"/>"#), Vec::new());
        let source = render(&IconName::canonicalize("ghost"), &set).unwrap();
        assert!(source.contains("? []"));
    }

    #[test]
    fn test_unsupported_tag_fails() {
        let set = VariantSet::merge(vec![Element::new("script")], Vec::new());
        let err = render(&IconName::canonicalize("bad"), &set).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::UnsupportedNode {
                tag: "script".to_string()
            }
        );
    }

    #[test]
    fn test_non_identifier_key_is_quoted() {
        let mut el = Element::new("path");
        el.attributes
            .insert("stroke-width".to_string(), "2".to_string());
        let set = VariantSet::merge(vec![el], Vec::new());
        let source = render(&IconName::canonicalize("raw"), &set).unwrap();
        assert!(source.contains("'stroke-width': '2'"));
    }
}
