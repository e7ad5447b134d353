//! Variant merging
//!
//! Packages the two normalized variant trees for one icon. The node
//! lists stay fully independent: the generated component instantiates
//! exactly one of them at render time, so no cross-variant diffing or
//! deduplication is ever correct.

use crate::svg::Element;

/// The two visual variants of one icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Outline,
    Filled,
}

impl Variant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Filled => "filled",
        }
    }
}

/// One icon's node sequences, keyed by variant
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantSet {
    pub outline: Vec<Element>,
    pub filled: Vec<Element>,
}

impl VariantSet {
    /// Merge the two variants' node sequences
    pub fn merge(outline: Vec<Element>, filled: Vec<Element>) -> Self {
        Self { outline, filled }
    }

    /// Merge from optional sequences; an absent variant is an empty
    /// sequence, never a failure.
    pub fn merge_opt(outline: Option<Vec<Element>>, filled: Option<Vec<Element>>) -> Self {
        Self {
            outline: outline.unwrap_or_default(),
            filled: filled.unwrap_or_default(),
        }
    }

    pub fn nodes(&self, variant: Variant) -> &[Element] {
        match variant {
            Variant::Outline => &self.outline,
            Variant::Filled => &self.filled,
        }
    }
}
