//! Pipeline configuration
//!
//! The original generator carried near-duplicate code paths (with and
//! without optimization, with and without camel-cased attribute keys).
//! Those policy choices live here as flags on one pipeline instead.

/// Attribute key casing in generated source
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttributeCasing {
    /// `stroke-width` → `strokeWidth` (component-prop convention)
    #[default]
    Camel,
    /// keys pass through as written in the source markup
    Kebab,
}

/// Generation pipeline configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Prune redundant nodes (comments, empty containers) after
    /// normalization
    pub apply_optimization: bool,
    pub attribute_casing: AttributeCasing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apply_optimization: true,
            attribute_casing: AttributeCasing::Camel,
        }
    }
}
