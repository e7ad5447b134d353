//! icongen - SVG icon pair to React component generator
//!
//! Converts paired vector icon sources (an `outline` and a `filled`
//! variant per icon) into TSX component modules plus one aggregated
//! barrel manifest. The pipeline per icon: parse each variant's markup
//! into a tree, normalize attributes, optimize away redundant nodes,
//! merge the variants, and deterministically render component source.
//!
//! # Quick Start
//!
//! ```
//! use icongen::{Config, IconName, IconSource};
//! # fn main() -> Result<(), icongen::Error> {
//! let source = IconSource {
//!     base_name: "arrow-up".to_string(),
//!     outline: r#"<svg><path d="M12 19V5"/></svg>"#.to_string(),
//!     filled: r#"<svg><path d="M12 19V5"/></svg>"#.to_string(),
//! };
//! let name = IconName::canonicalize(&source.base_name);
//! let module = icongen::build_module(&name, &source, &Config::default())?;
//! assert_eq!(module.name.as_str(), "ArrowUp");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod cursor;

pub mod svg;
pub use svg::{Content, Element, Parser};

pub mod config;
pub use config::{AttributeCasing, Config};

pub mod name;
pub use name::IconName;

pub mod normalize;
pub use normalize::normalize;

pub mod optimize;
pub use optimize::optimize;

pub mod variant;
pub use variant::{Variant, VariantSet};

pub mod render;
pub use render::render;

pub mod manifest;
pub use manifest::Manifest;

pub mod pipeline;
pub use pipeline::{
    build_module, discover, generate, GeneratedModule, IconSource, RunSummary,
};

use std::path::Path;

/// Discover matched icon pairs under `icons_dir` and generate modules
/// plus the manifest under `out_dir`.
pub fn generate_icons(icons_dir: &Path, out_dir: &Path, config: &Config) -> Result<RunSummary> {
    let sources = discover(icons_dir)?;
    generate(&sources, out_dir, config)
}
