//! Generation pipeline
//!
//! Drives the per-icon unit of work: parse both variants, normalize and
//! optimize each tree, merge, render, write the module file, append to
//! the manifest. Icons are processed in the enumerator's sorted order,
//! so the manifest is reproducible across runs.
//!
//! Per-icon structural failures are contained at the unit-of-work
//! boundary and reported in the run summary; name collisions and I/O
//! failures abort the run before they can corrupt already-written
//! output.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, ErrorKind, Result, Span};
use crate::manifest::Manifest;
use crate::name::IconName;
use crate::normalize::normalize;
use crate::optimize::optimize;
use crate::render::render;
use crate::svg::{Content, Element, Parser};
use crate::variant::VariantSet;

const OUTLINE_DIR: &str = "Outline";
const FILLED_DIR: &str = "Filled";
const MARKUP_EXT: &str = "svg";
const MODULE_EXT: &str = "tsx";
const MANIFEST_FILE: &str = "index.ts";

/// One matched input pair from the enumerator
#[derive(Clone, Debug)]
pub struct IconSource {
    pub base_name: String,
    pub outline: String,
    pub filled: String,
}

/// The renderer's output unit: one module, written exactly once
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedModule {
    pub name: IconName,
    pub source_text: String,
}

/// Outcome of one batch run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub generated: Vec<IconName>,
    pub failed: Vec<(String, Error)>,
}

/// Enumerate matched icon pairs under `root`, which holds one
/// subdirectory per variant. Pairs are returned sorted by base name so
/// downstream output order is deterministic. Files present in only one
/// variant directory are skipped.
pub fn discover(root: &Path) -> Result<Vec<IconSource>> {
    let outline_dir = variant_dir(root, OUTLINE_DIR)?;
    let filled_dir = variant_dir(root, FILLED_DIR)?;

    let outline_files = markup_files(&outline_dir)?;
    let filled_files = markup_files(&filled_dir)?;

    let mut base_names: Vec<&String> = outline_files
        .keys()
        .filter(|name| filled_files.contains_key(*name))
        .collect();
    base_names.sort();

    for name in outline_files.keys() {
        if !filled_files.contains_key(name) {
            debug!(icon = %name, "skipping icon without a filled variant");
        }
    }
    for name in filled_files.keys() {
        if !outline_files.contains_key(name) {
            debug!(icon = %name, "skipping icon without an outline variant");
        }
    }

    let mut sources = Vec::with_capacity(base_names.len());
    for name in base_names {
        let outline_path = &outline_files[name];
        let filled_path = &filled_files[name];
        sources.push(IconSource {
            base_name: name.clone(),
            outline: read_markup(outline_path)?,
            filled: read_markup(filled_path)?,
        });
    }

    Ok(sources)
}

/// Run the pipeline over a set of matched sources, writing one module
/// per icon plus the manifest under `out_dir`.
pub fn generate(sources: &[IconSource], out_dir: &Path, config: &Config) -> Result<RunSummary> {
    check_collisions(sources)?;

    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir.display().to_string(), e))?;

    let mut manifest = Manifest::new();
    let mut summary = RunSummary::default();

    for source in sources {
        let name = IconName::canonicalize(&source.base_name);
        match build_module(&name, source, config) {
            Ok(module) => {
                let path = out_dir.join(format!("{}.{MODULE_EXT}", module.name));
                // the source text is fully rendered before this single
                // write, so a module file is all-or-nothing
                fs::write(&path, &module.source_text)
                    .map_err(|e| Error::io(path.display().to_string(), e))?;
                debug!(icon = %module.name, path = %path.display(), "generated module");
                manifest.append(module.name.clone());
                summary.generated.push(module.name);
            }
            Err(err) if err.is_per_icon() => {
                warn!(icon = %source.base_name, error = %err, "skipping icon");
                summary.failed.push((source.base_name.clone(), err));
            }
            Err(err) => return Err(err),
        }
    }

    let manifest_path = out_dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, manifest.flush())
        .map_err(|e| Error::io(manifest_path.display().to_string(), e))?;

    info!(
        generated = summary.generated.len(),
        failed = summary.failed.len(),
        "batch complete"
    );
    Ok(summary)
}

/// Build one icon's module without touching the filesystem
pub fn build_module(name: &IconName, source: &IconSource, config: &Config) -> Result<GeneratedModule> {
    let outline = build_variant(&source.outline, config)?;
    let filled = build_variant(&source.filled, config)?;
    let variants = VariantSet::merge(outline, filled);

    let source_text = render(name, &variants)?;
    Ok(GeneratedModule {
        name: name.clone(),
        source_text,
    })
}

/// Parse, normalize, and optimize one variant's markup into its
/// root-level node sequence.
fn build_variant(markup: &str, config: &Config) -> Result<Vec<Element>> {
    let contents = Parser::new(markup.as_bytes()).parse()?;
    let contents = unwrap_svg_root(contents);

    let normalized: Vec<Content> = contents
        .into_iter()
        .map(|content| match content {
            Content::Element(el) => {
                Content::Element(normalize(&el, 0, config.attribute_casing))
            }
            other => other,
        })
        .collect();

    Ok(optimize(&normalized, config.apply_optimization))
}

/// A variant source is usually a full document with a single `<svg>`
/// wrapper; the pipeline consumes the wrapper's children. Bare
/// fragments pass through unchanged.
fn unwrap_svg_root(contents: Vec<Content>) -> Vec<Content> {
    let element_count = contents.iter().filter(|c| c.as_element().is_some()).count();
    if element_count != 1 {
        return contents;
    }

    let is_svg_root = contents
        .iter()
        .filter_map(Content::as_element)
        .next()
        .is_some_and(|el| el.name == "svg");
    if !is_svg_root {
        return contents;
    }

    contents
        .into_iter()
        .find_map(|content| match content {
            Content::Element(el) => Some(el.children),
            _ => None,
        })
        .unwrap_or_default()
}

/// Fail the whole run when two base names canonicalize identically;
/// continuing would silently overwrite an already-written module.
fn check_collisions(sources: &[IconSource]) -> Result<()> {
    let mut seen: HashMap<IconName, &str> = HashMap::new();
    for source in sources {
        let name = IconName::canonicalize(&source.base_name);
        if let Some(first) = seen.get(&name) {
            return Err(Error::new(
                ErrorKind::NameCollision {
                    name: name.as_str().to_string(),
                    first: (*first).to_string(),
                    second: source.base_name.clone(),
                },
                Span::empty(),
            ));
        }
        seen.insert(name, &source.base_name);
    }
    Ok(())
}

fn variant_dir(root: &Path, name: &str) -> Result<PathBuf> {
    let capitalized = root.join(name);
    if capitalized.is_dir() {
        return Ok(capitalized);
    }
    let lower = root.join(name.to_lowercase());
    if lower.is_dir() {
        return Ok(lower);
    }
    Err(Error::io(
        capitalized.display().to_string(),
        "variant directory not found",
    ))
}

fn markup_files(dir: &Path) -> Result<HashMap<String, PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir.display().to_string(), e))?;

    let mut files = HashMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir.display().to_string(), e))?;
        let path = entry.path();
        let is_markup = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKUP_EXT));
        if !is_markup {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.insert(stem.to_string(), path.clone());
        }
    }
    Ok(files)
}

fn read_markup(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))
}
