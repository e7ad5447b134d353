//! Manifest emitter
//!
//! Accumulates one export entry per generated module and serializes the
//! barrel file exactly once at the end of a run. Entries keep
//! accumulation order; the serialized file is never re-sorted.

use std::fmt::Write;

use crate::name::IconName;

#[derive(Clone, Debug, Default)]
pub struct Manifest {
    entries: Vec<IconName>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one generated module. Pure accumulation, no side effects.
    pub fn append(&mut self, name: IconName) {
        self.entries.push(name);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IconName] {
        &self.entries
    }

    /// Serialize the accumulated entries as barrel-file source. An
    /// empty manifest is a valid empty file, not an error.
    pub fn flush(&self) -> String {
        let mut out = String::new();
        for name in &self.entries {
            let _ = writeln!(out, "export {{ default as {name} }} from './{name}';");
        }
        out
    }
}
