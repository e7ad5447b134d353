//! Icon name canonicalization
//!
//! A source file base name becomes the generated module's exported
//! identifier: word boundaries are detected on separators (`-`, `_`,
//! spaces, `.`) and before uppercase letters, each word is capitalized,
//! and the words are concatenated without separators.

use std::fmt;

/// Canonical PascalCase identifier for one icon
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconName(String);

impl IconName {
    /// Canonicalize a source file base name. Pure and deterministic.
    pub fn canonicalize(base_name: &str) -> Self {
        let mut words: Vec<String> = Vec::new();
        let mut current = String::new();

        for ch in base_name.chars() {
            if is_separator(ch) {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                continue;
            }

            // every uppercase letter not at a word start begins a new
            // word, which makes canonicalization a fixed point
            if ch.is_uppercase() && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
        if !current.is_empty() {
            words.push(current);
        }

        let mut out = String::with_capacity(base_name.len());
        for word in &words {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.extend(chars);
            }
        }

        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_separator(ch: char) -> bool {
    matches!(ch, '-' | '_' | '.' | ' ' | '\t')
}
