//! Error types for icongen

use std::fmt;
use thiserror::Error;

/// Position in source markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input markup is not structurally valid SVG/XML
    MalformedMarkup,
    /// Two source base names canonicalize to the same icon name
    NameCollision {
        name: String,
        first: String,
        second: String,
    },
    /// A node tag outside the allowed output element set reached codegen
    UnsupportedNode { tag: String },
    /// Filesystem failure from an external collaborator
    Io { path: String, detail: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedMarkup => write!(f, "malformed markup"),
            Self::NameCollision { name, first, second } => {
                write!(
                    f,
                    "name collision: {first:?} and {second:?} both canonicalize to {name}"
                )
            }
            Self::UnsupportedNode { tag } => write!(f, "unsupported node tag: {tag}"),
            Self::Io { path, detail } => write!(f, "io error at {path}: {detail}"),
        }
    }
}

/// Main error type for icongen
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create a malformed-markup error at a specific position
    pub fn malformed_at(message: impl Into<String>, pos: Pos) -> Self {
        Self::with_message(ErrorKind::MalformedMarkup, Span::new(pos, pos), message)
    }

    /// Create an io error for a path
    pub fn io(path: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::Io {
                path: path.into(),
                detail: detail.to_string(),
            },
            Span::empty(),
        )
    }

    /// Whether this error is contained at the per-icon boundary rather
    /// than aborting the whole run.
    pub fn is_per_icon(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MalformedMarkup | ErrorKind::UnsupportedNode { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span == Span::empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "error at {}: {}", self.span.start, self.message)
        }
    }
}

/// Result type alias for icongen
pub type Result<T> = std::result::Result<T, Error>;
