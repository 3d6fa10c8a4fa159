//! Error types for pagecat.
//!
//! Provides [`PageError`], the single fatal error type shared by every layer
//! of the workspace. The first error raised anywhere aborts the run; there is
//! no warning channel and no best-effort continuation.

use std::fmt;

/// Fatal error types for PAGE-XML processing.
///
/// Every variant aborts the current run. Variants carry enough context to
/// produce a single useful diagnostic line (the offending index, the segment
/// involved), but the originating file is attached by the caller that knows
/// it.
#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    /// The input is not well-formed XML (including invalid UTF-8 input).
    Parse(String),
    /// A declared reading order is malformed or incomplete.
    Ordering(String),
    /// A requested alternative index is out of range for a segment.
    Index {
        /// The index as requested (possibly negative).
        requested: i64,
        /// Number of alternatives the segment actually has.
        count: usize,
        /// Description of the segment (element kind and id when present).
        segment: String,
    },
    /// A selected alternative has no `Unicode` text payload child.
    MissingText(String),
    /// I/O error reading input or writing output.
    Io(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::Parse(msg) => write!(f, "parse error: {msg}"),
            PageError::Ordering(msg) => write!(f, "invalid reading order: {msg}"),
            PageError::Index {
                requested,
                count,
                segment,
            } => write!(
                f,
                "invalid alternative index {requested} for {segment}: {count} available"
            ),
            PageError::MissingText(segment) => {
                write!(f, "missing Unicode text in {segment}")
            }
            PageError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for PageError {}

impl From<std::io::Error> for PageError {
    fn from(err: std::io::Error) -> Self {
        PageError::Io(err.to_string())
    }
}
