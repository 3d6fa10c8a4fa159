//! Input sources and the per-source extraction pipeline.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use pagecat_core::{ExtractConfig, PageError};
use roxmltree::Document;

use crate::backend::BackendError;
use crate::order::{reading_order, regions_with_id};
use crate::segment::emit_segments;

/// One input source: an optional originating path plus the raw XML text.
///
/// A `Source` owns its text; the parsed tree borrows it and exists only for
/// the duration of a single [`extract`](Source::extract) call. Nothing is
/// shared or cached between sources.
#[derive(Debug, Clone)]
pub struct Source {
    path: Option<PathBuf>,
    text: String,
}

impl Source {
    /// Read a source from a file path.
    ///
    /// The file handle is scoped to this call; only the decoded text is
    /// retained.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, PageError> {
        let path = path.into();
        let bytes = fs::read(&path).map_err(BackendError::Io)?;
        let text = decode(bytes)?;
        Ok(Self {
            path: Some(path),
            text,
        })
    }

    /// Read a source from an arbitrary reader (typically standard input).
    ///
    /// Sources built this way have no originating path, so the filename
    /// decoration never applies to them.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, PageError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(BackendError::Io)?;
        Ok(Self {
            path: None,
            text: decode(bytes)?,
        })
    }

    /// Build a source from an in-memory string, with no originating path.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    /// Attach an originating path label to this source.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// The originating file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Extract text per `config`, writing one line per emitted alternative.
    ///
    /// Honors a declared reading order unless `config.serial` is set, and
    /// falls back to raw document order when no order is declared. Output is
    /// written incrementally; the first error aborts the run and lines
    /// already written stay written.
    pub fn extract(&self, out: &mut dyn Write, config: &ExtractConfig) -> Result<(), PageError> {
        let doc = Document::parse(&self.text).map_err(BackendError::Xml)?;
        let source = self.path.as_deref();
        if config.serial {
            log::debug!("{}: serial mode, traversing in document order", self.name());
            return emit_segments(out, doc.root(), source, config);
        }
        let refs = reading_order(&doc)?;
        if refs.is_empty() {
            log::debug!("{}: no reading order declared, using document order", self.name());
            return emit_segments(out, doc.root(), source, config);
        }
        log::debug!("{}: reading order with {} region refs", self.name(), refs.len());
        for region_ref in &refs {
            for region in regions_with_id(&doc, &region_ref.id) {
                emit_segments(out, region, source, config)?;
            }
        }
        Ok(())
    }

    fn name(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }
}

fn decode(bytes: Vec<u8>) -> Result<String, PageError> {
    String::from_utf8(bytes).map_err(|e| BackendError::Utf8(e.utf8_error()).into())
}
