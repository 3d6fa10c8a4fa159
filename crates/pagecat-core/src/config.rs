//! Extraction configuration.
//!
//! Provides [`Granularity`] for selecting which segment kind to emit and
//! [`ExtractConfig`], the immutable per-run configuration threaded explicitly
//! into every component call.

/// Which kind of text-bearing segment to extract.
///
/// PAGE-XML nests regions, lines, and words; exactly one level is selected
/// per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// Whole text regions (`TextRegion` elements).
    Region,
    /// Text lines (`TextLine` elements, the default).
    #[default]
    Line,
    /// Individual words (`Word` elements).
    Word,
}

impl Granularity {
    /// The local tag name of elements at this granularity.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Granularity::Region => "TextRegion",
            Granularity::Line => "TextLine",
            Granularity::Word => "Word",
        }
    }

    /// Select the granularity from the two command-line flags.
    ///
    /// `words` wins over `regions` when both are set; neither means lines.
    pub fn from_flags(words: bool, regions: bool) -> Self {
        if words {
            Granularity::Word
        } else if regions {
            Granularity::Region
        } else {
            Granularity::Line
        }
    }
}

/// Immutable configuration for one extraction run.
///
/// Built once from parsed arguments and passed by reference into every
/// component call. All decorations default to off; the index list defaults
/// to the single index `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Segment kind to emit.
    pub granularity: Granularity,
    /// Prefix each line with the segment id and resolved index.
    pub print_id: bool,
    /// Include the alternative's confidence score when present.
    pub print_conf: bool,
    /// Prefix each line with the originating file path (files only).
    pub print_filename: bool,
    /// Ignore any declared reading order; traverse in document order.
    pub serial: bool,
    /// Replace spaces with underscores in emitted text.
    pub normalize: bool,
    /// Ordered alternative indices to emit per segment; duplicates allowed,
    /// negative values count from the end.
    pub indices: Vec<i64>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::default(),
            print_id: false,
            print_conf: false,
            print_filename: false,
            serial: false,
            normalize: false,
            indices: vec![0],
        }
    }
}
