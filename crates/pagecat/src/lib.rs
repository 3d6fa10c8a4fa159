//! pagecat: Extract transcribed text from PAGE-XML documents.
//!
//! PAGE-XML nests transcriptions at region, line, and word granularity, may
//! declare an explicit reading order for its regions, and may carry several
//! alternative readings per segment. This crate walks one document at a time
//! and writes one output line per selected alternative.
//!
//! # Architecture
//!
//! - **pagecat-core**: Backend-independent configuration, error, and
//!   index-resolution types
//! - **pagecat** (this crate): XML loading via `roxmltree` and the
//!   extraction pipeline (reading order, segment selection, formatting)
//!
//! # Example
//!
//! ```
//! use pagecat::{ExtractConfig, Source};
//!
//! let xml = r#"<PcGts><Page><TextRegion id="r1">
//!     <TextLine id="l1"><TextEquiv><Unicode>hello</Unicode></TextEquiv></TextLine>
//! </TextRegion></Page></PcGts>"#;
//!
//! let mut out = Vec::new();
//! Source::from_text(xml).extract(&mut out, &ExtractConfig::default())?;
//! assert_eq!(out, b"hello\n");
//! # Ok::<(), pagecat::PageError>(())
//! ```

mod backend;
mod document;
mod format;
mod order;
mod segment;
mod xml;

pub use backend::BackendError;
pub use document::Source;
pub use pagecat_core::{ExtractConfig, Granularity, PageError};
