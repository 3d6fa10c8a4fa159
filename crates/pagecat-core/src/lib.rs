//! pagecat-core: Backend-independent types and algorithms for pagecat.
//!
//! This crate provides the extraction configuration ([`ExtractConfig`],
//! [`Granularity`]), the workspace-wide error type ([`PageError`]), and the
//! pure algorithms (alternative-index resolution, whitespace normalization)
//! used by the pipeline crate. It has no external dependencies.

mod config;
mod error;
pub mod index;
pub mod normalize;

pub use config::{ExtractConfig, Granularity};
pub use error::PageError;
