//! Segment selection and text-alternative resolution.
//!
//! A segment is a text-bearing element at the configured granularity. Its
//! `TextEquiv` children are the alternative readings, 0-indexed in document
//! order; the configured index list selects which of them to emit.

use std::io::Write;
use std::path::Path;

use pagecat_core::{ExtractConfig, PageError, index::resolve_alternative};
use roxmltree::Node;

use crate::format::write_line;
use crate::xml::{describe_segment, is_element_named};

/// Emit every segment of the configured granularity under `scope`.
///
/// Matches by local tag name at any depth, the scope element itself
/// included, in document order. The first failing segment aborts the scope.
pub(crate) fn emit_segments(
    out: &mut dyn Write,
    scope: Node<'_, '_>,
    source: Option<&Path>,
    config: &ExtractConfig,
) -> Result<(), PageError> {
    let tag = config.granularity.tag_name();
    for node in scope.descendants() {
        if is_element_named(node, tag) {
            emit_alternatives(out, node, source, config)?;
        }
    }
    Ok(())
}

/// Resolve and emit each configured alternative index for one segment.
///
/// Alternatives are the segment's direct `TextEquiv` children only; nested
/// equivs belong to nested segments. A segment with zero alternatives fails
/// every request, including index 0.
fn emit_alternatives(
    out: &mut dyn Write,
    segment: Node<'_, '_>,
    source: Option<&Path>,
    config: &ExtractConfig,
) -> Result<(), PageError> {
    let alternatives: Vec<Node<'_, '_>> = segment
        .children()
        .filter(|&c| is_element_named(c, "TextEquiv"))
        .collect();
    for &requested in &config.indices {
        let Some(resolved) = resolve_alternative(requested, alternatives.len()) else {
            return Err(PageError::Index {
                requested,
                count: alternatives.len(),
                segment: describe_segment(segment),
            });
        };
        write_line(
            out,
            segment,
            alternatives[resolved],
            resolved,
            source,
            config,
        )?;
    }
    Ok(())
}
