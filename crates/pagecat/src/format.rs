//! Line formatting.
//!
//! Each resolved alternative becomes exactly one newline-terminated output
//! line: optional filename, id@index, and confidence prefixes, then the text
//! payload, all space-separated. Output is written as it is produced; a
//! later failure never takes back lines already written.

use std::io::Write;
use std::path::Path;

use pagecat_core::{ExtractConfig, PageError, normalize::underscore_spaces};
use roxmltree::Node;

use crate::xml::{attr_local, describe_segment, is_element_named};

/// Render one resolved alternative of `segment` as a single output line.
pub(crate) fn write_line(
    out: &mut dyn Write,
    segment: Node<'_, '_>,
    alternative: Node<'_, '_>,
    resolved: usize,
    source: Option<&Path>,
    config: &ExtractConfig,
) -> Result<(), PageError> {
    let mut line = String::new();
    if config.print_filename {
        if let Some(path) = source {
            line.push_str(&path.display().to_string());
            line.push(' ');
        }
    }
    if config.print_id {
        if let Some(id) = attr_local(segment, "id") {
            line.push_str(id);
            line.push('@');
            line.push_str(&resolved.to_string());
            line.push(' ');
        }
    }
    if config.print_conf {
        if let Some(conf) = attr_local(alternative, "conf") {
            line.push_str(conf);
            line.push(' ');
        }
    }
    let text = payload_text(segment, alternative)?;
    if config.normalize {
        line.push_str(&underscore_spaces(text));
    } else {
        line.push_str(text);
    }
    writeln!(out, "{line}")?;
    Ok(())
}

/// The text content of the alternative's `Unicode` child.
///
/// A missing child is a fatal error; a present but empty child is an empty
/// payload.
fn payload_text<'a>(
    segment: Node<'_, '_>,
    alternative: Node<'a, '_>,
) -> Result<&'a str, PageError> {
    let unicode = alternative
        .children()
        .find(|&c| is_element_named(c, "Unicode"))
        .ok_or_else(|| PageError::MissingText(describe_segment(segment)))?;
    Ok(unicode.text().unwrap_or(""))
}
