//! Alternative-index resolution.
//!
//! A segment's text alternatives form a 0-indexed sequence; a requested index
//! may be negative, counting from the end (`-1` is the last alternative).
//! Resolution is strict: a requested index `i` is valid only if both `i` and
//! `-i` are below the alternative count, so every accepted index lands in
//! `[0, count)` under both readings.

/// Resolve a requested alternative index against `count` alternatives.
///
/// Returns the concrete non-negative index, or `None` when the request is
/// out of range. With `count == 0` every request is invalid, including `0`.
pub fn resolve_alternative(requested: i64, count: usize) -> Option<usize> {
    let len = i64::try_from(count).ok()?;
    if requested >= len || requested.checked_neg()? >= len {
        return None;
    }
    let resolved = if requested < 0 {
        len + requested
    } else {
        requested
    };
    usize::try_from(resolved).ok()
}
