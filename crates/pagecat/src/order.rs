//! Reading-order resolution.
//!
//! A PAGE-XML document may declare the order its regions should be read in,
//! independent of where the regions appear in the markup. The declaration is
//! a set of `RegionRefIndexed` elements inside an `OrderedGroup`, each naming
//! a region id and its rank.

use pagecat_core::PageError;
use roxmltree::{Document, Node};

use crate::xml::{attr_local, is_element_named};

/// One entry of a declared reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RegionRef {
    /// The `id` of the region this entry points at.
    pub id: String,
    /// Rank within the reading order; lower ranks are read first.
    pub rank: i64,
}

impl RegionRef {
    /// Extract a ref from a `RegionRefIndexed` element.
    ///
    /// Both the `regionRef` and `index` attributes are required; a missing
    /// attribute or a non-integer index fails the whole document.
    fn from_node(node: Node<'_, '_>) -> Result<Self, PageError> {
        let id = attr_local(node, "regionRef").ok_or_else(|| {
            PageError::Ordering("RegionRefIndexed missing regionRef attribute".to_string())
        })?;
        let raw = attr_local(node, "index").ok_or_else(|| {
            PageError::Ordering(format!("RegionRefIndexed '{id}' missing index attribute"))
        })?;
        let rank = raw.parse::<i64>().map_err(|e| {
            PageError::Ordering(format!("RegionRefIndexed '{id}' has invalid index {raw:?}: {e}"))
        })?;
        Ok(Self {
            id: id.to_string(),
            rank,
        })
    }
}

/// Collect the document's declared reading order, sorted ascending by rank.
///
/// Matches `RegionRefIndexed` elements that are direct children of an
/// `OrderedGroup`, anywhere in the tree and regardless of namespace. Returns
/// an empty list when no declaration exists. The sort is stable: refs
/// sharing a rank keep their encounter order.
pub(crate) fn reading_order(doc: &Document<'_>) -> Result<Vec<RegionRef>, PageError> {
    let mut refs = Vec::new();
    for node in doc.root().descendants() {
        if is_element_named(node, "RegionRefIndexed")
            && node
                .parent()
                .is_some_and(|p| is_element_named(p, "OrderedGroup"))
        {
            refs.push(RegionRef::from_node(node)?);
        }
    }
    refs.sort_by_key(|r| r.rank);
    Ok(refs)
}

/// All `TextRegion` elements whose `id` equals `id`, in document order.
///
/// A ref may match zero regions (contributing no output) or several (each is
/// processed); neither case is an error.
pub(crate) fn regions_with_id<'a, 'input>(
    doc: &'a Document<'input>,
    id: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    doc.root()
        .descendants()
        .filter(move |&n| is_element_named(n, "TextRegion") && attr_local(n, "id") == Some(id))
}
