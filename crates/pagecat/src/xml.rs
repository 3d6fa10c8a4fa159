//! Local-name helpers over the parsed tree.
//!
//! PAGE-XML documents in the wild appear with and without namespace prefixes,
//! so every tag and attribute lookup in this crate compares unqualified local
//! names only.

use roxmltree::Node;

/// True when `node` is an element whose local tag name equals `name`.
pub(crate) fn is_element_named(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Look up an attribute of `node` by local name, ignoring any prefix.
pub(crate) fn attr_local<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == name)
        .map(|a| a.value())
}

/// Describe a segment for error messages: element kind plus id when present.
pub(crate) fn describe_segment(node: Node<'_, '_>) -> String {
    let tag = node.tag_name().name();
    match attr_local(node, "id") {
        Some(id) => format!("{tag} '{id}'"),
        None => format!("unidentified {tag}"),
    }
}
