//! The element factory every named constructor calls.

use crate::modifier::Markup;
use crate::node::{Element, Node, Text, TreeError};

/// Build an element node.
///
/// Allocates a fresh element with `tag` and `void`, then applies each markup
/// item strictly in the given order. Attribute and style keys follow
/// last-write-wins; children are appended in call order. The first failing
/// item aborts construction and its error is returned.
///
/// # Arguments
/// * `tag` - Any non-empty tag name; not checked against HTML
/// * `void` - Whether the element may never hold children or text
/// * `markup` - Modifiers to apply, possibly empty
pub fn element<I>(tag: impl Into<String>, void: bool, markup: I) -> Result<Node, TreeError>
where
    I: IntoIterator,
    I::Item: Into<Markup>,
{
    let mut el = Element::new(tag, void)?;
    el.apply(markup)?;
    Ok(Node::Element(el))
}

/// Wrap a string into a text leaf.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(Text::new(content))
}
