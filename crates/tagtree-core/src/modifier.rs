//! Modifiers: the mutations applied to an element after it is allocated.

use std::fmt;

use crate::node::{AttrValue, Element, Node, Text, TreeError};

/// A caller-defined mutation of an element.
///
/// Implement this for mutations the built-in [`Markup`] variants do not
/// cover, and wrap values with [`custom`].
pub trait Modifier {
    fn apply(&self, element: &mut Element) -> Result<(), TreeError>;
}

/// One item of a constructor's markup list.
pub enum Markup {
    /// Set an attribute (last write wins)
    Attribute(String, AttrValue),
    /// Set a style property (last write wins)
    Style(String, String),
    /// Add whitespace-separated classes
    Class(String),
    /// Replace the element's text content
    Text(String),
    /// Append a child node
    Child(Node),
    /// Caller-defined modifier
    Custom(Box<dyn Modifier + Send>),
    /// A nested constructor that already failed
    Failed(TreeError),
}

/// An empty markup list, for constructing bare elements.
pub const NO_MARKUP: [Markup; 0] = [];

impl Markup {
    /// Apply this item to `element`.
    pub fn apply_to(self, element: &mut Element) -> Result<(), TreeError> {
        match self {
            Markup::Attribute(name, value) => {
                element.set_attribute(name, value);
                Ok(())
            }
            Markup::Style(property, value) => {
                element.set_style(property, value);
                Ok(())
            }
            Markup::Class(classes) => {
                element.add_classes(&classes);
                Ok(())
            }
            Markup::Text(text) => element.set_text(text),
            Markup::Child(node) => element.append_child(node),
            Markup::Custom(modifier) => modifier.apply(element),
            Markup::Failed(err) => Err(err),
        }
    }
}

impl fmt::Debug for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Markup::Attribute(name, value) => {
                f.debug_tuple("Attribute").field(name).field(value).finish()
            }
            Markup::Style(property, value) => {
                f.debug_tuple("Style").field(property).field(value).finish()
            }
            Markup::Class(classes) => f.debug_tuple("Class").field(classes).finish(),
            Markup::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Markup::Child(node) => f.debug_tuple("Child").field(node).finish(),
            Markup::Custom(_) => f.write_str("Custom(..)"),
            Markup::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}

impl From<Node> for Markup {
    fn from(node: Node) -> Self {
        Markup::Child(node)
    }
}

impl From<Element> for Markup {
    fn from(el: Element) -> Self {
        Markup::Child(Node::Element(el))
    }
}

impl From<Text> for Markup {
    fn from(text: Text) -> Self {
        Markup::Child(Node::Text(text))
    }
}

/// Nested constructors return `Result`; an error travels up to the parent
/// and surfaces when the parent applies it.
impl From<Result<Node, TreeError>> for Markup {
    fn from(result: Result<Node, TreeError>) -> Self {
        match result {
            Ok(node) => Markup::Child(node),
            Err(err) => Markup::Failed(err),
        }
    }
}

pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Markup {
    Markup::Attribute(name.into(), AttrValue::String(value.into()))
}

pub fn bool_attr(name: impl Into<String>, on: bool) -> Markup {
    Markup::Attribute(name.into(), AttrValue::Bool(on))
}

pub fn style(property: impl Into<String>, value: impl Into<String>) -> Markup {
    Markup::Style(property.into(), value.into())
}

pub fn class(classes: impl Into<String>) -> Markup {
    Markup::Class(classes.into())
}

pub fn child(node: impl Into<Node>) -> Markup {
    Markup::Child(node.into())
}

pub fn text_content(text: impl Into<String>) -> Markup {
    Markup::Text(text.into())
}

pub fn custom(modifier: impl Modifier + Send + 'static) -> Markup {
    Markup::Custom(Box::new(modifier))
}
