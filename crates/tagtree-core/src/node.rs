//! Markup node model.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A node in a markup tree: either an element or a text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    /// Tag name, if this node is an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element(el) => Some(el.tag()),
            Node::Text(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// A literal text leaf. The empty string is a valid value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

/// An attribute value.
///
/// Boolean attributes (e.g. `disabled`) are present when `true` and
/// dropped from output when `false`. Numbers are read as their string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    String(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAttrValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawAttrValue::deserialize(deserializer)? {
            RawAttrValue::Bool(b) => AttrValue::Bool(b),
            RawAttrValue::Integer(n) => AttrValue::String(n.to_string()),
            RawAttrValue::Float(n) => AttrValue::String(n.to_string()),
            RawAttrValue::String(s) => AttrValue::String(s),
        })
    }
}

impl AttrValue {
    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            AttrValue::Bool(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

/// Content kinds a void element refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Child,
    Text,
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Child => f.write_str("child nodes"),
            Content::Text => f.write_str("text content"),
        }
    }
}

/// Errors raised while constructing or mutating a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Element tag must not be empty")]
    EmptyTag,

    #[error("Void element <{tag}> cannot contain {content}")]
    VoidElement { tag: String, content: Content },

    #[error("Modifier failed on <{tag}>: {message}")]
    Custom { tag: String, message: String },
}

/// A markup element.
///
/// `tag` and `void` are fixed at construction. Attributes and styles keep
/// the position of their first insertion; setting an existing key replaces
/// its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    void: bool,
    attributes: Vec<(String, AttrValue)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element. Fails if `tag` is empty or only whitespace.
    pub fn new(tag: impl Into<String>, void: bool) -> Result<Self, TreeError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(TreeError::EmptyTag);
        }

        Ok(Self {
            tag,
            void,
            attributes: Vec::new(),
            styles: Vec::new(),
            text: None,
            children: Vec::new(),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether this element can never hold children or text.
    pub fn is_void(&self) -> bool {
        self.void
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Attributes in first-insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    /// Styles in first-insertion order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Set an attribute, replacing any existing value for `name`.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Set a style property, replacing any existing value.
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.styles.iter_mut().find(|(key, _)| *key == property) {
            Some((_, existing)) => *existing = value,
            None => self.styles.push((property, value)),
        }
    }

    /// Append whitespace-separated class names to the `class` attribute,
    /// skipping names already present.
    pub fn add_classes(&mut self, classes: &str) {
        let mut current: Vec<String> = self
            .attribute("class")
            .and_then(AttrValue::as_str)
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        for class in classes.split_whitespace() {
            if !current.iter().any(|c| c == class) {
                current.push(class.to_string());
            }
        }

        if !current.is_empty() {
            self.set_attribute("class", current.join(" "));
        }
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), TreeError> {
        if self.void {
            return Err(self.void_error(Content::Text));
        }
        self.text = Some(text.into());
        Ok(())
    }

    /// Append a child node.
    pub fn append_child(&mut self, child: impl Into<Node>) -> Result<(), TreeError> {
        if self.void {
            return Err(self.void_error(Content::Child));
        }
        self.children.push(child.into());
        Ok(())
    }

    /// Apply markup items in order, stopping at the first failure.
    pub fn apply<I>(&mut self, markup: I) -> Result<(), TreeError>
    where
        I: IntoIterator,
        I::Item: Into<crate::Markup>,
    {
        for item in markup {
            item.into().apply_to(self)?;
        }
        Ok(())
    }

    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    fn void_error(&self, content: Content) -> TreeError {
        TreeError::VoidElement {
            tag: self.tag.clone(),
            content,
        }
    }
}
