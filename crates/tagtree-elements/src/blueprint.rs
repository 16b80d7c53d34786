//! Declarative tree descriptions loaded from JSON or YAML.
//!
//! A blueprint names elements by constructor name (or tag) and lists their
//! attributes, styles, classes, text and children. Building one goes through
//! an [`ElementRegistry`], so every element is still produced by the factory.
//!
//! ```yaml
//! element: Div
//! classes: card
//! children:
//!   - element: Paragraph
//!     children: [Hello]
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tagtree_core::{class, style, text, text_content, AttrValue, Markup, Node};

use crate::registry::{CatalogueError, ElementRegistry};

/// A node description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Blueprint {
    /// `{ element: Div, ... }`
    Element(ElementBlueprint),
    /// `{ text: "..." }`
    Text { text: String },
    /// A bare string is shorthand for a text node
    Literal(String),
}

/// An element description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementBlueprint {
    /// Constructor name or tag
    pub element: String,

    /// Attributes in document order
    #[serde(default, deserialize_with = "ordered_entries")]
    pub attributes: Vec<(String, AttrValue)>,

    /// CSS properties in document order
    #[serde(default, deserialize_with = "ordered_entries")]
    pub styles: Vec<(String, String)>,

    /// Whitespace-separated class names
    #[serde(default)]
    pub classes: Option<String>,

    /// Text content
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub children: Vec<Blueprint>,
}

/// Read a map as its entries, keeping the order they were written in.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct Entries<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for Entries<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(Entries(PhantomData))
}

/// Source format of a blueprint document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Errors that can occur when loading or building a blueprint.
#[derive(Debug, thiserror::Error)]
pub enum BlueprintError {
    #[error("Invalid JSON blueprint: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML blueprint: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported blueprint format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

impl Blueprint {
    /// Parse a blueprint in the given format.
    pub fn parse(source: &str, format: Format) -> Result<Self, BlueprintError> {
        match format {
            Format::Json => Ok(serde_json::from_str(source)?),
            Format::Yaml => Ok(serde_yaml::from_str(source)?),
        }
    }

    /// Parse a blueprint, picking the format from `path`'s extension.
    pub fn parse_for_path(source: &str, path: &Path) -> Result<Self, BlueprintError> {
        let format = Format::from_path(path)
            .ok_or_else(|| BlueprintError::UnsupportedFormat(path.display().to_string()))?;
        Self::parse(source, format)
    }

    /// Build the described tree.
    pub fn build(&self, registry: &ElementRegistry) -> Result<Node, BlueprintError> {
        match self {
            Blueprint::Element(el) => el.build(registry),
            Blueprint::Text { text: content } | Blueprint::Literal(content) => {
                Ok(text(content.as_str()))
            }
        }
    }
}

impl ElementBlueprint {
    fn build(&self, registry: &ElementRegistry) -> Result<Node, BlueprintError> {
        if let Some(spec) = registry.resolve(&self.element) {
            if spec.obsolete {
                tracing::warn!(element = %self.element, tag = %spec.tag, "Blueprint uses an obsolete element");
            }
        }

        let mut markup: Vec<Markup> = Vec::with_capacity(
            self.attributes.len() + self.styles.len() + self.children.len() + 2,
        );

        for (name, value) in &self.attributes {
            markup.push(Markup::Attribute(name.clone(), value.clone()));
        }
        for (property, value) in &self.styles {
            markup.push(style(property.as_str(), value.as_str()));
        }
        if let Some(classes) = &self.classes {
            markup.push(class(classes.as_str()));
        }
        if let Some(content) = &self.text {
            markup.push(text_content(content.as_str()));
        }
        for child in &self.children {
            markup.push(Markup::Child(child.build(registry)?));
        }

        Ok(registry.build(&self.element, markup)?)
    }
}
