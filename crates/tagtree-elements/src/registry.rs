//! Element registry for building elements by name at runtime.
//!
//! The named constructors cover static use. The registry is the dynamic
//! counterpart: it maps constructor names to table entries and can be
//! extended with custom elements.

use std::collections::HashMap;

use tagtree_core::{Markup, Node, TreeError};

use crate::catalogue::{TagSpec, ELEMENTS};

/// A registry of element definitions.
#[derive(Debug, Default, Clone)]
pub struct ElementRegistry {
    /// Entries keyed by lowercase constructor name
    elements: HashMap<String, TagSpec>,

    /// Lowercase tag -> lowercase constructor name
    tags: HashMap<String, String>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the whole HTML catalogue.
    pub fn html() -> Self {
        Self::html_filtered(true)
    }

    /// Create a registry from the catalogue, optionally leaving out
    /// obsolete elements.
    pub fn html_filtered(include_obsolete: bool) -> Self {
        let mut registry = Self::new();
        for spec in ELEMENTS.iter().filter(|s| include_obsolete || !s.obsolete) {
            registry.insert(spec.clone());
        }

        tracing::debug!(
            count = registry.len(),
            include_obsolete,
            "Built element registry"
        );

        registry
    }

    /// Register a custom element. Names and tags must not collide with
    /// existing entries.
    pub fn register(&mut self, spec: TagSpec) -> Result<(), CatalogueError> {
        if self.contains(&spec.name) {
            return Err(CatalogueError::DuplicateElement(spec.name.into_owned()));
        }
        if self.get_by_tag(&spec.tag).is_some() {
            return Err(CatalogueError::DuplicateElement(spec.tag.into_owned()));
        }

        tracing::debug!(name = %spec.name, tag = %spec.tag, "Registered custom element");
        self.insert(spec);
        Ok(())
    }

    fn insert(&mut self, spec: TagSpec) {
        let key = spec.name.to_lowercase();
        self.tags.insert(spec.tag.to_lowercase(), key.clone());
        self.elements.insert(key, spec);
    }

    /// Look up an element by constructor name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&TagSpec> {
        self.elements.get(&name.to_lowercase())
    }

    /// Look up an element by tag (case-insensitive).
    pub fn get_by_tag(&self, tag: &str) -> Option<&TagSpec> {
        self.tags
            .get(&tag.to_lowercase())
            .and_then(|key| self.elements.get(key))
    }

    /// Look up by constructor name, falling back to the tag.
    pub fn resolve(&self, name_or_tag: &str) -> Option<&TagSpec> {
        self.get(name_or_tag).or_else(|| self.get_by_tag(name_or_tag))
    }

    /// Check if an element exists.
    pub fn contains(&self, name: &str) -> bool {
        self.elements.contains_key(&name.to_lowercase())
    }

    /// All registered constructor names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.elements.values().map(|s| &*s.name).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build an element by constructor name or tag.
    pub fn build<I>(&self, name: &str, markup: I) -> Result<Node, CatalogueError>
    where
        I: IntoIterator,
        I::Item: Into<Markup>,
    {
        let spec = self
            .resolve(name)
            .ok_or_else(|| CatalogueError::UnknownElement(name.to_string()))?;

        Ok(spec.build(markup)?)
    }
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Element already registered: {0}")]
    DuplicateElement(String),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagtree_core::{attr, text, AttrValue, NO_MARKUP};

    #[test]
    fn holds_whole_catalogue() {
        let registry = ElementRegistry::html();

        assert_eq!(registry.len(), ELEMENTS.len());
        assert!(registry.contains("Paragraph"));
        assert!(registry.contains("paragraph"));
    }

    #[test]
    fn leaves_out_obsolete_elements() {
        let registry = ElementRegistry::html_filtered(false);

        assert!(!registry.contains("MenuItem"));
        assert!(!registry.contains("Shadow"));
        assert!(registry.contains("Div"));
        assert!(registry.len() < ELEMENTS.len());
    }

    #[test]
    fn builds_by_name_or_tag() {
        let registry = ElementRegistry::html();

        let by_name = registry.build("Table", NO_MARKUP).unwrap();
        let by_tag = registry.build("table", NO_MARKUP).unwrap();
        assert_eq!(by_name, by_tag);

        let p = registry.build("p", [text("hi")]).unwrap();
        assert_eq!(p.tag(), Some("p"));
    }

    #[test]
    fn resolve_prefers_constructor_name() {
        let registry = ElementRegistry::html();

        // "Header" is the <header> constructor, not <h1>-<h6>
        assert_eq!(registry.resolve("header").map(|s| &*s.tag), Some("header"));
        assert_eq!(registry.resolve("h1").map(|s| &*s.name), Some("Header1"));
    }

    #[test]
    fn unknown_element_is_an_error() {
        let registry = ElementRegistry::html();
        let err = registry.build("Blink", NO_MARKUP).unwrap_err();

        assert!(matches!(err, CatalogueError::UnknownElement(ref n) if n == "Blink"));
    }

    #[test]
    fn build_surfaces_tree_errors() {
        let registry = ElementRegistry::html();
        let err = registry.build("Image", [text("alt")]).unwrap_err();

        assert!(matches!(err, CatalogueError::Tree(TreeError::VoidElement { .. })));
        assert_eq!(err.to_string(), "Void element <img> cannot contain child nodes");
    }

    #[test]
    fn registers_custom_elements() {
        let mut registry = ElementRegistry::html();
        registry
            .register(TagSpec::new("Widget", "x-widget", false))
            .unwrap();

        let node = registry.build("widget", [attr("id", "w")]).unwrap();
        let el = node.as_element().unwrap();
        assert_eq!(el.tag(), "x-widget");
        assert_eq!(el.attribute("id"), Some(&AttrValue::from("w")));
    }

    #[test]
    fn rejects_duplicate_registration() {
        let mut registry = ElementRegistry::html();

        let by_name = registry.register(TagSpec::new("div", "x-div", false));
        assert!(matches!(by_name, Err(CatalogueError::DuplicateElement(_))));

        let by_tag = registry.register(TagSpec::new("Para", "p", false));
        assert!(matches!(by_tag, Err(CatalogueError::DuplicateElement(ref t)) if t == "p"));
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = ElementRegistry::new();
        registry.register(TagSpec::new("Zed", "x-zed", false)).unwrap();
        registry.register(TagSpec::new("Alpha", "x-alpha", true)).unwrap();

        assert_eq!(registry.names(), vec!["Alpha", "Zed"]);
    }
}
