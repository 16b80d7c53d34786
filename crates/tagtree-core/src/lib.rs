//! Markup node model and element factory.
//!
//! This crate provides the generic tree node used by the element catalogue,
//! the modifier capability that mutates it, and the single factory that every
//! element constructor funnels through.

pub mod factory;
pub mod modifier;
pub mod node;

pub use factory::{element, text};
pub use modifier::{
    attr, bool_attr, child, class, custom, style, text_content, Markup, Modifier, NO_MARKUP,
};
pub use node::{AttrValue, Content, Element, Node, Text, TreeError};
