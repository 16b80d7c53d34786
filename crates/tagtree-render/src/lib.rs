//! HTML serializer for tagtree node trees.
//!
//! Turns a finished tree into an HTML string with escaping, void-element
//! handling and optional pretty printing.

pub mod escape;
pub mod renderer;

pub use escape::{escape_attribute, escape_text};
pub use renderer::{render, RenderError, RenderOptions, Renderer, VoidStyle};
