//! HTML element constructor catalogue.
//!
//! Provides one constructor per HTML element, generated from a single table,
//! plus a name-keyed registry for building elements at runtime and a loader
//! for declarative tree blueprints.

pub mod audit;
pub mod blueprint;
pub mod catalogue;
pub mod registry;

pub use audit::{audit_void_flags, is_void_tag, missing_void_tags, VoidMismatch, HTML_VOID_ELEMENTS};
pub use blueprint::{Blueprint, BlueprintError, ElementBlueprint, Format};
pub use catalogue::*;
pub use registry::{CatalogueError, ElementRegistry};
