//! Void flag audit against the HTML Living Standard.

use std::fmt;

use crate::catalogue::TagSpec;

/// Elements the HTML Living Standard defines as void.
///
/// `param` is obsolete but still parsed as void by browsers.
pub const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `tag` is a standard void element.
pub fn is_void_tag(tag: &str) -> bool {
    HTML_VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag))
}

/// A table entry whose void flag disagrees with the standard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoidMismatch {
    pub name: String,
    pub tag: String,
    pub declared: bool,
    pub expected: bool,
}

impl fmt::Display for VoidMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (<{}>) is declared {} but the standard says {}",
            self.name,
            self.tag,
            describe(self.declared),
            describe(self.expected)
        )
    }
}

fn describe(void: bool) -> &'static str {
    if void {
        "void"
    } else {
        "non-void"
    }
}

/// Cross-check every entry's void flag.
pub fn audit_void_flags<'a>(specs: impl IntoIterator<Item = &'a TagSpec>) -> Vec<VoidMismatch> {
    specs
        .into_iter()
        .filter_map(|spec| {
            let expected = is_void_tag(&spec.tag);
            (spec.void != expected).then(|| VoidMismatch {
                name: spec.name.to_string(),
                tag: spec.tag.to_string(),
                declared: spec.void,
                expected,
            })
        })
        .collect()
}

/// Standard void tags that no entry covers.
pub fn missing_void_tags<'a>(specs: impl IntoIterator<Item = &'a TagSpec>) -> Vec<&'static str> {
    let tags: Vec<String> = specs.into_iter().map(|s| s.tag.to_lowercase()).collect();
    HTML_VOID_ELEMENTS
        .iter()
        .copied()
        .filter(|void| !tags.iter().any(|t| t == void))
        .collect()
}
