//! HTML string renderer.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tagtree_core::{AttrValue, Element, Node};

use crate::escape::{escape_attribute, escape_text};

/// Elements whose text is emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Elements whose content keeps its whitespace, so pretty printing leaves
/// everything inside them alone.
const WHITESPACE_SENSITIVE_ELEMENTS: &[&str] = &["pre", "textarea", "script", "style"];

/// How void elements are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoidStyle {
    /// `<br>`
    #[default]
    Html,
    /// `<br />`
    Xhtml,
}

/// Options for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Put each node on its own indented line
    pub pretty: bool,

    /// Spaces per nesting level when pretty printing
    pub indent: usize,

    /// How void elements are closed
    pub void_style: VoidStyle,

    /// Prefix documents with `<!DOCTYPE html>`
    pub doctype: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            void_style: VoidStyle::Html,
            doctype: true,
        }
    }
}

/// Errors that can occur during rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    #[error("Invalid attribute name {name:?} on <{tag}>")]
    InvalidAttributeName { tag: String, name: String },

    #[error("Text inside <{tag}> contains its closing tag")]
    UnsafeRawText { tag: String },
}

/// What the enclosing element means for its content.
#[derive(Debug, Clone, Copy, Default)]
struct Context<'a> {
    /// Set inside `script`/`style`: text is written verbatim
    raw_tag: Option<&'a str>,

    /// Set inside whitespace-sensitive elements: no pretty-print breaks
    preserve: bool,
}

/// Renders node trees to HTML strings.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

/// Render a node with default options.
pub fn render(node: &Node) -> Result<String, RenderError> {
    Renderer::default().render(node)
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a node (and its subtree) to HTML.
    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_node(node, 0, Context::default(), &mut out)?;
        Ok(out)
    }

    /// Render a node as a complete document, adding the doctype if enabled.
    pub fn render_document(&self, node: &Node) -> Result<String, RenderError> {
        let body = self.render(node)?;
        if !self.options.doctype {
            return Ok(body);
        }

        let separator = if self.options.pretty { "\n" } else { "" };
        Ok(format!("<!DOCTYPE html>{separator}{body}"))
    }

    fn write_node(
        &self,
        node: &Node,
        depth: usize,
        parent: Context<'_>,
        out: &mut String,
    ) -> Result<(), RenderError> {
        match node {
            Node::Text(text) => {
                if !parent.preserve {
                    self.break_line(depth, out);
                }
                write_text(text.as_str(), parent, out)
            }
            Node::Element(el) => self.write_element(el, depth, parent, out),
        }
    }

    fn write_element(
        &self,
        el: &Element,
        depth: usize,
        parent: Context<'_>,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let tag = el.tag();
        if !is_valid_tag_name(tag) {
            return Err(RenderError::InvalidTagName(tag.to_string()));
        }

        tracing::trace!(tag, depth, "Rendering element");

        if !parent.preserve {
            self.break_line(depth, out);
        }
        out.push('<');
        out.push_str(tag);
        write_attributes(el, out)?;

        if el.is_void() {
            out.push_str(match self.options.void_style {
                VoidStyle::Html => ">",
                VoidStyle::Xhtml => " />",
            });
            return Ok(());
        }
        out.push('>');

        let is_raw = RAW_TEXT_ELEMENTS
            .iter()
            .any(|raw_tag| raw_tag.eq_ignore_ascii_case(tag));
        let context = Context {
            raw_tag: is_raw.then_some(tag),
            preserve: parent.preserve
                || WHITESPACE_SENSITIVE_ELEMENTS
                    .iter()
                    .any(|ws_tag| ws_tag.eq_ignore_ascii_case(tag)),
        };

        if let Some(text) = el.text() {
            write_text(text, context, out)?;
        }

        for child in el.children() {
            self.write_node(child, depth + 1, context, out)?;
        }
        if !el.children().is_empty() && !context.preserve {
            self.break_line(depth, out);
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }

    /// Start a new indented line when pretty printing.
    fn break_line(&self, depth: usize, out: &mut String) {
        if !self.options.pretty {
            return;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.extend(std::iter::repeat(' ').take(depth * self.options.indent));
    }
}

/// Write text, escaped unless the enclosing element takes raw text.
fn write_text(text: &str, context: Context<'_>, out: &mut String) -> Result<(), RenderError> {
    let Some(tag) = context.raw_tag else {
        out.push_str(&escape_text(text));
        return Ok(());
    };

    let closing = format!("</{}", tag.to_ascii_lowercase());
    if text.to_ascii_lowercase().contains(&closing) {
        return Err(RenderError::UnsafeRawText {
            tag: tag.to_string(),
        });
    }

    out.push_str(text);
    Ok(())
}

/// Write attributes in insertion order. Styles are folded into the `style`
/// attribute, after any value it already holds.
fn write_attributes(el: &Element, out: &mut String) -> Result<(), RenderError> {
    let styles: Vec<String> = el
        .styles()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect();
    let mut wrote_style = false;

    for (name, value) in el.attributes() {
        if !is_valid_attribute_name(name) {
            return Err(RenderError::InvalidAttributeName {
                tag: el.tag().to_string(),
                name: name.to_string(),
            });
        }

        if name == "style" && !styles.is_empty() {
            let base = value.as_str().unwrap_or("").trim().trim_end_matches(';');
            let merged = if base.is_empty() {
                styles.join("; ")
            } else {
                format!("{}; {}", base, styles.join("; "))
            };
            push_attribute(out, name, &merged);
            wrote_style = true;
            continue;
        }

        match value {
            AttrValue::String(s) => push_attribute(out, name, s),
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Bool(false) => {}
        }
    }

    if !wrote_style && !styles.is_empty() {
        push_attribute(out, "style", &styles.join("; "));
    }

    Ok(())
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

fn is_valid_tag_name(tag: &str) -> bool {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9]*(-[A-Za-z0-9]+)*$").expect("Invalid tag name regex")
    });
    RE.is_match(tag)
}

fn is_valid_attribute_name(name: &str) -> bool {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z_:@][A-Za-z0-9_:.@-]*$").expect("Invalid attribute name regex")
    });
    RE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagtree_core::{
        attr, bool_attr, child, element, style, text, text_content, NO_MARKUP,
    };
    use tagtree_elements::{
        code, div, html, image, input, line_break, paragraph, preformatted, script, span,
        strong, style_element, text_area, title,
    };

    #[test]
    fn renders_nested_elements() {
        let node = div([attr("class", "x"), paragraph([text("hi")]).into()]).unwrap();

        assert_eq!(render(&node).unwrap(), r#"<div class="x"><p>hi</p></div>"#);
    }

    #[test]
    fn renders_void_elements_without_closing_tag() {
        let node = image([attr("src", "/a.png"), attr("alt", "")]).unwrap();
        assert_eq!(render(&node).unwrap(), r#"<img src="/a.png" alt="">"#);

        let xhtml = Renderer::new(RenderOptions {
            void_style: VoidStyle::Xhtml,
            ..Default::default()
        });
        assert_eq!(xhtml.render(&line_break(NO_MARKUP).unwrap()).unwrap(), "<br />");
    }

    #[test]
    fn renders_boolean_attributes() {
        let node = input([
            attr("type", "checkbox"),
            bool_attr("checked", true),
            bool_attr("disabled", false),
        ])
        .unwrap();

        assert_eq!(render(&node).unwrap(), r#"<input type="checkbox" checked>"#);
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node = paragraph([attr("title", r#"say "hi""#), text("a < b & c").into()]).unwrap();

        assert_eq!(
            render(&node).unwrap(),
            r#"<p title="say &quot;hi&quot;">a &lt; b &amp; c</p>"#
        );
    }

    #[test]
    fn script_content_is_raw() {
        let node = script([text_content("if (a < b) { go(); }")]).unwrap();
        assert_eq!(render(&node).unwrap(), "<script>if (a < b) { go(); }</script>");
    }

    #[test]
    fn rejects_raw_text_that_closes_its_element() {
        let node = script([text_content("x = 1;</script><img src=x onerror=alert(1)>")]).unwrap();
        assert_eq!(
            render(&node),
            Err(RenderError::UnsafeRawText {
                tag: "script".to_string()
            })
        );

        let child = style_element([text("a {}</STYLE ><p>")]).unwrap();
        assert_eq!(
            render(&child),
            Err(RenderError::UnsafeRawText {
                tag: "style".to_string()
            })
        );

        let harmless = script([text_content("if (a </ b) {}")]).unwrap();
        assert_eq!(render(&harmless).unwrap(), "<script>if (a </ b) {}</script>");
    }

    #[test]
    fn text_content_precedes_children() {
        let node = paragraph([
            text_content("Hello "),
            child(strong([text("world")]).unwrap()),
        ])
        .unwrap();

        assert_eq!(render(&node).unwrap(), "<p>Hello <strong>world</strong></p>");
    }

    #[test]
    fn folds_styles_into_style_attribute() {
        let node = span([style("color", "red"), style("margin", "0")]).unwrap();
        assert_eq!(
            render(&node).unwrap(),
            r#"<span style="color: red; margin: 0"></span>"#
        );

        let merged = div([
            attr("id", "a"),
            attr("style", "display: block;"),
            style("color", "red"),
        ])
        .unwrap();
        assert_eq!(
            render(&merged).unwrap(),
            r#"<div id="a" style="display: block; color: red"></div>"#
        );
    }

    #[test]
    fn renders_text_nodes() {
        assert_eq!(render(&text("a&b")).unwrap(), "a&amp;b");
        assert_eq!(render(&text("")).unwrap(), "");
    }

    #[test]
    fn rejects_invalid_names() {
        let bad_tag = element("bad tag", false, NO_MARKUP).unwrap();
        assert_eq!(
            render(&bad_tag),
            Err(RenderError::InvalidTagName("bad tag".to_string()))
        );

        let bad_attr = div([attr("on\"click", "x")]).unwrap();
        assert!(matches!(
            render(&bad_attr),
            Err(RenderError::InvalidAttributeName { .. })
        ));
    }

    #[test]
    fn accepts_custom_element_tags() {
        let node = element("x-card", false, [attr("data-id", "1")]).unwrap();
        assert_eq!(render(&node).unwrap(), r#"<x-card data-id="1"></x-card>"#);
    }

    #[test]
    fn pretty_prints_with_indentation() {
        let node = div([paragraph([text("hi")]), line_break(NO_MARKUP)]).unwrap();
        let renderer = Renderer::new(RenderOptions {
            pretty: true,
            ..Default::default()
        });

        assert_eq!(
            renderer.render(&node).unwrap(),
            "<div>\n  <p>\n    hi\n  </p>\n  <br>\n</div>"
        );
    }

    #[test]
    fn pretty_print_keeps_whitespace_sensitive_content() {
        let renderer = Renderer::new(RenderOptions {
            pretty: true,
            ..Default::default()
        });

        let pre = div([preformatted([child(text("a")), code([text("  b")]).into()])]).unwrap();
        assert_eq!(
            renderer.render(&pre).unwrap(),
            "<div>\n  <pre>a<code>  b</code></pre>\n</div>"
        );

        let area = text_area([text("line")]).unwrap();
        assert_eq!(renderer.render(&area).unwrap(), "<textarea>line</textarea>");

        let js = script([text("go();")]).unwrap();
        assert_eq!(renderer.render(&js).unwrap(), "<script>go();</script>");
    }

    #[test]
    fn renders_document_with_doctype() {
        let node = html([title([text_content("Docs")])]).unwrap();

        let with_doctype = Renderer::default().render_document(&node).unwrap();
        assert_eq!(
            with_doctype,
            "<!DOCTYPE html><html><title>Docs</title></html>"
        );

        let without = Renderer::new(RenderOptions {
            doctype: false,
            ..Default::default()
        });
        assert_eq!(
            without.render_document(&node).unwrap(),
            "<html><title>Docs</title></html>"
        );
    }
}
