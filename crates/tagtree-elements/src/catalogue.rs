//! The HTML element catalogue.
//!
//! One table drives both the [`ELEMENTS`] data and a snake_case constructor
//! per entry. Every constructor is the element factory called with a fixed
//! `(tag, void)` pair; the caller's markup passes through unchanged.
//!
//! Void flags follow the HTML Living Standard. Legacy tags kept for
//! compatibility are marked `obsolete`.

use std::borrow::Cow;

use tagtree_core::{element, Markup, Node, TreeError};

/// Base URL of the MDN element reference.
const MDN_ELEMENT_REFERENCE: &str = "https://developer.mozilla.org/en-US/docs/Web/HTML/Element";

/// One row of the element table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    /// Logical constructor name (e.g. "Anchor")
    pub name: Cow<'static, str>,

    /// Tag emitted in markup (e.g. "a")
    pub tag: Cow<'static, str>,

    /// Element can never have children or text
    pub void: bool,

    /// Legacy tag no longer in the HTML standard
    pub obsolete: bool,
}

impl TagSpec {
    /// Create an entry for a custom element.
    pub fn new(name: impl Into<String>, tag: impl Into<String>, void: bool) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            tag: Cow::Owned(tag.into()),
            void,
            obsolete: false,
        }
    }

    /// Build a node for this entry.
    pub fn build<I>(&self, markup: I) -> Result<Node, TreeError>
    where
        I: IntoIterator,
        I::Item: Into<Markup>,
    {
        element(&*self.tag, self.void, markup)
    }

    /// MDN reference page for this tag.
    pub fn reference_url(&self) -> String {
        format!("{}/{}", MDN_ELEMENT_REFERENCE, self.tag)
    }
}

/// Look up a table entry by constructor name (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static TagSpec> {
    ELEMENTS.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}

/// Look up a table entry by tag (case-insensitive).
pub fn lookup_tag(tag: &str) -> Option<&'static TagSpec> {
    ELEMENTS.iter().find(|spec| spec.tag.eq_ignore_ascii_case(tag))
}

macro_rules! html_elements {
    (@void) => { false };
    (@void void $($rest:ident)*) => { true };
    (@void $skip:ident $($rest:ident)*) => { html_elements!(@void $($rest)*) };

    (@obsolete) => { false };
    (@obsolete obsolete $($rest:ident)*) => { true };
    (@obsolete $skip:ident $($rest:ident)*) => { html_elements!(@obsolete $($rest)*) };

    (
        $(
            $(#[$doc:meta])*
            $name:ident => $func:ident($tag:literal $(, $flag:ident)*);
        )*
    ) => {
        /// Every element in the catalogue, in declaration order.
        pub static ELEMENTS: &[TagSpec] = &[
            $(
                TagSpec {
                    name: Cow::Borrowed(stringify!($name)),
                    tag: Cow::Borrowed($tag),
                    void: html_elements!(@void $($flag)*),
                    obsolete: html_elements!(@obsolete $($flag)*),
                },
            )*
        ];

        $(
            $(#[$doc])*
            pub fn $func<I>(markup: I) -> Result<Node, TreeError>
            where
                I: IntoIterator,
                I::Item: Into<Markup>,
            {
                element($tag, html_elements!(@void $($flag)*), markup)
            }
        )*

        #[cfg(test)]
        pub(crate) static CONSTRUCTORS: &[(&str, fn(Vec<Markup>) -> Result<Node, TreeError>)] = &[
            $( (stringify!($name), $func::<Vec<Markup>>), )*
        ];
    };
}

html_elements! {
    /// Hyperlink (`<a>`).
    Anchor => anchor("a");
    /// Abbreviation or acronym (`<abbr>`).
    Abbreviation => abbreviation("abbr");
    /// Contact information for the nearest article or body (`<address>`).
    Address => address("address");
    /// Clickable region inside an image map (`<area>`).
    Area => area("area", void);
    /// Self-contained composition (`<article>`).
    Article => article("article");
    /// Content only tangentially related to its surroundings (`<aside>`).
    Aside => aside("aside");
    /// Embedded sound (`<audio>`).
    Audio => audio("audio");
    /// Text drawn to attention without extra importance (`<b>`).
    Bold => bold("b");
    /// Base URL for relative URLs in the document (`<base>`).
    Base => base("base", void);
    /// Text isolated from surrounding bidirectional formatting (`<bdi>`).
    BidirectionalIsolation => bidirectional_isolation("bdi");
    /// Overrides the current text direction (`<bdo>`).
    BidirectionalOverride => bidirectional_override("bdo");
    /// Extended quotation (`<blockquote>`).
    BlockQuote => block_quote("blockquote");
    /// Document body (`<body>`).
    Body => body("body");
    /// Line break (`<br>`).
    Break => line_break("br", void);
    /// Clickable button (`<button>`).
    Button => button("button");
    /// Scriptable drawing surface (`<canvas>`).
    Canvas => canvas("canvas");
    /// Table title (`<caption>`).
    Caption => caption("caption");
    /// Title of a cited work (`<cite>`).
    Citation => citation("cite");
    /// Fragment of computer code (`<code>`).
    Code => code("code");
    /// Column within a column group (`<col>`).
    Column => column("col", void);
    /// Group of table columns (`<colgroup>`).
    ColumnGroup => column_group("colgroup");
    /// Content paired with a machine-readable value (`<data>`).
    Data => data("data");
    /// Predefined options for an input (`<datalist>`).
    DataList => data_list("datalist");
    /// Description of a term in a description list (`<dd>`).
    Description => description("dd");
    /// Text removed from the document (`<del>`).
    DeletedText => deleted_text("del");
    /// Disclosure widget (`<details>`).
    Details => details("details");
    /// Term being defined (`<dfn>`).
    Definition => definition("dfn");
    /// Dialog box or modal (`<dialog>`).
    Dialog => dialog("dialog");
    /// Generic flow container (`<div>`).
    Div => div("div");
    /// Description list (`<dl>`).
    DescriptionList => description_list("dl");
    /// Term in a description list (`<dt>`).
    DefinitionTerm => definition_term("dt");
    /// Custom element definition from the withdrawn Web Components draft (`<element>`).
    Element => legacy_element("element", obsolete);
    /// Stressed emphasis (`<em>`).
    Emphasis => emphasis("em");
    /// External embedded content (`<embed>`).
    Embed => embed("embed", void);
    /// Group of form controls (`<fieldset>`).
    FieldSet => field_set("fieldset");
    /// Caption of a figure (`<figcaption>`).
    FigureCaption => figure_caption("figcaption");
    /// Self-contained figure (`<figure>`).
    Figure => figure("figure");
    /// Footer of a section or page (`<footer>`).
    Footer => footer("footer");
    /// Form for submitting information (`<form>`).
    Form => form("form");
    /// Document metadata container (`<head>`).
    Head => head("head");
    /// Introductory content (`<header>`).
    Header => header("header");
    /// Heading grouped with related content (`<hgroup>`).
    HeadingsGroup => headings_group("hgroup");
    /// Thematic break (`<hr>`).
    HorizontalRule => horizontal_rule("hr", void);
    /// Document root (`<html>`).
    Html => html("html");
    /// Alternate voice or mood (`<i>`).
    Italic => italic("i");
    /// Nested browsing context (`<iframe>`).
    InlineFrame => inline_frame("iframe");
    /// Embedded image (`<img>`).
    Image => image("img", void);
    /// Form input control (`<input>`).
    Input => input("input", void);
    /// Text added to the document (`<ins>`).
    InsertedText => inserted_text("ins");
    /// User keyboard input (`<kbd>`).
    KeyboardInput => keyboard_input("kbd");
    /// Caption for a form control (`<label>`).
    Label => label("label");
    /// Caption for a fieldset (`<legend>`).
    Legend => legend("legend");
    /// Item in a list (`<li>`).
    ListItem => list_item("li");
    /// Relationship to an external resource (`<link>`).
    Link => link("link", void);
    /// Dominant content of the body (`<main>`).
    Main => main("main");
    /// Image map (`<map>`).
    Map => map("map");
    /// Highlighted text (`<mark>`).
    Mark => mark("mark");
    /// Semantic list of commands (`<menu>`).
    Menu => menu("menu");
    /// Command in a popup menu (`<menuitem>`).
    MenuItem => menu_item("menuitem", obsolete);
    /// Metadata not covered by other head elements (`<meta>`).
    Meta => meta("meta", void);
    /// Scalar value within a known range (`<meter>`).
    Meter => meter("meter");
    /// Navigation links (`<nav>`).
    Navigation => navigation("nav");
    /// Content for browsers without frame support (`<noframes>`).
    NoFrames => no_frames("noframes", obsolete);
    /// Content shown when scripting is disabled (`<noscript>`).
    NoScript => no_script("noscript");
    /// External resource (`<object>`).
    Object => object("object");
    /// Ordered list (`<ol>`).
    OrderedList => ordered_list("ol");
    /// Group of options in a select (`<optgroup>`).
    OptionsGroup => options_group("optgroup");
    /// Option in a select or datalist (`<option>`).
    Option => option("option");
    /// Result of a calculation or user action (`<output>`).
    Output => output("output");
    /// Paragraph (`<p>`).
    Paragraph => paragraph("p");
    /// Parameter for an object (`<param>`).
    Parameter => parameter("param", void, obsolete);
    /// Container of image sources (`<picture>`).
    Picture => picture("picture");
    /// Preformatted text (`<pre>`).
    Preformatted => preformatted("pre");
    /// Completion progress of a task (`<progress>`).
    Progress => progress("progress");
    /// Inline quotation (`<q>`).
    Quote => quote("q");
    /// Fallback parenthesis for ruby annotations (`<rp>`).
    RubyParenthesis => ruby_parenthesis("rp");
    /// Ruby annotation text (`<rt>`).
    RubyText => ruby_text("rt");
    /// Semantic annotation container for ruby text (`<rtc>`).
    Rtc => ruby_text_container("rtc", obsolete);
    /// Ruby annotation (`<ruby>`).
    Ruby => ruby("ruby");
    /// Text that is no longer accurate (`<s>`).
    Strikethrough => strikethrough("s");
    /// Sample program output (`<samp>`).
    Sample => sample("samp");
    /// Embedded script (`<script>`).
    Script => script("script");
    /// Generic document section (`<section>`).
    Section => section("section");
    /// Option picker (`<select>`).
    Select => select("select");
    /// Shadow DOM insertion point from Shadow DOM v0 (`<shadow>`).
    Shadow => shadow("shadow", obsolete);
    /// Placeholder inside a web component (`<slot>`).
    Slot => slot("slot");
    /// Side comments and small print (`<small>`).
    Small => small("small");
    /// Media resource for picture, audio or video (`<source>`).
    Source => source("source", void);
    /// Generic inline container (`<span>`).
    Span => span("span");
    /// Strong importance (`<strong>`).
    Strong => strong("strong");
    /// Style sheet (`<style>`).
    Style => style_element("style");
    /// Subscript (`<sub>`).
    Subscript => subscript("sub");
    /// Summary of a details element (`<summary>`).
    Summary => summary("summary");
    /// Superscript (`<sup>`).
    Superscript => superscript("sup");
    /// Tabular data (`<table>`).
    Table => table("table");
    /// Body rows of a table (`<tbody>`).
    TableBody => table_body("tbody");
    /// Data cell (`<td>`).
    TableData => table_data("td");
    /// Inert HTML fragment (`<template>`).
    Template => template("template");
    /// Multi-line text input (`<textarea>`).
    TextArea => text_area("textarea");
    /// Footer rows of a table (`<tfoot>`).
    TableFoot => table_foot("tfoot");
    /// Header cell (`<th>`).
    TableHeader => table_header("th");
    /// Header rows of a table (`<thead>`).
    TableHead => table_head("thead");
    /// Specific period in time (`<time>`).
    Time => time("time");
    /// Document title (`<title>`).
    Title => title("title");
    /// Table row (`<tr>`).
    TableRow => table_row("tr");
    /// Timed text track for media (`<track>`).
    Track => track("track", void);
    /// Unarticulated annotation (`<u>`).
    Underline => underline("u");
    /// Unordered list (`<ul>`).
    UnorderedList => unordered_list("ul");
    /// Variable name (`<var>`).
    Variable => variable("var");
    /// Embedded video (`<video>`).
    Video => video("video");
    /// Line break opportunity (`<wbr>`).
    WordBreakOpportunity => word_break_opportunity("wbr", void);
    /// Level 1 section heading (`<h1>`).
    Header1 => header1("h1");
    /// Level 2 section heading (`<h2>`).
    Header2 => header2("h2");
    /// Level 3 section heading (`<h3>`).
    Header3 => header3("h3");
    /// Level 4 section heading (`<h4>`).
    Header4 => header4("h4");
    /// Level 5 section heading (`<h5>`).
    Header5 => header5("h5");
    /// Level 6 section heading (`<h6>`).
    Header6 => header6("h6");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use tagtree_core::{attr, text, AttrValue, NO_MARKUP};

    #[test]
    fn every_constructor_matches_its_table_row() {
        assert_eq!(CONSTRUCTORS.len(), ELEMENTS.len());

        for ((name, build), spec) in CONSTRUCTORS.iter().zip(ELEMENTS) {
            assert_eq!(*name, spec.name);

            let node = build(Vec::new()).unwrap();
            let el = node.as_element().unwrap();
            assert_eq!(el.tag(), spec.tag, "{}", spec.name);
            assert_eq!(el.is_void(), spec.void, "{}", spec.name);
            assert!(el.children().is_empty());
            assert_eq!(el.attributes().count(), 0);
        }
    }

    #[test]
    fn names_and_tags_are_unique() {
        let names: HashSet<_> = ELEMENTS.iter().map(|s| s.name.to_lowercase()).collect();
        let tags: HashSet<_> = ELEMENTS.iter().map(|s| &*s.tag).collect();

        assert_eq!(names.len(), ELEMENTS.len());
        assert_eq!(tags.len(), ELEMENTS.len());
    }

    #[test]
    fn looks_up_by_name_and_tag() {
        let anchor = lookup("anchor").unwrap();
        assert_eq!(anchor.tag, "a");
        assert!(!anchor.void);

        let br = lookup_tag("BR").unwrap();
        assert_eq!(br.name, "Break");
        assert!(br.void);

        assert!(lookup("Blink").is_none());
    }

    #[test]
    fn marks_legacy_tags_obsolete() {
        for tag in ["element", "menuitem", "noframes", "rtc", "shadow", "param"] {
            assert!(lookup_tag(tag).unwrap().obsolete, "{tag}");
        }
        assert!(!lookup_tag("div").unwrap().obsolete);
    }

    #[test]
    fn image_and_link_are_void() {
        assert!(lookup("Image").unwrap().void);
        assert!(lookup("Link").unwrap().void);
    }

    #[test]
    fn named_constructor_passes_markup_through() {
        let node = anchor([attr("href", "/docs"), text("Docs").into()]).unwrap();
        let el = node.as_element().unwrap();

        assert_eq!(el.tag(), "a");
        assert_eq!(el.attribute("href"), Some(&AttrValue::from("/docs")));
        assert_eq!(el.children(), &[text("Docs")]);
    }

    #[test]
    fn tag_spec_build_uses_its_tag() {
        let spec = TagSpec::new("Widget", "x-widget", false);
        let node = spec.build(NO_MARKUP).unwrap();

        assert_eq!(node.tag(), Some("x-widget"));
        assert_eq!(
            spec.reference_url(),
            "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/x-widget"
        );
    }
}
