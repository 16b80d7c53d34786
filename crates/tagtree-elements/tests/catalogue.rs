//! End-to-end checks of the element catalogue through its public API.

use pretty_assertions::assert_eq;
use tagtree_core::{attr, bool_attr, style, text, AttrValue, Content, Markup, TreeError, NO_MARKUP};
use tagtree_elements::{
    anchor, div, image, line_break, lookup, paragraph, table, table_data, table_row,
    ElementRegistry, ELEMENTS,
};

#[test]
fn every_entry_builds_a_bare_element() {
    let registry = ElementRegistry::html();

    for spec in ELEMENTS {
        let node = registry.build(&spec.name, NO_MARKUP).unwrap();
        let el = node.as_element().unwrap();

        assert_eq!(el.tag(), spec.tag, "{}", spec.name);
        assert_eq!(el.is_void(), spec.void, "{}", spec.name);
        assert!(el.children().is_empty(), "{}", spec.name);
        assert_eq!(el.attributes().count(), 0, "{}", spec.name);
    }
}

#[test]
fn div_with_class_and_paragraph() {
    let node = div([attr("class", "x"), paragraph([text("hi")]).into()]).unwrap();

    let div = node.as_element().unwrap();
    assert_eq!(div.tag(), "div");
    assert_eq!(div.attributes().collect::<Vec<_>>(), vec![("class", &AttrValue::from("x"))]);
    assert_eq!(div.children().len(), 1);

    let p = div.children()[0].as_element().unwrap();
    assert_eq!(p.tag(), "p");
    assert_eq!(p.children().len(), 1);
    assert_eq!(p.children()[0].as_text().unwrap().as_str(), "hi");
}

#[test]
fn attribute_order_decides_final_value() {
    let ab = anchor([attr("id", "a"), attr("id", "b")]).unwrap();
    let ba = anchor([attr("id", "b"), attr("id", "a")]).unwrap();

    assert_eq!(ab.as_element().unwrap().attribute("id"), Some(&AttrValue::from("b")));
    assert_eq!(ba.as_element().unwrap().attribute("id"), Some(&AttrValue::from("a")));
}

#[test]
fn image_rejects_children() {
    let err = image([attr("src", "/a.png"), text("fallback").into()]).unwrap_err();

    assert_eq!(
        err,
        TreeError::VoidElement {
            tag: "img".to_string(),
            content: Content::Child,
        }
    );
}

#[test]
fn void_elements_take_attributes() {
    let br = line_break([attr("class", "clear")]).unwrap();
    assert!(br.as_element().unwrap().is_void());

    let img = image([attr("alt", ""), bool_attr("hidden", true), style("width", "4px")]).unwrap();
    let el = img.as_element().unwrap();
    assert_eq!(el.attribute("alt"), Some(&AttrValue::from("")));
    assert_eq!(el.style("width"), Some("4px"));
}

#[test]
fn builds_nested_table() {
    let rows: Vec<Markup> = (1..=3)
        .map(|i| table_row([table_data([text(i.to_string())])]).into())
        .collect();
    let node = table(rows).unwrap();

    let table = node.as_element().unwrap();
    assert_eq!(table.children().len(), 3);
    for (i, row) in table.children().iter().enumerate() {
        let cell = row.as_element().unwrap().children()[0].as_element().unwrap();
        assert_eq!(cell.tag(), "td");
        assert_eq!(cell.children(), &[text((i + 1).to_string())]);
    }
}

#[test]
fn static_and_dynamic_paths_agree() {
    let registry = ElementRegistry::html();
    let markup = || vec![attr("href", "#top"), text("Top").into()];

    let by_fn = anchor(markup()).unwrap();
    let by_name = registry.build("Anchor", markup()).unwrap();
    let by_spec = lookup("Anchor").unwrap().build(markup()).unwrap();

    assert_eq!(by_fn, by_name);
    assert_eq!(by_fn, by_spec);
}

#[test]
fn constructions_on_separate_threads_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || div([attr("id", format!("d{i}"))]).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let node = handle.join().unwrap();
        assert_eq!(
            node.as_element().unwrap().attribute("id"),
            Some(&AttrValue::from(format!("d{i}")))
        );
    }
}
