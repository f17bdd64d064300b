use crate::*;

fn sample() -> HtmlDocument {
    let mut doc = HtmlDocument::new("");
    doc.set_body_markup(
        r#"<div id="outer" class="box wide"><p id="p1" title="a, b">one</p><p id="p2"><span id="s1" class="x"/></p></div><ul><li id="l1"/><li id="l2"/></ul>"#,
    )
    .unwrap();
    doc
}

fn ids(doc: &HtmlDocument, selector: &str) -> Vec<String> {
    doc.query_selector_all(selector)
        .unwrap()
        .into_iter()
        .filter_map(|n| doc.attribute(n, "id").map(str::to_string))
        .collect()
}

#[test]
fn compound_selectors() {
    let doc = sample();
    assert_eq!(ids(&doc, "div.box.wide#outer"), ["outer"]);
    assert_eq!(ids(&doc, "div.box.narrow"), Vec::<String>::new());
    assert_eq!(ids(&doc, "P"), ["p1", "p2"]);
}

#[test]
fn combinators() {
    let doc = sample();
    assert_eq!(ids(&doc, "div span"), ["s1"]);
    assert_eq!(ids(&doc, "div > span"), Vec::<String>::new());
    assert_eq!(ids(&doc, "p + p"), ["p2"]);
    assert_eq!(ids(&doc, "#p1 ~ p > .x"), ["s1"]);
}

#[test]
fn attribute_selectors_and_lists() {
    let doc = sample();
    assert_eq!(ids(&doc, r#"[title="a, b"], li"#), ["p1", "l1", "l2"]);
    assert_eq!(ids(&doc, "[title^=a]"), ["p1"]);
    assert_eq!(ids(&doc, "[class~=wide]"), ["outer"]);
}

#[test]
fn structural_pseudo_classes() {
    let doc = sample();
    assert_eq!(ids(&doc, "li:first-child"), ["l1"]);
    assert_eq!(ids(&doc, "li:nth-child(2)"), ["l2"]);
    assert_eq!(ids(&doc, "li:empty"), ["l1", "l2"]);
    assert_eq!(doc.query_selector(":root").unwrap(), Some(doc.document_element()));
}

#[test]
fn invalid_selectors_are_errors() {
    let doc = sample();
    for selector in ["p:hover", "p::before", "", "div >"] {
        let err = doc.query_selector(selector).unwrap_err();
        assert!(err.to_string().starts_with("Invalid selector"), "{selector}");
    }
}
