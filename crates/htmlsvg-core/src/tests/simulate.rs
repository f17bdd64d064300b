use super::outline;
use crate::*;

fn sample() -> HtmlDocument {
    HtmlDocument::parse(
        r#"<html><head><title/><style>.mySpan:hover { color: red; } a:active { color: blue; }</style></head><body><div><span class="mySpan">x</span></div></body></html>"#,
    )
    .unwrap()
}

#[test]
fn fake_hover_marks_element_and_ancestors() {
    let mut doc = sample();
    ClassNameSimulator::default().fake_hover(&mut doc, ".mySpan");

    assert_eq!(
        outline(&doc),
        r#"<html class="htmlsvghover"><head><title></title><style>.mySpan.htmlsvghover { color: red; } a:active { color: blue; }</style></head><body class="htmlsvghover"><div class="htmlsvghover"><span class="mySpan htmlsvghover">x</span></div></body></html>"#
    );
}

#[test]
fn fake_active_uses_its_own_class_and_pseudo_class() {
    let mut doc = sample();
    let simulator = ClassNameSimulator::new().with_class_prefix("fake");
    simulator.fake_active(&mut doc, "span");

    let span = doc.query_selector("span").unwrap().unwrap();
    assert_eq!(doc.class_list(span), ["mySpan", "fakeactive"]);
    assert!(outline(&doc).contains("a.fakeactive { color: blue; }"));
    assert!(outline(&doc).contains(".mySpan:hover"));
}

#[test]
fn unmatched_selector_leaves_document_untouched() {
    let mut doc = sample();
    let before = outline(&doc);
    ClassNameSimulator::default().fake_hover(&mut doc, ".nothing");

    let out = outline(&doc);
    assert_eq!(out, before);
    assert!(out.contains(".mySpan:hover"));
}

#[test]
fn invalid_selector_leaves_document_untouched() {
    let mut doc = sample();
    let before = outline(&doc);
    ClassNameSimulator::default().fake_hover(&mut doc, "span::before");
    assert_eq!(outline(&doc), before);
}
