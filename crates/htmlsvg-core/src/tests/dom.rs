use super::outline;
use crate::*;

#[test]
fn new_document_has_head_title_and_empty_body() {
    let doc = HtmlDocument::new("");
    assert_eq!(
        outline(&doc),
        "<html><head><title></title></head><body></body></html>"
    );

    let titled = HtmlDocument::new("meh");
    assert_eq!(titled.text_content(titled.head()), "meh");
}

#[test]
fn set_body_markup_keeps_text_and_attributes_verbatim() {
    let mut doc = HtmlDocument::new("");
    doc.set_body_markup(r#"<img src="data:image/png;base64,sOmeFAKeBasE64="/>Test content"#)
        .unwrap();
    assert_eq!(
        outline(&doc),
        r#"<html><head><title></title></head><body><img src="data:image/png;base64,sOmeFAKeBasE64="></img>Test content</body></html>"#
    );
}

#[test]
fn set_body_markup_rejects_malformed_fragment_and_keeps_body() {
    let mut doc = HtmlDocument::new("");
    doc.set_body_markup("<p>kept</p>").unwrap();

    let err = doc.set_body_markup("<p>unclosed").unwrap_err();
    assert!(matches!(err, Error::Markup { .. }));
    assert_eq!(doc.text_content(doc.body()), "kept");
}

#[test]
fn parse_creates_missing_head_and_body() {
    let doc = HtmlDocument::parse(r#"<html xmlns="http://www.w3.org/1999/xhtml"/>"#).unwrap();
    assert_eq!(outline(&doc), "<html><head></head><body></body></html>");

    let err = HtmlDocument::parse("<svg/>").unwrap_err();
    assert!(err.to_string().contains("expected <html> root element"));
}

#[test]
fn query_selector_returns_first_match_in_document_order() {
    let mut doc = HtmlDocument::new("");
    doc.set_body_markup(r#"<div class="x" id="a"><span class="x" id="b"/></div><p class="x" id="c"/>"#)
        .unwrap();

    let first = doc.query_selector(".x").unwrap().unwrap();
    assert_eq!(doc.attribute(first, "id"), Some("a"));

    let all = doc.query_selector_all(".x").unwrap();
    let ids: Vec<_> = all.iter().map(|n| doc.attribute(*n, "id").unwrap()).collect();
    assert_eq!(ids, ["a", "b", "c"]);

    assert_eq!(doc.query_selector(".missing").unwrap(), None);
    assert!(doc.query_selector("p:hover").is_err());
}

#[test]
fn add_class_appends_once() {
    let mut doc = HtmlDocument::new("");
    doc.set_body_markup(r#"<span class="a"/>"#).unwrap();
    let span = doc.query_selector("span").unwrap().unwrap();

    doc.add_class(span, "b");
    doc.add_class(span, "b");
    assert_eq!(doc.class_list(span), ["a", "b"]);

    let body = doc.body();
    doc.add_class(body, "c");
    assert_eq!(doc.attribute(body, "class"), Some("c"));
}

#[test]
fn parent_element_stops_at_root() {
    let doc = HtmlDocument::new("");
    assert_eq!(doc.parent_element(doc.body()), Some(doc.document_element()));
    assert_eq!(doc.parent_element(doc.document_element()), None);
}

#[test]
fn rewrite_stylesheets_only_touches_style_elements() {
    let mut doc = HtmlDocument::parse(
        "<html><head><style>a:hover { color: red; }</style></head><body><p>a:hover</p></body></html>",
    )
    .unwrap();
    doc.rewrite_stylesheets(":hover", ".h");
    assert_eq!(
        outline(&doc),
        "<html><head><style>a.h { color: red; }</style></head><body><p>a:hover</p></body></html>"
    );
}

#[test]
fn set_body_markup_keeps_foreign_namespaces_and_prefixes() {
    let mut doc = HtmlDocument::new("");
    doc.set_body_markup(
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##,
    )
    .unwrap();

    let svg = doc.query_selector("svg").unwrap().unwrap();
    assert_eq!(doc.namespace_uri(svg), Some(SVG_NAMESPACE));
    assert_eq!(
        doc.attributes(svg),
        [Attribute::new("xmlns:xlink", XLINK_NAMESPACE).with_namespace(XMLNS_NAMESPACE)]
    );

    let use_el = doc.query_selector("use").unwrap().unwrap();
    assert_eq!(doc.namespace_uri(use_el), Some(SVG_NAMESPACE));
    assert_eq!(doc.attribute(use_el, "xlink:href"), Some("#a"));
    assert_eq!(
        doc.attributes(use_el)[0].namespace.as_deref(),
        Some(XLINK_NAMESPACE)
    );
    assert_eq!(doc.namespace_uri(doc.body()), Some(XHTML_NAMESPACE));
}

#[test]
fn prefixed_elements_keep_their_prefix() {
    let doc = HtmlDocument::parse(
        r#"<html xmlns="http://www.w3.org/1999/xhtml" xmlns:s="http://www.w3.org/2000/svg"><body><s:svg xml:lang="en"/></body></html>"#,
    )
    .unwrap();
    assert_eq!(
        outline(&doc),
        r#"<html xmlns:s="http://www.w3.org/2000/svg"><head></head><body><s:svg xml:lang="en"></s:svg></body></html>"#
    );
    let svg = doc.children(doc.body())[0];
    assert_eq!(doc.namespace_uri(svg), Some(SVG_NAMESPACE));
}

#[test]
fn set_body_html_accepts_html_that_is_not_xml() {
    let mut doc = HtmlDocument::new("");
    doc.set_body_html("line<br>next<p>one<p>two &amp; &nbsp;three");
    assert_eq!(
        outline(&doc),
        "<html><head><title></title></head><body>line<br></br>next<p>one</p><p>two & \u{a0}three</p></body></html>"
    );
}

#[test]
fn set_body_html_keeps_svg_namespace_and_xlink_attributes() {
    let mut doc = HtmlDocument::new("");
    doc.set_body_html(r##"<svg><use xlink:href="#a"></use></svg>"##);

    let use_el = doc.query_selector("use").unwrap().unwrap();
    assert_eq!(doc.namespace_uri(use_el), Some(SVG_NAMESPACE));
    let href = &doc.attributes(use_el)[0];
    assert_eq!(href.name, "xlink:href");
    assert_eq!(href.namespace.as_deref(), Some(XLINK_NAMESPACE));
}

#[test]
fn parse_html_builds_head_and_body() {
    let doc = HtmlDocument::parse_html(
        "<!DOCTYPE html><title>t</title><style>p:hover{}</style><p class=a>x",
    );
    assert_eq!(
        outline(&doc),
        r#"<html><head><title>t</title><style>p:hover{}</style></head><body><p class="a">x</p></body></html>"#
    );
    assert_eq!(doc.query_selector("p.a").unwrap(), Some(doc.children(doc.body())[0]));
}
