//! Reference in-memory document backend.
//!
//! `HtmlDocument` is an arena-backed element/text/comment tree. It is deliberately small: it
//! models what the render pipeline needs (document-order traversal, selector queries, class
//! and stylesheet mutation). Trees are built either from well-formed XHTML via `roxmltree`
//! ([`HtmlDocument::parse`], [`HtmlDocument::set_body_markup`]) or from arbitrary HTML via
//! `html5ever` ([`HtmlDocument::parse_html`], [`HtmlDocument::set_body_html`]).
//!
//! Element and attribute namespaces are kept, so inline SVG and MathML stay in their own
//! namespace and prefixed attributes (`xlink:href`) keep their prefix.

pub mod selector;

use crate::document::{Attribute, Document, NodeEvent, split_qualified_name};
use crate::{Error, Result, XHTML_NAMESPACE, XML_NAMESPACE, XMLNS_NAMESPACE};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, QualName, parse_document};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use selector::{
    CssString, DomSelectorImpl, PseudoClass, PseudoElement, SelectorError, SelectorList,
};
use selectors::Element as _;
use selectors::OpaqueElement;
use selectors::attr::{AttrSelectorOperation, CaseSensitivity, NamespaceConstraint};
use selectors::matching::{ElementSelectorFlags, MatchingContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        name: String,
        // `None` for XHTML elements
        namespace: Option<String>,
        attributes: Vec<Attribute>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct HtmlDocument {
    nodes: Vec<NodeData>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new("")
    }
}

impl HtmlDocument {
    /// Creates `<html><head><title>{title}</title></head><body></body></html>`.
    pub fn new(title: &str) -> Self {
        let mut doc = Self::empty();
        doc.root = doc.create_element("html");
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, doc.head);
        doc.append_child(doc.root, doc.body);

        let title_el = doc.create_element("title");
        doc.append_child(doc.head, title_el);
        if !title.is_empty() {
            doc.append_text(title_el, title);
        }
        doc
    }

    /// Builds a document from well-formed XHTML whose root element is `<html>`.
    ///
    /// A missing `<head>` or `<body>` is created.
    pub fn parse(markup: &str) -> Result<Self> {
        let xml = roxmltree::Document::parse(markup).map_err(|e| Error::Markup {
            message: e.to_string(),
        })?;
        let root = xml.root_element();
        if !root.tag_name().name().eq_ignore_ascii_case("html") {
            return Err(Error::Markup {
                message: format!(
                    "expected <html> root element, found <{}>",
                    root.tag_name().name()
                ),
            });
        }

        let mut doc = Self::empty();
        doc.root = doc.import_element(root);
        for child in root.children() {
            doc.import_into(doc.root, child);
        }
        doc.ensure_head_and_body();
        Ok(doc)
    }

    /// Builds a document from HTML, with the error recovery of a browser's parser.
    ///
    /// Never fails: unclosed tags, void elements without a slash and stray end tags are fixed
    /// up the way the HTML tree builder does.
    pub fn parse_html(markup: &str) -> Self {
        let dom = parse_html_dom(markup);
        let mut doc = Self::empty();
        match find_html_element(&dom.document, "html") {
            Some(html) => {
                doc.root = match &html.data {
                    RcNodeData::Element { name, attrs, .. } => {
                        doc.import_html_element(name, &attrs.borrow())
                    }
                    _ => doc.create_element("html"),
                };
                doc.import_html_children(doc.root, &html);
            }
            None => doc.root = doc.create_element("html"),
        }
        doc.ensure_head_and_body();
        doc
    }

    pub fn document_element(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push_node(NodeKind::Element {
            name: name.to_string(),
            namespace: None,
            attributes: Vec::new(),
        })
    }

    /// Creates an element in `namespace` (e.g. [`crate::SVG_NAMESPACE`]).
    pub fn create_element_ns(&mut self, namespace: &str, name: &str) -> NodeId {
        self.push_node(NodeKind::Element {
            name: name.to_string(),
            namespace: normalize_namespace(namespace),
            attributes: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push_node(NodeKind::Text(text.to_string()))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push_node(NodeKind::Comment(text.to_string()))
    }

    /// Appends `child` to `parent`, detaching it from its previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        let children = &mut self.nodes[parent.0].children;
        let index = index.min(children.len());
        children.insert(index, child);
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let node = self.create_text(text);
        self.append_child(parent, node);
        node
    }

    pub fn remove_children(&mut self, parent: NodeId) {
        let children = std::mem::take(&mut self.nodes[parent.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Qualified tag name, `None` for text and comment nodes.
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Namespace URI of an element; XHTML unless the element was created in another one.
    pub fn namespace_uri(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { namespace, .. } => {
                Some(namespace.as_deref().unwrap_or(XHTML_NAMESPACE))
            }
            _ => None,
        }
    }

    pub fn attributes(&self, node: NodeId) -> &[Attribute] {
        match &self.nodes[node.0].kind {
            NodeKind::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// Value of the attribute with this qualified name.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attributes(node)
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Sets an attribute, keeping the position of an existing one. No-op on non-elements.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.put_attribute(node, Attribute::new(name, value));
    }

    /// Sets a namespaced attribute; `name` carries the prefix (`xlink:href`).
    pub fn set_attribute_ns(&mut self, node: NodeId, namespace: &str, name: &str, value: &str) {
        self.put_attribute(node, Attribute::new(name, value).with_namespace(namespace));
    }

    pub fn class_list(&self, node: NodeId) -> Vec<&str> {
        self.attribute(node, "class")
            .map(|c| c.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    /// Replaces the body's children with the nodes parsed from `markup`.
    ///
    /// The fragment must be well-formed XML (HTML named entities other than the XML ones are
    /// not recognized). On error the body is left untouched.
    pub fn set_body_markup(&mut self, markup: &str) -> Result<()> {
        let wrapped = format!("<body>{markup}</body>");
        let xml = roxmltree::Document::parse(&wrapped).map_err(|e| Error::Markup {
            message: e.to_string(),
        })?;
        self.remove_children(self.body);
        for child in xml.root_element().children() {
            self.import_into(self.body, child);
        }
        Ok(())
    }

    /// Replaces the body's children with the nodes parsed from the HTML fragment `markup`
    /// (the equivalent of assigning `body.innerHTML`).
    pub fn set_body_html(&mut self, markup: &str) {
        let dom = parse_html_dom(&format!("<body>{markup}"));
        self.remove_children(self.body);
        let body = find_html_element(&dom.document, "html")
            .and_then(|html| find_html_element(&html, "body"));
        if let Some(body) = body {
            self.import_html_children(self.body, &body);
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn query_selector_all(
        &self,
        selector: &str,
    ) -> std::result::Result<Vec<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        let mut out = Vec::new();
        self.for_each_element(self.root, &mut |id| {
            if list.matches(&ElementRef { doc: self, id }) {
                out.push(id);
            }
            true
        });
        Ok(out)
    }

    fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
        }
    }

    fn ensure_head_and_body(&mut self) {
        self.head = match self.find_child_element(self.root, "head") {
            Some(head) => head,
            None => {
                let head = self.create_element("head");
                self.insert_child(self.root, 0, head);
                head
            }
        };
        self.body = match self.find_child_element(self.root, "body") {
            Some(body) => body,
            None => {
                let body = self.create_element("body");
                self.append_child(self.root, body);
                body
            }
        };
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn put_attribute(&mut self, node: NodeId, attr: Attribute) {
        let NodeKind::Element { attributes, .. } = &mut self.nodes[node.0].kind else {
            return;
        };
        match attributes.iter_mut().find(|a| a.name == attr.name) {
            Some(existing) => *existing = attr,
            None => attributes.push(attr),
        }
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].kind, NodeKind::Element { .. })
    }

    fn find_child_element(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|c| self.tag_name(*c).is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }

    fn import_element(&mut self, el: roxmltree::Node<'_, '_>) -> NodeId {
        let tag = el.tag_name();
        let name = match tag.namespace() {
            Some(uri) if el.default_namespace() != Some(uri) => {
                qualify(xml_prefix_for(el, uri), tag.name())
            }
            _ => tag.name().to_string(),
        };
        let id = self.push_node(NodeKind::Element {
            name,
            namespace: tag.namespace().and_then(normalize_namespace),
            attributes: Vec::new(),
        });

        // Prefixed declarations made on this element; the default namespace is carried by the
        // element's own namespace.
        let parent = el.parent_element();
        for ns in el.namespaces() {
            let Some(prefix) = ns.name() else {
                continue;
            };
            if prefix == "xml" {
                continue;
            }
            let inherited = parent.is_some_and(|p| {
                p.namespaces()
                    .any(|pn| pn.name() == Some(prefix) && pn.uri() == ns.uri())
            });
            if !inherited {
                self.put_attribute(
                    id,
                    Attribute::new(format!("xmlns:{prefix}"), ns.uri())
                        .with_namespace(XMLNS_NAMESPACE),
                );
            }
        }

        for attr in el.attributes() {
            let imported = match attr.namespace() {
                Some(uri) => {
                    Attribute::new(qualify(xml_prefix_for(el, uri), attr.name()), attr.value())
                        .with_namespace(uri)
                }
                None => Attribute::new(attr.name(), attr.value()),
            };
            self.put_attribute(id, imported);
        }
        id
    }

    fn import_into(&mut self, parent: NodeId, node: roxmltree::Node<'_, '_>) {
        if node.is_element() {
            let id = self.import_element(node);
            self.append_child(parent, id);
            for child in node.children() {
                self.import_into(id, child);
            }
        } else if node.is_text() {
            if let Some(text) = node.text() {
                self.append_text(parent, text);
            }
        } else if node.is_comment() {
            if let Some(text) = node.text() {
                let id = self.create_comment(text);
                self.append_child(parent, id);
            }
        }
    }

    fn import_html_element(&mut self, name: &QualName, attrs: &[html5ever::Attribute]) -> NodeId {
        let id = self.push_node(NodeKind::Element {
            name: html_qualified_name(name),
            namespace: normalize_namespace(&name.ns),
            attributes: Vec::new(),
        });
        for attr in attrs {
            let mut imported = Attribute::new(html_qualified_name(&attr.name), &*attr.value);
            if !attr.name.ns.is_empty() {
                imported = imported.with_namespace(&*attr.name.ns);
            }
            self.put_attribute(id, imported);
        }
        id
    }

    fn import_html_children(&mut self, parent: NodeId, handle: &Handle) {
        for child in handle.children.borrow().iter() {
            self.import_html(parent, child);
        }
    }

    fn import_html(&mut self, parent: NodeId, handle: &Handle) {
        match &handle.data {
            RcNodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => {
                let id = self.import_html_element(name, &attrs.borrow());
                self.append_child(parent, id);
                self.import_html_children(id, handle);
                if let Some(contents) = template_contents.borrow().as_ref() {
                    self.import_html_children(id, contents);
                }
            }
            RcNodeData::Text { contents } => {
                self.append_text(parent, &contents.borrow());
            }
            RcNodeData::Comment { contents } => {
                let id = self.create_comment(contents);
                self.append_child(parent, id);
            }
            _ => {}
        }
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Comment(_) => {}
            NodeKind::Element { .. } => {
                for child in &self.nodes[node.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    // Pre-order over elements; the callback returns `false` to stop.
    fn for_each_element(&self, node: NodeId, f: &mut dyn FnMut(NodeId) -> bool) -> bool {
        if !self.is_element(node) {
            return true;
        }
        if !f(node) {
            return false;
        }
        for child in &self.nodes[node.0].children {
            if !self.for_each_element(*child, f) {
                return false;
            }
        }
        true
    }

    fn walk_node(&self, node: NodeId, visit: &mut dyn FnMut(NodeEvent<'_>)) {
        match &self.nodes[node.0].kind {
            NodeKind::Element {
                name,
                namespace,
                attributes,
            } => {
                visit(NodeEvent::Start {
                    name,
                    namespace: namespace.as_deref(),
                    attributes,
                });
                for child in &self.nodes[node.0].children {
                    self.walk_node(*child, visit);
                }
                visit(NodeEvent::End { name });
            }
            NodeKind::Text(text) => visit(NodeEvent::Text(text)),
            NodeKind::Comment(text) => visit(NodeEvent::Comment(text)),
        }
    }
}

fn normalize_namespace(namespace: &str) -> Option<String> {
    if namespace.is_empty() || namespace == XHTML_NAMESPACE {
        None
    } else {
        Some(namespace.to_string())
    }
}

fn qualify(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

fn xml_prefix_for<'a>(el: roxmltree::Node<'a, '_>, uri: &str) -> Option<&'a str> {
    if uri == XML_NAMESPACE {
        return Some("xml");
    }
    el.lookup_prefix(uri)
}

fn html_qualified_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{prefix}:{}", name.local),
        None => name.local.to_string(),
    }
}

fn parse_html_dom(markup: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts).one(markup)
}

fn find_html_element(parent: &Handle, local: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| {
            matches!(&child.data, RcNodeData::Element { name, .. } if &*name.local == local)
        })
        .cloned()
}

#[derive(Clone, Copy)]
struct ElementRef<'a> {
    doc: &'a HtmlDocument,
    id: NodeId,
}

impl std::fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("name", &self.doc.tag_name(self.id))
            .finish()
    }
}

impl ElementRef<'_> {
    fn at(&self, id: NodeId) -> Self {
        ElementRef { doc: self.doc, id }
    }

    fn local_name(&self) -> &str {
        split_qualified_name(self.doc.tag_name(self.id).unwrap_or("")).1
    }

    fn siblings(&self) -> &[NodeId] {
        match self.doc.nodes[self.id.0].parent {
            Some(parent) => self.doc.children(parent),
            None => &[],
        }
    }

    fn has_token(&self, attribute: &str, token: &str, case_sensitivity: CaseSensitivity) -> bool {
        self.doc.attribute(self.id, attribute).is_some_and(|value| {
            value
                .split_ascii_whitespace()
                .any(|t| case_sensitivity.eq(t.as_bytes(), token.as_bytes()))
        })
    }
}

impl selectors::Element for ElementRef<'_> {
    type Impl = DomSelectorImpl;

    fn opaque(&self) -> OpaqueElement {
        OpaqueElement::new(&self.doc.nodes[self.id.0])
    }

    fn parent_element(&self) -> Option<Self> {
        Document::parent_element(self.doc, self.id).map(|id| self.at(id))
    }

    fn parent_node_is_shadow_root(&self) -> bool {
        false
    }

    fn containing_shadow_host(&self) -> Option<Self> {
        None
    }

    fn is_pseudo_element(&self) -> bool {
        false
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        let siblings = self.siblings();
        let pos = siblings.iter().position(|c| *c == self.id)?;
        siblings[..pos]
            .iter()
            .rev()
            .copied()
            .find(|c| self.doc.is_element(*c))
            .map(|id| self.at(id))
    }

    fn next_sibling_element(&self) -> Option<Self> {
        let siblings = self.siblings();
        let pos = siblings.iter().position(|c| *c == self.id)?;
        siblings[pos + 1..]
            .iter()
            .copied()
            .find(|c| self.doc.is_element(*c))
            .map(|id| self.at(id))
    }

    fn first_element_child(&self) -> Option<Self> {
        self.doc
            .children(self.id)
            .iter()
            .copied()
            .find(|c| self.doc.is_element(*c))
            .map(|id| self.at(id))
    }

    fn is_html_element_in_html_document(&self) -> bool {
        self.doc.namespace_uri(self.id) == Some(XHTML_NAMESPACE)
    }

    fn has_local_name(&self, local_name: &str) -> bool {
        if self.is_html_element_in_html_document() {
            self.local_name().eq_ignore_ascii_case(local_name)
        } else {
            self.local_name() == local_name
        }
    }

    fn has_namespace(&self, ns: &str) -> bool {
        self.doc.namespace_uri(self.id) == Some(ns)
    }

    fn is_same_type(&self, other: &Self) -> bool {
        self.doc.namespace_uri(self.id) == other.doc.namespace_uri(other.id)
            && self.local_name().eq_ignore_ascii_case(other.local_name())
    }

    fn attr_matches(
        &self,
        ns: &NamespaceConstraint<&CssString>,
        local_name: &CssString,
        operation: &AttrSelectorOperation<&CssString>,
    ) -> bool {
        let is_html = self.is_html_element_in_html_document();
        self.doc.attributes(self.id).iter().any(|attr| {
            if attr.is_namespace_declaration() {
                return false;
            }
            let in_namespace = match ns {
                NamespaceConstraint::Any => true,
                NamespaceConstraint::Specific(url) => {
                    attr.namespace.as_deref().unwrap_or("") == url.as_str()
                }
            };
            let local = attr.split_name().1;
            let same_name = if is_html {
                local.eq_ignore_ascii_case(local_name)
            } else {
                local == local_name.as_str()
            };
            in_namespace && same_name && operation.eval_str(&attr.value)
        })
    }

    fn match_non_ts_pseudo_class(
        &self,
        pc: &PseudoClass,
        _context: &mut MatchingContext<Self::Impl>,
    ) -> bool {
        match *pc {}
    }

    fn match_pseudo_element(
        &self,
        pe: &PseudoElement,
        _context: &mut MatchingContext<Self::Impl>,
    ) -> bool {
        match *pe {}
    }

    fn apply_selector_flags(&self, _flags: ElementSelectorFlags) {}

    fn is_link(&self) -> bool {
        let name = self.local_name();
        self.doc.attribute(self.id, "href").is_some()
            && ["a", "area", "link"]
                .iter()
                .any(|tag| name.eq_ignore_ascii_case(tag))
    }

    fn is_html_slot_element(&self) -> bool {
        false
    }

    fn has_id(&self, id: &CssString, case_sensitivity: CaseSensitivity) -> bool {
        self.doc
            .attribute(self.id, "id")
            .is_some_and(|value| case_sensitivity.eq(value.as_bytes(), id.as_bytes()))
    }

    fn has_class(&self, name: &CssString, case_sensitivity: CaseSensitivity) -> bool {
        self.has_token("class", name, case_sensitivity)
    }

    fn imported_part(&self, _name: &CssString) -> Option<CssString> {
        None
    }

    fn is_part(&self, _name: &CssString) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.doc
            .children(self.id)
            .iter()
            .all(|c| match &self.doc.nodes[c.0].kind {
                NodeKind::Element { .. } => false,
                NodeKind::Text(text) => text.is_empty(),
                NodeKind::Comment(_) => true,
            })
    }

    fn is_root(&self) -> bool {
        self.id == self.doc.root
    }
}

impl Document for HtmlDocument {
    type Node = NodeId;

    fn walk(&self, visit: &mut dyn FnMut(NodeEvent<'_>)) {
        self.walk_node(self.root, visit);
    }

    fn query_selector(
        &self,
        selector: &str,
    ) -> std::result::Result<Option<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        let mut found = None;
        self.for_each_element(self.root, &mut |id| {
            if list.matches(&ElementRef { doc: self, id }) {
                found = Some(id);
                return false;
            }
            true
        });
        Ok(found)
    }

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.nodes[node.0].parent?;
        self.tag_name(parent).map(|_| parent)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if self.tag_name(node).is_none() || self.class_list(node).contains(&class) {
            return;
        }
        let value = match self.attribute(node, "class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {class}", existing.trim_end())
            }
            _ => class.to_string(),
        };
        self.set_attribute(node, "class", &value);
    }

    fn rewrite_stylesheets(&mut self, from: &str, to: &str) {
        if from.is_empty() {
            return;
        }
        let mut styles = Vec::new();
        self.for_each_element(self.root, &mut |id| {
            if self.tag_name(id).is_some_and(|n| n.eq_ignore_ascii_case("style")) {
                styles.push(id);
            }
            true
        });
        for style in styles {
            let children = self.nodes[style.0].children.clone();
            for child in children {
                if let NodeKind::Text(text) = &mut self.nodes[child.0].kind {
                    if text.contains(from) {
                        *text = text.replace(from, to);
                    }
                }
            }
        }
    }
}
