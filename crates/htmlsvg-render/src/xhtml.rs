//! Canonical XHTML serialization.
//!
//! The output is a standalone XHTML fragment suitable for embedding in a `foreignObject`:
//! - the root element carries the XHTML namespace (any other `xmlns` is replaced)
//! - `<head>` exists and holds exactly one `<title>` (an empty one is inserted when missing,
//!   later duplicates are dropped)
//! - HTML void elements are self-closed, every other element gets an explicit end tag
//! - text, comments and attribute values pass through, escaped only where XML requires it
//! - elements outside XHTML (inline SVG, MathML) get an `xmlns` where their namespace differs
//!   from the parent's, and prefixed attributes (`xlink:href`) get their prefix declared

use crate::util::{escape_attr_into, escape_text_into};
use htmlsvg_core::{
    Attribute, Document, NodeEvent, XHTML_NAMESPACE, XLINK_NAMESPACE, XML_NAMESPACE,
    split_qualified_name,
};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

const EMPTY_TITLE: &str = "<title></title>";

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

pub fn serialize_xhtml<D: Document + ?Sized>(document: &D) -> String {
    let mut writer = XhtmlWriter::default();
    document.walk(&mut |event| writer.event(event));
    writer.finish()
}

#[derive(Default)]
struct XhtmlWriter {
    root_name: Option<String>,
    root_open: String,
    // root children, with the head spliced in when it closes
    body: String,
    head_open: String,
    head: Option<String>,
    head_seen: bool,
    title_seen: bool,
    depth: usize,
    // depth of a duplicate <title> whose subtree is being dropped
    skip_depth: Option<usize>,
    // element whose start tag is still open (`<name attrs` written, `>` not yet)
    pending: Option<String>,
    // in-scope namespace bindings (`None` prefix = default namespace)
    bindings: Vec<(Option<String>, String)>,
    // `bindings.len()` at each open element
    scopes: Vec<usize>,
}

impl XhtmlWriter {
    fn buf(&mut self) -> &mut String {
        match self.head.as_mut() {
            Some(head) => head,
            None => &mut self.body,
        }
    }

    fn close_pending_start(&mut self) {
        if self.pending.take().is_some() {
            self.buf().push('>');
        }
    }

    fn event(&mut self, event: NodeEvent<'_>) {
        match event {
            NodeEvent::Start {
                name,
                namespace,
                attributes,
            } => self.start(name, namespace, attributes),
            NodeEvent::End { name } => self.end(name),
            NodeEvent::Text(text) => {
                if self.skip_depth.is_some() || self.depth == 0 {
                    return;
                }
                self.close_pending_start();
                escape_text_into(self.buf(), text);
            }
            NodeEvent::Comment(text) => {
                if self.skip_depth.is_some() || self.depth == 0 {
                    return;
                }
                self.close_pending_start();
                let buf = self.buf();
                buf.push_str("<!--");
                buf.push_str(text);
                buf.push_str("-->");
            }
        }
    }

    fn start(&mut self, name: &str, namespace: Option<&str>, attributes: &[Attribute]) {
        self.depth += 1;
        if self.skip_depth.is_some() {
            return;
        }
        self.close_pending_start();

        if self.depth == 1 {
            self.root_name = Some(name.to_string());
            let mut open = self.start_tag(name, XHTML_NAMESPACE, attributes);
            open.push('>');
            self.root_open = open;
            return;
        }

        if self.depth == 2 && !self.head_seen && name.eq_ignore_ascii_case("head") {
            self.head_seen = true;
            let mut open = self.start_tag(name, namespace.unwrap_or(XHTML_NAMESPACE), attributes);
            open.push('>');
            self.head_open = open;
            self.head = Some(String::new());
            return;
        }

        if self.depth == 3 && self.head.is_some() && name.eq_ignore_ascii_case("title") {
            if self.title_seen {
                self.skip_depth = Some(self.depth);
                return;
            }
            self.title_seen = true;
        }

        let open = self.start_tag(name, namespace.unwrap_or(XHTML_NAMESPACE), attributes);
        self.buf().push_str(&open);
        self.pending = Some(name.to_string());
    }

    /// `<name` plus the namespace declarations the element needs and its attributes. Opens a
    /// binding scope that `end` closes.
    fn start_tag(&mut self, name: &str, namespace: &str, attributes: &[Attribute]) -> String {
        self.scopes.push(self.bindings.len());
        let mut open = format!("<{name}");

        let prefix = split_qualified_name(name).0;
        if self.lookup(prefix) != Some(namespace) {
            let declared = match prefix {
                Some(p) => format!("xmlns:{p}"),
                None => "xmlns".to_string(),
            };
            write_attribute(&mut open, &declared, namespace);
            self.bind(prefix, namespace);
        }

        for attr in attributes.iter().filter(|a| a.is_namespace_declaration()) {
            // a plain `xmlns` is always derived from the element's namespace
            let Some(declared) = attr.name.strip_prefix("xmlns:") else {
                continue;
            };
            if self.lookup(Some(declared)) != Some(attr.value.as_str()) {
                write_attribute(&mut open, &attr.name, &attr.value);
                self.bind(Some(declared), &attr.value);
            }
        }

        for attr in attributes.iter().filter(|a| !a.is_namespace_declaration()) {
            if let (Some(prefix), _) = attr.split_name() {
                if prefix != "xml" && self.lookup(Some(prefix)).is_none() {
                    let uri = attr.namespace.as_deref().or_else(|| well_known_namespace(prefix));
                    if let Some(uri) = uri {
                        write_attribute(&mut open, &format!("xmlns:{prefix}"), uri);
                        self.bind(Some(prefix), uri);
                    }
                }
            }
            write_attribute(&mut open, &attr.name, &attr.value);
        }
        open
    }

    fn lookup(&self, prefix: Option<&str>) -> Option<&str> {
        self.bindings
            .iter()
            .rev()
            .find(|(p, _)| p.as_deref() == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    fn bind(&mut self, prefix: Option<&str>, uri: &str) {
        self.bindings
            .push((prefix.map(str::to_string), uri.to_string()));
    }

    fn end(&mut self, name: &str) {
        let depth = self.depth;
        self.depth = depth.saturating_sub(1);
        if let Some(skip) = self.skip_depth {
            if skip == depth {
                self.skip_depth = None;
            }
            return;
        }
        if let Some(mark) = self.scopes.pop() {
            self.bindings.truncate(mark);
        }

        if let Some(open) = self.pending.take() {
            // element without children
            let buf = self.buf();
            if is_void_element(&open) {
                buf.push_str("/>");
            } else {
                buf.push_str("></");
                buf.push_str(&open);
                buf.push('>');
            }
            return;
        }

        match depth {
            1 => {}
            2 if self.head.is_some() => {
                let head = self.head.take().unwrap_or_default();
                self.body.push_str(&self.head_open);
                if !self.title_seen {
                    self.body.push_str(EMPTY_TITLE);
                }
                self.body.push_str(&head);
                self.body.push_str("</");
                self.body.push_str(name);
                self.body.push('>');
            }
            _ => {
                let buf = self.buf();
                buf.push_str("</");
                buf.push_str(name);
                buf.push('>');
            }
        }
    }

    fn finish(self) -> String {
        let root_name = self.root_name.as_deref().unwrap_or("html");
        let mut out = String::with_capacity(self.root_open.len() + self.body.len() + 64);
        if self.root_open.is_empty() {
            out.push_str(&format!("<{root_name} xmlns=\"{XHTML_NAMESPACE}\">"));
        } else {
            out.push_str(&self.root_open);
        }
        if !self.head_seen {
            out.push_str("<head>");
            out.push_str(EMPTY_TITLE);
            out.push_str("</head>");
        }
        out.push_str(&self.body);
        out.push_str("</");
        out.push_str(root_name);
        out.push('>');
        out
    }
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_attr_into(out, value);
    out.push('"');
}

fn well_known_namespace(prefix: &str) -> Option<&'static str> {
    match prefix {
        "xlink" => Some(XLINK_NAMESPACE),
        "xml" => Some(XML_NAMESPACE),
        _ => None,
    }
}
