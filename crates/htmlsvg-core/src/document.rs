use crate::dom::selector::SelectorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Qualified attribute name as it should be serialized (e.g. `class`, `xlink:href`).
    pub name: String,
    pub value: String,
    /// Namespace URI of a prefixed attribute; `None` for plain attributes.
    pub namespace: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// `(prefix, local name)` of the qualified name.
    pub fn split_name(&self) -> (Option<&str>, &str) {
        split_qualified_name(&self.name)
    }

    /// True for `xmlns` and `xmlns:*` namespace declarations.
    pub fn is_namespace_declaration(&self) -> bool {
        self.name == "xmlns" || self.name.starts_with("xmlns:")
    }
}

/// Splits `prefix:local` into its parts; names without a colon have no prefix.
pub fn split_qualified_name(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() => (Some(prefix), local),
        _ => (None, name),
    }
}

/// One step of a document-order traversal.
///
/// Every `Start` is balanced by an `End` with the same name, including elements without
/// children. Serializers decide how empty elements are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEvent<'a> {
    Start {
        /// Qualified element name.
        name: &'a str,
        /// Namespace URI; `None` means the XHTML namespace.
        namespace: Option<&'a str>,
        attributes: &'a [Attribute],
    },
    End {
        name: &'a str,
    },
    Text(&'a str),
    Comment(&'a str),
}

/// A live, externally owned HTML document.
///
/// The render pipeline reads the tree through [`Document::walk`] and only mutates it through
/// the pseudo-state helpers ([`Document::add_class`], [`Document::rewrite_stylesheets`]).
/// Alternate backends (headless engines, server-side DOM emulators) implement this trait to
/// plug into the same pipeline.
pub trait Document {
    type Node: Copy + Eq + std::fmt::Debug;

    /// Visits the tree in document order, starting at the root element.
    fn walk(&self, visit: &mut dyn FnMut(NodeEvent<'_>));

    /// Returns the first element (document order) matching `selector`.
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>, SelectorError>;

    fn parent_element(&self, node: Self::Node) -> Option<Self::Node>;

    /// Adds `class` to the element's class list; no-op when already present.
    fn add_class(&mut self, node: Self::Node, class: &str);

    /// Replaces every occurrence of `from` with `to` in the document's stylesheets.
    fn rewrite_stylesheets(&mut self, from: &str, to: &str);
}
