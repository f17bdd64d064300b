#![forbid(unsafe_code)]

//! Document abstraction + render inputs for `htmlsvg` (headless).
//!
//! Design goals:
//! - the document tree stays externally owned; the core only talks to it through [`Document`]
//! - geometry and options are plain data records, deserializable from JSON
//! - runtime-agnostic: nothing here depends on a specific executor

pub mod config;
pub mod document;
pub mod dom;
pub mod error;
pub mod geom;
pub mod simulate;

pub use config::RenderOptions;
pub use document::{Attribute, Document, NodeEvent, split_qualified_name};
pub use dom::{HtmlDocument, NodeId};
pub use dom::selector::SelectorError;
pub use error::{Error, Result};
pub use geom::{SizeDescriptor, SizeRequest, ZoomFactor};
pub use simulate::{ClassNameSimulator, PseudoState, PseudoStateSimulator};

pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

#[cfg(test)]
mod tests;
