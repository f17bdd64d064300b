mod config;
mod dom;
mod selector;
mod simulate;

use crate::{Document, NodeEvent};

/// Compact markup view of a document (no escaping), for assertions.
fn outline<D: Document>(doc: &D) -> String {
    let mut out = String::new();
    doc.walk(&mut |event| match event {
        NodeEvent::Start { name, attributes, .. } => {
            out.push('<');
            out.push_str(name);
            for a in attributes {
                out.push_str(&format!(" {}=\"{}\"", a.name, a.value));
            }
            out.push('>');
        }
        NodeEvent::End { name } => out.push_str(&format!("</{name}>")),
        NodeEvent::Text(text) => out.push_str(text),
        NodeEvent::Comment(text) => out.push_str(&format!("<!--{text}-->")),
    });
    out
}
