use crate::util::fmt_number_into;
use crate::validate::{DocumentValidator, ValidationError, WellFormedXhtml};
use crate::xhtml::serialize_xhtml;
use htmlsvg_core::{Document, SVG_NAMESPACE, SizeDescriptor, ZoomFactor};

/// Turns a document into SVG markup.
///
/// Implementations are synchronous and must not mutate the document. Errors are whatever the
/// implementation's collaborators raise, returned unchanged.
pub trait SvgSynthesizer<D: Document + ?Sized> {
    type Error;

    fn get_svg_for_document(
        &self,
        document: &D,
        size: &SizeDescriptor,
        zoom: ZoomFactor,
    ) -> Result<String, Self::Error>;
}

/// Embeds the canonical XHTML of the document in a `foreignObject`.
#[derive(Debug, Clone, Default)]
pub struct ForeignObjectSynthesizer<V = WellFormedXhtml> {
    validator: V,
}

impl<V> ForeignObjectSynthesizer<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<D, V> SvgSynthesizer<D> for ForeignObjectSynthesizer<V>
where
    D: Document + ?Sized,
    V: DocumentValidator,
{
    type Error = V::Error;

    fn get_svg_for_document(
        &self,
        document: &D,
        size: &SizeDescriptor,
        zoom: ZoomFactor,
    ) -> Result<String, V::Error> {
        let xhtml = serialize_xhtml(document);
        self.validator.validate(&xhtml)?;
        let svg = render_foreign_object_svg(&xhtml, size, zoom);
        tracing::trace!(xhtml_len = xhtml.len(), svg_len = svg.len(), "synthesized svg");
        Ok(svg)
    }
}

/// Synthesizes with the default well-formedness check.
pub fn get_svg_for_document<D: Document + ?Sized>(
    document: &D,
    size: &SizeDescriptor,
    zoom: ZoomFactor,
) -> Result<String, ValidationError> {
    ForeignObjectSynthesizer::<WellFormedXhtml>::default()
        .get_svg_for_document(document, size, zoom)
}

/// Wraps an already canonical XHTML fragment.
///
/// Geometry: the `foreignObject` sits at `(-left, -top)` and spans the visible frame
/// (`viewport_width` x `viewport_height`); the outer `svg` spans the canvas. A zoom factor
/// scales the frame from its top-left corner.
pub fn render_foreign_object_svg(xhtml: &str, size: &SizeDescriptor, zoom: ZoomFactor) -> String {
    let mut buf = ryu_js::Buffer::new();
    let mut out = String::with_capacity(xhtml.len() + 320);

    out.push_str("<svg xmlns=\"");
    out.push_str(SVG_NAMESPACE);
    out.push_str("\" width=\"");
    fmt_number_into(&mut out, size.width, &mut buf);
    out.push_str("\" height=\"");
    fmt_number_into(&mut out, size.height, &mut buf);
    out.push_str("\">");

    out.push_str("<foreignObject x=\"");
    fmt_number_into(&mut out, -size.left, &mut buf);
    out.push_str("\" y=\"");
    fmt_number_into(&mut out, -size.top, &mut buf);
    out.push_str("\" width=\"");
    fmt_number_into(&mut out, size.viewport_width, &mut buf);
    out.push_str("\" height=\"");
    fmt_number_into(&mut out, size.viewport_height, &mut buf);
    out.push_str("\" style=\"");
    if zoom.is_invalid() {
        tracing::warn!(zoom = ?zoom.raw(), "ignoring invalid zoom factor");
    }
    if let Some(scale) = zoom.scale() {
        for prefix in ["-webkit-", ""] {
            out.push_str(prefix);
            out.push_str("transform: scale(");
            fmt_number_into(&mut out, scale, &mut buf);
            out.push_str("); ");
            out.push_str(prefix);
            out.push_str("transform-origin: 0 0; ");
        }
    }
    // WebKit collapses the content's top margin with margins outside the svg otherwise.
    out.push_str("float: left;\" externalResourcesRequired=\"true\">");

    out.push_str(xhtml);
    out.push_str("</foreignObject></svg>");
    out
}
