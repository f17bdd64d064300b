#![forbid(unsafe_code)]

//! `htmlsvg` renders a live, in-memory HTML document as a self-contained SVG image.
//!
//! The document is embedded in a `foreignObject` whose geometry (frame offset, frame size,
//! zoom transform) makes the embedded content paint like the live page. The pipeline is:
//!
//! 1. simulate `:hover` / `:active` on the requested elements
//! 2. resolve the size with a [`ContentSizeCalculator`]
//! 3. synthesize the SVG with an [`SvgSynthesizer`]
//!
//! All three collaborators are traits, so other document backends and layout engines plug
//! into the same [`RenderOrchestrator`].

pub use htmlsvg_core::*;
pub use htmlsvg_render::{
    ContentSizeCalculator, DocumentValidator, ForeignObjectSynthesizer, MeasurementError,
    NoValidation, SvgSynthesizer, ValidationError, ViewportSizeCalculator, WellFormedXhtml,
    get_svg_for_document, render_foreign_object_svg, serialize_xhtml,
};

mod orchestrator;

pub use orchestrator::{DefaultRenderError, RenderError, RenderOrchestrator};

/// Renders with the default collaborators, see [`RenderOrchestrator::default`].
pub async fn draw_document_as_svg<D: Document + ?Sized>(
    document: &mut D,
    options: &RenderOptions,
) -> std::result::Result<String, DefaultRenderError> {
    <RenderOrchestrator>::default()
        .draw_document_as_svg(document, options)
        .await
}
