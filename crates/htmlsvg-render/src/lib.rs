#![forbid(unsafe_code)]

//! Headless SVG synthesis for `htmlsvg`.
//!
//! - [`xhtml`]: canonical XHTML serialization of a [`Document`](htmlsvg_core::Document)
//! - [`svg`]: `foreignObject` geometry and markup assembly
//! - [`validate`]: checks run on the XHTML before it is embedded
//! - [`size`]: the content-size calculator contract used by the render pipeline

pub mod size;
pub mod svg;
pub mod validate;
pub mod xhtml;

mod util;

pub use size::{ContentSizeCalculator, MeasurementError, ViewportSizeCalculator};
pub use svg::{
    ForeignObjectSynthesizer, SvgSynthesizer, get_svg_for_document, render_foreign_object_svg,
};
pub use validate::{DocumentValidator, NoValidation, ValidationError, WellFormedXhtml};
pub use xhtml::serialize_xhtml;
