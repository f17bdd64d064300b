use futures::FutureExt as _;
use futures::future::LocalBoxFuture;
use htmlsvg_core::{Document, SelectorError, SizeDescriptor, SizeRequest, ZoomFactor};

/// Resolves the geometry of one render call.
///
/// Real implementations lay the document out (hidden frame, headless engine, ...) and may
/// suspend while doing so. The future is not required to be `Send`: the pipeline runs on a
/// single cooperative task.
pub trait ContentSizeCalculator<D: Document + ?Sized> {
    type Error;

    fn calculate<'a>(
        &'a self,
        document: &'a D,
        request: &'a SizeRequest,
    ) -> LocalBoxFuture<'a, Result<SizeDescriptor, Self::Error>>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    #[error("Clipping to '{selector}' requires a layout-capable size calculator")]
    ClipRequiresLayout { selector: String },

    #[error("Clip selector '{selector}' does not match any element")]
    ClipNotFound { selector: String },

    #[error("Invalid clip selector: {0}")]
    ClipInvalid(#[from] SelectorError),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Layout-free calculator: the canvas is the requested size (or the defaults), the visible
/// frame is the canvas divided by the zoom factor, and there is no offset.
///
/// Clipping needs element geometry, so a `clip` request is rejected once the selector has been
/// checked against the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSizeCalculator {
    pub default_width: f64,
    pub default_height: f64,
}

impl Default for ViewportSizeCalculator {
    fn default() -> Self {
        Self {
            default_width: 300.0,
            default_height: 200.0,
        }
    }
}

impl ViewportSizeCalculator {
    pub fn new(default_width: f64, default_height: f64) -> Self {
        Self {
            default_width,
            default_height,
        }
    }

    pub fn measure<D: Document + ?Sized>(
        &self,
        document: &D,
        request: &SizeRequest,
    ) -> Result<SizeDescriptor, MeasurementError> {
        if let Some(selector) = &request.clip {
            return Err(match document.query_selector(selector)? {
                Some(_) => MeasurementError::ClipRequiresLayout {
                    selector: selector.clone(),
                },
                None => MeasurementError::ClipNotFound {
                    selector: selector.clone(),
                },
            });
        }

        let width = request.width.unwrap_or(self.default_width);
        let height = request.height.unwrap_or(self.default_height);
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(MeasurementError::InvalidSize { width, height });
        }

        let zoom = ZoomFactor::from(request.zoom).divisor();
        Ok(SizeDescriptor::new(width, height).with_viewport(width / zoom, height / zoom))
    }
}

impl<D: Document + ?Sized> ContentSizeCalculator<D> for ViewportSizeCalculator {
    type Error = MeasurementError;

    fn calculate<'a>(
        &'a self,
        document: &'a D,
        request: &'a SizeRequest,
    ) -> LocalBoxFuture<'a, Result<SizeDescriptor, MeasurementError>> {
        futures::future::ready(self.measure(document, request)).boxed_local()
    }
}
