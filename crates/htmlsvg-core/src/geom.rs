use crate::config::RenderOptions;
use serde::{Deserialize, Serialize};

/// Geometry of one synthesis call.
///
/// `width`/`height` size the outer SVG canvas; `viewport_width`/`viewport_height` size the
/// visible frame the document is laid out in. They may differ, e.g. when the canvas is
/// clipped to a sub-element or content is zoomed. `left`/`top` offset the frame so that
/// content scrolled by that amount is anchored at the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeDescriptor {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl SizeDescriptor {
    /// A canvas whose visible frame has the same size and no offset.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
            viewport_width: width,
            viewport_height: height,
        }
    }

    pub fn with_viewport(mut self, viewport_width: f64, viewport_height: f64) -> Self {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_offset(mut self, left: f64, top: f64) -> Self {
        self.left = left;
        self.top = top;
        self
    }
}

/// Uniform scale applied to the embedded document.
///
/// Only an absent factor and `0` mean "no scaling". Every other finite positive value,
/// including `1`, produces a transform. Negative and non-finite values are not valid zoom
/// factors and are treated like an absent one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoomFactor(Option<f64>);

impl ZoomFactor {
    pub const NONE: ZoomFactor = ZoomFactor(None);

    pub fn new(factor: f64) -> Self {
        Self(Some(factor))
    }

    pub fn raw(self) -> Option<f64> {
        self.0
    }

    /// The scale to apply, if any.
    pub fn scale(self) -> Option<f64> {
        self.0.filter(|z| z.is_finite() && *z > 0.0)
    }

    /// True when a factor was supplied but cannot be applied (negative, NaN, infinite).
    pub fn is_invalid(self) -> bool {
        self.0.is_some_and(|z| !z.is_finite() || z < 0.0)
    }

    /// The factor used to convert canvas sizes into frame sizes (`1` when not scaling).
    pub fn divisor(self) -> f64 {
        self.scale().unwrap_or(1.0)
    }
}

impl From<f64> for ZoomFactor {
    fn from(factor: f64) -> Self {
        Self::new(factor)
    }
}

impl From<Option<f64>> for ZoomFactor {
    fn from(factor: Option<f64>) -> Self {
        Self(factor)
    }
}

/// Options handed to the content-size calculator.
///
/// Holds exactly the keys the caller supplied; absent keys stay absent when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
}

impl From<&RenderOptions> for SizeRequest {
    fn from(options: &RenderOptions) -> Self {
        Self {
            width: options.width,
            height: options.height,
            clip: options.clip.clone(),
            zoom: options.zoom,
        }
    }
}
