use crate::Result;
use crate::geom::ZoomFactor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-call render options. Every field is optional; an absent field has no effect (it is not
/// the same as zero).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Explicit canvas width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit canvas height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    /// Selector of the element to render in `:hover` state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<String>,
    /// Selector of the element to render in `:active` state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
    /// Selector of the subtree the measurement is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<String>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Layers `overrides` (a JSON object) on top of these options.
    ///
    /// Keys present in `overrides` win; `null` clears an option.
    pub fn with_overrides(&self, overrides: &Value) -> Result<Self> {
        let mut merged = self.to_value()?;
        deep_merge_value(&mut merged, overrides);
        Self::from_value(merged)
    }

    pub fn zoom_factor(&self) -> ZoomFactor {
        ZoomFactor::from(self.zoom)
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_hover(mut self, selector: impl Into<String>) -> Self {
        self.hover = Some(selector.into());
        self
    }

    pub fn with_active(mut self, selector: impl Into<String>) -> Self {
        self.active = Some(selector.into());
        self
    }

    pub fn with_clip(mut self, selector: impl Into<String>) -> Self {
        self.clip = Some(selector.into());
        self
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}
