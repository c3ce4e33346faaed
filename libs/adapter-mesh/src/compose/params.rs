//! Request parameters in serializable form.

use config::constants::{DEFAULT_RELIEF_DEPTH, DEFAULT_SEGMENTS, TEXT_MAX_WRAP_FRACTION};
use config::settings::{GenerationSettings, TextMode};
use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::error::MeshError;

/// One adapter request: the four dimensions plus optional settings.
///
/// # Example
///
/// ```rust
/// use adapter_mesh::AdapterParams;
///
/// let params: AdapterParams = serde_json::from_str(
///     r#"{ "base_diameter": 39, "top_diameter": 37, "thickness": 2, "tube_length": 30 }"#,
/// ).unwrap();
/// assert_eq!(params.settings().unwrap().segments, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterParams {
    /// Outer diameter of one tube, as entered
    pub base_diameter: f64,
    /// Outer diameter of the other tube, as entered
    pub top_diameter: f64,
    /// Wall thickness
    pub thickness: f64,
    /// Length of each straight tube
    pub tube_length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relief_depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_mode: Option<TextMode>,
}

impl AdapterParams {
    /// Parameters with every optional setting left at its default.
    pub fn new(base_diameter: f64, top_diameter: f64, thickness: f64, tube_length: f64) -> Self {
        Self {
            base_diameter,
            top_diameter,
            thickness,
            tube_length,
            relief_depth: None,
            segments: None,
            text_mode: None,
        }
    }

    /// Normalized dimensions.
    pub fn dimensions(&self) -> Result<Dimensions, MeshError> {
        Dimensions::new(self.base_diameter, self.top_diameter, self.thickness)
    }

    /// Validated settings, defaults filled in.
    pub fn settings(&self) -> Result<GenerationSettings, MeshError> {
        Ok(GenerationSettings::new(
            self.segments.unwrap_or(DEFAULT_SEGMENTS),
            self.relief_depth.unwrap_or(DEFAULT_RELIEF_DEPTH),
            TEXT_MAX_WRAP_FRACTION,
            self.text_mode.unwrap_or_default(),
        )?)
    }
}
