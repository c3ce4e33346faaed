//! WASM-facing entry points for adapter generation.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Requests arrive as JSON matching
//! [`adapter_mesh::AdapterParams`]. Native tests use the `*_internal`
//! helpers, which return Rust error types instead of `JsValue`.
//!
//! ```
//! let json = r#"{"base_diameter": 39, "top_diameter": 37, "thickness": 2, "tube_length": 30}"#;
//! let body = wasm::generate_adapter_internal(json, None).unwrap();
//! assert_eq!(body.parts.len(), 4);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use adapter_mesh::export::stl_bytes;
use adapter_mesh::text::{BlockOutliner, FontOutliner, TextOutliner};
use adapter_mesh::{compose_adapter, compose_collars, AdapterParams, AssembledBody, MeshError, StlFormat};
use config::constants::DEFAULT_SEGMENTS;
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default ring segment count.
///
/// # Examples
/// ```
/// let segments = wasm::default_segments();
/// assert!(segments >= 3);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Generates the adapter body and returns its render buffers.
///
/// `font` holds TrueType bytes for the label; without it the label uses
/// block glyphs.
///
/// # Errors
/// Returns a JavaScript error with a human-readable message for invalid
/// JSON, impossible dimensions or unrenderable text.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_adapter(JSON.stringify({
/// //   base_diameter: 39, top_diameter: 37, thickness: 2, tube_length: 30,
/// // }));
/// // console.log(mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn generate_adapter(params_json: &str, font: Option<Vec<u8>>) -> Result<MeshHandle, JsValue> {
    generate_adapter_internal(params_json, font)
        .map(MeshHandle::from_body)
        .map_err(to_js)
}

/// Generates the adapter body as an STL file.
///
/// # Errors
/// Same conditions as [`generate_adapter`].
#[wasm_bindgen]
pub fn generate_adapter_stl(
    params_json: &str,
    font: Option<Vec<u8>>,
    ascii: bool,
) -> Result<Vec<u8>, JsValue> {
    generate_adapter_stl_internal(params_json, font, format_for(ascii)).map_err(to_js)
}

/// Generates one insert collar as an STL file; `top` selects the frustum
/// collar for the smaller tube.
///
/// # Errors
/// Same conditions as [`generate_adapter`], plus a non-positive
/// `collar_length`.
#[wasm_bindgen]
pub fn generate_collar_stl(
    params_json: &str,
    collar_length: f64,
    top: bool,
    font: Option<Vec<u8>>,
    ascii: bool,
) -> Result<Vec<u8>, JsValue> {
    let pair = generate_collars_internal(params_json, collar_length, font).map_err(to_js)?;
    let (body, name) = if top {
        (pair.top, "collar_top")
    } else {
        (pair.base, "collar_base")
    };
    stl_bytes(&body.mesh, name, format_for(ascii)).map_err(to_js)
}

/// Host-side adapter generation.
///
/// # Examples
/// ```
/// let json = r#"{"base_diameter": 27, "top_diameter": 39, "thickness": 20, "tube_length": 30}"#;
/// assert!(wasm::generate_adapter_internal(json, None).is_err());
/// ```
pub fn generate_adapter_internal(
    params_json: &str,
    font: Option<Vec<u8>>,
) -> Result<AssembledBody, MeshError> {
    let params = parse_params(params_json)?;
    let dims = params.dimensions()?;
    let settings = params.settings()?;
    let mut outliner = outliner_for(font)?;
    compose_adapter(&dims, params.tube_length, &settings, Some(outliner.as_mut()))
}

/// Host-side STL generation for the adapter body.
pub fn generate_adapter_stl_internal(
    params_json: &str,
    font: Option<Vec<u8>>,
    format: StlFormat,
) -> Result<Vec<u8>, MeshError> {
    let body = generate_adapter_internal(params_json, font)?;
    stl_bytes(&body.mesh, "adapter", format)
}

/// Host-side collar generation.
pub fn generate_collars_internal(
    params_json: &str,
    collar_length: f64,
    font: Option<Vec<u8>>,
) -> Result<adapter_mesh::CollarPair, MeshError> {
    let params = parse_params(params_json)?;
    let dims = params.dimensions()?;
    let settings = params.settings()?;
    let mut outliner = outliner_for(font)?;
    compose_collars(&dims, collar_length, &settings, Some(outliner.as_mut()))
}

fn parse_params(params_json: &str) -> Result<AdapterParams, MeshError> {
    serde_json::from_str(params_json)
        .map_err(|err| MeshError::configuration(format!("invalid parameters: {err}")))
}

fn outliner_for(font: Option<Vec<u8>>) -> Result<Box<dyn TextOutliner>, MeshError> {
    Ok(match font {
        Some(bytes) => Box::new(FontOutliner::new(bytes)?),
        None => Box::new(BlockOutliner::default()),
    })
}

fn format_for(ascii: bool) -> StlFormat {
    if ascii {
        StlFormat::Ascii
    } else {
        StlFormat::Binary
    }
}

fn to_js(err: MeshError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
