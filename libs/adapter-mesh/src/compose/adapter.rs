//! The adapter body: two tubes joined by a tapered junction.

use config::constants::{FRUSTUM_TOP_TAPER, LABEL_FONT_RATIO};
use config::settings::GenerationSettings;
use tracing::{info, instrument};

use super::AssembledBody;
use crate::dimensions::{Dimensions, TubeEnd};
use crate::error::MeshError;
use crate::revolution::{hollow_cylinder, hollow_frustum, tapered_cone};
use crate::text::{emboss_text, EmbossParams, Relief, TextOutliner, WallSide};

/// Builds the adapter body in the export frame.
///
/// Along the build axis:
///
/// ```text
/// [0, L)          base tube (cylinder, base radii)
/// [L, L + H)      junction (cone from base to top outer radius)
/// [L + H, 2L + H] top tube (frustum, top radii)
/// ```
///
/// with `L = tube_length` and `H` the junction height. When the settings
/// enable lettering and an outliner is given, the dimension label is
/// embossed on the outer wall of [`Dimensions::label_end`].
///
/// Parts are named `base-tube`, `junction`, `top-tube` and `label`.
///
/// # Errors
///
/// [`MeshError::Configuration`] for a non-positive tube length or invalid
/// settings, [`MeshError::Geometry`] from the builders and
/// [`MeshError::TextGeometry`] from the label.
#[instrument(skip_all, fields(label = dims.label(), tube_length = tube_length))]
pub fn compose_adapter(
    dims: &Dimensions,
    tube_length: f64,
    settings: &GenerationSettings,
    outliner: Option<&mut dyn TextOutliner>,
) -> Result<AssembledBody, MeshError> {
    settings.validate()?;
    if !(tube_length.is_finite() && tube_length > 0.0) {
        return Err(MeshError::configuration(format!(
            "tube length must be positive: {tube_length}"
        )));
    }

    let segments = settings.segments;
    let junction = dims.junction_height();
    let top_offset = tube_length + junction;

    let mut body = AssembledBody::new();
    body.push(
        "base-tube",
        hollow_cylinder(
            dims.base_outer_radius(),
            dims.base_inner_radius(),
            tube_length,
            0.0,
            segments,
        )?,
    );
    body.push(
        "junction",
        tapered_cone(
            dims.base_outer_radius(),
            dims.top_outer_radius(),
            dims.thickness(),
            junction,
            Some(junction),
            tube_length,
            segments,
        )?,
    );
    body.push(
        "top-tube",
        hollow_frustum(
            dims.top_outer_radius(),
            dims.top_inner_radius(),
            tube_length,
            top_offset,
            segments,
        )?,
    );

    if let (Some(relief), Some(outliner)) = (Relief::from_mode(settings.text_mode), outliner) {
        let (radius, taper, y_offset) = match dims.label_end() {
            TubeEnd::Base => (dims.base_outer_radius(), 0.0, 0.0),
            TubeEnd::Top => (dims.top_outer_radius(), FRUSTUM_TOP_TAPER, top_offset),
        };
        let params = EmbossParams {
            radius,
            taper,
            y_offset,
            height: tube_length,
            depth: settings.relief_depth,
            font_size: tube_length * LABEL_FONT_RATIO,
            relief,
            side: WallSide::Outer,
            max_wrap_fraction: Some(settings.max_wrap_fraction),
        };
        body.push("label", emboss_text(outliner, dims.label(), &params)?);
    }

    body.orient_for_export();
    info!(
        parts = body.parts.len(),
        vertices = body.mesh.vertex_count(),
        triangles = body.mesh.triangle_count(),
        "composed adapter"
    );
    body.finish()
}
