//! Insert collars: short rings that help seat the adapter in its tubes.

use config::constants::{COLLAR_SEGMENTS, FRUSTUM_TOP_TAPER, INSERT_FONT_RATIO};
use config::settings::GenerationSettings;
use tracing::{info, instrument};

use super::AssembledBody;
use crate::dimensions::{format_dimension, Dimensions};
use crate::error::MeshError;
use crate::revolution::{hollow_cylinder, hollow_frustum};
use crate::text::{emboss_text, EmbossParams, Relief, TextOutliner, WallSide};

/// The two collars, each oriented for export on its own.
#[derive(Debug, Clone)]
pub struct CollarPair {
    /// Cylinder with the base tube radii, lettered on the outside
    pub base: AssembledBody,
    /// Frustum with the top tube radii, lettered inside the bore
    pub top: AssembledBody,
}

/// Builds both insert collars, independent of the adapter body.
///
/// Rings use at least [`COLLAR_SEGMENTS`] points. With lettering enabled
/// the base collar reads `insert into inside di=<base bore>` on its outer
/// wall and the top collar `it's insert inside do=<top outer>` on its bore.
/// Parts are named `ring` and `insert-text`.
#[instrument(skip_all, fields(label = dims.label(), collar_length = collar_length))]
pub fn compose_collars(
    dims: &Dimensions,
    collar_length: f64,
    settings: &GenerationSettings,
    mut outliner: Option<&mut dyn TextOutliner>,
) -> Result<CollarPair, MeshError> {
    settings.validate()?;
    if !(collar_length.is_finite() && collar_length > 0.0) {
        return Err(MeshError::configuration(format!(
            "collar length must be positive: {collar_length}"
        )));
    }

    let segments = settings.segments.max(COLLAR_SEGMENTS);
    let relief = Relief::from_mode(settings.text_mode);
    let text_params = |radius: f64, taper: f64, side: WallSide, relief: Relief| EmbossParams {
        radius,
        taper,
        y_offset: 0.0,
        height: collar_length,
        depth: settings.relief_depth,
        font_size: collar_length * INSERT_FONT_RATIO,
        relief,
        side,
        max_wrap_fraction: Some(settings.max_wrap_fraction),
    };

    let mut base = AssembledBody::new();
    base.push(
        "ring",
        hollow_cylinder(
            dims.base_outer_radius(),
            dims.base_inner_radius(),
            collar_length,
            0.0,
            segments,
        )?,
    );
    if let (Some(relief), Some(outliner)) = (relief, outliner.as_deref_mut()) {
        let text = format!(
            "insert into inside di={}",
            format_dimension(dims.base_inner_diameter())
        );
        let params = text_params(dims.base_outer_radius(), 0.0, WallSide::Outer, relief);
        base.push("insert-text", emboss_text(outliner, &text, &params)?);
    }

    let mut top = AssembledBody::new();
    top.push(
        "ring",
        hollow_frustum(
            dims.top_outer_radius(),
            dims.top_inner_radius(),
            collar_length,
            0.0,
            segments,
        )?,
    );
    if let (Some(relief), Some(outliner)) = (relief, outliner) {
        let text = format!(
            "it's insert inside do={}",
            format_dimension(dims.top_outer_diameter())
        );
        let params = text_params(
            dims.top_inner_radius(),
            FRUSTUM_TOP_TAPER,
            WallSide::Inner,
            relief,
        );
        top.push("insert-text", emboss_text(outliner, &text, &params)?);
    }

    base.orient_for_export();
    top.orient_for_export();
    info!(
        segments,
        base_triangles = base.mesh.triangle_count(),
        top_triangles = top.mesh.triangle_count(),
        "composed collars"
    );
    Ok(CollarPair {
        base: base.finish()?,
        top: top.finish()?,
    })
}
