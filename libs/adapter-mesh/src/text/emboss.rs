//! Wrapping a flat text outline onto a cylinder.

use std::f64::consts::TAU;

use config::constants::approx_zero;
use config::settings::TextMode;
use tracing::{debug, warn};

use super::TextOutliner;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::revolution::ring_point;

/// Direction of the relief relative to the wall surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relief {
    /// Letters stand proud of the surface.
    Emboss,
    /// Letters are sunk into the wall.
    Engrave,
}

impl Relief {
    /// Relief for a text mode, `None` when lettering is disabled.
    pub fn from_mode(mode: TextMode) -> Option<Self> {
        match mode {
            TextMode::None => None,
            TextMode::Emboss => Some(Relief::Emboss),
            TextMode::Engrave => Some(Relief::Engrave),
        }
    }
}

/// The wall face that carries the lettering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// Readable from outside the tube.
    Outer,
    /// Readable from inside the bore.
    Inner,
}

/// Placement of a text relief on a cylindrical surface.
#[derive(Debug, Clone)]
pub struct EmbossParams {
    /// Radius of the surface the text sits on, at the bottom of the band
    pub radius: f64,
    /// How much the surface radius shrinks from the bottom to the top of
    /// the band. Zero for a cylinder.
    pub taper: f64,
    /// Bottom of the height band
    pub y_offset: f64,
    /// Height of the band; the text block is centered in it
    pub height: f64,
    /// Radial depth of the relief
    pub depth: f64,
    /// Glyph size handed to the outliner
    pub font_size: f64,
    pub relief: Relief,
    pub side: WallSide,
    /// Largest share of the circumference the text may span. `None`
    /// disables fitting.
    pub max_wrap_fraction: Option<f64>,
}

impl EmbossParams {
    fn validate(&self) -> Result<(), MeshError> {
        for (name, value) in [
            ("surface radius", self.radius),
            ("band height", self.height),
            ("relief depth", self.depth),
            ("font size", self.font_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MeshError::configuration(format!(
                    "{name} must be positive: {value}"
                )));
            }
        }
        if !(self.taper.is_finite() && self.taper >= 0.0) {
            return Err(MeshError::configuration(format!(
                "surface taper must not be negative: {}",
                self.taper
            )));
        }
        if let Some(fraction) = self.max_wrap_fraction {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(MeshError::configuration(format!(
                    "wrap fraction must be within (0, 1]: {fraction}"
                )));
            }
        }
        if self.base_radius() - self.taper <= 0.0 {
            return Err(MeshError::configuration(format!(
                "relief depth {} reaches the axis of a surface of radius {}",
                self.depth, self.radius
            )));
        }
        Ok(())
    }

    /// Radius of the relief face that touches the wall.
    ///
    /// | side  | emboss  | engrave |
    /// |-------|---------|---------|
    /// | outer | `r`     | `r − d` |
    /// | inner | `r − d` | `r`     |
    ///
    /// The relief always spans `[base, base + d]` radially, less the taper
    /// at the height of each point.
    pub fn base_radius(&self) -> f64 {
        match (self.side, self.relief) {
            (WallSide::Outer, Relief::Emboss) | (WallSide::Inner, Relief::Engrave) => self.radius,
            (WallSide::Outer, Relief::Engrave) | (WallSide::Inner, Relief::Emboss) => {
                self.radius - self.depth
            }
        }
    }
}

/// Outlines `text` and wraps it onto the surface described by `params`.
///
/// The outline is shifted so its left edge sits at angle 0, squeezed
/// horizontally when wider than the allowed share of the circumference,
/// and mapped with `θ = x / r`. Its extrusion axis becomes the radial
/// offset, rescaled to `[0, depth]`, and the block is recentered on the
/// middle of the height band. On a tapered surface the relief follows the
/// wall inwards with height. Normals are recomputed afterwards.
///
/// Inner-side text runs the other way round and faces the axis, so it
/// reads correctly from inside the bore.
///
/// # Errors
///
/// [`MeshError::TextGeometry`] for blank text or an outline without
/// width or depth; [`MeshError::Configuration`] for invalid parameters.
pub fn emboss_text(
    outliner: &mut dyn TextOutliner,
    text: &str,
    params: &EmbossParams,
) -> Result<Mesh, MeshError> {
    params.validate()?;
    if text.trim().is_empty() {
        return Err(MeshError::text_geometry("text is empty"));
    }

    let mut mesh = outliner.outline(text, params.font_size)?;
    if mesh.is_empty() {
        return Err(MeshError::text_geometry(format!("no outline for {text:?}")));
    }

    let (min, max) = mesh.bounding_box();
    let width = max.x - min.x;
    let thickness = max.z - min.z;
    if approx_zero(width) || approx_zero(thickness) {
        return Err(MeshError::text_geometry(format!(
            "outline of {text:?} is flat ({width} x {thickness})"
        )));
    }

    let r = params.radius;
    let circumference = TAU * r;
    let x_scale = match params.max_wrap_fraction {
        Some(fraction) if width > fraction * circumference => fraction * circumference / width,
        _ => 1.0,
    };
    let wrap_angle = width * x_scale / r;
    if wrap_angle > TAU {
        warn!(
            text,
            wrap_degrees = wrap_angle.to_degrees(),
            "text wraps more than a full turn and overlaps itself"
        );
    }

    let y_shift = params.y_offset + params.height / 2.0 - (min.y + max.y) / 2.0;
    let depth_scale = params.depth / thickness;
    let base = params.base_radius();
    let (direction, outward) = match params.side {
        WallSide::Outer => (1.0, true),
        WallSide::Inner => (-1.0, false),
    };

    let slope = params.taper / params.height;

    mesh.map_vertices(|p| {
        let theta = direction * (p.x - min.x) * x_scale / r;
        let offset = (p.z - min.z) * depth_scale;
        let y = p.y + y_shift;
        let surface = base - slope * (y - params.y_offset);
        let radius = if outward {
            surface + offset
        } else {
            surface + params.depth - offset
        };
        ring_point(radius, y, theta)
    });
    mesh.compute_normals();

    debug!(
        text,
        radius = r,
        x_scale,
        wrap_degrees = wrap_angle.to_degrees(),
        triangles = mesh.triangle_count(),
        "wrapped text"
    );
    Ok(mesh)
}
