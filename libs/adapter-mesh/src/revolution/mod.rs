//! # Revolution Builder
//!
//! Closed hollow surfaces of revolution around the build axis (+Y):
//! - **Cylinder**: constant outer and inner radius
//! - **Frustum**: both top radii reduced by a fixed lead-in taper
//! - **Tapered cone**: outer radius interpolated from base to top, inner
//!   radius always `outer − thickness`
//!
//! Every variant resolves to a [`WallProfile`] of four rings (outer-bottom,
//! outer-top, inner-bottom, inner-top) which is stitched into four wall
//! groups by one routine, so the indexing and winding tables exist once.
//!
//! ## Vertex layout
//!
//! ```text
//! [0, S)    outer bottom ring
//! [S, 2S)   outer top ring
//! [2S, 3S)  inner bottom ring
//! [3S, 4S)  inner top ring
//! ```

mod ring;

#[cfg(test)]
mod tests;

pub use ring::{ring_point, Ring};

use std::ops::Range;

use config::constants::{FRUSTUM_TOP_TAPER, MAX_SEGMENTS, MIN_SEGMENTS};
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Shape of a hollow solid of revolution.
///
/// # Example
///
/// ```rust
/// use adapter_mesh::revolution::Revolution;
///
/// let tube = Revolution::Cylinder { outer_radius: 10.0, inner_radius: 8.0, height: 30.0 };
/// let mesh = tube.build(0.0, 64).unwrap();
/// assert_eq!(mesh.vertex_count(), 4 * 64);
/// assert_eq!(mesh.triangle_count(), 8 * 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Revolution {
    /// Straight tube.
    Cylinder {
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    },
    /// Tube whose top radii are both reduced by [`FRUSTUM_TOP_TAPER`].
    Frustum {
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    },
    /// Cone wall from `base_outer_radius` towards `top_outer_radius` over
    /// `height`, truncated at `cut_height` (defaults to, and is clamped to,
    /// `height`).
    TaperedCone {
        base_outer_radius: f64,
        top_outer_radius: f64,
        thickness: f64,
        height: f64,
        cut_height: Option<f64>,
    },
}

/// Radii and heights of the four rings of a hollow wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallProfile {
    pub bottom_outer: f64,
    pub bottom_inner: f64,
    pub top_outer: f64,
    pub top_inner: f64,
    pub y_bottom: f64,
    pub y_top: f64,
}

impl WallProfile {
    /// Checks that both ends describe a real annulus and the wall has
    /// positive height.
    pub fn validate(&self) -> Result<(), MeshError> {
        let values = [
            self.bottom_outer,
            self.bottom_inner,
            self.top_outer,
            self.top_inner,
            self.y_bottom,
            self.y_top,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MeshError::geometry(format!("non-finite wall profile: {self:?}")));
        }
        if self.y_top <= self.y_bottom {
            return Err(MeshError::geometry(format!(
                "wall height must be positive: bottom={}, top={}",
                self.y_bottom, self.y_top
            )));
        }
        for (end, outer, inner) in [
            ("bottom", self.bottom_outer, self.bottom_inner),
            ("top", self.top_outer, self.top_inner),
        ] {
            if inner <= 0.0 {
                return Err(MeshError::geometry(format!(
                    "{end} inner radius must be positive: {inner}"
                )));
            }
            if outer <= inner {
                return Err(MeshError::geometry(format!(
                    "{end} outer radius {outer} must exceed inner radius {inner}"
                )));
            }
        }
        Ok(())
    }
}

impl Revolution {
    /// Resolves the shape into ring radii, with the bottom ring at
    /// `y_offset`.
    pub fn profile(&self, y_offset: f64) -> Result<WallProfile, MeshError> {
        let profile = match *self {
            Revolution::Cylinder {
                outer_radius,
                inner_radius,
                height,
            } => WallProfile {
                bottom_outer: outer_radius,
                bottom_inner: inner_radius,
                top_outer: outer_radius,
                top_inner: inner_radius,
                y_bottom: y_offset,
                y_top: y_offset + height,
            },
            Revolution::Frustum {
                outer_radius,
                inner_radius,
                height,
            } => WallProfile {
                bottom_outer: outer_radius,
                bottom_inner: inner_radius,
                top_outer: outer_radius - FRUSTUM_TOP_TAPER,
                top_inner: inner_radius - FRUSTUM_TOP_TAPER,
                y_bottom: y_offset,
                y_top: y_offset + height,
            },
            Revolution::TaperedCone {
                base_outer_radius,
                top_outer_radius,
                thickness,
                height,
                cut_height,
            } => {
                if !(height > 0.0) {
                    return Err(MeshError::geometry(format!(
                        "cone height must be positive: {height}"
                    )));
                }
                if !(thickness > 0.0) {
                    return Err(MeshError::geometry(format!(
                        "cone wall thickness must be positive: {thickness}"
                    )));
                }
                let cut = cut_height.map_or(height, |cut| cut.min(height));
                let cut_outer = cone_radius_at(base_outer_radius, top_outer_radius, height, cut);
                WallProfile {
                    bottom_outer: base_outer_radius,
                    bottom_inner: base_outer_radius - thickness,
                    top_outer: cut_outer,
                    top_inner: cut_outer - thickness,
                    y_bottom: y_offset,
                    y_top: y_offset + cut,
                }
            }
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Builds the closed mesh with `segments` points per ring.
    pub fn build(&self, y_offset: f64, segments: u32) -> Result<Mesh, MeshError> {
        let profile = self.profile(y_offset)?;
        let mesh = stitch_wall(&profile, segments)?;
        debug!(
            shape = self.name(),
            segments,
            y_bottom = profile.y_bottom,
            y_top = profile.y_top,
            triangles = mesh.triangle_count(),
            "built revolution"
        );
        Ok(mesh)
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Revolution::Cylinder { .. } => "cylinder",
            Revolution::Frustum { .. } => "frustum",
            Revolution::TaperedCone { .. } => "tapered-cone",
        }
    }
}

/// Outer radius of a cone at `y` above its base, linear from `base` at 0 to
/// `top` at `height`.
#[inline]
pub fn cone_radius_at(base: f64, top: f64, height: f64, y: f64) -> f64 {
    base + (top - base) * (y / height)
}

/// The four triangle groups of a hollow wall, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallGroup {
    /// Outer skin, normals away from the axis.
    Outer,
    /// Bore skin, normals towards the axis.
    Inner,
    /// Top annulus cap, normals along +Y.
    TopCap,
    /// Bottom annulus cap, normals along −Y.
    BottomCap,
}

impl WallGroup {
    /// All groups in the order [`stitch_wall`] emits them.
    pub const ALL: [WallGroup; 4] = [
        WallGroup::Outer,
        WallGroup::Inner,
        WallGroup::TopCap,
        WallGroup::BottomCap,
    ];

    /// Triangle index range of this group in a wall of `segments`.
    pub fn triangle_range(self, segments: u32) -> Range<usize> {
        let per_group = 2 * segments as usize;
        let start = per_group * self as usize;
        start..start + per_group
    }
}

/// Stitches the four rings of `profile` into a closed hollow wall.
///
/// Produces `4·S` vertices and `8·S` triangles. Corner order per quad:
///
/// | group  | quad                                       |
/// |--------|--------------------------------------------|
/// | outer  | `ob_i, ob_{i+1}, ot_{i+1}, ot_i`           |
/// | inner  | `ib_i, it_i, it_{i+1}, ib_{i+1}`           |
/// | top    | `ot_i, ot_{i+1}, it_{i+1}, it_i`           |
/// | bottom | `ob_i, ib_i, ib_{i+1}, ob_{i+1}`           |
pub fn stitch_wall(profile: &WallProfile, segments: u32) -> Result<Mesh, MeshError> {
    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
        return Err(MeshError::geometry(format!(
            "ring segments must be within {MIN_SEGMENTS}..={MAX_SEGMENTS}: {segments}"
        )));
    }

    let s = segments;
    let mut mesh = Mesh::with_capacity(4 * s as usize, 8 * s as usize);

    let rings = [
        Ring::new(profile.bottom_outer, profile.y_bottom, s),
        Ring::new(profile.top_outer, profile.y_top, s),
        Ring::new(profile.bottom_inner, profile.y_bottom, s),
        Ring::new(profile.top_inner, profile.y_top, s),
    ];
    for ring in &rings {
        for point in ring.points() {
            mesh.add_vertex(point);
        }
    }

    let (ob, ot, ib, it) = (0, s, 2 * s, 3 * s);

    for group in WallGroup::ALL {
        for i in 0..s {
            let j = (i + 1) % s;
            match group {
                WallGroup::Outer => mesh.add_quad(ob + i, ob + j, ot + j, ot + i),
                WallGroup::Inner => mesh.add_quad(ib + i, it + i, it + j, ib + j),
                WallGroup::TopCap => mesh.add_quad(ot + i, ot + j, it + j, it + i),
                WallGroup::BottomCap => mesh.add_quad(ob + i, ib + i, ib + j, ob + j),
            }
        }
    }

    Ok(mesh)
}

/// Hollow cylinder with its bottom ring at `y_offset`.
pub fn hollow_cylinder(
    outer_radius: f64,
    inner_radius: f64,
    height: f64,
    y_offset: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    Revolution::Cylinder {
        outer_radius,
        inner_radius,
        height,
    }
    .build(y_offset, segments)
}

/// Hollow frustum with its bottom ring at `y_offset`.
pub fn hollow_frustum(
    outer_radius: f64,
    inner_radius: f64,
    height: f64,
    y_offset: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    Revolution::Frustum {
        outer_radius,
        inner_radius,
        height,
    }
    .build(y_offset, segments)
}

/// Hollow tapered cone section with its base ring at `y_offset`.
pub fn tapered_cone(
    base_outer_radius: f64,
    top_outer_radius: f64,
    thickness: f64,
    height: f64,
    cut_height: Option<f64>,
    y_offset: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    Revolution::TaperedCone {
        base_outer_radius,
        top_outer_radius,
        thickness,
        height,
        cut_height,
    }
    .build(y_offset, segments)
}
