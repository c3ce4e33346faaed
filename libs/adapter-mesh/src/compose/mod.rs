//! # Composition
//!
//! Assembles revolution parts and text reliefs into finished bodies.
//!
//! Parts are built in the build frame (main axis +Y), concatenated without
//! boolean union, and rotated once into the export frame (main axis +Z).

mod adapter;
mod collar;
mod params;


pub use adapter::compose_adapter;
pub use collar::{compose_collars, CollarPair};
pub use params::AdapterParams;

use std::ops::Range;

use config::constants::EXPORT_ROTATION_X;
use glam::DMat4;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Where one source part landed inside an [`AssembledBody`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSpan {
    pub name: &'static str,
    pub vertices: Range<usize>,
    pub triangles: Range<usize>,
}

/// Concatenation of several part meshes.
///
/// Each part keeps its own contiguous vertex range, and its triangles
/// reference only that range.
#[derive(Debug, Clone, Default)]
pub struct AssembledBody {
    pub mesh: Mesh,
    pub parts: Vec<PartSpan>,
}

impl AssembledBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `part`, consuming it.
    pub fn push(&mut self, name: &'static str, part: Mesh) {
        let vertex_start = self.mesh.vertex_count();
        let triangle_start = self.mesh.triangle_count();
        self.mesh.merge(&part);
        self.parts.push(PartSpan {
            name,
            vertices: vertex_start..self.mesh.vertex_count(),
            triangles: triangle_start..self.mesh.triangle_count(),
        });
    }

    /// Span of the first part called `name`.
    pub fn part(&self, name: &str) -> Option<&PartSpan> {
        self.parts.iter().find(|span| span.name == name)
    }

    /// Rotates the whole body from the build frame into the export frame.
    pub fn orient_for_export(&mut self) {
        self.mesh.transform(&export_rotation());
    }

    /// Checks size limits of the combined mesh.
    pub fn finish(self) -> Result<Self, MeshError> {
        self.mesh.check_limits()?;
        Ok(self)
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

/// Rotation taking the build axis (+Y) onto the print axis (+Z).
pub fn export_rotation() -> DMat4 {
    DMat4::from_rotation_x(EXPORT_ROTATION_X)
}
