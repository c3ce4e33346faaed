//! Extrudes a 2D outline along +Z into a closed prism.

use super::Polygon2D;
use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Parameters for linear extrusion.
#[derive(Debug, Clone)]
pub struct LinearExtrudeParams {
    /// Extrusion height along Z
    pub height: f64,
    /// Center the extrusion around Z=0
    pub center: bool,
}

impl Default for LinearExtrudeParams {
    fn default() -> Self {
        Self {
            height: 1.0,
            center: false,
        }
    }
}

/// Extrudes `polygon` along +Z.
///
/// Side walls face outward and the caps face ∓Z, so the prism is a closed,
/// consistently wound solid. Caps use fan triangulation and therefore
/// expect a convex outline.
///
/// # Example
///
/// ```rust
/// use adapter_mesh::extrude::{linear_extrude, LinearExtrudeParams, Polygon2D};
/// use glam::DVec2;
///
/// let square = Polygon2D::rectangle(DVec2::ZERO, DVec2::splat(10.0));
/// let params = LinearExtrudeParams { height: 20.0, ..Default::default() };
/// let mesh = linear_extrude(&square, &params).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn linear_extrude(polygon: &Polygon2D, params: &LinearExtrudeParams) -> Result<Mesh, MeshError> {
    if !(params.height > 0.0) {
        return Err(MeshError::geometry(format!(
            "extrusion height must be positive: {}",
            params.height
        )));
    }

    let n = polygon.vertex_count();
    if n < 3 {
        return Err(MeshError::geometry(format!(
            "polygon must have at least 3 vertices, got {n}"
        )));
    }

    let z0 = if params.center { -params.height / 2.0 } else { 0.0 };
    let z1 = z0 + params.height;

    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);
    for z in [z0, z1] {
        for v in &polygon.outer {
            mesh.add_vertex(DVec3::new(v.x, v.y, z));
        }
    }

    let n = n as u32;
    for i in 0..n {
        let j = (i + 1) % n;
        mesh.add_quad(i, j, n + j, n + i);
    }

    // Fan caps from vertex 0
    for i in 1..n - 1 {
        mesh.add_triangle(0, i + 1, i);
        mesh.add_triangle(n, n + i, n + i + 1);
    }

    Ok(mesh)
}
