//! # Cross-Sections
//!
//! Plane/mesh intersection for inspecting a generated wall profile.
//! Nothing in the generation path depends on it.

use std::fmt::Write;

use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// Segments where a plane cuts a mesh.
#[derive(Debug, Clone)]
pub struct CrossSection {
    /// Intersection segments in 3D, one per cut triangle
    pub segments: Vec<(DVec3, DVec3)>,
    /// Total segment length
    pub perimeter: f64,
    pub plane_origin: DVec3,
    /// Unit plane normal
    pub plane_normal: DVec3,
}

/// Cuts `mesh` with the plane through `origin` with normal `normal`.
///
/// Returns `None` when the plane misses the mesh or `normal` is zero.
///
/// # Example
///
/// ```rust
/// use adapter_mesh::revolution::hollow_cylinder;
/// use adapter_mesh::section::cross_section;
/// use glam::DVec3;
///
/// let tube = hollow_cylinder(10.0, 8.0, 5.0, 0.0, 32).unwrap();
/// let section = cross_section(&tube, DVec3::new(0.0, 2.5, 0.0), DVec3::Y).unwrap();
/// assert!(section.perimeter > 100.0);
/// assert!(cross_section(&tube, DVec3::new(0.0, 50.0, 0.0), DVec3::Y).is_none());
/// ```
pub fn cross_section(mesh: &Mesh, origin: DVec3, normal: DVec3) -> Option<CrossSection> {
    let normal = normal.try_normalize()?;
    let mut segments = Vec::new();

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_positions(t);
        let mut hits: Vec<DVec3> = Vec::with_capacity(3);
        for (p, q) in [(a, b), (b, c), (c, a)] {
            if let Some(hit) = plane_edge_intersection(origin, normal, p, q) {
                // A vertex on the plane is reported by both of its edges
                if hits.iter().all(|h| h.distance(hit) > VERTEX_MERGE_EPSILON) {
                    hits.push(hit);
                }
            }
        }
        if let [p, q] = hits[..] {
            segments.push((p, q));
        }
    }

    if segments.is_empty() {
        return None;
    }

    let perimeter = segments.iter().map(|(p, q)| p.distance(*q)).sum();
    Some(CrossSection {
        segments,
        perimeter,
        plane_origin: origin,
        plane_normal: normal,
    })
}

fn plane_edge_intersection(origin: DVec3, normal: DVec3, a: DVec3, b: DVec3) -> Option<DVec3> {
    let d_a = (a - origin).dot(normal);
    let d_b = (b - origin).dot(normal);

    if d_a * d_b > 0.0 || (d_a - d_b).abs() < EPSILON {
        return None;
    }

    let t = d_a / (d_a - d_b);
    Some(a + (b - a) * t)
}

impl CrossSection {
    /// Orthonormal in-plane axes `(u, v)` with `u × v = normal`.
    pub fn plane_axes(&self) -> (DVec3, DVec3) {
        let n = self.plane_normal;
        let u = if n.x.abs() < 0.9 {
            DVec3::X.cross(n).normalize()
        } else {
            DVec3::Y.cross(n).normalize()
        };
        (u, n.cross(u))
    }

    /// Segments projected onto the plane axes, relative to the origin.
    pub fn to_planar(&self) -> Vec<(DVec2, DVec2)> {
        let (u, v) = self.plane_axes();
        let project = |p: DVec3| {
            let d = p - self.plane_origin;
            DVec2::new(d.dot(u), d.dot(v))
        };
        self.segments
            .iter()
            .map(|&(p, q)| (project(p), project(q)))
            .collect()
    }

    /// Planar bounds `(min, max)`.
    pub fn bounds(&self) -> (DVec2, DVec2) {
        self.to_planar().iter().fold(
            (DVec2::splat(f64::MAX), DVec2::splat(f64::MIN)),
            |(min, max), &(p, q)| (min.min(p).min(q), max.max(p).max(q)),
        )
    }

    /// Renders the projected segments as a standalone SVG document.
    ///
    /// SVG's y axis points down, so the planar v axis is flipped.
    pub fn to_svg(&self) -> String {
        let (min, max) = self.bounds();
        let margin = (max - min).max_element() * 0.05 + 1.0;
        let size = max - min + DVec2::splat(2.0 * margin);

        let mut path = String::new();
        for (p, q) in self.to_planar() {
            // Writing into a String cannot fail
            let _ = write!(path, "M{:.4} {:.4}L{:.4} {:.4}", p.x, -p.y, q.x, -q.y);
        }

        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.4} {:.4} {:.4} {:.4}\">\n",
                "  <path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{:.4}\"/>\n",
                "</svg>\n"
            ),
            min.x - margin,
            -max.y - margin,
            size.x,
            size.y,
            path,
            margin / 10.0,
        )
    }
}
