//! # Linear Extrusion
//!
//! Closed prisms from simple 2D outlines, used by the glyph-free text
//! backend to turn character cells into solid blocks.

mod linear;


pub use linear::{linear_extrude, LinearExtrudeParams};

use glam::DVec2;

/// A simple closed 2D outline in the XY plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    /// Boundary vertices in counter-clockwise order
    pub outer: Vec<DVec2>,
}

impl Polygon2D {
    /// Creates a polygon from boundary vertices.
    ///
    /// Clockwise input is reversed so the boundary is always
    /// counter-clockwise.
    pub fn new(mut outer: Vec<DVec2>) -> Self {
        if signed_area(&outer) < 0.0 {
            outer.reverse();
        }
        Self { outer }
    }

    /// Axis-aligned rectangle with its lower-left corner at `min`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adapter_mesh::extrude::Polygon2D;
    /// use glam::DVec2;
    ///
    /// let cell = Polygon2D::rectangle(DVec2::ZERO, DVec2::new(2.0, 3.0));
    /// assert_eq!(cell.area(), 6.0);
    /// ```
    pub fn rectangle(min: DVec2, size: DVec2) -> Self {
        Self::new(vec![
            min,
            DVec2::new(min.x + size.x, min.y),
            min + size,
            DVec2::new(min.x, min.y + size.y),
        ])
    }

    /// Returns the number of boundary vertices.
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// Enclosed area.
    pub fn area(&self) -> f64 {
        signed_area(&self.outer).abs()
    }
}

/// Shoelace area, positive for counter-clockwise boundaries.
fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}
