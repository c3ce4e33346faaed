//! # Rings
//!
//! Equally spaced points on a circle around the build axis (+Y).

use glam::DVec3;
use std::f64::consts::TAU;

/// Position at `angle` on a circle of `radius` around +Y, at height `y`.
///
/// Angles increase counter-clockwise when looking down +Y, i.e. the sweep
/// is right-handed about the axis. After the export rotation (+90° about X)
/// this becomes the usual `(r cos θ, r sin θ, z)` parametrization.
#[inline]
pub fn ring_point(radius: f64, y: f64, angle: f64) -> DVec3 {
    DVec3::new(radius * angle.cos(), y, -radius * angle.sin())
}

/// `segments` points at angles `2π·k/segments`, `k = 0..segments`.
///
/// The ring is open: no closing duplicate of point 0 is generated, wall
/// builders wrap around with modulo indexing.
///
/// # Example
///
/// ```rust
/// use adapter_mesh::revolution::Ring;
///
/// let ring = Ring::new(2.0, 5.0, 4);
/// let points: Vec<_> = ring.points().collect();
/// assert_eq!(points.len(), 4);
/// assert!(points.iter().all(|p| p.y == 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Distance from the axis
    pub radius: f64,
    /// Height along the axis
    pub y: f64,
    /// Number of points
    pub segments: u32,
}

impl Ring {
    /// Creates a ring description.
    pub fn new(radius: f64, y: f64, segments: u32) -> Self {
        Self {
            radius,
            y,
            segments,
        }
    }

    /// Angle of point `k`.
    #[inline]
    pub fn angle(&self, k: u32) -> f64 {
        TAU * k as f64 / self.segments as f64
    }

    /// Point `k` of the ring.
    #[inline]
    pub fn point(&self, k: u32) -> DVec3 {
        ring_point(self.radius, self.y, self.angle(k))
    }

    /// All points in angular order.
    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        (0..self.segments).map(|k| self.point(k))
    }
}
