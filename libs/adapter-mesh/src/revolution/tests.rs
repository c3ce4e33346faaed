//! Tests for the revolution builder.

use super::*;
use approx::assert_relative_eq;
use glam::DVec3;
use std::collections::HashMap;

fn shapes() -> Vec<Revolution> {
    vec![
        Revolution::Cylinder {
            outer_radius: 19.5,
            inner_radius: 17.5,
            height: 30.0,
        },
        Revolution::Frustum {
            outer_radius: 18.5,
            inner_radius: 16.5,
            height: 30.0,
        },
        Revolution::TaperedCone {
            base_outer_radius: 19.5,
            top_outer_radius: 18.5,
            thickness: 2.0,
            height: 5.73,
            cut_height: None,
        },
    ]
}

fn centroid(mesh: &Mesh, index: usize) -> DVec3 {
    let [a, b, c] = mesh.triangle_positions(index);
    (a + b + c) / 3.0
}

#[test]
fn counts_follow_segments() {
    for shape in shapes() {
        for segments in [3, 16, 64, 128] {
            let mesh = shape.build(0.0, segments).unwrap();
            assert_eq!(mesh.vertex_count(), 4 * segments as usize);
            assert_eq!(mesh.triangle_count(), 8 * segments as usize);
            let limit = 4 * segments;
            assert!(mesh.indices_u32().iter().all(|&i| i < limit));
            assert!(mesh.validate());
        }
    }
}

#[test]
fn outer_wall_faces_away_from_axis() {
    for shape in shapes() {
        let mesh = shape.build(0.0, 32).unwrap();
        for t in WallGroup::Outer.triangle_range(32) {
            let c = centroid(&mesh, t);
            let radial = DVec3::new(c.x, 0.0, c.z).normalize();
            assert!(mesh.face_normal(t).dot(radial) > 0.0, "{} triangle {t}", shape.name());
        }
    }
}

#[test]
fn inner_wall_faces_axis() {
    for shape in shapes() {
        let mesh = shape.build(0.0, 32).unwrap();
        for t in WallGroup::Inner.triangle_range(32) {
            let c = centroid(&mesh, t);
            let radial = DVec3::new(c.x, 0.0, c.z).normalize();
            assert!(mesh.face_normal(t).dot(radial) < 0.0, "{} triangle {t}", shape.name());
        }
    }
}

#[test]
fn caps_face_away_from_solid() {
    for shape in shapes() {
        let mesh = shape.build(2.0, 24).unwrap();
        for t in WallGroup::TopCap.triangle_range(24) {
            assert_relative_eq!(mesh.face_normal(t).y, 1.0, epsilon = 1e-9);
        }
        for t in WallGroup::BottomCap.triangle_range(24) {
            assert_relative_eq!(mesh.face_normal(t).y, -1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn wall_is_closed_and_consistently_wound() {
    // Every directed edge appears once and its reverse appears once
    for shape in shapes() {
        let mesh = shape.build(0.0, 12).unwrap();
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in mesh.triangles() {
            for k in 0..3 {
                *edges.entry((tri[k], tri[(k + 1) % 3])).or_default() += 1;
            }
        }
        for (&(a, b), &count) in &edges {
            assert_eq!(count, 1, "edge {a}->{b} repeated");
            assert_eq!(edges.get(&(b, a)), Some(&1), "edge {a}->{b} has no twin");
        }
    }
}

#[test]
fn build_is_deterministic() {
    for shape in shapes() {
        let first = shape.build(1.5, 48).unwrap();
        let second = shape.build(1.5, 48).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn y_offset_places_bottom_ring() {
    let mesh = hollow_cylinder(10.0, 8.0, 30.0, 42.0, 16).unwrap();
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.y, 42.0);
    assert_relative_eq!(max.y, 72.0);
}

#[test]
fn cylinder_keeps_radii() {
    let profile = Revolution::Cylinder {
        outer_radius: 10.0,
        inner_radius: 8.0,
        height: 5.0,
    }
    .profile(0.0)
    .unwrap();
    assert_eq!(profile.top_outer, 10.0);
    assert_eq!(profile.top_inner, 8.0);
}

#[test]
fn frustum_tapers_top_radii() {
    let profile = Revolution::Frustum {
        outer_radius: 18.5,
        inner_radius: 16.5,
        height: 30.0,
    }
    .profile(0.0)
    .unwrap();
    assert_relative_eq!(profile.top_outer, 18.5 - 0.5);
    assert_relative_eq!(profile.top_inner, 16.5 - 0.5);
    assert_eq!(profile.bottom_outer, 18.5);

    let mesh = hollow_frustum(18.5, 16.5, 30.0, 0.0, 8).unwrap();
    let top = mesh.vertex(8);
    assert_relative_eq!((top.x * top.x + top.z * top.z).sqrt(), 18.0, epsilon = 1e-12);
}

#[test]
fn frustum_rejects_inverted_or_vanishing_radii() {
    assert!(matches!(
        hollow_frustum(10.0, 10.0, 5.0, 0.0, 16),
        Err(MeshError::Geometry { .. })
    ));
    assert!(hollow_frustum(10.0, 12.0, 5.0, 0.0, 16).is_err());
    // Inner top radius would become 0.5 - 0.5 = 0
    assert!(hollow_frustum(3.0, 0.5, 5.0, 0.0, 16).is_err());
}

#[test]
fn cylinder_rejects_degenerate_input() {
    assert!(hollow_cylinder(10.0, 0.0, 5.0, 0.0, 16).is_err());
    assert!(hollow_cylinder(10.0, 8.0, 0.0, 0.0, 16).is_err());
    assert!(hollow_cylinder(10.0, 8.0, 5.0, 0.0, 2).is_err());
    assert!(hollow_cylinder(f64::NAN, 8.0, 5.0, 0.0, 16).is_err());
}

#[test]
fn cone_interpolates_cut_radius() {
    let profile = Revolution::TaperedCone {
        base_outer_radius: 20.0,
        top_outer_radius: 10.0,
        thickness: 2.0,
        height: 10.0,
        cut_height: Some(4.0),
    }
    .profile(5.0)
    .unwrap();
    assert_relative_eq!(profile.top_outer, 16.0);
    assert_relative_eq!(profile.y_top, 9.0);
}

#[test]
fn cone_inner_radius_tracks_outer() {
    let profile = Revolution::TaperedCone {
        base_outer_radius: 20.0,
        top_outer_radius: 12.0,
        thickness: 1.5,
        height: 8.0,
        cut_height: None,
    }
    .profile(0.0)
    .unwrap();
    assert_relative_eq!(profile.bottom_outer - profile.bottom_inner, 1.5);
    assert_relative_eq!(profile.top_outer - profile.top_inner, 1.5);
    assert_relative_eq!(profile.top_outer, 12.0);
}

#[test]
fn cone_cut_is_clamped_to_height() {
    let profile = Revolution::TaperedCone {
        base_outer_radius: 20.0,
        top_outer_radius: 12.0,
        thickness: 1.5,
        height: 8.0,
        cut_height: Some(50.0),
    }
    .profile(0.0)
    .unwrap();
    assert_relative_eq!(profile.y_top, 8.0);
}

#[test]
fn cone_rejects_wall_thicker_than_cut_radius() {
    let result = tapered_cone(20.0, 2.0, 3.0, 10.0, None, 0.0, 16);
    assert!(matches!(result, Err(MeshError::Geometry { .. })));
    assert!(tapered_cone(20.0, 10.0, 2.0, 10.0, Some(0.0), 0.0, 16).is_err());
}

#[test]
fn wall_group_ranges_tile_the_mesh() {
    let segments = 10;
    let mut next = 0;
    for group in WallGroup::ALL {
        let range = group.triangle_range(segments);
        assert_eq!(range.start, next);
        next = range.end;
    }
    assert_eq!(next, 8 * segments as usize);
}
