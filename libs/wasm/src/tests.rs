//! Tests for the WASM-facing helpers.

use super::*;

const ADAPTER: &str = r#"{"base_diameter": 39, "top_diameter": 37, "thickness": 2, "tube_length": 30}"#;

/// Default request produces the three tubes and a block-glyph label.
#[test]
fn adapter_has_label_by_default() {
    let body = generate_adapter_internal(ADAPTER, None).expect("generation succeeds");
    let names: Vec<_> = body.parts.iter().map(|span| span.name).collect();
    assert_eq!(names, ["base-tube", "junction", "top-tube", "label"]);
}

/// Render buffers are consistent with the counts they report.
#[test]
fn mesh_handle_buffers_are_consistent() {
    let body = generate_adapter_internal(ADAPTER, None).expect("generation succeeds");
    let handle = MeshHandle::from_body(body);

    assert_eq!(handle.vertices().len(), handle.vertex_count() as usize * 3);
    assert_eq!(handle.normals().len(), handle.vertices().len());
    assert_eq!(handle.indices().len(), handle.triangle_count() as usize * 3);
    assert_eq!(
        handle.part_triangles().iter().sum::<u32>(),
        handle.triangle_count()
    );
    assert!(handle.vertices().iter().all(|v| v.is_finite()));
    let vertex_count = handle.vertex_count();
    assert!(handle.indices().iter().all(|&i| i < vertex_count));
}

/// Text mode "none" leaves only the tubes.
#[test]
fn text_can_be_disabled() {
    let json = r#"{"base_diameter": 39, "top_diameter": 37, "thickness": 2, "tube_length": 30, "text_mode": "none"}"#;
    let body = generate_adapter_internal(json, None).expect("generation succeeds");
    assert_eq!(body.parts.len(), 3);
    assert_eq!(body.mesh.triangle_count(), 3 * 8 * 64);
}

/// Invalid input surfaces explicit errors.
#[test]
fn invalid_requests_are_rejected() {
    assert!(matches!(
        generate_adapter_internal("{", None),
        Err(MeshError::Configuration { .. })
    ));
    let thick = r#"{"base_diameter": 27, "top_diameter": 39, "thickness": 20, "tube_length": 30}"#;
    assert!(matches!(
        generate_adapter_internal(thick, None),
        Err(MeshError::Configuration { .. })
    ));
    assert!(matches!(
        generate_adapter_internal(ADAPTER, Some(b"garbage".to_vec())),
        Err(MeshError::TextGeometry { .. })
    ));
}

/// Binary STL size follows the triangle count.
#[test]
fn adapter_stl_bytes() {
    let body = generate_adapter_internal(ADAPTER, None).expect("generation succeeds");
    let bytes = generate_adapter_stl_internal(ADAPTER, None, StlFormat::Binary).expect("export succeeds");
    assert_eq!(bytes.len(), 84 + 50 * body.mesh.triangle_count());

    let ascii = generate_adapter_stl_internal(ADAPTER, None, StlFormat::Ascii).expect("export succeeds");
    assert!(ascii.starts_with(b"solid adapter"));
}

/// Collars come as an independent pair.
#[test]
fn collars_are_generated() {
    let pair = generate_collars_internal(ADAPTER, 10.0, None).expect("generation succeeds");
    assert!(pair.base.part("insert-text").is_some());
    assert!(pair.top.part("insert-text").is_some());
    assert!(generate_collars_internal(ADAPTER, 0.0, None).is_err());
}

#[test]
fn default_segments_matches_settings() {
    assert_eq!(default_segments(), 64);
}
