//! Tests for text outlining and wrapping.

use super::*;
use approx::assert_relative_eq;
use config::settings::TextMode;
use glam::DVec3;
use std::f64::consts::TAU;
use std::io::Write;
use std::sync::{Arc, Mutex};

fn params(relief: Relief, side: WallSide) -> EmbossParams {
    EmbossParams {
        radius: 20.0,
        taper: 0.0,
        y_offset: 10.0,
        height: 30.0,
        depth: 0.6,
        font_size: 8.0,
        relief,
        side,
        max_wrap_fraction: Some(0.9),
    }
}

fn radial(p: DVec3) -> f64 {
    (p.x * p.x + p.z * p.z).sqrt()
}

fn angle(p: DVec3) -> f64 {
    (-p.z).atan2(p.x).rem_euclid(TAU)
}

fn radial_band(mesh: &Mesh) -> (f64, f64) {
    mesh.vertices().iter().fold((f64::MAX, f64::MIN), |(lo, hi), &p| {
        (lo.min(radial(p)), hi.max(radial(p)))
    })
}

/// Returns a prepared mesh regardless of the text.
struct FixedOutliner(Mesh);

impl TextOutliner for FixedOutliner {
    fn outline(&mut self, _text: &str, _font_size: f64) -> Result<Mesh, MeshError> {
        Ok(self.0.clone())
    }
}

#[test]
fn block_outliner_skips_whitespace() {
    let mut outliner = BlockOutliner::default();
    let mesh = outliner.outline("ab c", 10.0).unwrap();
    assert_eq!(mesh.triangle_count(), 3 * 12);
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.x, 0.0);
    assert_relative_eq!(max.x, 3.0 * 7.0 + 5.5);
    assert_relative_eq!(max.y, 7.0);
    assert_relative_eq!(max.z, 1.0);
}

#[test]
fn block_outliner_rejects_blank_text() {
    let mut outliner = BlockOutliner::default();
    assert!(matches!(
        outliner.outline(" \t ", 10.0),
        Err(MeshError::TextGeometry { .. })
    ));
    assert!(outliner.outline("abc", 0.0).is_err());
}

#[test]
fn empty_text_is_a_text_error() {
    let mut outliner = BlockOutliner::default();
    let p = params(Relief::Emboss, WallSide::Outer);
    for text in ["", "   "] {
        let err = emboss_text(&mut outliner, text, &p).unwrap_err();
        assert!(err.is_text_only(), "{err}");
    }
}

#[test]
fn empty_outline_is_a_text_error() {
    let mut outliner = FixedOutliner(Mesh::new());
    let p = params(Relief::Emboss, WallSide::Outer);
    assert!(matches!(
        emboss_text(&mut outliner, "x", &p),
        Err(MeshError::TextGeometry { .. })
    ));
}

#[test]
fn outline_without_depth_is_a_text_error() {
    let flat = Mesh::from_parts(
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let mut outliner = FixedOutliner(flat);
    let p = params(Relief::Emboss, WallSide::Outer);
    assert!(matches!(
        emboss_text(&mut outliner, "x", &p),
        Err(MeshError::TextGeometry { .. })
    ));
}

#[test]
fn relief_spans_expected_radial_band() {
    let cases = [
        (Relief::Emboss, WallSide::Outer, 20.0, 20.6),
        (Relief::Engrave, WallSide::Outer, 19.4, 20.0),
        (Relief::Emboss, WallSide::Inner, 19.4, 20.0),
        (Relief::Engrave, WallSide::Inner, 20.0, 20.6),
    ];
    for (relief, side, lo, hi) in cases {
        let mut outliner = BlockOutliner::default();
        let mesh = emboss_text(&mut outliner, "35 x 27", &params(relief, side)).unwrap();
        let (min, max) = radial_band(&mesh);
        assert_relative_eq!(min, lo, epsilon = 1e-9);
        assert_relative_eq!(max, hi, epsilon = 1e-9);
    }
}

#[test]
fn text_is_centered_in_height_band() {
    let mut outliner = BlockOutliner::default();
    let mesh = emboss_text(&mut outliner, "label", &params(Relief::Emboss, WallSide::Outer)).unwrap();
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!((min.y + max.y) / 2.0, 10.0 + 15.0, epsilon = 1e-9);
    assert_relative_eq!(max.y - min.y, 8.0 * 0.7, epsilon = 1e-9);
}

#[test]
fn narrow_text_keeps_its_width() {
    let mut outliner = BlockOutliner::default();
    let p = params(Relief::Emboss, WallSide::Outer);
    let mesh = emboss_text(&mut outliner, "ab", &p).unwrap();
    // Width 12.5 at font size 10 scales to 10 at font size 8
    let span = mesh.vertices().iter().map(|&p| angle(p)).fold(0.0, f64::max);
    assert_relative_eq!(span, 10.0 / 20.0, epsilon = 1e-9);
}

#[test]
fn wide_text_is_squeezed_to_the_wrap_fraction() {
    let mut outliner = BlockOutliner::default();
    let mut p = params(Relief::Emboss, WallSide::Outer);
    p.radius = 5.0;
    let text = "insert into inside di=35";
    let mesh = emboss_text(&mut outliner, text, &p).unwrap();
    let span = mesh.vertices().iter().map(|&p| angle(p)).fold(0.0, f64::max);
    assert_relative_eq!(span, 0.9 * TAU, epsilon = 1e-9);
}

/// Collects formatted log output of the closure.
fn captured_logs<T>(run: impl FnOnce() -> T) -> (T, String) {
    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, run);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, logs)
}

#[test]
fn unfitted_text_overlapping_itself_is_logged() {
    let mut outliner = BlockOutliner::default();
    let mut p = params(Relief::Emboss, WallSide::Outer);
    p.radius = 2.0;
    p.max_wrap_fraction = None;
    let (mesh, logs) = captured_logs(|| emboss_text(&mut outliner, "a long line of text", &p));
    assert!(!mesh.unwrap().is_empty());
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("overlaps itself"), "{logs}");
}

#[test]
fn fitted_text_logs_no_overlap() {
    let mut outliner = BlockOutliner::default();
    let mut p = params(Relief::Emboss, WallSide::Outer);
    p.radius = 2.0;
    let (mesh, logs) = captured_logs(|| emboss_text(&mut outliner, "a long line of text", &p));
    assert!(mesh.is_ok());
    assert!(!logs.contains("overlaps itself"), "{logs}");
}

#[test]
fn tapered_relief_follows_the_wall() {
    // Wall narrows by 0.5 over the band [10, 40]
    let wall = |y: f64| 20.0 - 0.5 * (y - 10.0) / 30.0;
    let cases = [
        (Relief::Emboss, WallSide::Outer, 0.0, 0.6),
        (Relief::Engrave, WallSide::Outer, -0.6, 0.0),
        (Relief::Emboss, WallSide::Inner, -0.6, 0.0),
        (Relief::Engrave, WallSide::Inner, 0.0, 0.6),
    ];
    for (relief, side, lo, hi) in cases {
        let mut outliner = BlockOutliner::default();
        let mut p = params(relief, side);
        p.font_size = 30.0;
        p.taper = 0.5;
        let mesh = emboss_text(&mut outliner, "35", &p).unwrap();
        let (min, max) = mesh.vertices().iter().fold((f64::MAX, f64::MIN), |(a, b), &v| {
            let offset = radial(v) - wall(v.y);
            (a.min(offset), b.max(offset))
        });
        assert_relative_eq!(min, lo, epsilon = 1e-9);
        assert_relative_eq!(max, hi, epsilon = 1e-9);
    }
}

#[test]
fn taper_must_leave_a_positive_radius() {
    let mut outliner = BlockOutliner::default();
    let mut p = params(Relief::Emboss, WallSide::Outer);
    p.taper = -0.1;
    assert!(matches!(
        emboss_text(&mut outliner, "x", &p),
        Err(MeshError::Configuration { .. })
    ));

    let mut p = params(Relief::Engrave, WallSide::Outer);
    p.taper = 19.5;
    assert!(emboss_text(&mut outliner, "x", &p).is_err());
}

#[test]
fn outer_text_runs_counter_clockwise_inner_text_clockwise() {
    let mut outliner = BlockOutliner::default();
    let outer = emboss_text(&mut outliner, "abc", &params(Relief::Emboss, WallSide::Outer)).unwrap();
    assert!(outer.vertices().iter().all(|p| p.z <= 1e-9));

    let inner = emboss_text(&mut outliner, "abc", &params(Relief::Emboss, WallSide::Inner)).unwrap();
    assert!(inner.vertices().iter().all(|p| p.z >= -1e-9));
}

#[test]
fn wrapped_blocks_stay_outward_wound() {
    for side in [WallSide::Outer, WallSide::Inner] {
        let mut outliner = BlockOutliner::default();
        let mut p = params(Relief::Emboss, side);
        p.radius = 200.0;
        let mesh = emboss_text(&mut outliner, "I", &p).unwrap();
        let center = mesh.vertices().iter().copied().sum::<DVec3>() / mesh.vertex_count() as f64;
        for t in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(t);
            let centroid = (a + b + c) / 3.0;
            assert!(mesh.face_normal(t).dot(centroid - center) > 0.0, "{side:?} triangle {t}");
        }
    }
}

#[test]
fn normals_are_recomputed() {
    let mut outliner = BlockOutliner::default();
    let mesh = emboss_text(&mut outliner, "ok", &params(Relief::Engrave, WallSide::Outer)).unwrap();
    assert_eq!(mesh.normals().map(<[_]>::len), Some(mesh.vertex_count()));
}

#[test]
fn invalid_parameters_are_rejected() {
    let mut outliner = BlockOutliner::default();

    let mut p = params(Relief::Emboss, WallSide::Outer);
    p.depth = 0.0;
    assert!(matches!(
        emboss_text(&mut outliner, "x", &p),
        Err(MeshError::Configuration { .. })
    ));

    let mut p = params(Relief::Emboss, WallSide::Outer);
    p.max_wrap_fraction = Some(1.5);
    assert!(emboss_text(&mut outliner, "x", &p).is_err());

    let mut p = params(Relief::Engrave, WallSide::Outer);
    p.depth = 25.0;
    assert!(emboss_text(&mut outliner, "x", &p).is_err());
}

#[test]
fn boxed_outliner_delegates() {
    let mut outliner: Box<dyn TextOutliner> = Box::new(BlockOutliner::default());
    let mesh = emboss_text(&mut outliner, "x", &params(Relief::Emboss, WallSide::Outer)).unwrap();
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn relief_follows_text_mode() {
    assert_eq!(Relief::from_mode(TextMode::None), None);
    assert_eq!(Relief::from_mode(TextMode::Emboss), Some(Relief::Emboss));
    assert_eq!(Relief::from_mode(TextMode::Engrave), Some(Relief::Engrave));
}

#[cfg(feature = "font")]
#[test]
fn font_outliner_rejects_non_font_bytes() {
    assert!(matches!(
        FontOutliner::new(b"not a font".to_vec()),
        Err(MeshError::TextGeometry { .. })
    ));
    assert!(FontOutliner::new(Vec::new()).is_err());
}

#[cfg(feature = "font")]
#[test]
fn font_outliner_rejects_corrupt_font_with_valid_tag() {
    let mut bytes = b"\x00\x01\x00\x00".to_vec();
    bytes.extend_from_slice(&[0; 8]);
    assert!(matches!(
        FontOutliner::new(bytes),
        Err(MeshError::TextGeometry { .. })
    ));

    let mut truncated = b"true".to_vec();
    truncated.extend_from_slice(&[0x00, 0x05, 0x00, 0x80]);
    assert!(FontOutliner::new(truncated).is_err());
}
