//! Outlining backends.

use config::constants::{BLOCK_GLYPH_ADVANCE, BLOCK_GLYPH_HEIGHT, BLOCK_GLYPH_WIDTH};
use glam::DVec2;

use super::TextOutliner;
use crate::error::MeshError;
use crate::extrude::{linear_extrude, LinearExtrudeParams, Polygon2D};
use crate::mesh::Mesh;

/// Renders each visible character as a solid block on a fixed-pitch grid.
///
/// Needs no font file, so it serves previews and tests. Whitespace only
/// advances the cursor; control characters are skipped.
///
/// # Example
///
/// ```rust
/// use adapter_mesh::text::{BlockOutliner, TextOutliner};
///
/// let mut outliner = BlockOutliner::default();
/// let mesh = outliner.outline("a b", 10.0).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * 12);
/// ```
#[derive(Debug, Clone)]
pub struct BlockOutliner {
    /// Extrusion depth of each block
    pub depth: f64,
}

impl Default for BlockOutliner {
    fn default() -> Self {
        Self { depth: 1.0 }
    }
}

impl TextOutliner for BlockOutliner {
    fn outline(&mut self, text: &str, font_size: f64) -> Result<Mesh, MeshError> {
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(MeshError::text_geometry(format!(
                "font size must be positive: {font_size}"
            )));
        }

        let advance = BLOCK_GLYPH_ADVANCE * font_size;
        let cell = DVec2::new(BLOCK_GLYPH_WIDTH, BLOCK_GLYPH_HEIGHT) * font_size;
        let params = LinearExtrudeParams {
            height: self.depth,
            center: false,
        };

        let mut blocks = Vec::new();
        let mut cursor = 0.0;
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            if !ch.is_whitespace() {
                let glyph = Polygon2D::rectangle(DVec2::new(cursor, 0.0), cell);
                blocks.push(linear_extrude(&glyph, &params)?);
            }
            cursor += advance;
        }

        if blocks.is_empty() {
            return Err(MeshError::text_geometry(format!(
                "no renderable characters in {text:?}"
            )));
        }
        Ok(Mesh::concatenate(blocks))
    }
}

#[cfg(feature = "font")]
pub use font::FontOutliner;

#[cfg(feature = "font")]
mod font {
    use glam::DVec3;
    use meshtext::{MeshGenerator, MeshText, OwnedFace, TextSection};
    use tracing::debug;

    use super::TextOutliner;
    use crate::error::MeshError;
    use crate::mesh::Mesh;

    /// TrueType glyph outlines through `meshtext`.
    ///
    /// Glyph sections come out roughly one unit tall and are scaled by the
    /// requested font size in X and Y. The generator caches glyphs between
    /// calls.
    pub struct FontOutliner {
        generator: MeshGenerator<OwnedFace>,
        font_bytes: usize,
    }

    impl FontOutliner {
        /// Parses raw font file bytes.
        ///
        /// # Errors
        ///
        /// [`MeshError::TextGeometry`] when the bytes are not a readable
        /// TrueType or OpenType face.
        pub fn new(font: Vec<u8>) -> Result<Self, MeshError> {
            let font_bytes = font.len();
            OwnedFace::from_vec(font.clone(), 0).map_err(|err| {
                MeshError::text_geometry(format!("unreadable font data: {err}"))
            })?;
            Ok(Self {
                generator: MeshGenerator::<OwnedFace>::new(font),
                font_bytes,
            })
        }
    }

    impl std::fmt::Debug for FontOutliner {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("FontOutliner")
                .field("font_bytes", &self.font_bytes)
                .finish()
        }
    }

    impl TextOutliner for FontOutliner {
        fn outline(&mut self, text: &str, font_size: f64) -> Result<Mesh, MeshError> {
            let section: MeshText = self
                .generator
                .generate_section(text, false, None)
                .map_err(|err| MeshError::text_geometry(format!("{text:?}: {err:?}")))?;

            // Flat triangle list: 9 floats per triangle
            let vertices: Vec<DVec3> = section
                .vertices
                .chunks_exact(3)
                .map(|p| {
                    DVec3::new(
                        p[0] as f64 * font_size,
                        p[1] as f64 * font_size,
                        p[2] as f64,
                    )
                })
                .collect();
            let triangle_count = vertices.len() / 3;
            if triangle_count == 0 {
                return Err(MeshError::text_geometry(format!(
                    "font has no glyphs for {text:?}"
                )));
            }

            let triangles = (0..triangle_count as u32)
                .map(|t| [3 * t, 3 * t + 1, 3 * t + 2])
                .collect();
            debug!(text, font_size, triangles = triangle_count, "outlined text");
            Mesh::from_parts(vertices, triangles)
        }
    }
}
