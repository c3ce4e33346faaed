//! # Text Relief
//!
//! Lettering wrapped onto cylindrical walls.
//!
//! Glyph outlining is kept behind [`TextOutliner`]: a backend turns a
//! string into a flat, extruded 3D outline mesh, and [`emboss_text`] bends
//! that outline around a wall without knowing where it came from.
//!
//! ## Backends
//!
//! - [`FontOutliner`]: TrueType glyphs via `meshtext` (feature `font`)
//! - [`BlockOutliner`]: one extruded block per visible character

mod emboss;
mod outline;

#[cfg(test)]
mod tests;

pub use emboss::{emboss_text, EmbossParams, Relief, WallSide};
#[cfg(feature = "font")]
pub use outline::FontOutliner;
pub use outline::BlockOutliner;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Produces a flat extruded outline of a string.
///
/// The outline lies roughly in the XY plane with reading direction +X and
/// up +Y; its extrusion runs along local Z. Only the relative extents
/// matter, the embosser rescales depth and recenters the block.
///
/// Implementations fail with [`MeshError::TextGeometry`] when nothing in
/// `text` can be rendered.
pub trait TextOutliner {
    /// Outlines `text` with glyphs roughly `font_size` units tall.
    fn outline(&mut self, text: &str, font_size: f64) -> Result<Mesh, MeshError>;
}

impl<T: TextOutliner + ?Sized> TextOutliner for Box<T> {
    fn outline(&mut self, text: &str, font_size: f64) -> Result<Mesh, MeshError> {
        (**self).outline(text, font_size)
    }
}
