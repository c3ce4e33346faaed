//! # Mesh Errors
//!
//! Error types for adapter generation.

use config::settings::ConfigError;
use thiserror::Error;

/// Errors that can occur while generating or exporting an adapter.
///
/// Every variant is fatal for the request that raised it; nothing is
/// retried and no partial mesh is returned.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Input dimensions or settings cannot describe a printable part
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Degenerate radii or heights in a revolution builder
    #[error("Geometry error: {message}")]
    Geometry { message: String },

    /// Text produced no usable outline
    #[error("Text geometry error: {message}")]
    TextGeometry { message: String },

    /// Mesh could not be serialized
    #[error("Export failed: {message}")]
    Export { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// I/O failure at the export boundary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a geometry error.
    pub fn geometry(message: impl Into<String>) -> Self {
        Self::Geometry {
            message: message.into(),
        }
    }

    /// Creates a text geometry error.
    pub fn text_geometry(message: impl Into<String>) -> Self {
        Self::TextGeometry {
            message: message.into(),
        }
    }

    /// Creates an export error.
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Returns true for errors raised by the text feature alone, which a
    /// caller may choose to drop while keeping the bare tube.
    pub fn is_text_only(&self) -> bool {
        matches!(self, Self::TextGeometry { .. })
    }
}

impl From<ConfigError> for MeshError {
    fn from(err: ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}
