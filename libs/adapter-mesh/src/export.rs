//! # STL Export
//!
//! Writes finished meshes as ASCII or binary STL. Facet normals are taken
//! from the triangle winding at write time.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dimensions::Dimensions;
use crate::error::MeshError;
use crate::mesh::Mesh;

/// STL flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    Ascii,
    #[default]
    Binary,
}

impl FromStr for StlFormat {
    type Err = MeshError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ascii" | "text" => Ok(StlFormat::Ascii),
            "binary" | "bin" => Ok(StlFormat::Binary),
            other => Err(MeshError::configuration(format!(
                "unknown STL format '{other}' (expected ascii or binary)"
            ))),
        }
    }
}

impl fmt::Display for StlFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StlFormat::Ascii => "ascii",
            StlFormat::Binary => "binary",
        })
    }
}

/// Writes `mesh` to `writer`. `name` is used by the ASCII `solid` line.
///
/// # Errors
///
/// [`MeshError::Export`] when the mesh has no triangles or invalid
/// indices, [`MeshError::Io`] when writing fails.
pub fn write_stl<W: Write>(
    mesh: &Mesh,
    name: &str,
    format: StlFormat,
    writer: &mut W,
) -> Result<(), MeshError> {
    if mesh.is_empty() {
        return Err(MeshError::export("mesh has no triangles"));
    }
    let vertex_count = mesh.vertex_count() as u32;
    if mesh.triangles().iter().flatten().any(|&i| i >= vertex_count) {
        return Err(MeshError::export("triangle index out of range"));
    }

    match format {
        StlFormat::Ascii => write_ascii(mesh, name, writer)?,
        StlFormat::Binary => {
            let triangles: Vec<stl_io::Triangle> = (0..mesh.triangle_count())
                .map(|t| {
                    let [a, b, c] = mesh.triangle_positions(t);
                    stl_io::Triangle {
                        normal: stl_io::Normal::new(to_f32(mesh.face_normal(t))),
                        vertices: [
                            stl_io::Vertex::new(to_f32(a)),
                            stl_io::Vertex::new(to_f32(b)),
                            stl_io::Vertex::new(to_f32(c)),
                        ],
                    }
                })
                .collect();
            stl_io::write_stl(writer, triangles.iter())?;
        }
    }
    Ok(())
}

fn write_ascii<W: Write>(mesh: &Mesh, name: &str, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "solid {name}")?;
    for t in 0..mesh.triangle_count() {
        let n = mesh.face_normal(t);
        writeln!(writer, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in mesh.triangle_positions(t) {
            writeln!(writer, "      vertex {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {name}")
}

fn to_f32(v: DVec3) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}

/// Writes `mesh` to a file at `path`, named after the file stem.
pub fn export_stl(mesh: &Mesh, path: &Path, format: StlFormat) -> Result<(), MeshError> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("adapter");
    let mut writer = BufWriter::new(File::create(path)?);
    write_stl(mesh, name, format, &mut writer)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        %format,
        triangles = mesh.triangle_count(),
        "wrote STL"
    );
    Ok(())
}

/// Serializes `mesh` into an in-memory STL buffer.
pub fn stl_bytes(mesh: &Mesh, name: &str, format: StlFormat) -> Result<Vec<u8>, MeshError> {
    let mut buffer = Vec::new();
    write_stl(mesh, name, format, &mut buffer)?;
    Ok(buffer)
}

/// File name for an adapter, from the diameters as the user entered them.
///
/// # Example
///
/// ```rust
/// use adapter_mesh::export::adapter_file_name;
///
/// assert_eq!(adapter_file_name(39.0, 37.5), "adapter_39_37.5.stl");
/// ```
pub fn adapter_file_name(base_diameter: f64, top_diameter: f64) -> String {
    format!("adapter_{base_diameter}_{top_diameter}.stl")
}

/// File names of the base and top collars.
pub fn collar_file_names(dims: &Dimensions) -> [String; 2] {
    [
        format!("collar_{}_base.stl", dims.base_outer_diameter()),
        format!("collar_{}_top.stl", dims.top_outer_diameter()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revolution::hollow_cylinder;
    use std::io::Cursor;

    fn tube() -> Mesh {
        hollow_cylinder(10.0, 8.0, 5.0, 0.0, 8).unwrap()
    }

    #[test]
    fn binary_stl_has_one_record_per_triangle() {
        let mesh = tube();
        let bytes = stl_bytes(&mesh, "tube", StlFormat::Binary).unwrap();
        assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());

        let parsed = stl_io::read_stl(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(parsed.faces.len(), mesh.triangle_count());
    }

    #[test]
    fn ascii_stl_lists_every_facet() {
        let mesh = tube();
        let bytes = stl_bytes(&mesh, "tube", StlFormat::Ascii).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("solid tube\n"));
        assert!(text.trim_end().ends_with("endsolid tube"));
        assert_eq!(text.matches("facet normal").count(), mesh.triangle_count());
        assert_eq!(text.matches("vertex ").count(), 3 * mesh.triangle_count());
    }

    #[test]
    fn empty_mesh_is_not_exported() {
        let result = stl_bytes(&Mesh::new(), "empty", StlFormat::Binary);
        assert!(matches!(result, Err(MeshError::Export { .. })));
    }

    #[test]
    fn export_writes_file() {
        let path = std::env::temp_dir().join(format!("adapter_export_{}.stl", std::process::id()));
        export_stl(&tube(), &path, StlFormat::Ascii).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(&format!(
            "solid adapter_export_{}",
            std::process::id()
        )));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_names_follow_diameters() {
        assert_eq!(adapter_file_name(27.0, 39.0), "adapter_27_39.stl");
        let dims = Dimensions::new(27.0, 39.0, 2.0).unwrap();
        assert_eq!(
            collar_file_names(&dims),
            ["collar_39_base.stl".to_string(), "collar_27_top.stl".to_string()]
        );
    }

    #[test]
    fn format_parses_names() {
        assert_eq!("ASCII".parse::<StlFormat>().unwrap(), StlFormat::Ascii);
        assert_eq!("binary".parse::<StlFormat>().unwrap(), StlFormat::Binary);
        assert!("obj".parse::<StlFormat>().is_err());
        assert_eq!(StlFormat::default().to_string(), "binary");
    }
}
