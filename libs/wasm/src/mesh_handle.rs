//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use adapter_mesh::{AssembledBody, Mesh};
use wasm_bindgen::prelude::*;

/// Buffers of a generated body, ready for a GPU upload.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_adapter('{"base_diameter":39,"top_diameter":37,"thickness":2,"tube_length":30}');
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Part names in concatenation order
    part_names: Vec<String>,
    /// Triangle count of each part
    part_triangles: Vec<u32>,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the vertex buffer as a Float32Array.
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the index buffer as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns smooth vertex normals as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Names of the concatenated parts, e.g. `base-tube`, `label`.
    pub fn part_names(&self) -> Vec<String> {
        self.part_names.clone()
    }

    /// Triangle count of each part, aligned with [`MeshHandle::part_names`].
    pub fn part_triangles(&self) -> Vec<u32> {
        self.part_triangles.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl MeshHandle {
    /// Creates a handle from an assembled body, computing normals.
    pub fn from_body(body: AssembledBody) -> Self {
        let part_names = body.parts.iter().map(|span| span.name.to_string()).collect();
        let part_triangles = body
            .parts
            .iter()
            .map(|span| span.triangles.len() as u32)
            .collect();
        let mut handle = Self::from_mesh(body.mesh);
        handle.part_names = part_names;
        handle.part_triangles = part_triangles;
        handle
    }

    /// Creates a handle from a bare mesh.
    pub fn from_mesh(mut mesh: Mesh) -> Self {
        if mesh.normals().is_none() {
            mesh.compute_normals();
        }
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            part_names: Vec::new(),
            part_triangles: Vec::new(),
        }
    }
}
