//! # Adapter Mesh
//!
//! Parametric meshes for hollow tube adapters.
//! Turns a few diameters, a wall thickness and a length into a closed,
//! consistently wound triangle mesh ready for 3D printing.
//!
//! ## Pipeline
//!
//! ```text
//! Dimensions → revolution parts (+ text relief) → AssembledBody → rotate → STL
//! ```
//!
//! ## Modules
//!
//! - **revolution**: hollow cylinder, frustum and tapered cone walls
//! - **text**: outlining backends and wrapping text onto a cylinder
//! - **compose**: adapter body and insert collars
//! - **export**: ASCII and binary STL
//! - **section**: plane cuts for inspection
//!
//! ## Usage
//!
//! ```rust
//! use adapter_mesh::{compose_adapter, Dimensions, GenerationSettings};
//! use adapter_mesh::text::BlockOutliner;
//!
//! let dims = Dimensions::new(39.0, 37.0, 2.0)?;
//! let mut outliner = BlockOutliner::default();
//! let body = compose_adapter(&dims, 30.0, &GenerationSettings::default(), Some(&mut outliner))?;
//! assert!(body.mesh.triangle_count() > 0);
//! # Ok::<(), adapter_mesh::MeshError>(())
//! ```

pub mod compose;
pub mod dimensions;
pub mod error;
pub mod export;
pub mod extrude;
pub mod mesh;
pub mod revolution;
pub mod section;
pub mod text;

pub use compose::{compose_adapter, compose_collars, AdapterParams, AssembledBody, CollarPair, PartSpan};
pub use config::settings::{GenerationSettings, TextMode};
pub use dimensions::{Dimensions, TubeEnd};
pub use error::MeshError;
pub use export::{export_stl, write_stl, StlFormat};
pub use mesh::Mesh;
