//! # Procedural Geometry Generation
//!
//! This module provides functions to generate a fixed catalog of 3D primitive
//! shapes procedurally, eliminating the need for external model files for
//! basic shapes.
//!
//! ## Supported Primitives
//!
//! | Shape      | Topology  | Vertices                      |
//! |------------|-----------|-------------------------------|
//! | Cube       | triangles | 24                            |
//! | Grid       | triangles | `(x_cells+1) * (y_cells+1)`   |
//! | Cylinder   | triangles | `2 * 360 / unit_angle`        |
//! | Sphere     | triangles | `(slices+1) * (stacks+1)`     |
//! | Sand clock | triangles | `(20+1) * (10+1)` by default  |
//! | Square     | triangles | 4                             |
//! | Axis       | lines     | 6                             |
//! | Frustum    | lines     | 5                             |
//!
//! ## Usage
//!
//! ```rust
//! use meshkit::gfx::geometry::{generate_cube, generate_sphere, generate_grid, CoordSystem};
//!
//! // A cube with side length 2
//! let cube = generate_cube(CoordSystem::RightHand, 2.0).unwrap();
//! assert_eq!(cube.vertex_count(), 24);
//!
//! // A unit sphere with 32 slices and 16 stacks
//! let sphere = generate_sphere(1.0, 32, 16).unwrap();
//! assert_eq!(sphere.index_count(), 6 * 32 * 16);
//!
//! // A 10x4 grid of half-unit cells
//! let grid = generate_grid(CoordSystem::LeftHand, 10, 4, 0.5).unwrap();
//! assert_eq!(grid.vertex_count(), 11 * 5);
//! ```

pub mod export;
pub mod mesh;
pub mod primitives;
pub mod vertex;

pub use export::write_obj;
pub use mesh::{Bounds, Mesh, MeshDefect, Topology};
pub use primitives::*;
pub use vertex::{Vertex, VertexAttribute};

/// Coordinate-system handedness used while laying out faces.
///
/// Handedness changes winding order and normal direction, never vertex or
/// index counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CoordSystem {
    #[default]
    RightHand,
    LeftHand,
}

impl CoordSystem {
    pub fn is_left_handed(self) -> bool {
        self == CoordSystem::LeftHand
    }
}

/// Geometry split into separate attribute streams, for consumers that upload
/// each attribute to its own buffer.
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Vertex colors (r, g, b)
    pub colors: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle or line indices, per `topology`
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl GeometryData {
    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles or line segments in this geometry
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.topology.arity()
    }
}
