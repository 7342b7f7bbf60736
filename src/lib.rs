// src/lib.rs
//! Meshkit
//!
//! Procedural generation of primitive meshes: interleaved vertex buffers
//! (position, color, normal, texture coordinate) plus triangle or line index
//! buffers for a fixed catalog of shapes.

pub mod attributes;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::{PrimitiveError, Result};
pub use gfx::geometry::{CoordSystem, Mesh, Topology, Vertex};
