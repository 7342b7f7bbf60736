//! # Graphics Module
//!
//! Geometry-side building blocks consumed by a rendering layer:
//!
//! - **Geometry** ([`geometry`]) - Vertex and mesh types plus the primitive generators
//! - **Camera** ([`camera`]) - Field-of-view helpers used to size view volumes
//!
//! Nothing here talks to a GPU; meshes expose their buffers as plain slices
//! (and byte views) for whatever upload path the caller uses.

pub mod camera;
pub mod geometry;

// Re-export commonly used types
pub use geometry::{CoordSystem, Mesh, Topology, Vertex};
