//! # Meshkit Prelude
//!
//! Commonly used types, traits and generators in one import.
//!
//! ```rust
//! use meshkit::prelude::*;
//!
//! fn main() -> Result<(), PrimitiveError> {
//!     let mut colors = RandomSource::seeded(1);
//!     let cube = generate_cube_with(CoordSystem::RightHand, 1.0, &mut colors)?;
//!     let frustum = generate_frustum(&[0.0, 0.0, 0.0], 60.0, 90.0, 10.0)?;
//!
//!     assert_eq!(cube.topology, Topology::Triangles);
//!     assert_eq!(frustum.topology, Topology::Lines);
//!     Ok(())
//! }
//! ```

// Re-export attribute sources
pub use crate::attributes::{AttributeSource, ConstantSource, RandomSource};

// Re-export errors
pub use crate::error::PrimitiveError;

// Re-export geometry types and generators
pub use crate::gfx::camera::{fov_extent, FrustumParams};
pub use crate::gfx::geometry::{
    generate_axis, generate_cube, generate_cube_with, generate_cylinder, generate_cylinder_with,
    generate_frustum, generate_frustum_from_params, generate_grid, generate_grid_with,
    generate_sand_clock, generate_sand_clock_with, generate_sphere, generate_sphere_with,
    generate_square, write_obj, CoordSystem, Mesh, SandClockParams, Topology, Vertex,
};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3};
