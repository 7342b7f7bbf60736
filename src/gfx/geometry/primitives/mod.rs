//! # Primitive Shape Generation
//!
//! One generator per shape. Every generator validates its parameters and
//! returns an owned [`Mesh`](super::Mesh) tagged with its topology.
//!
//! Generators that color their vertices come in two forms: `generate_*` uses
//! the per-thread shared attribute source, `generate_*_with` takes one
//! explicitly. Only the colors differ between calls with equal parameters.

mod cube;
mod cylinder;
mod grid;
mod lines;
mod sphere;
mod square;

pub use cube::{generate_cube, generate_cube_with};
pub use cylinder::{generate_cylinder, generate_cylinder_with};
pub use grid::{generate_grid, generate_grid_with};
pub use lines::{generate_axis, generate_frustum, generate_frustum_from_params};
pub use sphere::{
    generate_sand_clock, generate_sand_clock_with, generate_sphere, generate_sphere_with,
    SandClockParams,
};
pub use square::generate_square;
