//! Latitude/longitude surfaces: the UV sphere and the sand clock.
//!
//! Both lay vertices out in `stacks + 1` rows of `slices + 1` vertices (the
//! last column duplicates the first so texture coordinates can reach 1) and
//! share the same band triangulation.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Matrix3, Rad, Vector3};

use crate::attributes::{with_shared_source, AttributeSource};
use crate::error::{ensure_lattice, ensure_nonzero, ensure_positive, Result};
use crate::gfx::geometry::{CoordSystem, Mesh, Topology, Vertex};

/// Resolution of the sand clock surface.
///
/// The waist only collapses to a point when `stacks` is even; an odd count
/// has no row at `cos(π / 2)` and leaves a narrow ring instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SandClockParams {
    /// Rows from the bottom rim to the top rim
    pub stacks: u32,
    /// Columns around the vertical axis
    pub slices: u32,
}

impl Default for SandClockParams {
    fn default() -> Self {
        Self {
            stacks: 10,
            slices: 20,
        }
    }
}

/// Generate a UV sphere centered at the origin.
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `slices` - Divisions around the vertical axis
/// * `stacks` - Divisions from pole to pole
///
/// Rows run from the bottom pole (`y = -radius`) to the top pole; within a
/// row each vertex is the row's start point rotated about +y by
/// `-2π * j / slices`. Normals are true unit normals.
///
/// Returns `(slices + 1) * (stacks + 1)` vertices and `6 * slices * stacks` indices.
pub fn generate_sphere(radius: f32, slices: u32, stacks: u32) -> Result<Mesh> {
    with_shared_source(|source| generate_sphere_with(radius, slices, stacks, source))
}

/// [`generate_sphere`] drawing vertex colors from `source`.
pub fn generate_sphere_with(
    radius: f32,
    slices: u32,
    stacks: u32,
    source: &mut impl AttributeSource,
) -> Result<Mesh> {
    let radius = ensure_positive("radius", radius)?;
    let slices = ensure_nonzero("slices", slices)?;
    let stacks = ensure_nonzero("stacks", stacks)?;
    let mut mesh = lattice_mesh(slices, stacks)?;

    let d_theta = -2.0 * PI / slices as f32;
    let d_phi = -PI / stacks as f32;

    for i in 0..=stacks {
        let phi = d_phi * i as f32;
        let stack_start = Vector3::new(radius * phi.sin(), -radius * phi.cos(), 0.0);

        for j in 0..=slices {
            let position = Matrix3::from_angle_y(Rad(d_theta * j as f32)) * stack_start;
            mesh.push_vertex(
                Vertex::new(position.into())
                    .with_color(source.next_color())
                    .with_normal(position.normalize().into())
                    .with_tex_coord(lattice_tex_coord(i, j, slices, stacks)),
            );
        }
    }

    push_band_indices(&mut mesh, slices, stacks, false);

    log::debug!(
        "generated sphere ({slices} slices, {stacks} stacks): {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    Ok(mesh)
}

/// Generate the sand clock (hourglass) at its fixed resolution of 10 stacks
/// and 20 slices.
///
/// Rows climb linearly from `y = -1` to `y = 1`. Row `i` has radius
/// `cos(π * i / stacks)`, so the rims have radius 1, the waist at `y = 0`
/// pinches to a point, and the upper half is mirrored through the axis. With
/// a custom [`SandClockParams`] the pinch only lands on a row for an even
/// `stacks` count.
/// Normals are the raw positions. [`CoordSystem::LeftHand`] reverses the
/// winding of every triangle.
pub fn generate_sand_clock(system: CoordSystem) -> Result<Mesh> {
    with_shared_source(|source| {
        generate_sand_clock_with(system, SandClockParams::default(), source)
    })
}

/// [`generate_sand_clock`] at a custom resolution, drawing vertex colors from `source`.
pub fn generate_sand_clock_with(
    system: CoordSystem,
    params: SandClockParams,
    source: &mut impl AttributeSource,
) -> Result<Mesh> {
    let slices = ensure_nonzero("slices", params.slices)?;
    let stacks = ensure_nonzero("stacks", params.stacks)?;
    let mut mesh = lattice_mesh(slices, stacks)?;

    let row_height = 2.0 / stacks as f32;
    let stack_angle = PI / stacks as f32;
    let slice_angle = 2.0 * PI / slices as f32;

    for i in 0..=stacks {
        let y = i as f32 * row_height - 1.0;
        let ring = (stack_angle * i as f32).cos();

        for j in 0..=slices {
            let theta = slice_angle * j as f32;
            let position = [theta.cos() * ring, y, theta.sin() * ring];
            mesh.push_vertex(
                Vertex::new(position)
                    .with_color(source.next_color())
                    .with_normal(position)
                    .with_tex_coord(lattice_tex_coord(i, j, slices, stacks)),
            );
        }
    }

    push_band_indices(&mut mesh, slices, stacks, system.is_left_handed());

    log::debug!(
        "generated sand clock ({slices} slices, {stacks} stacks): {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    Ok(mesh)
}

fn lattice_mesh(slices: u32, stacks: u32) -> Result<Mesh> {
    let vertices = ensure_lattice(slices, stacks)?;
    Ok(Mesh::with_capacity(
        Topology::Triangles,
        vertices as usize,
        6 * slices as usize * stacks as usize,
    ))
}

fn lattice_tex_coord(i: u32, j: u32, slices: u32, stacks: u32) -> [f32; 2] {
    [j as f32 / slices as f32, 1.0 - i as f32 / stacks as f32]
}

/// Two triangles for every quad between consecutive rows.
fn push_band_indices(mesh: &mut Mesh, slices: u32, stacks: u32, reversed: bool) {
    let row_len = slices + 1;
    for i in 0..stacks {
        let offset = row_len * i;
        for j in 0..slices {
            let here = offset + j;
            let above = here + row_len;
            if reversed {
                mesh.push_triangle(here, above + 1, above);
                mesh.push_triangle(here, here + 1, above + 1);
            } else {
                mesh.push_triangle(here, above, above + 1);
                mesh.push_triangle(here, above + 1, here + 1);
            }
        }
    }
}
