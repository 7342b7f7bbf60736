use crate::attributes::{with_shared_source, AttributeSource};
use crate::error::{ensure_positive, Result};
use crate::gfx::geometry::{CoordSystem, Mesh, Topology, Vertex};

/// Corner pattern shared by every face, in the face's two free axes.
const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)];
const TEX_COORDS: [[f32; 2]; 4] = [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];

/// Generate an axis-aligned cube centered at the origin.
///
/// Faces do not share vertices: the mesh holds 4 vertices per face (24 total)
/// and two triangles per face (36 indices). Faces are emitted axis by axis
/// (x, y, z), the negative plane before the positive one.
///
/// Each vertex normal is its own position, scaled with the cube, rather than
/// a unit face normal. Colors come from the shared attribute source.
pub fn generate_cube(system: CoordSystem, side_length: f32) -> Result<Mesh> {
    with_shared_source(|source| generate_cube_with(system, side_length, source))
}

/// [`generate_cube`] drawing vertex colors from `source`.
pub fn generate_cube_with(
    system: CoordSystem,
    side_length: f32,
    source: &mut impl AttributeSource,
) -> Result<Mesh> {
    let side_length = ensure_positive("side_length", side_length)?;
    let half = side_length / 2.0;

    let mut mesh = Mesh::with_capacity(Topology::Triangles, 24, 36);

    for axis in 0..3 {
        for plane in [-1.0f32, 1.0] {
            let base = mesh.vertex_count() as u32;

            for (&(u, v), &tex_coord) in CORNERS.iter().zip(&TEX_COORDS) {
                // Swapping the free axes mirrors the face and reverses its winding
                let (a, b) = match system {
                    CoordSystem::LeftHand => (-u * plane, v),
                    CoordSystem::RightHand => (v, -u * plane),
                };
                let unit = match axis {
                    0 => [plane, a, b],
                    1 => [b, plane, a],
                    _ => [a, b, plane],
                };
                let position = unit.map(|c| c * half);

                mesh.push_vertex(
                    Vertex::new(position)
                        .with_color(source.next_color())
                        .with_normal(position)
                        .with_tex_coord(tex_coord),
                );
            }

            mesh.push_triangle(base, base + 1, base + 2);
            mesh.push_triangle(base, base + 2, base + 3);
        }
    }

    log::debug!(
        "generated cube: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    Ok(mesh)
}
