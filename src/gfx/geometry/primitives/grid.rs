use crate::attributes::{with_shared_source, AttributeSource};
use crate::error::{ensure_lattice, ensure_nonzero, ensure_positive, Result};
use crate::gfx::geometry::{CoordSystem, Mesh, Topology, Vertex};

/// Generate a flat grid of square cells in the XY plane (z = 0).
///
/// # Arguments
/// * `x_cells` - Number of cells along X
/// * `y_cells` - Number of cells along Y
/// * `cell_size` - Side length of one cell
///
/// The lattice starts at the origin and grows toward +x and +y. Vertices are
/// stored row by row (increasing y, then x), so the mesh has
/// `(x_cells + 1) * (y_cells + 1)` vertices and `6 * x_cells * y_cells` indices.
///
/// The normal is `(0, 0, 1)`, or `(0, 0, -1)` for [`CoordSystem::LeftHand`].
///
/// Texture coordinates divide *both* axes by `y_cells`
/// (`u = x / y_cells`, `v = 1 - y / y_cells`), so `u` exceeds 1 on grids
/// wider than they are tall.
pub fn generate_grid(
    system: CoordSystem,
    x_cells: u32,
    y_cells: u32,
    cell_size: f32,
) -> Result<Mesh> {
    with_shared_source(|source| generate_grid_with(system, x_cells, y_cells, cell_size, source))
}

/// [`generate_grid`] drawing vertex colors from `source`.
pub fn generate_grid_with(
    system: CoordSystem,
    x_cells: u32,
    y_cells: u32,
    cell_size: f32,
    source: &mut impl AttributeSource,
) -> Result<Mesh> {
    let x_cells = ensure_nonzero("x_cells", x_cells)?;
    let y_cells = ensure_nonzero("y_cells", y_cells)?;
    let cell_size = ensure_positive("cell_size", cell_size)?;
    let vertex_count = ensure_lattice(x_cells, y_cells)? as usize;

    let normal_z = if system.is_left_handed() { -1.0 } else { 1.0 };
    let mut mesh = Mesh::with_capacity(
        Topology::Triangles,
        vertex_count,
        6 * x_cells as usize * y_cells as usize,
    );

    // Generate vertices
    for y in 0..=y_cells {
        for x in 0..=x_cells {
            let (fx, fy) = (x as f32, y as f32);
            mesh.push_vertex(
                Vertex::new([cell_size * fx, cell_size * fy, 0.0])
                    .with_color(source.next_color())
                    .with_normal([0.0, 0.0, normal_z])
                    .with_tex_coord([fx / y_cells as f32, 1.0 - fy / y_cells as f32]),
            );
        }
    }

    // Generate indices
    let row_len = x_cells + 1;
    for y in 0..y_cells {
        let current = y * row_len;
        let next_row = (y + 1) * row_len;
        for x in 0..x_cells {
            mesh.push_triangle(current + x, next_row + x, next_row + x + 1);
            mesh.push_triangle(current + x, next_row + x + 1, current + x + 1);
        }
    }

    log::debug!(
        "generated {x_cells}x{y_cells} grid: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrimitiveError;

    #[test]
    fn test_grid_generation() {
        let grid = generate_grid(CoordSystem::RightHand, 2, 2, 1.0).unwrap();
        assert_eq!(grid.vertices.len(), 9); // 3x3 lattice
        assert_eq!(grid.indices.len(), 24); // 4 cells * 2 triangles * 3 indices
        assert_eq!(grid.validate(), Ok(()));
    }

    #[test]
    fn test_row_major_layout() {
        let grid = generate_grid(CoordSystem::RightHand, 3, 1, 0.5).unwrap();
        assert_eq!(grid.vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(grid.vertices[3].position, [1.5, 0.0, 0.0]);
        assert_eq!(grid.vertices[4].position, [0.0, 0.5, 0.0]);
        assert_eq!(&grid.indices[..6], &[0, 4, 5, 0, 5, 1]);
    }

    #[test]
    fn test_normal_follows_handedness() {
        let right = generate_grid(CoordSystem::RightHand, 1, 1, 1.0).unwrap();
        let left = generate_grid(CoordSystem::LeftHand, 1, 1, 1.0).unwrap();
        assert!(right.vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
        assert!(left.vertices.iter().all(|v| v.normal == [0.0, 0.0, -1.0]));
    }

    #[test]
    fn test_tex_coords_scale_by_row_count() {
        let grid = generate_grid(CoordSystem::RightHand, 4, 2, 1.0).unwrap();
        let last = grid.vertices.last().unwrap();
        assert_eq!(last.tex_coord, [2.0, 0.0]);
        assert_eq!(grid.vertices[0].tex_coord, [0.0, 1.0]);
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert_eq!(
            generate_grid(CoordSystem::RightHand, 0, 3, 1.0),
            Err(PrimitiveError::ZeroSubdivisions { param: "x_cells" })
        );
        assert!(generate_grid(CoordSystem::RightHand, 3, 3, 0.0).is_err());
    }
}
