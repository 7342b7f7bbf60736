use crate::gfx::geometry::{Mesh, Topology, Vertex};

const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

/// Generate a blue quad spanning `[-1, 1]` on X and Y at `z = 0`, facing -z.
///
/// Vertices run top-left, top-right, bottom-right, bottom-left with texture
/// coordinates matching image space (v grows downward). Indices are
/// `(0, 1, 2), (0, 2, 3)`.
pub fn generate_square() -> Mesh {
    let corners = [
        ([-1.0, 1.0], [0.0, 0.0]),
        ([1.0, 1.0], [1.0, 0.0]),
        ([1.0, -1.0], [1.0, 1.0]),
        ([-1.0, -1.0], [0.0, 1.0]),
    ];

    let mut mesh = Mesh::with_capacity(Topology::Triangles, 4, 6);
    for ([x, y], tex_coord) in corners {
        mesh.push_vertex(
            Vertex::new([x, y, 0.0])
                .with_color(BLUE)
                .with_normal([0.0, 0.0, -1.0])
                .with_tex_coord(tex_coord),
        );
    }
    mesh.push_triangle(0, 1, 2);
    mesh.push_triangle(0, 2, 3);

    log::debug!("generated square");
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_generation() {
        let square = generate_square();
        assert_eq!(square.vertices.len(), 4);
        assert_eq!(square.indices, vec![0, 1, 2, 0, 2, 3]);
        assert!(square.vertices.iter().all(|v| v.color == BLUE));
        assert!(square.vertices.iter().all(|v| v.normal == [0.0, 0.0, -1.0]));

        let bounds = square.bounds().unwrap();
        assert_eq!(bounds.center(), cgmath::Vector3::new(0.0, 0.0, 0.0));
    }
}
