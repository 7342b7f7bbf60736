//! Line-topology helpers: the coordinate axis gizmo and the view frustum outline.

use crate::error::{PrimitiveError, Result};
use crate::gfx::camera::FrustumParams;
use crate::gfx::geometry::{Mesh, Topology, Vertex};

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Generate three unit line segments from the origin along +x (red),
/// +y (green) and +z (blue).
///
/// Each segment has its own origin vertex so the colors stay separate:
/// 6 vertices, indices `0..6` read as 3 lines.
pub fn generate_axis() -> Mesh {
    let mut mesh = Mesh::with_capacity(Topology::Lines, 6, 6);
    for axis in 0..3 {
        let mut tip = [0.0; 3];
        tip[axis] = 1.0;
        let color = tip;

        let start = mesh.push_vertex(Vertex::new([0.0; 3]).with_color(color));
        let end = mesh.push_vertex(Vertex::new(tip).with_color(color));
        mesh.push_line(start, end);
    }

    log::debug!("generated axis");
    mesh
}

/// Generate the outline of a view frustum as 8 white line segments.
///
/// # Arguments
/// * `origin` - Apex position; must have exactly 3 components
/// * `fov_height_deg` - Vertical field of view in degrees, in `(0, 180)`
/// * `fov_width_deg` - Horizontal field of view in degrees, in `(0, 180)`
/// * `far_plane_distance` - The far plane lies at `z = far_plane_distance`
///
/// Vertices 0..4 are the far plane corners (top-left, top-right,
/// bottom-right, bottom-left, centered on the z axis) and vertex 4 is the
/// apex. The 16 indices hold the 4 far plane edges followed by the 4
/// apex-to-corner edges.
///
/// # Errors
/// [`PrimitiveError::OriginDimension`] when `origin` does not have 3
/// components, plus the usual field of view and distance checks.
pub fn generate_frustum(
    origin: &[f32],
    fov_height_deg: f32,
    fov_width_deg: f32,
    far_plane_distance: f32,
) -> Result<Mesh> {
    generate_frustum_from_params(
        origin,
        &FrustumParams::new(fov_height_deg, fov_width_deg, far_plane_distance),
    )
}

/// [`generate_frustum`] taking the viewing volume as [`FrustumParams`].
pub fn generate_frustum_from_params(origin: &[f32], params: &FrustumParams) -> Result<Mesh> {
    let apex: [f32; 3] = origin.try_into().map_err(|_| {
        log::warn!("rejecting frustum origin with {} components", origin.len());
        PrimitiveError::OriginDimension { len: origin.len() }
    })?;
    params.validate()?;

    let (half_width, half_height) = params.far_plane_half_extents();
    let far = params.far_distance;
    let corners = [
        ([-half_width, half_height], [0.0, 0.0]),
        ([half_width, half_height], [1.0, 0.0]),
        ([half_width, -half_height], [1.0, 1.0]),
        ([-half_width, -half_height], [0.0, 1.0]),
    ];

    let mut mesh = Mesh::with_capacity(Topology::Lines, 5, 16);
    for ([x, y], tex_coord) in corners {
        mesh.push_vertex(
            Vertex::new([x, y, far])
                .with_color(WHITE)
                .with_tex_coord(tex_coord),
        );
    }
    let apex = mesh.push_vertex(Vertex::new(apex).with_color(WHITE));

    for corner in 0..4 {
        mesh.push_line(corner, (corner + 1) % 4);
    }
    for corner in 0..4 {
        mesh.push_line(apex, corner);
    }

    log::debug!(
        "generated frustum: far plane {}x{} at distance {far}",
        2.0 * half_width,
        2.0 * half_height
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_generation() {
        let axis = generate_axis();
        assert_eq!(axis.topology, Topology::Lines);
        assert_eq!(axis.vertices.len(), 6);
        assert_eq!(axis.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(axis.vertices[3].position, [0.0, 1.0, 0.0]);
        assert_eq!(axis.vertices[2].color, [0.0, 1.0, 0.0]);
        assert_eq!(axis.vertices[5].color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_frustum_generation() {
        let frustum = generate_frustum(&[1.0, 2.0, 3.0], 90.0, 90.0, 2.0).unwrap();
        assert_eq!(frustum.topology, Topology::Lines);
        assert_eq!(frustum.vertices.len(), 5);
        assert_eq!(
            frustum.indices,
            vec![0, 1, 1, 2, 2, 3, 3, 0, 4, 0, 4, 1, 4, 2, 4, 3]
        );
        assert_eq!(frustum.vertices[4].position, [1.0, 2.0, 3.0]);

        // tan(45°) * 2 * 2 / 2 == 2
        let top_right = frustum.vertices[1].position;
        assert!((top_right[0] - 2.0).abs() < 1e-5);
        assert!((top_right[1] - 2.0).abs() < 1e-5);
        assert_eq!(top_right[2], 2.0);
    }

    #[test]
    fn test_frustum_rejects_bad_origin() {
        assert_eq!(
            generate_frustum(&[0.0, 0.0], 60.0, 90.0, 1.0),
            Err(PrimitiveError::OriginDimension { len: 2 })
        );
        assert!(generate_frustum(&[0.0; 4], 60.0, 90.0, 1.0).is_err());
        assert!(generate_frustum(&[0.0; 3], 200.0, 90.0, 1.0).is_err());
    }
}
