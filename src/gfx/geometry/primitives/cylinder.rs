use cgmath::{Deg, Rad};

use crate::attributes::{with_shared_source, AttributeSource};
use crate::error::{ensure_indexable, ensure_positive, PrimitiveError, Result};
use crate::gfx::geometry::{CoordSystem, Mesh, Topology, Vertex};

/// Fewest segments for which the `k / (n - 1)` texture coordinate is defined.
const MIN_SEGMENTS: u32 = 2;

/// Generate an open tube (no caps) around the +y axis.
///
/// # Arguments
/// * `radius` - Distance of the wall from the axis
/// * `height` - The tube spans `y = 0` to `y = height`
/// * `unit_angle_deg` - Angular step between wall vertices; must divide 360
///
/// With `n = 360 / unit_angle_deg` the mesh holds two rings of `n` vertices
/// (bottom ring first) and `6 * n` indices. Vertex `k` of a ring sits at angle
/// `k * unit_angle` measured from +z toward +x.
///
/// Ring vertices are scaled by `radius`, so a ring point sits at
/// `(radius * sin θ, y, radius * cos θ)` rather than on the unit circle.
/// Normals are the raw vertex positions, height component included.
/// [`CoordSystem::LeftHand`] reverses the winding of every triangle.
///
/// A 360 degree step leaves a single segment and is rejected, as is any step
/// fine enough that `2 * n` vertices overflow `u32` indices.
pub fn generate_cylinder(
    system: CoordSystem,
    radius: f32,
    height: f32,
    unit_angle_deg: f32,
) -> Result<Mesh> {
    with_shared_source(|source| {
        generate_cylinder_with(system, radius, height, unit_angle_deg, source)
    })
}

/// [`generate_cylinder`] drawing vertex colors from `source`.
pub fn generate_cylinder_with(
    system: CoordSystem,
    radius: f32,
    height: f32,
    unit_angle_deg: f32,
    source: &mut impl AttributeSource,
) -> Result<Mesh> {
    let radius = ensure_positive("radius", radius)?;
    let height = ensure_positive("height", height)?;
    let segments = segment_count(unit_angle_deg)?;
    let unit_angle: Rad<f32> = Deg(unit_angle_deg).into();

    let mut mesh = Mesh::with_capacity(
        Topology::Triangles,
        2 * segments as usize,
        6 * segments as usize,
    );

    for ring in 0..2u32 {
        for k in 0..segments {
            let theta = unit_angle.0 * k as f32;
            let position = [
                radius * theta.sin(),
                height * ring as f32,
                radius * theta.cos(),
            ];
            mesh.push_vertex(
                Vertex::new(position)
                    .with_color(source.next_color())
                    .with_normal(position)
                    .with_tex_coord([
                        k as f32 / (segments - 1) as f32,
                        1.0 - ring as f32,
                    ]),
            );
        }
    }

    for k in 0..segments {
        let next = (k + 1) % segments;
        let (bottom, top) = (k, segments + k);
        let (bottom_next, top_next) = (next, segments + next);
        if system.is_left_handed() {
            mesh.push_triangle(bottom, top_next, top);
            mesh.push_triangle(bottom, bottom_next, top_next);
        } else {
            mesh.push_triangle(bottom, top, top_next);
            mesh.push_triangle(bottom, top_next, bottom_next);
        }
    }

    log::debug!(
        "generated cylinder with {segments} segments: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    Ok(mesh)
}

/// Number of wall segments for a step angle, which must split 360 degrees evenly
/// into a count whose two rings stay addressable by `u32` indices.
fn segment_count(unit_angle_deg: f32) -> Result<u32> {
    ensure_positive("unit_angle", unit_angle_deg)?;

    let exact = 360.0 / unit_angle_deg;
    let rounded = exact.round();
    if (exact - rounded).abs() > 1e-4 * exact.max(1.0) {
        log::warn!("rejecting unit angle {unit_angle_deg}: does not divide 360");
        return Err(PrimitiveError::AngleNotDivisor {
            angle: unit_angle_deg,
        });
    }

    // Two rings of `rounded` vertices; an infinite quotient saturates here
    ensure_indexable((rounded as u128).saturating_mul(2))?;

    let segments = rounded as u32;
    if segments < MIN_SEGMENTS {
        log::warn!("rejecting unit angle {unit_angle_deg}: only {segments} segments");
        return Err(PrimitiveError::TooFewSegments {
            segments,
            min: MIN_SEGMENTS,
        });
    }
    Ok(segments)
}
