//! Wavefront OBJ export for inspecting generated meshes in external tools.

use std::io::{self, Write};

use super::{Mesh, Topology};

/// Writes `mesh` as a Wavefront OBJ document.
///
/// Every vertex emits a `v x y z r g b` line (vertex colors as the common
/// extension), a `vt` and a `vn` line. Triangle meshes are written as `f`
/// records referencing all three attributes, line meshes as `l` records.
/// Indices are 1-based as OBJ requires.
pub fn write_obj<W: Write>(mesh: &Mesh, mut writer: W) -> io::Result<()> {
    writeln!(
        writer,
        "# {} vertices, {} {}",
        mesh.vertex_count(),
        mesh.primitive_count(),
        match mesh.topology {
            Topology::Triangles => "triangles",
            Topology::Lines => "lines",
        }
    )?;

    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        let [r, g, b] = v.color;
        writeln!(writer, "v {x} {y} {z} {r} {g} {b}")?;
    }
    for v in &mesh.vertices {
        let [u, t] = v.tex_coord;
        writeln!(writer, "vt {u} {t}")?;
    }
    for v in &mesh.vertices {
        let [nx, ny, nz] = v.normal;
        writeln!(writer, "vn {nx} {ny} {nz}")?;
    }

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    for [a, b] in mesh.lines() {
        writeln!(writer, "l {} {}", a + 1, b + 1)?;
    }

    writer.flush()
}
