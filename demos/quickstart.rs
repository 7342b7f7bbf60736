//! Quickstart: generate every primitive, print its statistics and write it
//! to an OBJ file.
//!
//! Run with `RUST_LOG=debug cargo run --example quickstart [output-dir]`.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use meshkit::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("meshkit"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let system = CoordSystem::RightHand;
    let meshes = [
        ("cube", generate_cube(system, 2.0)?),
        ("grid", generate_grid(system, 8, 8, 0.25)?),
        ("cylinder", generate_cylinder(system, 1.0, 2.0, 15.0)?),
        ("sphere", generate_sphere(1.0, 32, 16)?),
        ("sand_clock", generate_sand_clock(system)?),
        ("square", generate_square()),
        ("axis", generate_axis()),
        ("frustum", generate_frustum(&[0.0, 0.0, 0.0], 60.0, 90.0, 5.0)?),
    ];

    for (name, mesh) in &meshes {
        let bounds = mesh.bounds().context("generated mesh has no vertices")?;
        println!(
            "{name:>10}: {:>4} vertices, {:>4} {:?} primitives, size {:?}",
            mesh.vertex_count(),
            mesh.primitive_count(),
            mesh.topology,
            bounds.size()
        );

        let path = out_dir.join(format!("{name}.obj"));
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        write_obj(mesh, BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
    }

    println!("OBJ files written to {}", out_dir.display());
    Ok(())
}
