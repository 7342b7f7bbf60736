use meshkit::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn cube_vertices_lie_on_surface() {
    init_logging();
    for side in [0.1f32, 1.0, 2.5, 40.0] {
        for system in [CoordSystem::RightHand, CoordSystem::LeftHand] {
            let cube = generate_cube(system, side).unwrap();
            assert_eq!(cube.vertex_count(), 24);
            assert_eq!(cube.index_count(), 36);
            assert!(cube.indices.iter().all(|&i| i < 24));

            let half = side / 2.0;
            for v in &cube.vertices {
                let on_face = v
                    .position
                    .iter()
                    .filter(|c| (c.abs() - half).abs() < 1e-5)
                    .count();
                assert!(on_face >= 1);
                assert!(v.position.iter().all(|c| c.abs() <= half + 1e-5));
            }
        }
    }
}

#[test]
fn cube_covers_each_face_once() {
    let cube = generate_cube(CoordSystem::RightHand, 2.0).unwrap();
    let mut faces = Vec::new();
    for block in cube.vertices.chunks(4) {
        // The coordinate shared by all four corners identifies the face
        let axis = (0..3)
            .find(|&a| block.iter().all(|v| v.position[a] == block[0].position[a]))
            .unwrap();
        faces.push((axis, block[0].position[axis]));
    }
    assert_eq!(
        faces,
        vec![(0, -1.0), (0, 1.0), (1, -1.0), (1, 1.0), (2, -1.0), (2, 1.0)]
    );
}

#[test]
fn grid_counts_and_plane() {
    for (x, y) in [(1, 1), (3, 2), (10, 7), (1, 20)] {
        let grid = generate_grid(CoordSystem::RightHand, x, y, 0.25).unwrap();
        assert_eq!(grid.vertex_count(), ((x + 1) * (y + 1)) as usize);
        assert_eq!(grid.index_count(), (6 * x * y) as usize);
        assert_eq!(grid.validate(), Ok(()));
        assert!(grid.vertices.iter().all(|v| v.position[2] == 0.0));

        let bounds = grid.bounds().unwrap();
        assert!((bounds.max.x - 0.25 * x as f32).abs() < 1e-5);
        assert!((bounds.max.y - 0.25 * y as f32).abs() < 1e-5);
    }
}

#[test]
fn cylinder_counts_and_rings() {
    for unit_angle in [1.0f32, 10.0, 36.0, 45.0, 60.0, 120.0] {
        let n = (360.0 / unit_angle).round() as usize;
        let cylinder = generate_cylinder(CoordSystem::RightHand, 2.0, 5.0, unit_angle).unwrap();
        assert_eq!(cylinder.vertex_count(), 2 * n);
        assert_eq!(cylinder.index_count(), 6 * n);
        assert_eq!(cylinder.validate(), Ok(()));
        assert!(cylinder.vertices[..n].iter().all(|v| v.position[1] == 0.0));
        assert!(cylinder.vertices[n..].iter().all(|v| v.position[1] == 5.0));

        for v in &cylinder.vertices {
            let radial = (v.position[0].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((radial - 2.0).abs() < 1e-4);
        }
    }
}

#[test]
fn sphere_vertices_at_radius() {
    for (radius, slices, stacks) in [(1.0f32, 1, 1), (0.5, 8, 4), (3.0, 32, 16), (10.0, 5, 9)] {
        let sphere = generate_sphere(radius, slices, stacks).unwrap();
        assert_eq!(
            sphere.vertex_count(),
            ((slices + 1) * (stacks + 1)) as usize
        );
        assert_eq!(sphere.index_count(), (6 * slices * stacks) as usize);
        assert_eq!(sphere.validate(), Ok(()));
        for v in &sphere.vertices {
            let magnitude = v.position_vec().magnitude();
            assert!((magnitude - radius).abs() < 1e-4 * radius.max(1.0));
        }
    }
}

#[test]
fn frustum_apex_and_counts() {
    let origin = [0.5, -1.0, 2.0];
    let frustum = generate_frustum(&origin, 45.0, 70.0, 100.0).unwrap();
    assert_eq!(frustum.topology, Topology::Lines);
    assert_eq!(frustum.vertex_count(), 5);
    assert_eq!(frustum.index_count(), 16);
    assert_eq!(frustum.primitive_count(), 8);
    assert_eq!(frustum.vertices[4].position, origin);

    let err = generate_frustum(&[0.0, 1.0], 45.0, 70.0, 100.0).unwrap_err();
    assert_eq!(err, PrimitiveError::OriginDimension { len: 2 });
    assert_eq!(err.param(), Some("origin"));
}

#[test]
fn topology_is_tagged_per_shape() {
    let triangles = [
        generate_cube(CoordSystem::RightHand, 1.0).unwrap(),
        generate_grid(CoordSystem::RightHand, 2, 2, 1.0).unwrap(),
        generate_cylinder(CoordSystem::RightHand, 1.0, 1.0, 30.0).unwrap(),
        generate_sphere(1.0, 4, 4).unwrap(),
        generate_sand_clock(CoordSystem::RightHand).unwrap(),
        generate_square(),
    ];
    for mesh in &triangles {
        assert_eq!(mesh.topology, Topology::Triangles);
        assert_eq!(mesh.index_count() % 3, 0);
        assert_eq!(mesh.validate(), Ok(()));
    }

    let lines = [
        generate_axis(),
        generate_frustum(&[0.0; 3], 60.0, 60.0, 1.0).unwrap(),
    ];
    for mesh in &lines {
        assert_eq!(mesh.topology, Topology::Lines);
        assert_eq!(mesh.validate(), Ok(()));
    }
}

#[test]
fn repeated_calls_differ_only_in_color() {
    fn strip_colors(mut mesh: Mesh) -> Mesh {
        for v in &mut mesh.vertices {
            v.color = [0.0; 3];
        }
        mesh
    }

    let a = generate_sand_clock(CoordSystem::LeftHand).unwrap();
    let b = generate_sand_clock(CoordSystem::LeftHand).unwrap();
    assert_eq!(strip_colors(a), strip_colors(b));

    let a = generate_cylinder(CoordSystem::RightHand, 1.0, 2.0, 15.0).unwrap();
    let b = generate_cylinder(CoordSystem::RightHand, 1.0, 2.0, 15.0).unwrap();
    assert_eq!(strip_colors(a), strip_colors(b));
}

#[test]
fn seeded_sources_reproduce_colors() {
    let seeded_grid = |seed| {
        generate_grid_with(CoordSystem::RightHand, 4, 4, 1.0, &mut RandomSource::seeded(seed))
            .unwrap()
    };
    let (first, second) = (seeded_grid(9), seeded_grid(9));
    assert_eq!(first, second);

    let constant = generate_sphere_with(1.0, 6, 3, &mut ConstantSource(0.5)).unwrap();
    assert!(constant.vertices.iter().all(|v| v.color == [0.5; 3]));
}

#[test]
fn shared_source_works_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| generate_cube(CoordSystem::RightHand, 1.0).unwrap()))
        .collect();
    for handle in handles {
        let cube = handle.join().unwrap();
        assert!(cube
            .vertices
            .iter()
            .flat_map(|v| v.color)
            .all(|c| (0.0..1.0).contains(&c)));
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(matches!(
        generate_cube(CoordSystem::RightHand, -2.0),
        Err(PrimitiveError::NonPositive { param: "side_length", .. })
    ));
    assert!(matches!(
        generate_grid(CoordSystem::RightHand, 4, 0, 1.0),
        Err(PrimitiveError::ZeroSubdivisions { param: "y_cells" })
    ));
    assert!(matches!(
        generate_cylinder(CoordSystem::RightHand, 1.0, 1.0, 25.0),
        Err(PrimitiveError::AngleNotDivisor { .. })
    ));
    assert!(matches!(
        generate_sphere(1.0, 0, 4),
        Err(PrimitiveError::ZeroSubdivisions { param: "slices" })
    ));
    assert!(matches!(
        generate_sand_clock_with(
            CoordSystem::RightHand,
            SandClockParams { stacks: 0, slices: 4 },
            &mut ConstantSource(0.0)
        ),
        Err(PrimitiveError::ZeroSubdivisions { param: "stacks" })
    ));
    assert!(matches!(
        generate_grid(CoordSystem::RightHand, u32::MAX, u32::MAX, 1.0),
        Err(PrimitiveError::IndexOverflow { .. })
    ));
}
