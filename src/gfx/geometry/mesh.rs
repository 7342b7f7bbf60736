//! # Mesh Container
//!
//! A [`Mesh`] couples an interleaved vertex buffer with an index buffer and
//! tags how the indices are meant to be read.

use cgmath::{InnerSpace, Vector3, Zero};

use super::{GeometryData, Vertex};

/// How an index buffer is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Consecutive index triples form independent triangles.
    #[default]
    Triangles,
    /// Consecutive index pairs form independent line segments.
    Lines,
}

impl Topology {
    /// Number of indices per primitive.
    pub fn arity(self) -> usize {
        match self {
            Topology::Triangles => 3,
            Topology::Lines => 2,
        }
    }
}

/// Reasons a mesh fails [`Mesh::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshDefect {
    /// An index points past the end of the vertex buffer.
    IndexOutOfRange { position: usize, index: u32 },
    /// The index count is not a multiple of the topology arity.
    DanglingIndices { count: usize, arity: usize },
}

/// Axis-aligned bounding box of a mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Bounds {
    /// Extent along each axis.
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }
}

/// Generated geometry: vertices, indices and the topology joining them.
///
/// Every index is expected to be smaller than the vertex count; all
/// generators in this crate uphold that, and [`Mesh::validate`] checks it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl Mesh {
    /// Creates an empty mesh with the given topology.
    pub fn new(topology: Topology) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            topology,
        }
    }

    /// Creates an empty mesh with room for the given number of vertices and indices.
    pub fn with_capacity(topology: Topology, vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            topology,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles or line segments, depending on the topology.
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.topology.arity()
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = next_index(self.vertices.len());
        self.vertices.push(vertex);
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        debug_assert_eq!(self.topology, Topology::Triangles);
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn push_line(&mut self, a: u32, b: u32) {
        debug_assert_eq!(self.topology, Topology::Lines);
        self.indices.extend_from_slice(&[a, b]);
    }

    /// Iterates over index triples. Empty for line meshes.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        let chunks = match self.topology {
            Topology::Triangles => self.indices.chunks_exact(3),
            Topology::Lines => self.indices[..0].chunks_exact(3),
        };
        chunks.map(|t| [t[0], t[1], t[2]])
    }

    /// Iterates over index pairs. Empty for triangle meshes.
    pub fn lines(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        let chunks = match self.topology {
            Topology::Lines => self.indices.chunks_exact(2),
            Topology::Triangles => self.indices[..0].chunks_exact(2),
        };
        chunks.map(|l| [l[0], l[1]])
    }

    /// Checks that every index is in range and that no primitive is left incomplete.
    pub fn validate(&self) -> Result<(), MeshDefect> {
        let arity = self.topology.arity();
        if self.indices.len() % arity != 0 {
            return Err(MeshDefect::DanglingIndices {
                count: self.indices.len(),
                arity,
            });
        }
        let len = self.vertices.len();
        match self
            .indices
            .iter()
            .position(|&index| index as usize >= len)
        {
            Some(position) => Err(MeshDefect::IndexOutOfRange {
                position,
                index: self.indices[position],
            }),
            None => Ok(()),
        }
    }

    /// Axis-aligned bounds of all vertex positions, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.vertices.first()?.position_vec();
        let bounds = self.vertices.iter().skip(1).fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, v| {
                let p = v.position_vec();
                Bounds {
                    min: Vector3::new(b.min.x.min(p.x), b.min.y.min(p.y), b.min.z.min(p.z)),
                    max: Vector3::new(b.max.x.max(p.x), b.max.y.max(p.y), b.max.z.max(p.z)),
                }
            },
        );
        Some(bounds)
    }

    /// Raw bytes of the vertex buffer, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index buffer, ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Replaces every normal with the area-weighted average of the adjacent
    /// triangle normals.
    ///
    /// Generators never call this; they keep the normals they document. Line
    /// meshes are left untouched, as are vertices not referenced by any triangle.
    /// A mesh failing [`Mesh::validate`] is returned unchanged with its defect.
    pub fn recompute_normals(&mut self) -> Result<(), MeshDefect> {
        self.validate()?;
        if self.topology != Topology::Triangles {
            return Ok(());
        }

        let mut accumulated = vec![Vector3::zero(); self.vertices.len()];
        for [i0, i1, i2] in self.triangles() {
            let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
            let v0 = self.vertices[i0].position_vec();
            let edge1 = self.vertices[i1].position_vec() - v0;
            let edge2 = self.vertices[i2].position_vec() - v0;
            // Cross product length is twice the triangle area
            let face_normal = edge1.cross(edge2);
            for index in [i0, i1, i2] {
                accumulated[index] += face_normal;
            }
        }

        for (vertex, normal) in self.vertices.iter_mut().zip(accumulated) {
            if normal.magnitude2() > f32::EPSILON {
                vertex.normal = normal.normalize().into();
            }
        }
        Ok(())
    }

    /// Splits the interleaved vertices into separate attribute streams.
    pub fn to_geometry_data(&self) -> GeometryData {
        GeometryData {
            vertices: self.vertices.iter().map(|v| v.position).collect(),
            colors: self.vertices.iter().map(|v| v.color).collect(),
            normals: self.vertices.iter().map(|v| v.normal).collect(),
            tex_coords: self.vertices.iter().map(|v| v.tex_coord).collect(),
            indices: self.indices.clone(),
            topology: self.topology,
        }
    }
}

/// Index of the vertex about to be pushed onto a buffer of length `len`.
fn next_index(len: usize) -> u32 {
    debug_assert!(
        u32::try_from(len).is_ok(),
        "vertex {len} exceeds the u32 index range"
    );
    len as u32
}
