//! # Vertex Data Structures
//!
//! This module defines the interleaved vertex format produced by every
//! primitive generator. It is laid out for direct upload into a GPU vertex
//! buffer.

use cgmath::Vector3;

/// A single interleaved vertex: position, color, normal and texture coordinate.
///
/// The four attribute groups are independent of each other. In particular
/// `normal` is not guaranteed to be unit length: several generators store the
/// raw position there (see the individual generator docs).
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute gives the struct a C-compatible layout of
/// eleven tightly packed `f32` values (44 bytes), described by
/// [`Vertex::ATTRIBUTES`].
///
/// # Examples
///
/// ```
/// use meshkit::gfx::geometry::Vertex;
///
/// let vertex = Vertex::new([0.0, 1.0, 0.0])
///     .with_normal([0.0, 1.0, 0.0])
///     .with_tex_coord([0.5, 0.5]);
/// assert_eq!(vertex.color, [0.0; 3]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Color channels [r, g, b]
    pub color: [f32; 3],
    /// Normal vector [nx, ny, nz]
    pub normal: [f32; 3],
    /// Texture coordinate [tx, ty]
    pub tex_coord: [f32; 2],
}

/// Describes one attribute inside the interleaved [`Vertex`] layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: u32,
    /// Byte offset from the start of the vertex
    pub offset: usize,
    /// Number of `f32` components
    pub components: usize,
}

impl Vertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Attribute layout, in shader-location order:
    /// - 0: position (3 × f32)
    /// - 1: color (3 × f32)
    /// - 2: normal (3 × f32)
    /// - 3: texture coordinate (2 × f32)
    pub const ATTRIBUTES: [VertexAttribute; 4] = [
        VertexAttribute {
            location: 0,
            offset: 0,
            components: 3,
        },
        VertexAttribute {
            location: 1,
            offset: std::mem::size_of::<[f32; 3]>(),
            components: 3,
        },
        VertexAttribute {
            location: 2,
            offset: std::mem::size_of::<[f32; 6]>(),
            components: 3,
        },
        VertexAttribute {
            location: 3,
            offset: std::mem::size_of::<[f32; 9]>(),
            components: 2,
        },
    ];

    /// Creates a vertex at `position` with every other attribute zeroed.
    pub fn new(position: [f32; 3]) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_normal(mut self, normal: [f32; 3]) -> Self {
        self.normal = normal;
        self
    }

    pub fn with_tex_coord(mut self, tex_coord: [f32; 2]) -> Self {
        self.tex_coord = tex_coord;
        self
    }

    /// Position as a cgmath vector.
    pub fn position_vec(&self) -> Vector3<f32> {
        Vector3::from(self.position)
    }

    /// Normal as a cgmath vector.
    pub fn normal_vec(&self) -> Vector3<f32> {
        Vector3::from(self.normal)
    }
}
