//! Camera helpers shared by the view-volume primitives.

pub mod camera_utils;

// Re-export main types
pub use camera_utils::{far_plane_size, fov_extent, FrustumParams};
