use cgmath::{Deg, Rad};

use crate::error::{ensure_fov, ensure_positive, Result};

/// Linear extent covered by a field of view at `distance` from the eye.
///
/// `extent = tan(fov / 2) * distance * 2`. The caller keeps `fov_deg` inside
/// `(0, 180)`; outside that range the result is meaningless.
pub fn fov_extent(fov_deg: f32, distance: f32) -> f32 {
    let half_angle: Rad<f32> = Deg(fov_deg / 2.0).into();
    half_angle.0.tan() * distance * 2.0
}

/// Width and height of the far plane for a horizontal and vertical field of view.
pub fn far_plane_size(fov_height_deg: f32, fov_width_deg: f32, distance: f32) -> (f32, f32) {
    (
        fov_extent(fov_width_deg, distance),
        fov_extent(fov_height_deg, distance),
    )
}

/// Viewing volume parameters for [`generate_frustum`](crate::gfx::geometry::generate_frustum).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrustumParams {
    /// Vertical field of view in degrees
    pub fov_height_deg: f32,
    /// Horizontal field of view in degrees
    pub fov_width_deg: f32,
    /// Distance from the apex to the far plane
    pub far_distance: f32,
}

impl Default for FrustumParams {
    fn default() -> Self {
        Self {
            fov_height_deg: 60.0,
            fov_width_deg: 90.0,
            far_distance: 1.0,
        }
    }
}

impl FrustumParams {
    pub fn new(fov_height_deg: f32, fov_width_deg: f32, far_distance: f32) -> Self {
        Self {
            fov_height_deg,
            fov_width_deg,
            far_distance,
        }
    }

    /// Rejects fields of view outside `(0, 180)` and non-positive distances.
    pub fn validate(&self) -> Result<()> {
        ensure_fov("fov_height_deg", self.fov_height_deg)?;
        ensure_fov("fov_width_deg", self.fov_width_deg)?;
        ensure_positive("far_distance", self.far_distance)?;
        Ok(())
    }

    /// Far plane half extents as `(half_width, half_height)`.
    pub fn far_plane_half_extents(&self) -> (f32, f32) {
        let (width, height) =
            far_plane_size(self.fov_height_deg, self.fov_width_deg, self.far_distance);
        (width / 2.0, height / 2.0)
    }
}
