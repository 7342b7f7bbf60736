//! # Generator Errors
//!
//! Every primitive generator validates its parameters on entry and reports
//! bad input through [`PrimitiveError`]. All variants describe an invalid
//! argument; no generator fails for any other reason.

use thiserror::Error;

/// Result alias used by every generator in this crate.
pub type Result<T> = std::result::Result<T, PrimitiveError>;

/// Invalid-argument conditions reported by the primitive generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrimitiveError {
    /// A size, radius or distance was zero, negative or not finite.
    #[error("invalid argument: `{param}` must be a positive finite number, got {value}")]
    NonPositive { param: &'static str, value: f32 },

    /// A subdivision count was zero.
    #[error("invalid argument: `{param}` must be at least 1")]
    ZeroSubdivisions { param: &'static str },

    /// A cylinder step angle that does not split the full turn evenly.
    #[error("invalid argument: unit angle {angle} degrees does not divide 360 evenly")]
    AngleNotDivisor { angle: f32 },

    /// A cylinder step angle that leaves a single segment around the axis.
    #[error("invalid argument: {segments} segments around the axis, at least {min} required")]
    TooFewSegments { segments: u32, min: u32 },

    /// The frustum apex did not have exactly three components.
    #[error("invalid argument: frustum origin needs 3 components, got {len}")]
    OriginDimension { len: usize },

    /// A field of view outside the open range (0, 180) degrees.
    #[error("invalid argument: `{param}` must lie strictly between 0 and 180 degrees, got {value}")]
    FieldOfView { param: &'static str, value: f32 },

    /// The requested subdivision would produce more vertices than `u32` indices can address.
    #[error("invalid argument: {vertices} vertices exceed the u32 index range")]
    IndexOverflow { vertices: u128 },
}

impl PrimitiveError {
    /// Returns the name of the offending parameter, when the error concerns one.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::NonPositive { param, .. }
            | Self::ZeroSubdivisions { param }
            | Self::FieldOfView { param, .. } => Some(*param),
            Self::AngleNotDivisor { .. } | Self::TooFewSegments { .. } => Some("unit_angle"),
            Self::OriginDimension { .. } => Some("origin"),
            Self::IndexOverflow { .. } => None,
        }
    }
}

/// Rejects zero, negative and non-finite magnitudes.
pub(crate) fn ensure_positive(param: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        log::warn!("rejecting {param} = {value}: must be positive and finite");
        Err(PrimitiveError::NonPositive { param, value })
    }
}

/// Rejects zero subdivision counts.
pub(crate) fn ensure_nonzero(param: &'static str, value: u32) -> Result<u32> {
    if value == 0 {
        log::warn!("rejecting {param} = 0: at least one subdivision is required");
        Err(PrimitiveError::ZeroSubdivisions { param })
    } else {
        Ok(value)
    }
}

/// Rejects fields of view outside the open range `(0, 180)` degrees.
pub(crate) fn ensure_fov(param: &'static str, value: f32) -> Result<f32> {
    if value > 0.0 && value < 180.0 {
        Ok(value)
    } else {
        log::warn!("rejecting {param} = {value}: field of view must be in (0, 180)");
        Err(PrimitiveError::FieldOfView { param, value })
    }
}

/// Rejects vertex counts that a `u32` index buffer cannot address.
pub(crate) fn ensure_indexable(vertices: u128) -> Result<u32> {
    u32::try_from(vertices).map_err(|_| {
        log::warn!("rejecting mesh with {vertices} vertices: exceeds u32 index range");
        PrimitiveError::IndexOverflow { vertices }
    })
}

/// Vertex count of a `(columns + 1) x (rows + 1)` lattice, rejected when a
/// `u32` index buffer cannot address it.
pub(crate) fn ensure_lattice(columns: u32, rows: u32) -> Result<u32> {
    ensure_indexable((u128::from(columns) + 1) * (u128::from(rows) + 1))
}
