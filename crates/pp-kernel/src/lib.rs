//! Plane Projection Kernel
//!
//! This crate provides:
//! - Tolerance predicates shared by every floating-point comparison
//! - Plane metrics: signed distance and the two projection conventions
//! - Polyline projection of sampled curves for both conventions at once

pub mod error;
pub mod plane;
pub mod polyline;
pub mod tolerance;

// Re-exports for convenience
pub use error::{KernelError, KernelResult};
pub use plane::{Plane, ProjectionSign, project, project_minus, project_plus, signed_distance};
pub use polyline::{
    ProjectedCurves, Segment, project_curves, project_curves_with_sign, project_polyline,
    project_polyline_with,
};
pub use tolerance::{EPS, is_equal, is_zero, is_zero_with, points_equal};
