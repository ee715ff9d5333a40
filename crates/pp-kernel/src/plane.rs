//! Plane Metrics
//!
//! Signed distance from an oriented plane and the two projection
//! conventions along its normal.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::tolerance::{is_equal, is_zero};

/// An oriented plane defined by an origin point and a unit normal
///
/// The normal is guaranteed to have unit length (within [`crate::EPS`]) by
/// every constructor, including deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlaneData", into = "PlaneData")]
pub struct Plane {
    origin: DVec3,
    normal: DVec3,
}

/// Unvalidated on-disk representation of a plane
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PlaneData {
    origin: DVec3,
    normal: DVec3,
}

impl TryFrom<PlaneData> for Plane {
    type Error = KernelError;

    fn try_from(data: PlaneData) -> Result<Self, Self::Error> {
        Plane::new(data.origin, data.normal)
    }
}

impl From<Plane> for PlaneData {
    fn from(plane: Plane) -> Self {
        Self {
            origin: plane.origin,
            normal: plane.normal,
        }
    }
}

impl Plane {
    /// Create a plane from an origin and an already normalised normal
    ///
    /// Returns [`KernelError::PreconditionViolation`] when the normal is not
    /// of unit length. Callers holding an arbitrary direction should use
    /// [`Plane::from_normal_and_origin`] instead.
    pub fn new(origin: DVec3, normal: DVec3) -> KernelResult<Self> {
        if !origin.is_finite() {
            return Err(KernelError::InvalidInput(format!(
                "plane origin must be finite, got {origin}"
            )));
        }
        let length = normal.length();
        if !is_equal(length, 1.0) {
            return Err(KernelError::PreconditionViolation { length });
        }
        Ok(Self { origin, normal })
    }

    /// Create a plane from any non-zero direction, normalising it first
    pub fn from_normal_and_origin(normal: DVec3, origin: DVec3) -> KernelResult<Self> {
        let unit = normal
            .try_normalize()
            .ok_or(KernelError::DegenerateNormal(normal.to_array()))?;
        Self::new(origin, unit)
    }

    /// XY plane through the world origin (normal +Z)
    pub fn xy() -> Self {
        Self {
            origin: DVec3::ZERO,
            normal: DVec3::Z,
        }
    }

    /// YZ plane through the world origin (normal +X)
    pub fn yz() -> Self {
        Self {
            origin: DVec3::ZERO,
            normal: DVec3::X,
        }
    }

    /// ZX plane through the world origin (normal +Y)
    pub fn zx() -> Self {
        Self {
            origin: DVec3::ZERO,
            normal: DVec3::Y,
        }
    }

    /// Origin point of the plane
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Unit normal of the plane
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Check whether a point lies on the plane within tolerance
    pub fn contains(&self, point: DVec3) -> bool {
        is_zero(signed_distance(self, point))
    }
}

/// Sign convention used when moving a point along the plane normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionSign {
    /// `point + d * normal`
    Plus,
    /// `point - d * normal`
    Minus,
}

impl ProjectionSign {
    /// Both conventions, in reporting order
    pub const ALL: [ProjectionSign; 2] = [ProjectionSign::Plus, ProjectionSign::Minus];

    /// Lowercase name used in reports and job files
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectionSign::Plus => "plus",
            ProjectionSign::Minus => "minus",
        }
    }
}

impl fmt::Display for ProjectionSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed distance from the plane to a point
///
/// Positive on the side the normal points toward.
pub fn signed_distance(plane: &Plane, point: DVec3) -> f64 {
    debug_assert!(
        is_equal(plane.normal.length(), 1.0),
        "expected normalised plane normal"
    );

    plane.normal.dot(point - plane.origin)
}

/// Move a point by its signed distance along the normal
///
/// The result lies at signed distance `2d` from the plane; it coincides with
/// the input and with [`project_minus`] only when the point is already on the
/// plane.
pub fn project_plus(plane: &Plane, point: DVec3) -> DVec3 {
    let d = signed_distance(plane, point);
    let q = point + d * plane.normal;

    debug_assert!(
        is_equal(signed_distance(plane, q), 2.0 * d),
        "with plus: expected projected point at twice the source distance"
    );

    q
}

/// Project a point onto the plane against its signed distance
///
/// The result always lies on the plane.
pub fn project_minus(plane: &Plane, point: DVec3) -> DVec3 {
    let d = signed_distance(plane, point);
    let q = point - d * plane.normal;

    debug_assert!(
        is_zero(signed_distance(plane, q)),
        "with minus: expected point on plane to have zero distance to plane"
    );

    q
}

/// Project a point with the given sign convention
pub fn project(plane: &Plane, sign: ProjectionSign, point: DVec3) -> DVec3 {
    match sign {
        ProjectionSign::Plus => project_plus(plane, point),
        ProjectionSign::Minus => project_minus(plane, point),
    }
}
