//! Host identifiers, geometry variants and errors

use std::fmt;

use glam::DVec3;
use pp_kernel::KernelError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a host element (wall, window, door)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub Uuid);

impl ElementId {
    /// Create a fresh element ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a face of a host solid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceId(pub Uuid);

impl FaceId {
    /// Create a fresh face ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an edge curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveId(pub Uuid);

impl CurveId {
    /// Create a fresh curve ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CurveId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a host element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// A wall hosting openings
    Wall,
    /// A placed family instance such as a window or door
    FamilyInstance,
    /// Anything else
    Other,
}

/// Which side of a wall a side face belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShellSide {
    /// Outward-facing side
    #[default]
    Exterior,
    /// Inward-facing side
    Interior,
}

/// Classification of a curve against a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetComparison {
    /// The curve lies entirely on the face
    Subset,
    /// The curve does not touch the face
    Disjoint,
    /// The curve partly lies on the face
    Overlap,
}

/// A solid as seen by the projection command: its faces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolidGeom {
    /// Faces bounding the solid
    pub faces: Vec<FaceId>,
}

/// A geometry object returned for an element
///
/// Only solids carry opening faces; other variants are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeometryObject {
    /// A closed solid
    Solid(SolidGeom),
    /// A free curve
    Curve(CurveId),
    /// A free point
    Point(DVec3),
}

impl GeometryObject {
    /// The solid payload, if this is a solid
    pub fn as_solid(&self) -> Option<&SolidGeom> {
        match self {
            GeometryObject::Solid(solid) => Some(solid),
            _ => None,
        }
    }
}

/// Error type for host operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("Operation cancelled by the user")]
    Cancelled,

    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Face not found: {0}")]
    FaceNotFound(FaceId),

    #[error("Curve not found: {0}")]
    CurveNotFound(CurveId),

    #[error("Element {0} is not accepted by the selection filter")]
    SelectionRejected(ElementId),

    #[error("Element {0} is not a wall")]
    NotAWall(ElementId),

    #[error("Wall {0} has no exterior face")]
    MissingExteriorFace(ElementId),

    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),
}

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;
