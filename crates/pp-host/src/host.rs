//! Host trait definitions
//!
//! These traits define what the projection command needs from the embedding
//! CAD application. The command never touches a document directly.

use glam::DVec3;
use pp_kernel::ProjectionSign;

use crate::types::{
    CurveId, ElementId, ElementKind, FaceId, GeometryObject, HostResult, SetComparison, ShellSide,
};

/// Geometry and document queries supplied by the host
pub trait HostGeometry: Send + Sync {
    /// Get the category of an element
    fn element_kind(&self, element: ElementId) -> HostResult<ElementKind>;

    /// Get the side faces of a wall on the given side, in host order
    fn side_faces(&self, wall: ElementId, side: ShellSide) -> HostResult<Vec<FaceId>>;

    /// Get the inserts (openings) hosted by a wall
    fn find_inserts(&self, wall: ElementId) -> HostResult<Vec<ElementId>>;

    /// Get the geometry objects that make up an element
    fn element_geometry(&self, element: ElementId) -> HostResult<Vec<GeometryObject>>;

    /// Get the elements that generated a face of an element's geometry
    ///
    /// # Arguments
    /// * `element` - The element owning the geometry
    /// * `face` - A face of that geometry
    fn generating_elements(&self, element: ElementId, face: FaceId)
    -> HostResult<Vec<ElementId>>;

    /// Get the edge loops of a face as curve IDs
    fn edge_loops(&self, face: FaceId) -> HostResult<Vec<Vec<CurveId>>>;

    /// Tessellate a curve into ordered sample points
    fn tessellate(&self, curve: CurveId) -> HostResult<Vec<DVec3>>;

    /// Classify a curve against a face
    fn intersect(&self, face: FaceId, curve: CurveId) -> HostResult<SetComparison>;

    /// Get the facing orientation of a family instance
    fn facing_orientation(&self, instance: ElementId) -> HostResult<DVec3>;
}

/// Decides which elements the user may pick
pub trait ElementFilter {
    /// Check whether an element of this kind is selectable
    fn allow_element(&self, kind: ElementKind) -> bool;
}

/// Only walls are selectable
#[derive(Debug, Clone, Copy, Default)]
pub struct WallSelectionFilter;

impl ElementFilter for WallSelectionFilter {
    fn allow_element(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Wall
    }
}

/// Interactive element picking
pub trait Selection {
    /// Ask the user to pick one element
    ///
    /// Returns [`crate::HostError::Cancelled`] when the user aborts.
    fn pick_element(&self, filter: &dyn ElementFilter, prompt: &str) -> HostResult<ElementId>;
}

/// Output sink for projected segment endpoints
pub trait ReportSink {
    /// Report one endpoint projected with the given convention
    fn report(&mut self, opening: ElementId, sign: ProjectionSign, point: DVec3);
}

/// Sink that logs every endpoint through `tracing`
#[derive(Debug, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&mut self, opening: ElementId, sign: ProjectionSign, point: DVec3) {
        tracing::info!(%opening, "Projected point with {} sign: {}", sign, point);
    }
}

/// Sink that keeps every endpoint in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    /// Reported endpoints in reporting order
    pub points: Vec<(ElementId, ProjectionSign, DVec3)>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoints reported with one convention
    pub fn points_with(&self, sign: ProjectionSign) -> Vec<DVec3> {
        self.points
            .iter()
            .filter(|(_, s, _)| *s == sign)
            .map(|(_, _, p)| *p)
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn report(&mut self, opening: ElementId, sign: ProjectionSign, point: DVec3) {
        self.points.push((opening, sign, point));
    }
}
