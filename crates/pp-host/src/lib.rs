//! Host Integration Layer
//!
//! This crate provides:
//! - Abstract host traits for element selection, geometry queries and output
//! - Opening queries (opening faces, exterior face, curves on the face)
//! - The "project opening points" command with success/cancel/fail outcomes
//! - An in-memory host built from a serializable scene

pub mod command;
pub mod host;
pub mod memory;
pub mod query;
pub mod types;

// Re-exports for convenience
pub use command::{CommandOutcome, CommandResult, OpeningProjection, ProjectOpeningsCommand};
pub use host::{
    ElementFilter, HostGeometry, RecordingSink, ReportSink, Selection, TracingSink,
    WallSelectionFilter,
};
pub use memory::{CurveDef, FaceDef, MemoryHost, OpeningDef, Scene, WallDef};
pub use query::{collect_opening_curves, exterior_face, opening_faces, side_face};
pub use types::{
    CurveId, ElementId, ElementKind, FaceId, GeometryObject, HostError, HostResult,
    SetComparison, ShellSide, SolidGeom,
};
