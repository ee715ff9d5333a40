//! Project Openings Command
//!
//! Picks a wall, collects the curves each of its openings leaves on the
//! exterior face, and projects their tessellation onto a plane facing the
//! opening with both sign conventions.

use glam::DVec3;
use pp_kernel::{Plane, ProjectedCurves, ProjectionSign, project_curves};
use serde::{Deserialize, Serialize};

use crate::host::{HostGeometry, ReportSink, Selection, TracingSink, WallSelectionFilter};
use crate::query::{collect_opening_curves, exterior_face};
use crate::types::{CurveId, ElementId, ElementKind, HostError, HostResult};

/// How the command ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// Every opening was processed
    Succeeded,
    /// The user aborted the pick
    Cancelled,
    /// Something went wrong; the host stays up
    Failed {
        /// Human-readable cause
        message: String,
    },
}

/// Projection of one opening
#[derive(Debug, Clone)]
pub struct OpeningProjection {
    /// The opening (insert) element
    pub opening: ElementId,
    /// Plane built from the opening's facing orientation
    pub plane: Plane,
    /// Curves on the wall's exterior face, in projection order
    pub curves: Vec<CurveId>,
    /// Projected segments, one entry per curve
    pub projected: ProjectedCurves,
}

/// Outcome plus whatever was projected before it was reached
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// How the command ended
    pub outcome: CommandOutcome,
    /// Openings projected, empty unless the command succeeded
    pub openings: Vec<OpeningProjection>,
}

impl CommandResult {
    /// Check if the command succeeded
    pub fn succeeded(&self) -> bool {
        self.outcome == CommandOutcome::Succeeded
    }
}

/// Command settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectOpeningsCommand {
    /// Origin of every projection plane
    pub plane_origin: DVec3,
    /// Prompt shown when picking the wall
    pub prompt: String,
}

impl Default for ProjectOpeningsCommand {
    fn default() -> Self {
        Self {
            plane_origin: DVec3::ZERO,
            prompt: String::from("pick arc-wall with window"),
        }
    }
}

impl ProjectOpeningsCommand {
    /// Create a command with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different origin for the projection planes
    pub fn with_plane_origin(mut self, origin: DVec3) -> Self {
        self.plane_origin = origin;
        self
    }

    /// Run the command
    ///
    /// Never panics on host failures: cancellation maps to
    /// [`CommandOutcome::Cancelled`], every other error to
    /// [`CommandOutcome::Failed`].
    pub fn execute(
        &self,
        host: &dyn HostGeometry,
        selection: &dyn Selection,
        sink: &mut dyn ReportSink,
    ) -> CommandResult {
        match self.run(host, selection, sink) {
            Ok(openings) => {
                tracing::info!(openings = openings.len(), "Projection command succeeded");
                CommandResult {
                    outcome: CommandOutcome::Succeeded,
                    openings,
                }
            }
            Err(HostError::Cancelled) => {
                tracing::info!("Projection command cancelled");
                CommandResult {
                    outcome: CommandOutcome::Cancelled,
                    openings: Vec::new(),
                }
            }
            Err(e) => {
                tracing::warn!("Projection command failed: {}", e);
                CommandResult {
                    outcome: CommandOutcome::Failed {
                        message: e.to_string(),
                    },
                    openings: Vec::new(),
                }
            }
        }
    }

    /// Run the command, logging every endpoint through [`TracingSink`]
    pub fn execute_logged(
        &self,
        host: &dyn HostGeometry,
        selection: &dyn Selection,
    ) -> CommandResult {
        self.execute(host, selection, &mut TracingSink)
    }

    fn run(
        &self,
        host: &dyn HostGeometry,
        selection: &dyn Selection,
        sink: &mut dyn ReportSink,
    ) -> HostResult<Vec<OpeningProjection>> {
        let wall = selection.pick_element(&WallSelectionFilter, &self.prompt)?;
        if host.element_kind(wall)? != ElementKind::Wall {
            return Err(HostError::NotAWall(wall));
        }
        let wall_face = exterior_face(host, wall)?.ok_or(HostError::MissingExteriorFace(wall))?;

        let mut openings = Vec::new();
        for opening in host.find_inserts(wall)? {
            let curves = collect_opening_curves(host, wall, opening, wall_face)?;
            if curves.is_empty() {
                tracing::debug!(%opening, "No curves on the exterior face, skipping");
                continue;
            }

            let facing = host.facing_orientation(opening)?;
            let plane = Plane::from_normal_and_origin(facing, self.plane_origin)?;
            let samples = curves
                .iter()
                .map(|&curve| host.tessellate(curve))
                .collect::<HostResult<Vec<_>>>()?;

            let projected = project_curves(&plane, &samples);
            for sign in ProjectionSign::ALL {
                for point in projected.iter_endpoints(sign) {
                    sink.report(opening, sign, point);
                }
            }

            openings.push(OpeningProjection {
                opening,
                plane,
                curves,
                projected,
            });
        }
        Ok(openings)
    }
}
