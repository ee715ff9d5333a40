//! Opening queries
//!
//! Helpers that walk host geometry to find the curves an opening leaves on a
//! wall face.

use crate::host::HostGeometry;
use crate::types::{CurveId, ElementId, FaceId, HostResult, SetComparison, ShellSide};

/// All faces of a wall's solids that were generated by the given opening
///
/// Non-solid geometry objects are skipped.
pub fn opening_faces(
    host: &dyn HostGeometry,
    wall: ElementId,
    opening: ElementId,
) -> HostResult<Vec<FaceId>> {
    let geometry = host.element_geometry(wall)?;

    let mut faces = Vec::new();
    for solid in geometry.iter().filter_map(|object| object.as_solid()) {
        for &face in &solid.faces {
            if host
                .generating_elements(wall, face)?
                .iter()
                .any(|&id| id == opening)
            {
                faces.push(face);
            }
        }
    }
    Ok(faces)
}

/// The first side face of a wall on the given side
pub fn side_face(
    host: &dyn HostGeometry,
    wall: ElementId,
    side: ShellSide,
) -> HostResult<Option<FaceId>> {
    Ok(host.side_faces(wall, side)?.first().copied())
}

/// The first exterior side face of a wall
pub fn exterior_face(host: &dyn HostGeometry, wall: ElementId) -> HostResult<Option<FaceId>> {
    side_face(host, wall, ShellSide::Exterior)
}

/// Edge curves of an opening's faces that lie entirely on `wall_face`
///
/// Curves are returned in face, loop, edge order.
pub fn collect_opening_curves(
    host: &dyn HostGeometry,
    wall: ElementId,
    opening: ElementId,
    wall_face: FaceId,
) -> HostResult<Vec<CurveId>> {
    let mut curves = Vec::new();
    for face in opening_faces(host, wall, opening)? {
        for edge_loop in host.edge_loops(face)? {
            for curve in edge_loop {
                if host.intersect(wall_face, curve)? == SetComparison::Subset {
                    curves.push(curve);
                }
            }
        }
    }

    tracing::debug!(
        %opening,
        curves = curves.len(),
        "collected opening curves on wall face"
    );
    Ok(curves)
}
