//! End-to-end runs of the projection command against an in-memory wall

use glam::DVec3;
use pp_host::{
    CommandOutcome, ElementId, FaceDef, FaceId, GeometryObject, MemoryHost, OpeningDef,
    ProjectOpeningsCommand, RecordingSink, SolidGeom, WallDef, collect_opening_curves,
    exterior_face, opening_faces,
};
use pp_kernel::{Plane, ProjectionSign, is_equal};

const EXTERIOR_Y: f64 = 2.0;
const THICKNESS: f64 = 0.3;

struct Fixture {
    host: MemoryHost,
    wall: ElementId,
    window: ElementId,
    niche: ElementId,
}

/// A reveal face of an opening: a quad spanning `a -> b` on the exterior
/// face, extruded through the wall thickness.
fn reveal(host: &mut MemoryHost, a: DVec3, b: DVec3, normal: DVec3, opening: ElementId) -> FaceId {
    let depth = DVec3::new(0.0, THICKNESS, 0.0);
    let edges = vec![
        host.add_curve(vec![a, b]),
        host.add_curve(vec![b, b + depth]),
        host.add_curve(vec![b + depth, a + depth]),
        host.add_curve(vec![a + depth, a]),
    ];
    host.add_face(FaceDef {
        id: FaceId::new(),
        surface: Plane::from_normal_and_origin(normal, a).unwrap(),
        loops: vec![edges],
        generated_by: vec![opening],
    })
}

fn fixture() -> Fixture {
    let mut host = MemoryHost::new();
    let wall = ElementId::new();
    let window = ElementId::new();
    let niche = ElementId::new();

    let y = EXTERIOR_Y;
    let corners = [
        DVec3::new(1.0, y, 1.0),
        DVec3::new(2.0, y, 1.0),
        DVec3::new(2.0, y, 2.5),
        DVec3::new(1.0, y, 2.5),
    ];
    let mut faces = vec![
        reveal(&mut host, corners[0], corners[1], DVec3::Z, window),
        reveal(&mut host, corners[1], corners[2], DVec3::NEG_X, window),
        reveal(&mut host, corners[2], corners[3], DVec3::NEG_Z, window),
        reveal(&mut host, corners[3], corners[0], DVec3::X, window),
    ];

    // A niche cut from the interior side never reaches the exterior face
    let inner = y + THICKNESS;
    let niche_edge = host.add_curve(vec![DVec3::new(4.0, inner, 1.0), DVec3::new(5.0, inner, 1.0)]);
    faces.push(host.add_face(FaceDef {
        id: FaceId::new(),
        surface: Plane::from_normal_and_origin(DVec3::Z, DVec3::new(4.0, inner, 1.0)).unwrap(),
        loops: vec![vec![niche_edge]],
        generated_by: vec![niche],
    }));

    let exterior = host.add_face(FaceDef {
        id: FaceId::new(),
        surface: Plane::from_normal_and_origin(DVec3::NEG_Y, DVec3::new(0.0, y, 0.0)).unwrap(),
        loops: Vec::new(),
        generated_by: vec![wall],
    });
    faces.push(exterior);

    host.add_wall(WallDef {
        id: wall,
        exterior_faces: vec![exterior],
        interior_faces: Vec::new(),
        geometry: vec![
            GeometryObject::Point(DVec3::ZERO),
            GeometryObject::Solid(SolidGeom { faces }),
            GeometryObject::Curve(niche_edge),
        ],
        inserts: vec![window, niche],
    });
    host.add_opening(OpeningDef {
        id: window,
        facing: DVec3::new(0.0, -3.0, 0.0),
    });
    host.add_opening(OpeningDef {
        id: niche,
        facing: DVec3::Y,
    });
    host.set_picked(Some(wall));

    Fixture {
        host,
        wall,
        window,
        niche,
    }
}

#[test]
fn queries_find_window_curves_on_exterior_face() {
    let f = fixture();
    let face = exterior_face(&f.host, f.wall).unwrap().unwrap();

    assert_eq!(opening_faces(&f.host, f.wall, f.window).unwrap().len(), 4);
    assert_eq!(opening_faces(&f.host, f.wall, f.niche).unwrap().len(), 1);

    let curves = collect_opening_curves(&f.host, f.wall, f.window, face).unwrap();
    assert_eq!(curves.len(), 4, "only the exterior edge of each reveal");
    assert!(
        collect_opening_curves(&f.host, f.wall, f.niche, face)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn command_projects_window_with_both_signs() {
    let f = fixture();
    let mut sink = RecordingSink::new();
    let result = ProjectOpeningsCommand::new().execute(&f.host, &f.host, &mut sink);

    assert_eq!(result.outcome, CommandOutcome::Succeeded);
    assert!(result.succeeded());
    assert_eq!(result.openings.len(), 1, "the niche is skipped");

    let projection = &result.openings[0];
    assert_eq!(projection.opening, f.window);
    assert!(is_equal(projection.plane.normal().y, -1.0));
    assert_eq!(projection.curves.len(), 4);
    assert_eq!(projection.projected.segment_count(ProjectionSign::Plus), 4);
    assert_eq!(projection.projected.segment_count(ProjectionSign::Minus), 4);

    // Exterior face sits at signed distance -2 from the facing plane
    let plus = sink.points_with(ProjectionSign::Plus);
    let minus = sink.points_with(ProjectionSign::Minus);
    assert_eq!(plus.len(), 8);
    assert_eq!(minus.len(), 8);
    assert!(plus.iter().all(|p| is_equal(p.y, 2.0 * EXTERIOR_Y)));
    assert!(minus.iter().all(|p| is_equal(p.y, 0.0)));

    // Plus endpoints are reported before minus endpoints
    assert!(sink.points[..8].iter().all(|(_, s, _)| *s == ProjectionSign::Plus));
    assert!(sink.points.iter().all(|(id, _, _)| *id == f.window));
}

#[test]
fn command_uses_configured_plane_origin() {
    let f = fixture();
    let mut sink = RecordingSink::new();
    let result = ProjectOpeningsCommand::new()
        .with_plane_origin(DVec3::new(0.0, EXTERIOR_Y, 0.0))
        .execute(&f.host, &f.host, &mut sink);

    assert!(result.succeeded());
    // The exterior face lies on the plane, so both conventions agree
    assert_eq!(
        sink.points_with(ProjectionSign::Plus),
        sink.points_with(ProjectionSign::Minus)
    );
}

#[test]
fn cancelled_pick_is_reported_as_cancelled() {
    let mut f = fixture();
    f.host.set_picked(None);
    let mut sink = RecordingSink::new();
    let result = ProjectOpeningsCommand::new().execute(&f.host, &f.host, &mut sink);

    assert_eq!(result.outcome, CommandOutcome::Cancelled);
    assert!(result.openings.is_empty());
    assert!(sink.points.is_empty());
}

#[test]
fn picking_a_non_wall_fails_with_message() {
    let mut f = fixture();
    let window = f.window;
    f.host.set_picked(Some(window));
    let result = ProjectOpeningsCommand::new().execute(&f.host, &f.host, &mut RecordingSink::new());

    match result.outcome {
        CommandOutcome::Failed { message } => {
            assert!(message.contains("selection filter"), "{message}")
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn wall_without_exterior_face_fails() {
    let mut host = MemoryHost::new();
    let wall = host.add_wall(WallDef {
        id: ElementId::new(),
        exterior_faces: Vec::new(),
        interior_faces: Vec::new(),
        geometry: Vec::new(),
        inserts: Vec::new(),
    });
    host.set_picked(Some(wall));
    let result = ProjectOpeningsCommand::new().execute(&host, &host, &mut RecordingSink::new());

    assert!(matches!(result.outcome, CommandOutcome::Failed { .. }));
}

#[test]
fn degenerate_facing_fails_instead_of_panicking() {
    let mut f = fixture();
    f.host.add_opening(OpeningDef {
        id: f.window,
        facing: DVec3::ZERO,
    });
    let result = ProjectOpeningsCommand::new().execute(&f.host, &f.host, &mut RecordingSink::new());

    match result.outcome {
        CommandOutcome::Failed { message } => {
            assert!(message.contains("Degenerate plane normal"), "{message}")
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn logged_run_matches_recorded_run() {
    let f = fixture();
    let logged = ProjectOpeningsCommand::new().execute_logged(&f.host, &f.host);
    let recorded = ProjectOpeningsCommand::new().execute(&f.host, &f.host, &mut RecordingSink::new());

    assert_eq!(logged.outcome, recorded.outcome);
    assert_eq!(logged.openings.len(), recorded.openings.len());
    assert_eq!(logged.openings[0].projected, recorded.openings[0].projected);
}
