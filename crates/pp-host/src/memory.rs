//! In-memory host
//!
//! A [`HostGeometry`] + [`Selection`] implementation backed by a plain
//! [`Scene`] description. Faces are planar; a curve is classified against a
//! face by testing its samples against the face's supporting plane.

use std::collections::HashMap;

use glam::DVec3;
use pp_kernel::Plane;
use serde::{Deserialize, Serialize};

use crate::host::{ElementFilter, HostGeometry, Selection};
use crate::types::{
    CurveId, ElementId, ElementKind, FaceId, GeometryObject, HostError, HostResult,
    SetComparison, ShellSide,
};

/// A wall element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallDef {
    /// Element ID
    pub id: ElementId,
    /// Exterior side faces, first one wins
    #[serde(default)]
    pub exterior_faces: Vec<FaceId>,
    /// Interior side faces
    #[serde(default)]
    pub interior_faces: Vec<FaceId>,
    /// Geometry objects of the wall
    #[serde(default)]
    pub geometry: Vec<GeometryObject>,
    /// Hosted openings
    #[serde(default)]
    pub inserts: Vec<ElementId>,
}

/// An opening (window/door family instance)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningDef {
    /// Element ID
    pub id: ElementId,
    /// Facing orientation, not necessarily normalised
    pub facing: DVec3,
}

/// A planar face
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceDef {
    /// Face ID
    pub id: FaceId,
    /// Supporting plane
    pub surface: Plane,
    /// Edge loops as curve IDs
    #[serde(default)]
    pub loops: Vec<Vec<CurveId>>,
    /// Elements that generated this face
    #[serde(default)]
    pub generated_by: Vec<ElementId>,
}

/// A pre-tessellated curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveDef {
    /// Curve ID
    pub id: CurveId,
    /// Ordered sample points
    pub samples: Vec<DVec3>,
}

/// Serializable description of a host document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Walls
    #[serde(default)]
    pub walls: Vec<WallDef>,
    /// Openings hosted by walls
    #[serde(default)]
    pub openings: Vec<OpeningDef>,
    /// Faces referenced by walls and solids
    #[serde(default)]
    pub faces: Vec<FaceDef>,
    /// Curves referenced by face loops
    #[serde(default)]
    pub curves: Vec<CurveDef>,
    /// Elements of no particular interest
    #[serde(default)]
    pub others: Vec<ElementId>,
    /// Element the user picks; `None` cancels the pick
    #[serde(default)]
    pub picked: Option<ElementId>,
}

/// Host backed by in-memory maps
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    walls: HashMap<ElementId, WallDef>,
    openings: HashMap<ElementId, OpeningDef>,
    faces: HashMap<FaceId, FaceDef>,
    curves: HashMap<CurveId, CurveDef>,
    others: Vec<ElementId>,
    picked: Option<ElementId>,
}

impl From<Scene> for MemoryHost {
    fn from(scene: Scene) -> Self {
        Self {
            walls: scene.walls.into_iter().map(|w| (w.id, w)).collect(),
            openings: scene.openings.into_iter().map(|o| (o.id, o)).collect(),
            faces: scene.faces.into_iter().map(|f| (f.id, f)).collect(),
            curves: scene.curves.into_iter().map(|c| (c.id, c)).collect(),
            others: scene.others,
            picked: scene.picked,
        }
    }
}

impl MemoryHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    // ============== Builders ==============

    /// Add a wall
    pub fn add_wall(&mut self, wall: WallDef) -> ElementId {
        let id = wall.id;
        self.walls.insert(id, wall);
        id
    }

    /// Add an opening
    pub fn add_opening(&mut self, opening: OpeningDef) -> ElementId {
        let id = opening.id;
        self.openings.insert(id, opening);
        id
    }

    /// Add a face
    pub fn add_face(&mut self, face: FaceDef) -> FaceId {
        let id = face.id;
        self.faces.insert(id, face);
        id
    }

    /// Add a curve from its samples, returns its new ID
    pub fn add_curve(&mut self, samples: Vec<DVec3>) -> CurveId {
        let id = CurveId::new();
        self.curves.insert(id, CurveDef { id, samples });
        id
    }

    /// Add an element of kind [`ElementKind::Other`]
    pub fn add_other(&mut self) -> ElementId {
        let id = ElementId::new();
        self.others.push(id);
        id
    }

    /// Set the element the next pick returns (`None` cancels)
    pub fn set_picked(&mut self, element: Option<ElementId>) {
        self.picked = element;
    }

    fn wall(&self, id: ElementId) -> HostResult<&WallDef> {
        self.walls.get(&id).ok_or(HostError::ElementNotFound(id))
    }

    fn face(&self, id: FaceId) -> HostResult<&FaceDef> {
        self.faces.get(&id).ok_or(HostError::FaceNotFound(id))
    }

    fn curve(&self, id: CurveId) -> HostResult<&CurveDef> {
        self.curves.get(&id).ok_or(HostError::CurveNotFound(id))
    }
}

impl HostGeometry for MemoryHost {
    fn element_kind(&self, element: ElementId) -> HostResult<ElementKind> {
        if self.walls.contains_key(&element) {
            Ok(ElementKind::Wall)
        } else if self.openings.contains_key(&element) {
            Ok(ElementKind::FamilyInstance)
        } else if self.others.contains(&element) {
            Ok(ElementKind::Other)
        } else {
            Err(HostError::ElementNotFound(element))
        }
    }

    fn side_faces(&self, wall: ElementId, side: ShellSide) -> HostResult<Vec<FaceId>> {
        let wall = self.wall(wall)?;
        Ok(match side {
            ShellSide::Exterior => wall.exterior_faces.clone(),
            ShellSide::Interior => wall.interior_faces.clone(),
        })
    }

    fn find_inserts(&self, wall: ElementId) -> HostResult<Vec<ElementId>> {
        Ok(self.wall(wall)?.inserts.clone())
    }

    fn element_geometry(&self, element: ElementId) -> HostResult<Vec<GeometryObject>> {
        match self.walls.get(&element) {
            Some(wall) => Ok(wall.geometry.clone()),
            None => self.element_kind(element).map(|_| Vec::new()),
        }
    }

    fn generating_elements(
        &self,
        element: ElementId,
        face: FaceId,
    ) -> HostResult<Vec<ElementId>> {
        self.element_kind(element)?;
        Ok(self.face(face)?.generated_by.clone())
    }

    fn edge_loops(&self, face: FaceId) -> HostResult<Vec<Vec<CurveId>>> {
        Ok(self.face(face)?.loops.clone())
    }

    fn tessellate(&self, curve: CurveId) -> HostResult<Vec<DVec3>> {
        Ok(self.curve(curve)?.samples.clone())
    }

    fn intersect(&self, face: FaceId, curve: CurveId) -> HostResult<SetComparison> {
        let surface = self.face(face)?.surface;
        let samples = &self.curve(curve)?.samples;

        let on_face = samples.iter().filter(|&&p| surface.contains(p)).count();
        Ok(if on_face == 0 {
            SetComparison::Disjoint
        } else if on_face == samples.len() {
            SetComparison::Subset
        } else {
            SetComparison::Overlap
        })
    }

    fn facing_orientation(&self, instance: ElementId) -> HostResult<DVec3> {
        self.openings
            .get(&instance)
            .map(|opening| opening.facing)
            .ok_or(HostError::ElementNotFound(instance))
    }
}

impl Selection for MemoryHost {
    fn pick_element(&self, filter: &dyn ElementFilter, prompt: &str) -> HostResult<ElementId> {
        tracing::debug!(prompt, "picking element");

        let element = self.picked.ok_or(HostError::Cancelled)?;
        if filter.allow_element(self.element_kind(element)?) {
            Ok(element)
        } else {
            Err(HostError::SelectionRejected(element))
        }
    }
}
