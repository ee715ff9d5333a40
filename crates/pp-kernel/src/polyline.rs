//! Polyline Projector
//!
//! Rebuilds projected polylines from tessellated curves: every sample is
//! projected once and consecutive projected samples become a [`Segment`].

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::plane::{Plane, ProjectionSign, project};

/// A straight edge of a reconstructed polyline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point
    pub start: DVec3,
    /// End point
    pub end: DVec3,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// The same segment with start and end swapped
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Start and end as an array (reporting order)
    pub fn endpoints(&self) -> [DVec3; 2] {
        [self.start, self.end]
    }
}

/// Projected segments of a set of curves for both sign conventions
///
/// Outer vectors follow the input curve order; a curve with fewer than two
/// samples contributes an empty inner vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedCurves {
    /// Segments obtained with [`ProjectionSign::Plus`]
    pub with_plus: Vec<Vec<Segment>>,
    /// Segments obtained with [`ProjectionSign::Minus`]
    pub with_minus: Vec<Vec<Segment>>,
}

impl ProjectedCurves {
    /// Segments for one convention
    pub fn get(&self, sign: ProjectionSign) -> &[Vec<Segment>] {
        match sign {
            ProjectionSign::Plus => &self.with_plus,
            ProjectionSign::Minus => &self.with_minus,
        }
    }

    /// Total segment count for one convention
    pub fn segment_count(&self, sign: ProjectionSign) -> usize {
        self.get(sign).iter().map(Vec::len).sum()
    }

    /// Check if no segment was produced for either convention
    pub fn is_empty(&self) -> bool {
        ProjectionSign::ALL
            .iter()
            .all(|&sign| self.segment_count(sign) == 0)
    }

    /// Every segment endpoint for one convention, start then end per segment
    pub fn iter_endpoints(&self, sign: ProjectionSign) -> impl Iterator<Item = DVec3> + '_ {
        self.get(sign)
            .iter()
            .flatten()
            .flat_map(|segment| segment.endpoints())
    }
}

/// Project samples with an arbitrary projection function and join them
///
/// An empty or single-sample input yields no segments.
pub fn project_polyline_with<F>(
    plane: &Plane,
    samples: &[DVec3],
    mut projection: F,
) -> Vec<Segment>
where
    F: FnMut(&Plane, DVec3) -> DVec3,
{
    let mut points = samples.iter().map(|&p| projection(plane, p));
    let Some(mut previous) = points.next() else {
        return Vec::new();
    };

    let mut segments = Vec::with_capacity(samples.len().saturating_sub(1));
    for current in points {
        segments.push(Segment::new(previous, current));
        previous = current;
    }
    segments
}

/// Project samples with the given sign convention and join them
pub fn project_polyline(plane: &Plane, samples: &[DVec3], sign: ProjectionSign) -> Vec<Segment> {
    project_polyline_with(plane, samples, |plane, p| project(plane, sign, p))
}

/// Project every curve with one sign convention
pub fn project_curves_with_sign<C>(
    plane: &Plane,
    curves: &[C],
    sign: ProjectionSign,
) -> Vec<Vec<Segment>>
where
    C: AsRef<[DVec3]>,
{
    curves
        .iter()
        .enumerate()
        .map(|(index, curve)| {
            let samples = curve.as_ref();
            let segments = project_polyline(plane, samples, sign);
            tracing::debug!(
                curve = index,
                samples = samples.len(),
                segments = segments.len(),
                %sign,
                "projected curve"
            );
            segments
        })
        .collect()
}

/// Project every curve with both sign conventions
pub fn project_curves<C>(plane: &Plane, curves: &[C]) -> ProjectedCurves
where
    C: AsRef<[DVec3]>,
{
    ProjectedCurves {
        with_plus: project_curves_with_sign(plane, curves, ProjectionSign::Plus),
        with_minus: project_curves_with_sign(plane, curves, ProjectionSign::Minus),
    }
}
