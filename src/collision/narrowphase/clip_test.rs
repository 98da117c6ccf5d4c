use super::contact_manifold::MAX_CONTACTS;
use crate::{
    error::{CollisionError, CollisionResult},
    linear_math::{Vec2Ext, aabb::Aabb2, line_clip::liang_barsky},
};
use arrayvec::ArrayVec;
use glam::DVec2;

/// Candidate contact points, free of near-duplicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidatePoints {
    points: ArrayVec<DVec2, MAX_CONTACTS>,
}

impl CandidatePoints {
    #[inline]
    pub const fn new() -> Self {
        Self {
            points: ArrayVec::new_const(),
        }
    }

    /// Adds `point` unless an existing candidate is within `eps` of it
    pub fn push_unique(&mut self, point: DVec2, eps: f64) -> CollisionResult<()> {
        if self.points.iter().any(|p| p.near_eq(point, eps)) {
            return Ok(());
        }

        self.points
            .try_push(point)
            .map_err(|_| CollisionError::CapacityOverflow {
                capacity: MAX_CONTACTS,
            })
    }

    #[inline]
    pub fn as_slice(&self) -> &[DVec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Clips the 4 edges of a rectangle, given by its corners in `aabb`'s frame,
/// against `aabb`.
///
/// Edges run `(0, 1), (1, 2), (2, 3), (3, 0)`. Clip endpoints that are new
/// intersections are added to `candidates`, followed by every corner that
/// survived clipping. Returns `false` when no edge touches the box.
pub fn clip_test(
    aabb: &Aabb2,
    points: &[DVec2; 4],
    eps: f64,
    candidates: &mut CandidatePoints,
) -> CollisionResult<bool> {
    let mut vertex_inside = [false; 4];
    let mut apart = true;

    for i in 0..4 {
        let i1 = (i + 1) % 4;
        let Some((entering, exiting)) = liang_barsky(aabb, points[i], points[i1]) else {
            continue;
        };

        apart = false;

        if entering.near_eq(points[i], eps) {
            vertex_inside[i] = true;
        } else {
            candidates.push_unique(entering, eps)?;
        }

        if exiting.near_eq(points[i1], eps) {
            vertex_inside[i1] = true;
        } else {
            candidates.push_unique(exiting, eps)?;
        }
    }

    if apart {
        return Ok(false);
    }

    for (point, inside) in points.iter().zip(vertex_inside) {
        if inside {
            candidates.push_unique(*point, eps)?;
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;
    const UNIT: Aabb2 = Aabb2::new(-0.5, 0.5, -0.5, 0.5);

    fn square_at(center: DVec2, half: f64) -> [DVec2; 4] {
        [
            center + DVec2::new(-half, -half),
            center + DVec2::new(half, -half),
            center + DVec2::new(half, half),
            center + DVec2::new(-half, half),
        ]
    }

    #[test]
    fn apart_rectangles_add_nothing() {
        let mut candidates = CandidatePoints::new();
        let hit = clip_test(&UNIT, &square_at(DVec2::new(3.0, 0.0), 0.5), EPS, &mut candidates);
        assert_eq!(hit, Ok(false));
        assert!(candidates.is_empty());
    }

    #[test]
    fn half_overlap_keeps_intersections_then_vertices() {
        let mut candidates = CandidatePoints::new();
        let hit = clip_test(&UNIT, &square_at(DVec2::new(0.5, 0.0), 0.5), EPS, &mut candidates);
        assert_eq!(hit, Ok(true));
        assert_eq!(
            candidates.as_slice(),
            &[
                DVec2::new(0.5, -0.5),
                DVec2::new(0.5, 0.5),
                DVec2::new(0.0, -0.5),
                DVec2::new(0.0, 0.5),
            ]
        );
    }

    #[test]
    fn enclosing_rectangle_is_apart_for_edges() {
        let mut candidates = CandidatePoints::new();
        let hit = clip_test(&UNIT, &square_at(DVec2::ZERO, 2.0), EPS, &mut candidates);
        assert_eq!(hit, Ok(false));
    }

    #[test]
    fn enclosed_rectangle_yields_its_corners() {
        let inner = square_at(DVec2::new(0.1, 0.0), 0.2);
        let mut candidates = CandidatePoints::new();
        assert_eq!(clip_test(&UNIT, &inner, EPS, &mut candidates), Ok(true));
        assert_eq!(candidates.as_slice(), &inner);
    }

    #[test]
    fn push_unique_merges_and_overflows() {
        let mut candidates = CandidatePoints::new();
        candidates.push_unique(DVec2::ONE, EPS).unwrap();
        candidates.push_unique(DVec2::ONE + DVec2::splat(1e-12), EPS).unwrap();
        assert_eq!(candidates.len(), 1);

        for i in 1..MAX_CONTACTS {
            candidates.push_unique(DVec2::new(i as f64, 0.0), EPS).unwrap();
        }
        assert_eq!(candidates.len(), MAX_CONTACTS);
        assert_eq!(
            candidates.push_unique(DVec2::new(-1.0, 0.0), EPS),
            Err(CollisionError::CapacityOverflow {
                capacity: MAX_CONTACTS
            })
        );
    }
}
