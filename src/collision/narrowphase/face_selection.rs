use super::{clip_test::CandidatePoints, contact_manifold::MAX_CONTACTS};
use crate::linear_math::{Pose2, aabb::Aabb2, is_near_equal, scalar_cross};
use arrayvec::ArrayVec;
use glam::DVec2;
use log::trace;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum CollisionFace {
    Left,
    Right,
    Bottom,
    Top,
}

impl CollisionFace {
    /// Evaluation order; the first of equally good faces wins
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Bottom, Self::Top];

    /// Outward normal in the owning body's frame
    #[inline]
    pub const fn normal(self) -> DVec2 {
        match self {
            Self::Left => DVec2::NEG_X,
            Self::Right => DVec2::X,
            Self::Bottom => DVec2::NEG_Y,
            Self::Top => DVec2::Y,
        }
    }

    /// Unsigned distance from `p` to the line through this face of `aabb`
    #[inline]
    pub fn distance(self, aabb: &Aabb2, p: DVec2) -> f64 {
        match self {
            Self::Left => (p.x - aabb.left).abs(),
            Self::Right => (aabb.right - p.x).abs(),
            Self::Bottom => (p.y - aabb.bottom).abs(),
            Self::Top => (aabb.top - p.y).abs(),
        }
    }

    #[inline]
    pub fn contains(self, aabb: &Aabb2, p: DVec2, eps: f64) -> bool {
        match self {
            Self::Left => is_near_equal(p.x, aabb.left, eps),
            Self::Right => is_near_equal(p.x, aabb.right, eps),
            Self::Bottom => is_near_equal(p.y, aabb.bottom, eps),
            Self::Top => is_near_equal(p.y, aabb.top, eps),
        }
    }
}

/// What face selection needs to know about one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactBody {
    /// The frame `aabb` is expressed in
    pub frame: Pose2,
    pub aabb: Aabb2,
    pub mass: f64,
    /// Inverse inertia, divided into the angular term; see
    /// `RectShape::rotational_inertia_reciprocal`
    pub rotational_inertia_reciprocal: f64,
}

impl ContactBody {
    /// `dot((r x n) x r, n) / I` for the lever arm `r` from this body's origin
    #[inline]
    fn angular_term(&self, contact: DVec2, normal: DVec2) -> f64 {
        let r = contact - self.frame.position;
        scalar_cross(r.perp_dot(normal), r).dot(normal) / self.rotational_inertia_reciprocal
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurvivingContact {
    /// World space
    pub position: DVec2,
    pub k_factor: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceSelection {
    /// The second body owns the collision face
    pub is_swapped: bool,
    pub face: CollisionFace,
    /// World space, from the reference body toward the incident body
    pub normal: DVec2,
    /// Mean distance of the surviving contacts to the collision face
    pub depth: f64,
    pub contacts: ArrayVec<SurvivingContact, MAX_CONTACTS>,
}

/// Best face of `body` for the candidates, already in its frame, and the
/// summed distance of all candidates to it
fn best_face(body: &ContactBody, points: &[DVec2]) -> (CollisionFace, f64) {
    let mut sums = [0.0; 4];
    for &p in points {
        for (sum, face) in sums.iter_mut().zip(CollisionFace::ALL) {
            *sum += face.distance(&body.aabb, p);
        }
    }

    let mut best = (CollisionFace::Left, f64::INFINITY);
    for (sum, face) in sums.into_iter().zip(CollisionFace::ALL) {
        if sum < best.1 {
            best = (face, sum);
        }
    }

    best
}

/// Picks the collision face among the 8 faces of both bodies.
///
/// `candidates` are in `bodies[0]`'s frame. The face whose line has the least
/// summed distance to all candidates wins, and its body becomes the reference
/// body; a tie between bodies goes to `bodies[0]`. Candidates lying on the
/// winning face are dropped, the rest are moved to world space and get their
/// k-factor.
pub fn select_collision_face(
    candidates: &CandidatePoints,
    bodies: [&ContactBody; 2],
    eps: f64,
) -> FaceSelection {
    // The same candidates seen from either body
    let conts: [ArrayVec<DVec2, MAX_CONTACTS>; 2] = [
        candidates.as_slice().iter().copied().collect(),
        candidates
            .as_slice()
            .iter()
            .map(|&p| bodies[1].frame.relative_point(&bodies[0].frame, p))
            .collect(),
    ];

    let hypotheses = [
        best_face(bodies[0], &conts[0]),
        best_face(bodies[1], &conts[1]),
    ];

    let k = if hypotheses[0].1 <= hypotheses[1].1 { 0 } else { 1 };
    let (face, summed_distance) = hypotheses[k];
    let reference = bodies[k];
    let incident = bodies[1 - k];

    let normal = reference.frame.transform_vector(face.normal());
    let inv_masses = 1.0 / reference.mass + 1.0 / incident.mass;

    let mut depth_sum = 0.0;
    let mut contacts = ArrayVec::new();
    for &p in conts[k]
        .iter()
        .filter(|&&p| !face.contains(&reference.aabb, p, eps))
    {
        depth_sum += face.distance(&reference.aabb, p);

        let position = reference.frame.transform_point(p);
        let k_factor = inv_masses
            + reference.angular_term(position, normal)
            + incident.angular_term(position, normal);

        contacts.push(SurvivingContact { position, k_factor });
    }

    let depth = if contacts.is_empty() {
        0.0
    } else {
        depth_sum / contacts.len() as f64
    };

    trace!(
        "face {face:?} of body {k} (sums {:.6} / {:.6}), {} of {} candidates kept, summed distance {summed_distance:.6}",
        hypotheses[0].1,
        hypotheses[1].1,
        contacts.len(),
        candidates.len(),
    );

    FaceSelection {
        is_swapped: k == 1,
        face,
        normal,
        depth,
        contacts,
    }
}
