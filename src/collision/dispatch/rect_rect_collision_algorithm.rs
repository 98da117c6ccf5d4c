use super::collision_algorithm::CollisionAlgorithm;
use crate::{
    collision::{
        narrowphase::{
            clip_test::{CandidatePoints, clip_test},
            contact_manifold::{ContactManifold, ManifoldSink},
            face_selection::{ContactBody, select_collision_face},
        },
        shapes::{collision_shape::CollisionShapes, rect_shape::RectShape},
    },
    config::DetectorConfig,
    dynamics::rigid_body::{BodyState, RigidBody},
    error::{CollisionError, CollisionResult},
};
use log::trace;

/*
    Rectangle against rectangle, using a single clipping pass both to decide
    overlap and to find the contact candidates:

    1. Clip the edges of body 1 against body 0's box (Liang–Barsky) in body 0's
       frame, and add the corners of body 0 that lie inside body 1. These are
       the vertices of the overlap polygon. None means no overlap.
    2. Sum the distances of all candidates to each of the 8 faces of the two
       bodies. The face with the least sum is the collision face; its body is
       the reference body and the other the incident body.
    3. Drop the candidates lying on the collision face, they carry no torque.
       The rest become the contacts.

    This is discrete: it assumes the penetration is still shallow when called.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct RectRectCollisionAlgorithm {
    config: DetectorConfig,
}

impl RectRectCollisionAlgorithm {
    pub const fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Narrow phase on explicit physical parameters, independent of how the
    /// caller stores its bodies.
    pub fn collide_rects<S: ManifoldSink>(
        &self,
        state0: &BodyState,
        rect0: &RectShape,
        state1: &BodyState,
        rect1: &RectShape,
        sink: &mut S,
    ) -> CollisionResult<bool> {
        if self.config.validate_inputs {
            state0.validate()?;
            rect0.validate()?;
            state1.validate()?;
            rect1.validate()?;
        }

        let eps = self.config.near_equal_epsilon;

        let frame0 = rect0.collision_frame(&state0.pose);
        let frame1 = rect1.collision_frame(&state1.pose);
        let aabb0 = rect0.local_aabb();
        let aabb1 = rect1.local_aabb();
        let corners0 = rect0.local_corners();

        let corners1_in_0 = rect1
            .local_corners()
            .map(|corner| frame0.relative_point(&frame1, corner));
        let corners0_in_1 = corners0.map(|corner| frame1.relative_point(&frame0, corner));

        let mut candidates = CandidatePoints::new();
        let edges_overlap = clip_test(&aabb0, &corners1_in_0, eps, &mut candidates)?;

        // Corners of body 0 swallowed by body 1; when body 0 is engulfed
        // entirely these are the only candidates
        let mut corner_inside = false;
        for (corner, corner_in_1) in corners0.into_iter().zip(corners0_in_1) {
            if aabb1.contains(corner_in_1, self.config.containment_tolerance) {
                candidates.push_unique(corner, eps)?;
                corner_inside = true;
            }
        }

        if !edges_overlap && !corner_inside {
            return Ok(false);
        }

        let body0 = ContactBody {
            frame: frame0,
            aabb: aabb0,
            mass: state0.mass,
            rotational_inertia_reciprocal: rect0.rotational_inertia_reciprocal,
        };
        let body1 = ContactBody {
            frame: frame1,
            aabb: aabb1,
            mass: state1.mass,
            rotational_inertia_reciprocal: rect1.rotational_inertia_reciprocal,
        };

        let selection = select_collision_face(&candidates, [&body0, &body1], eps);
        let manifold = ContactManifold::new(&selection);

        trace!(
            "rect/rect manifold: normal {}, depth {}, {} points",
            manifold.normal,
            manifold.depth,
            manifold.len()
        );

        sink.add_manifold(manifold);
        Ok(true)
    }
}

impl CollisionAlgorithm for RectRectCollisionAlgorithm {
    fn process_collision<S: ManifoldSink>(
        self,
        body0: &RigidBody,
        body1: &RigidBody,
        sink: &mut S,
    ) -> CollisionResult<bool> {
        let (CollisionShapes::Rect(rect0), CollisionShapes::Rect(rect1)) =
            (body0.get_collision_shape(), body1.get_collision_shape())
        else {
            return Err(CollisionError::UnsupportedShapePair {
                shape0: body0.get_collision_shape().get_shape_type(),
                shape1: body1.get_collision_shape().get_shape_type(),
            });
        };

        self.collide_rects(&body0.state, rect0, &body1.state, rect1, sink)
    }
}
