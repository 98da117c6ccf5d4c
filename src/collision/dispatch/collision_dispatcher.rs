use super::{
    collision_algorithm::CollisionAlgorithm,
    rect_rect_collision_algorithm::RectRectCollisionAlgorithm,
};
use crate::{
    collision::{
        narrowphase::contact_manifold::ManifoldSink, shapes::collision_shape::ShapeKind,
    },
    config::{DetectorConfig, UnsupportedPairPolicy},
    dynamics::rigid_body::RigidBody,
    error::{CollisionError, CollisionResult},
};
use ahash::AHashSet;
use log::{debug, warn};

pub(crate) enum Algorithms {
    RectRect(RectRectCollisionAlgorithm),
}

impl CollisionAlgorithm for Algorithms {
    fn process_collision<S: ManifoldSink>(
        self,
        body0: &RigidBody,
        body1: &RigidBody,
        sink: &mut S,
    ) -> CollisionResult<bool> {
        match self {
            Self::RectRect(alg) => alg.process_collision(body0, body1, sink),
        }
    }
}

/// Routes broad-phase pairs to the narrow-phase algorithm for their shapes.
#[derive(Debug, Default)]
pub struct CollisionDispatcher {
    pub config: DetectorConfig,
    /// Shape-kind pairings already reported as skipped
    reported_pairs: AHashSet<(ShapeKind, ShapeKind)>,
    skipped_pairs: usize,
}

impl CollisionDispatcher {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Pairs skipped under [`UnsupportedPairPolicy::SkipWithDiagnostic`]
    #[inline]
    pub const fn skipped_pairs(&self) -> usize {
        self.skipped_pairs
    }

    fn find_algorithm(&self, shape0: ShapeKind, shape1: ShapeKind) -> CollisionResult<Algorithms> {
        match (shape0, shape1) {
            (ShapeKind::Rect, ShapeKind::Rect) => Ok(Algorithms::RectRect(
                RectRectCollisionAlgorithm::new(self.config),
            )),
            _ => Err(CollisionError::UnsupportedShapePair { shape0, shape1 }),
        }
    }

    /// Narrow phase for one pair that already passed the broad phase.
    ///
    /// `body0` is preferred as the reference body when both faces are equally good.
    pub fn process_pair<S: ManifoldSink>(
        &mut self,
        body0: &RigidBody,
        body1: &RigidBody,
        sink: &mut S,
    ) -> CollisionResult<bool> {
        let shape0 = body0.get_collision_shape().get_shape_type();
        let shape1 = body1.get_collision_shape().get_shape_type();

        let algorithm = match self.find_algorithm(shape0, shape1) {
            Ok(algorithm) => algorithm,
            Err(err) => match self.config.unsupported_pair_policy {
                UnsupportedPairPolicy::Abort => {
                    debug!("{err}");
                    return Err(err);
                }
                UnsupportedPairPolicy::SkipWithDiagnostic => {
                    self.skipped_pairs += 1;
                    if self.reported_pairs.insert((shape0, shape1)) {
                        warn!("{err}, skipping all such pairs");
                    }
                    return Ok(false);
                }
            },
        };

        algorithm.process_collision(body0, body1, sink)
    }

    /// Runs [`Self::process_pair`] over broad-phase pairs of indices into
    /// `bodies`, stopping at the first error. Returns how many pairs collided.
    ///
    /// # Panics
    ///
    /// If a pair indexes past the end of `bodies`.
    pub fn dispatch_all_collision_pairs<S: ManifoldSink>(
        &mut self,
        bodies: &[RigidBody],
        pairs: &[(usize, usize)],
        sink: &mut S,
    ) -> CollisionResult<usize> {
        let mut num_colliding = 0;
        for &(i, j) in pairs {
            if self.process_pair(&bodies[i], &bodies[j], sink)? {
                num_colliding += 1;
            }
        }

        Ok(num_colliding)
    }
}
