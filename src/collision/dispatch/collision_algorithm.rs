use crate::{
    collision::narrowphase::contact_manifold::ManifoldSink, dynamics::rigid_body::RigidBody,
    error::CollisionResult,
};

pub trait CollisionAlgorithm {
    /// Appends at most one manifold to `sink`; `Ok(false)` means the bodies do
    /// not overlap
    fn process_collision<S: ManifoldSink>(
        self,
        body0: &RigidBody,
        body1: &RigidBody,
        sink: &mut S,
    ) -> CollisionResult<bool>;
}
