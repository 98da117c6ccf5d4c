//! Narrow-phase collision detection and contact generation for oriented
//! rectangles in a 2D rigid-body engine.
//!
//! Bodies that passed the broad phase go through [`CollisionDispatcher::process_pair`]
//! (or [`RectRectCollisionAlgorithm::collide_rects`] directly), which appends
//! one [`ContactManifold`] per colliding pair to a [`ManifoldSink`] for the
//! solver to consume.

pub mod collision;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod linear_math;
pub mod logging;

pub use collision::{
    dispatch::{
        collision_algorithm::CollisionAlgorithm, collision_dispatcher::CollisionDispatcher,
        rect_rect_collision_algorithm::RectRectCollisionAlgorithm,
    },
    narrowphase::{
        contact_manifold::{ContactManifold, MAX_CONTACTS, ManifoldSink},
        contact_point::ContactPoint,
    },
    shapes::{
        circle_shape::CircleShape,
        collision_shape::{CollisionShapes, ShapeKind},
        rect_shape::RectShape,
    },
};
pub use config::{DetectorConfig, UnsupportedPairPolicy};
pub use dynamics::rigid_body::{BodyState, RigidBody};
pub use error::{CollisionError, CollisionResult};
pub use glam;
pub use linear_math::{Pose2, aabb::Aabb2};
