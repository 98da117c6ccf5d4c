use crate::{
    collision::shapes::collision_shape::CollisionShapes,
    error::{CollisionError, CollisionResult},
    linear_math::Pose2,
};
use glam::DVec2;

/// The read-only slice of a body that narrow phase needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyState {
    pub pose: Pose2,
    pub mass: f64,
}

impl BodyState {
    #[inline]
    pub const fn new(position: DVec2, rotation: f64, mass: f64) -> Self {
        Self {
            pose: Pose2::new(position, rotation),
            mass,
        }
    }

    pub fn validate(&self) -> CollisionResult<()> {
        if !self.pose.is_finite() {
            return Err(CollisionError::DegenerateInput(format!(
                "non-finite pose {:?}",
                self.pose
            )));
        }

        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(CollisionError::DegenerateInput(format!(
                "mass {}",
                self.mass
            )));
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    pub state: BodyState,
    collision_shape: CollisionShapes,
}

impl RigidBody {
    /// Attaches `shape` to the body, filling its inertia slot for the body's
    /// mass and computing its initial world bounds.
    pub fn new(state: BodyState, shape: impl Into<CollisionShapes>) -> Self {
        let mut collision_shape = shape.into();
        collision_shape.attach_mass(state.mass);
        collision_shape.update_world_bounds(&state.pose);

        Self {
            state,
            collision_shape,
        }
    }

    #[inline]
    pub const fn get_collision_shape(&self) -> &CollisionShapes {
        &self.collision_shape
    }

    #[inline]
    pub const fn get_world_transform(&self) -> &Pose2 {
        &self.state.pose
    }

    #[inline]
    pub fn set_world_transform(&mut self, pose: Pose2) {
        self.state.pose = pose;
    }

    /// Refreshes the cached world AABB; call once per step before broad phase
    pub fn update_world_bounds(&mut self) {
        self.collision_shape.update_world_bounds(&self.state.pose);
    }
}
