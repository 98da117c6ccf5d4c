use crate::{
    error::{CollisionError, CollisionResult},
    linear_math::{Pose2, Vec2Ext, aabb::Aabb2},
};
use glam::DVec2;

pub const BOTTOM_LEFT: usize = 0;
pub const BOTTOM_RIGHT: usize = 1;
pub const TOP_RIGHT: usize = 2;
pub const TOP_LEFT: usize = 3;

/// A rectangle centred on its body's origin.
///
/// The rotation given at construction is baked into [`RectShape::corners`].
/// Collision runs in the shape's own frame (body pose plus that rotation),
/// where the rectangle is the axis-aligned box [`RectShape::local_aabb`].
#[derive(Clone, Debug, PartialEq)]
pub struct RectShape {
    width: f64,
    height: f64,
    local_rotation: f64,
    /// bottom-left, bottom-right, top-right, top-left, in body space
    corners: [DVec2; 4],
    world_aabb: Aabb2,
    /// Inverse moment of inertia, stored by `RigidBody::new`. The k-factor
    /// divides its angular term by this value rather than multiplying, so a
    /// larger value stiffens the body's rotation despite what the name says.
    pub rotational_inertia_reciprocal: f64,
}

impl RectShape {
    pub fn new(width: f64, height: f64, rotation: f64) -> Self {
        let corners = Self::unrotated_corners(width * 0.5, height * 0.5)
            .map(|corner| corner.rotated(rotation));

        Self {
            width,
            height,
            local_rotation: rotation,
            corners,
            world_aabb: Aabb2::EMPTY,
            rotational_inertia_reciprocal: 0.0,
        }
    }

    #[inline]
    const fn unrotated_corners(half_width: f64, half_height: f64) -> [DVec2; 4] {
        [
            DVec2::new(-half_width, -half_height),
            DVec2::new(half_width, -half_height),
            DVec2::new(half_width, half_height),
            DVec2::new(-half_width, half_height),
        ]
    }

    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub const fn local_rotation(&self) -> f64 {
        self.local_rotation
    }

    #[inline]
    pub fn get_half_extents(&self) -> DVec2 {
        DVec2::new(self.width, self.height) * 0.5
    }

    /// Corners in body space, local rotation applied
    #[inline]
    pub const fn corners(&self) -> &[DVec2; 4] {
        &self.corners
    }

    /// Corners in the shape's collision frame
    #[inline]
    pub fn local_corners(&self) -> [DVec2; 4] {
        let half = self.get_half_extents();
        Self::unrotated_corners(half.x, half.y)
    }

    #[inline]
    pub fn local_aabb(&self) -> Aabb2 {
        let half = self.get_half_extents();
        Aabb2::new(-half.x, half.x, -half.y, half.y)
    }

    /// The frame collision runs in for a body at `pose`
    #[inline]
    pub fn collision_frame(&self, pose: &Pose2) -> Pose2 {
        pose.rotated_by(self.local_rotation)
    }

    #[inline]
    pub const fn world_aabb(&self) -> &Aabb2 {
        &self.world_aabb
    }

    pub fn update_world_bounds(&mut self, pose: &Pose2) {
        self.world_aabb.clear();
        for corner in self.corners {
            self.world_aabb.expand_to(pose.transform_point(corner));
        }
    }

    pub fn calculate_local_inertia(&self, mass: f64) -> f64 {
        mass / 12.0 * (self.width * self.width + self.height * self.height)
    }

    pub fn validate(&self) -> CollisionResult<()> {
        let extents_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if !extents_ok || !self.local_rotation.is_finite() {
            return Err(CollisionError::DegenerateInput(format!(
                "rectangle {}x{} rotated by {}",
                self.width, self.height, self.local_rotation
            )));
        }

        let inertia = self.rotational_inertia_reciprocal;
        if !(inertia.is_finite() && inertia > 0.0) {
            return Err(CollisionError::DegenerateInput(format!(
                "rectangle inertia {inertia}"
            )));
        }

        Ok(())
    }
}
