use crate::linear_math::{Pose2, aabb::Aabb2};
use glam::DVec2;

/// A circle centred on its body's origin.
///
/// Only bounds maintenance is native for circles; no narrow-phase algorithm
/// pairs them with anything yet.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleShape {
    radius: f64,
    world_aabb: Aabb2,
    /// Inverse moment of inertia, see `RectShape::rotational_inertia_reciprocal`
    pub rotational_inertia_reciprocal: f64,
}

impl CircleShape {
    pub const fn new(radius: f64) -> Self {
        Self {
            radius,
            world_aabb: Aabb2::EMPTY,
            rotational_inertia_reciprocal: 0.0,
        }
    }

    #[inline]
    pub const fn world_aabb(&self) -> &Aabb2 {
        &self.world_aabb
    }

    pub fn update_world_bounds(&mut self, pose: &Pose2) {
        let r = DVec2::splat(self.radius);
        self.world_aabb = Aabb2::from_points([pose.position - r, pose.position + r]);
    }

    pub fn calculate_local_inertia(&self, mass: f64) -> f64 {
        0.5 * mass * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_ignore_rotation() {
        let mut circle = CircleShape::new(1.5);
        circle.update_world_bounds(&Pose2::new(DVec2::new(2.0, -1.0), 1.2));
        assert_eq!(*circle.world_aabb(), Aabb2::new(0.5, 3.5, -2.5, 0.5));
        assert_eq!(circle.calculate_local_inertia(2.0), 2.25);
    }
}
