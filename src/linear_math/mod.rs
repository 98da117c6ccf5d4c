use glam::DVec2;

pub mod aabb;
pub mod line_clip;

pub trait Vec2Ext {
    /// Rotates counter-clockwise by `angle` radians
    fn rotated(self, angle: f64) -> Self;
    fn near_eq(self, other: Self, eps: f64) -> bool;
}

impl Vec2Ext for DVec2 {
    #[inline]
    fn rotated(self, angle: f64) -> Self {
        DVec2::from_angle(angle).rotate(self)
    }

    #[inline]
    fn near_eq(self, other: Self, eps: f64) -> bool {
        is_near_equal(self.x, other.x, eps) && is_near_equal(self.y, other.y, eps)
    }
}

#[inline]
pub fn is_near_equal(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Cross product of a scalar (an out-of-plane vector) with an in-plane vector
#[inline]
pub fn scalar_cross(s: f64, v: DVec2) -> DVec2 {
    s * v.perp()
}

/// Position and orientation of a rigid frame in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2 {
    pub position: DVec2,
    /// Radians, counter-clockwise
    pub rotation: f64,
}

impl Pose2 {
    #[inline]
    pub const fn new(position: DVec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    /// The same frame turned by `angle` about its own origin
    #[inline]
    pub fn rotated_by(&self, angle: f64) -> Self {
        Self {
            position: self.position,
            rotation: self.rotation + angle,
        }
    }

    #[inline]
    pub fn transform_point(&self, local: DVec2) -> DVec2 {
        local.rotated(self.rotation) + self.position
    }

    #[inline]
    pub fn transform_vector(&self, local: DVec2) -> DVec2 {
        local.rotated(self.rotation)
    }

    #[inline]
    pub fn inv_x_form(&self, world: DVec2) -> DVec2 {
        (world - self.position).rotated(-self.rotation)
    }

    /// Re-expresses `point`, given in `other`'s local frame, in this frame
    #[inline]
    pub fn relative_point(&self, other: &Self, point: DVec2) -> DVec2 {
        self.inv_x_form(other.transform_point(point))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn rotated_quarter_turn() {
        let v = DVec2::X.rotated(FRAC_PI_2);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn scalar_cross_matches_3d_cross() {
        // (0, 0, 2) x (3, 4, 0) = (-8, 6, 0)
        assert_eq!(scalar_cross(2.0, DVec2::new(3.0, 4.0)), DVec2::new(-8.0, 6.0));
    }

    #[test]
    fn pose_round_trip() {
        let pose = Pose2::new(DVec2::new(3.0, -2.0), 0.7);
        let local = DVec2::new(0.25, 1.5);
        let back = pose.inv_x_form(pose.transform_point(local));
        assert_abs_diff_eq!(back.x, local.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, local.y, epsilon = 1e-12);
    }

    #[test]
    fn relative_point_between_frames() {
        let a = Pose2::new(DVec2::ZERO, 0.0);
        let b = Pose2::new(DVec2::new(2.0, 0.0), FRAC_PI_2);

        // b's local +x axis points along world +y
        let p = a.relative_point(&b, DVec2::new(1.0, 0.0));
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);

        let q = b.relative_point(&a, p);
        assert_abs_diff_eq!(q.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn near_eq_is_per_component() {
        let a = DVec2::new(1.0, 1.0);
        assert!(a.near_eq(DVec2::new(1.0 + 1e-10, 1.0), 1e-9));
        assert!(!a.near_eq(DVec2::new(1.0, 1.0 + 1e-6), 1e-9));
        assert!(!Pose2::new(DVec2::new(f64::NAN, 0.0), 0.0).is_finite());
    }
}
