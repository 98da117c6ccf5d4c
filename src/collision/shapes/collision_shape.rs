use super::{circle_shape::CircleShape, rect_shape::RectShape};
use crate::linear_math::{Pose2, aabb::Aabb2};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Circle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CollisionShapes {
    Rect(RectShape),
    Circle(CircleShape),
}

impl CollisionShapes {
    #[inline]
    pub const fn get_shape_type(&self) -> ShapeKind {
        match self {
            Self::Rect(_) => ShapeKind::Rect,
            Self::Circle(_) => ShapeKind::Circle,
        }
    }

    #[inline]
    pub const fn world_aabb(&self) -> &Aabb2 {
        match self {
            Self::Rect(shape) => shape.world_aabb(),
            Self::Circle(shape) => shape.world_aabb(),
        }
    }

    pub fn update_world_bounds(&mut self, pose: &Pose2) {
        match self {
            Self::Rect(shape) => shape.update_world_bounds(pose),
            Self::Circle(shape) => shape.update_world_bounds(pose),
        }
    }

    #[inline]
    pub const fn rotational_inertia_reciprocal(&self) -> f64 {
        match self {
            Self::Rect(shape) => shape.rotational_inertia_reciprocal,
            Self::Circle(shape) => shape.rotational_inertia_reciprocal,
        }
    }

    /// Stores the inverse moment of inertia for `mass` in the shape's inertia slot
    pub fn attach_mass(&mut self, mass: f64) {
        match self {
            Self::Rect(shape) => {
                shape.rotational_inertia_reciprocal = 1.0 / shape.calculate_local_inertia(mass);
            }
            Self::Circle(shape) => {
                shape.rotational_inertia_reciprocal = 1.0 / shape.calculate_local_inertia(mass);
            }
        }
    }
}

impl From<RectShape> for CollisionShapes {
    #[inline]
    fn from(shape: RectShape) -> Self {
        Self::Rect(shape)
    }
}

impl From<CircleShape> for CollisionShapes {
    #[inline]
    fn from(shape: CircleShape) -> Self {
        Self::Circle(shape)
    }
}
