use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactPoint {
    /// World space
    pub position: DVec2,
    /// World space, unit length, from the reference body toward the incident body
    pub normal: DVec2,
    pub depth: f64,
    /// Effective inverse mass along `normal` at this point
    pub k_factor: f64,
    /// Number of points in the owning manifold
    pub weight: usize,
}

impl ContactPoint {
    pub const fn new(position: DVec2, normal: DVec2, depth: f64, k_factor: f64, weight: usize) -> Self {
        Self {
            position,
            normal,
            depth,
            k_factor,
            weight,
        }
    }
}
