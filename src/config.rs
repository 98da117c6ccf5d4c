#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum UnsupportedPairPolicy {
    /// Return `CollisionError::UnsupportedShapePair` to the caller
    #[default]
    Abort,
    /// Log a warning once per shape-kind pairing and skip the pair
    SkipWithDiagnostic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorConfig {
    /// Tolerance used to recognise clip endpoints as original vertices,
    /// to merge duplicate candidates and to prune points on the collision face.
    /// These three must agree or points get duplicated or lost.
    pub near_equal_epsilon: f64,
    /// Tolerance for the corner-in-box test, boundary inclusive
    pub containment_tolerance: f64,
    /// Reject non-finite poses and non-positive masses, inertias or extents
    pub validate_inputs: bool,
    pub unsupported_pair_policy: UnsupportedPairPolicy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl DetectorConfig {
    pub const DEFAULT: Self = Self {
        near_equal_epsilon: 1e-9,
        containment_tolerance: 0.0,
        validate_inputs: true,
        unsupported_pair_policy: UnsupportedPairPolicy::Abort,
    };
}
