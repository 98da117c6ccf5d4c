use glam::DVec2;

/// An axis-aligned box stored as its four edge coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for Aabb2 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb2 {
    /// Contains nothing; expanding it by a point gives that point's box
    pub const EMPTY: Self = Self {
        left: f64::INFINITY,
        right: f64::NEG_INFINITY,
        bottom: f64::INFINITY,
        top: f64::NEG_INFINITY,
    };

    #[inline]
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn from_points<I: IntoIterator<Item = DVec2>>(points: I) -> Self {
        let mut aabb = Self::EMPTY;
        for p in points {
            aabb.expand_to(p);
        }
        aabb
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.bottom > self.top
    }

    #[inline]
    pub fn expand_to(&mut self, p: DVec2) {
        self.left = self.left.min(p.x);
        self.right = self.right.max(p.x);
        self.bottom = self.bottom.min(p.y);
        self.top = self.top.max(p.y);
    }

    #[inline]
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.left, self.bottom)
    }

    #[inline]
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.right, self.top)
    }

    /// Boundary inclusive; `eps` grows the box on every side
    #[inline]
    pub fn contains(&self, p: DVec2, eps: f64) -> bool {
        p.x >= self.left - eps
            && p.x <= self.right + eps
            && p.y >= self.bottom - eps
            && p.y <= self.top + eps
    }

    /// Touching boxes count as overlapping
    #[inline]
    pub fn intersects(&self, rhs: &Self) -> bool {
        self.min().cmple(rhs.max()).all() && self.max().cmpge(rhs.min()).all()
    }
}
