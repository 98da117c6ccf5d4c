use super::{contact_point::ContactPoint, face_selection::FaceSelection};
use arrayvec::ArrayVec;
use glam::DVec2;
use std::sync::{Mutex, PoisonError};

/// Most points a rectangle pair can hand to the solver, with headroom.
/// A convex quadrilateral clip produces at most 8.
pub const MAX_CONTACTS: usize = 16;

/// Receives the manifolds produced by narrow phase.
///
/// Detection assumes exclusive access for the duration of one call. Workers
/// testing pairs in parallel either own a `Vec` each and merge afterwards or
/// share a `Mutex`.
pub trait ManifoldSink {
    fn add_manifold(&mut self, manifold: ContactManifold);
}

impl ManifoldSink for Vec<ContactManifold> {
    #[inline]
    fn add_manifold(&mut self, manifold: ContactManifold) {
        self.push(manifold);
    }
}

impl ManifoldSink for &Mutex<Vec<ContactManifold>> {
    fn add_manifold(&mut self, manifold: ContactManifold) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(manifold);
    }
}

/// Contacts of one colliding pair for one step.
///
/// The impulse accumulators belong to the manifold as a whole: the solver
/// spends a single budget across every point on the collision face.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactManifold {
    /// The reference body is the second body passed to detection
    pub is_swapped: bool,
    pub normal: DVec2,
    pub depth: f64,
    pub points: ArrayVec<ContactPoint, MAX_CONTACTS>,
    pub accumulated_impulse: DVec2,
    pub accumulated_split_impulse: DVec2,
}

impl ContactManifold {
    pub fn new(selection: &FaceSelection) -> Self {
        let weight = selection.contacts.len();
        let points = selection
            .contacts
            .iter()
            .map(|contact| {
                ContactPoint::new(
                    contact.position,
                    selection.normal,
                    selection.depth,
                    contact.k_factor,
                    weight,
                )
            })
            .collect();

        Self {
            is_swapped: selection.is_swapped,
            normal: selection.normal,
            depth: selection.depth,
            points,
            accumulated_impulse: DVec2::ZERO,
            accumulated_split_impulse: DVec2::ZERO,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The normal oriented from the first body passed to detection toward the second
    #[inline]
    pub fn normal_toward_second(&self) -> DVec2 {
        if self.is_swapped {
            -self.normal
        } else {
            self.normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::narrowphase::face_selection::{CollisionFace, SurvivingContact};

    fn selection(is_swapped: bool) -> FaceSelection {
        let mut contacts = ArrayVec::new();
        contacts.push(SurvivingContact {
            position: DVec2::new(1.0, 0.0),
            k_factor: 2.0,
        });
        contacts.push(SurvivingContact {
            position: DVec2::new(1.0, 1.0),
            k_factor: 3.0,
        });

        FaceSelection {
            is_swapped,
            face: CollisionFace::Right,
            normal: DVec2::X,
            depth: 0.25,
            contacts,
        }
    }

    #[test]
    fn points_share_manifold_data() {
        let manifold = ContactManifold::new(&selection(false));
        assert_eq!(manifold.len(), 2);
        assert_eq!(manifold.accumulated_impulse, DVec2::ZERO);
        assert_eq!(manifold.accumulated_split_impulse, DVec2::ZERO);

        for point in &manifold.points {
            assert_eq!(point.normal, manifold.normal);
            assert_eq!(point.depth, 0.25);
            assert_eq!(point.weight, 2);
        }
        assert_eq!(manifold.points[1].k_factor, 3.0);
    }

    #[test]
    fn normal_toward_second_respects_swap() {
        assert_eq!(ContactManifold::new(&selection(false)).normal_toward_second(), DVec2::X);
        assert_eq!(ContactManifold::new(&selection(true)).normal_toward_second(), -DVec2::X);
    }

    #[test]
    fn mutex_sink_appends() {
        let shared = Mutex::new(Vec::<ContactManifold>::new());
        let mut sink = &shared;
        sink.add_manifold(ContactManifold::new(&selection(false)));
        sink.add_manifold(ContactManifold::new(&selection(true)));
        assert_eq!(shared.lock().unwrap().len(), 2);
    }
}
