pub mod clip_test;
pub mod contact_manifold;
pub mod contact_point;
pub mod face_selection;
