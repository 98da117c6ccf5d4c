pub mod circle_shape;
pub mod collision_shape;
pub mod rect_shape;
