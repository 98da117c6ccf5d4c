pub mod collision_algorithm;
pub mod collision_dispatcher;
pub mod rect_rect_collision_algorithm;
