pub mod layer_switcher;
pub mod map_view;
