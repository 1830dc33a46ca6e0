pub mod display;
pub mod render;
pub mod view;
