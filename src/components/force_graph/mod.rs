mod component;
mod lifecycle;
mod render;
mod state;

pub use component::ForceGraphCanvas;
