mod color;
mod component;
mod config;
mod graph;
mod pulse;
mod render;
mod state;

pub use component::CircuitCanvas;
