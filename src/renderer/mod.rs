//! WebGPU rendering module
//!
//! The scene is rebuilt on the CPU every frame as a flat colored triangle
//! list in board coordinates, then drawn in a single pass.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{StarField, build_scene};
pub use vertex::Vertex;
