//! WebGPU rendering module
//!
//! One colored-triangle pipeline; the scene is retessellated and the vertex
//! buffer rebuilt every frame (clear-then-draw, nothing accumulates).

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
