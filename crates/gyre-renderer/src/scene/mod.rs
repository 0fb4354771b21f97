//! Gyroid scene rendering.
//!
//! A single full-screen pass ray-marches a gyroid-carved sphere in the
//! fragment shader. CPU-side animation state lives in [`SceneRenderer`];
//! the wgpu plumbing lives in [`ScenePipeline`].

mod helpers;
mod pipeline;
mod renderer;

pub use helpers::*;
pub use pipeline::*;
pub use renderer::*;
