pub mod gpu;
pub mod perf;
pub mod pointer;
pub mod render_state;
pub mod scene;

pub use gpu::{GpuContext, RendererError, SceneUniforms};
pub use perf::FrameTimer;
pub use pointer::PointerTracker;
pub use render_state::RenderState;
pub use scene::{ScenePipeline, SceneRenderer};
