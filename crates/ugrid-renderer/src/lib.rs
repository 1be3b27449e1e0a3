// ABOUTME: GPU rendering for the uniform grid demo.
// ABOUTME: Uses wgpu to draw filled, rounded rectangles over a cleared surface.

mod gpu;
mod rect_pipeline;
pub mod renderer;

pub use rect_pipeline::RectInstance;
pub use renderer::{RenderError, Renderer};
