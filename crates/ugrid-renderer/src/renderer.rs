// ABOUTME: Main GPU renderer using wgpu.
// ABOUTME: Clears the surface and draws one batch of rounded rectangles per frame.

use std::sync::Arc;
use winit::window::Window;

use crate::gpu::GpuState;
use crate::rect_pipeline::{RectInstance, RectPipeline};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable graphics adapter found")]
    NoAdapter,

    #[error("Surface reports no usable texture format")]
    IncompatibleSurface,

    #[error("Failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

fn wgpu_color(color: [f32; 4]) -> wgpu::Color {
    let [r, g, b, a] = color.map(f64::from);
    wgpu::Color { r, g, b, a }
}

pub struct Renderer {
    gpu: GpuState,
    clear_color: wgpu::Color,
    rect_pipeline: RectPipeline,
}

impl Renderer {
    /// `clear_color` is the rgba background behind every frame
    pub async fn new(window: Arc<Window>, clear_color: [f32; 4]) -> Result<Self, RenderError> {
        let gpu = GpuState::new(window).await?;
        let clear_color = wgpu_color(clear_color);

        let rect_pipeline = RectPipeline::new(&gpu.device, gpu.config.format);
        let (width, height) = gpu.size;
        rect_pipeline.update_screen_size(&gpu.queue, width.max(1) as f32, height.max(1) as f32);

        Ok(Self {
            gpu,
            clear_color,
            rect_pipeline,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.gpu.resize(width, height);
        self.rect_pipeline
            .update_screen_size(&self.gpu.queue, width as f32, height as f32);
    }

    /// Draw `rects` in order over the clear color
    pub fn render(&mut self, rects: &[RectInstance]) -> Result<(), RenderError> {
        self.rect_pipeline
            .prepare(&self.gpu.device, &self.gpu.queue, rects);

        let output = self.gpu.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Grid Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.rect_pipeline.render(&mut render_pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_keeps_channels() {
        let color = wgpu_color([0.25, 0.5, 0.75, 1.0]);
        assert_eq!(color.r, 0.25);
        assert_eq!(color.g, 0.5);
        assert_eq!(color.b, 0.75);
        assert_eq!(color.a, 1.0);
    }
}
