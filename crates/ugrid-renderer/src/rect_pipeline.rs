// ABOUTME: Rounded rectangle pipeline for grid cells and grid lines.
// ABOUTME: Corners are cut in the fragment shader with a signed distance test.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Filled rectangle in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    pub color: [f32; 4],
}

impl RectInstance {
    /// Axis-aligned line drawn as a thin rectangle centered on the segment
    pub fn line(x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: [f32; 4]) -> Self {
        let half = thickness / 2.0;
        Self {
            x: x0.min(x1) - half,
            y: y0.min(y1) - half,
            width: (x1 - x0).abs() + thickness,
            height: (y1 - y0).abs() + thickness,
            radius: 0.0,
            color,
        }
    }

    fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct RectVertex {
    pub position: [f32; 2],
    /// Offset from the rectangle center
    pub local: [f32; 2],
    pub half_size: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

impl RectVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32,
        4 => Float32x4,
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct Uniforms {
    screen_size: [f32; 2],
    _padding: [f32; 2],
}

const INITIAL_RECTS: usize = 1024;

pub struct RectPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    max_rects: usize,
    num_indices: u32,
}

impl RectPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Rect Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../../shaders/rect.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rect Uniform Buffer"),
            contents: bytemuck::cast_slice(&[Uniforms {
                screen_size: [800.0, 480.0],
                _padding: [0.0, 0.0],
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Rect Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Rect Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Rect Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Rect Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[RectVertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let (vertex_buffer, index_buffer) = Self::create_buffers(device, INITIAL_RECTS);

        Self {
            pipeline,
            bind_group,
            uniform_buffer,
            vertex_buffer,
            index_buffer,
            max_rects: INITIAL_RECTS,
            num_indices: 0,
        }
    }

    fn create_buffers(device: &wgpu::Device, max_rects: usize) -> (wgpu::Buffer, wgpu::Buffer) {
        // Each rect = 2 triangles = 4 vertices, 6 indices
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Rect Vertex Buffer"),
            size: (max_rects * 4 * std::mem::size_of::<RectVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Rect Index Buffer"),
            size: (max_rects * 6 * std::mem::size_of::<u32>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        (vertex_buffer, index_buffer)
    }

    pub fn update_screen_size(&self, queue: &wgpu::Queue, width: f32, height: f32) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[Uniforms {
                screen_size: [width, height],
                _padding: [0.0, 0.0],
            }]),
        );
    }

    /// Upload rectangles for the next frame, growing the buffers if needed
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, rects: &[RectInstance]) {
        if rects.len() > self.max_rects {
            let max_rects = rects.len().next_power_of_two();
            tracing::debug!("Growing rect buffers to {} rects", max_rects);
            let (vertex_buffer, index_buffer) = Self::create_buffers(device, max_rects);
            self.vertex_buffer = vertex_buffer;
            self.index_buffer = index_buffer;
            self.max_rects = max_rects;
        }

        let mut vertices = Vec::with_capacity(rects.len() * 4);
        let mut indices = Vec::with_capacity(rects.len() * 6);

        for rect in rects.iter().filter(|r| !r.is_empty()) {
            let half_w = rect.width / 2.0;
            let half_h = rect.height / 2.0;
            let radius = rect.radius.clamp(0.0, half_w.min(half_h));
            let corners = [
                (rect.x, rect.y, -half_w, -half_h),
                (rect.x, rect.y + rect.height, -half_w, half_h),
                (rect.x + rect.width, rect.y + rect.height, half_w, half_h),
                (rect.x + rect.width, rect.y, half_w, -half_h),
            ];

            let base = vertices.len() as u32;
            for (x, y, lx, ly) in corners {
                vertices.push(RectVertex {
                    position: [x, y],
                    local: [lx, ly],
                    half_size: [half_w, half_h],
                    radius,
                    color: rect.color,
                });
            }

            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
            queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&indices));
        }

        self.num_indices = indices.len() as u32;
    }

    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.num_indices == 0 {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.num_indices, 0, 0..1);
    }
}
