use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::device::RenderError;
use crate::paint::ColorRgba;
use crate::render::{RenderCtx, RenderTarget};

/// Shader source, compiled by the driver when the renderer is created.
const SHADER_SRC: &str = include_str!("shaders/triangle.wgsl");

/// Clip-space vertex: one packed position, nothing else.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The demo triangle: apex up, base spanning the full clip-space width.
///
/// The vertex stage appends w = 1, so these coordinates land on screen as-is.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex {
        position: [0.0, 1.0, 0.0],
    },
    Vertex {
        position: [-1.0, -1.0, 0.0],
    },
    Vertex {
        position: [1.0, -1.0, 0.0],
    },
];

/// Renders the hard-coded triangle.
///
/// Owns the compiled pipeline and the immutable vertex buffer. Both are built
/// eagerly in [`new`](Self::new) so that setup failures surface as typed
/// errors before the first frame, not mid-draw.
pub struct TriangleRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl TriangleRenderer {
    /// Compiles the shader, builds the pipeline, and uploads the vertices.
    ///
    /// Shader validation and pipeline build failures are captured through
    /// error scopes and returned as values; without the scopes they would hit
    /// wgpu's uncaptured-error handler, which panics.
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self, RenderError> {
        let error_scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("trigon triangle shader"),
                source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
            });
        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(RenderError::ShaderCompile(err.to_string()));
        }

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("trigon triangle pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let error_scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("trigon triangle pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
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

                multiview_mask: None,
                cache: None,
            });
        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(RenderError::PipelineCreation(err.to_string()));
        }

        let vertex_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("trigon triangle vbo"),
                contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        Ok(Self {
            pipeline,
            vertex_buffer,
            vertex_count: TRIANGLE_VERTICES.len() as u32,
        })
    }

    /// Records the frame's single render pass.
    ///
    /// The pass clears the color attachment to `clear`, binds the pipeline
    /// and vertex buffer, and draws one non-indexed triangle list.
    pub fn render(&self, target: &mut RenderTarget<'_>, clear: ColorRgba) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear.r as f64,
                        g: clear.g as f64,
                        b: clear.b as f64,
                        a: clear.a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── vertex data ───────────────────────────────────────────────────────

    #[test]
    fn triangle_is_nine_floats() {
        let floats: &[f32] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(floats.len(), 9);
        assert_eq!(bytemuck::bytes_of(&TRIANGLE_VERTICES).len(), 36);
    }

    #[test]
    fn triangle_positions_are_fixed() {
        assert_eq!(TRIANGLE_VERTICES[0].position, [0.0, 1.0, 0.0]);
        assert_eq!(TRIANGLE_VERTICES[1].position, [-1.0, -1.0, 0.0]);
        assert_eq!(TRIANGLE_VERTICES[2].position, [1.0, -1.0, 0.0]);
    }

    #[test]
    fn triangle_lies_in_the_z_zero_plane() {
        for v in &TRIANGLE_VERTICES {
            assert_eq!(v.position[2], 0.0);
            assert!(v.position.iter().all(|c| c.is_finite()));
        }
    }

    // ── vertex layout ─────────────────────────────────────────────────────

    #[test]
    fn vertex_layout_is_one_packed_float3() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
    }

    // ── shader source ─────────────────────────────────────────────────────

    #[test]
    fn shader_declares_the_bound_entry_points() {
        // Entry point names are referenced by the pipeline descriptor; keep
        // the source and the bindings in sync.
        assert!(SHADER_SRC.contains("fn vs_main"));
        assert!(SHADER_SRC.contains("fn fs_main"));
    }

    #[test]
    fn fragment_color_is_the_fixed_accent() {
        assert!(SHADER_SRC.contains("vec4<f32>(0.75, 0.95, 0.35, 1.0)"));
    }
}
