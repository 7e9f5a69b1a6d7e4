/// A single acquired drawable.
///
/// Short-lived and single-use: record into `encoder`, then hand the whole
/// frame back to [`Gpu::submit`](super::Gpu::submit). Holding the surface
/// texture blocks acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
