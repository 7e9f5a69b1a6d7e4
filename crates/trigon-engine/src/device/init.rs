/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when
/// a concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Surface texture format to request.
    ///
    /// When the surface does not offer it, the first supported format is used
    /// instead (with a warning). Pipelines must be built against the format
    /// actually selected, never against this request.
    pub preferred_format: wgpu::TextureFormat,

    /// Present mode (swap behavior).
    ///
    /// FIFO is broadly supported and appropriate for a static scene.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability unless a feature is strictly necessary.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            preferred_format: wgpu::TextureFormat::Bgra8Unorm,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_surface() {
        let init = GpuInit::default();
        assert_eq!(init.preferred_format, wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(init.required_features, wgpu::Features::empty());
        assert_eq!(init.desired_maximum_frame_latency, 2);
        assert!(init.alpha_mode.is_none());
    }
}
