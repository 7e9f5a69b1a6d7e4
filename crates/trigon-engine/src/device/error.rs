use std::fmt;

/// Typed failure taxonomy for GPU setup and frame acquisition.
///
/// Each variant corresponds to one fallible acquisition step, so callers can
/// distinguish causes instead of matching on a printed message.
#[derive(Debug)]
pub enum RenderError {
    /// No suitable adapter or logical device could be acquired from the host.
    DeviceUnavailable(String),
    /// The window-backed surface could not be created or configured.
    SurfaceUnavailable(String),
    /// Shader source failed validation when compiled at runtime.
    ShaderCompile(String),
    /// The render pipeline could not be built.
    PipelineCreation(String),
    /// The next drawable could not be acquired from the surface.
    DrawableUnavailable(wgpu::SurfaceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceUnavailable(msg) => write!(f, "no suitable GPU device: {msg}"),
            Self::SurfaceUnavailable(msg) => write!(f, "surface unavailable: {msg}"),
            Self::ShaderCompile(msg) => write!(f, "shader compilation failed: {msg}"),
            Self::PipelineCreation(msg) => write!(f, "pipeline creation failed: {msg}"),
            Self::DrawableUnavailable(err) => write!(f, "could not acquire drawable: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DrawableUnavailable(err) => Some(err),
            _ => None,
        }
    }
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface should be reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

impl SurfaceErrorAction {
    /// Classifies a surface error without side effects.
    ///
    /// The caller owning the surface decides whether a `Reconfigured` result
    /// actually triggers a reconfigure (a zero-sized surface cannot be).
    pub fn classify(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigured,
            wgpu::SurfaceError::OutOfMemory => Self::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => Self::SkipFrame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn display_names_the_failing_step() {
        let msg = RenderError::DeviceUnavailable("no adapter".to_string()).to_string();
        assert!(msg.contains("GPU device"));
        assert!(msg.contains("no adapter"));
    }

    #[test]
    fn display_is_distinct_per_variant() {
        let messages = [
            RenderError::DeviceUnavailable("x".to_string()).to_string(),
            RenderError::SurfaceUnavailable("x".to_string()).to_string(),
            RenderError::ShaderCompile("x".to_string()).to_string(),
            RenderError::PipelineCreation("x".to_string()).to_string(),
            RenderError::DrawableUnavailable(wgpu::SurfaceError::Timeout).to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn drawable_error_preserves_source() {
        use std::error::Error;
        let err = RenderError::DrawableUnavailable(wgpu::SurfaceError::Timeout);
        assert!(err.source().is_some());
    }

    // ── classify ──────────────────────────────────────────────────────────

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(
            SurfaceErrorAction::classify(&wgpu::SurfaceError::Lost),
            SurfaceErrorAction::Reconfigured
        );
        assert_eq!(
            SurfaceErrorAction::classify(&wgpu::SurfaceError::Outdated),
            SurfaceErrorAction::Reconfigured
        );
    }

    #[test]
    fn timeout_and_other_skip_the_frame() {
        assert_eq!(
            SurfaceErrorAction::classify(&wgpu::SurfaceError::Timeout),
            SurfaceErrorAction::SkipFrame
        );
        assert_eq!(
            SurfaceErrorAction::classify(&wgpu::SurfaceError::Other),
            SurfaceErrorAction::SkipFrame
        );
    }

    #[test]
    fn out_of_memory_is_fatal() {
        assert_eq!(
            SurfaceErrorAction::classify(&wgpu::SurfaceError::OutOfMemory),
            SurfaceErrorAction::Fatal
        );
    }
}
