/// Errors from building camera matrices or checking camera settings.
///
/// Orientation and zoom updates saturate instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("degenerate aspect ratio: {0}")]
    DegenerateAspect(f32),
    #[error("invalid clip planes: near={near}, far={far}")]
    InvalidClipPlanes { near: f32, far: f32 },
    #[error("{name} must be finite and positive, got {value}")]
    InvalidSetting { name: &'static str, value: f32 },
}
