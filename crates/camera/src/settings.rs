use crate::error::CameraError;
use crate::state::{DEFAULT_FOV, DEFAULT_PITCH, DEFAULT_POSITION, DEFAULT_YAW};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Clip-space depth mapping used by the projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthRange {
    /// Depth in [0, 1]: wgpu, Vulkan, Direct3D, Metal.
    #[default]
    ZeroToOne,
    /// Depth in [-1, 1]: OpenGL.
    NegativeOneToOne,
}

/// Tunable camera parameters.
///
/// Missing fields fall back to their defaults when deserialized, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Translation speed in world units per second.
    pub movement_speed: f32,
    /// Degrees of rotation per unit of cursor travel.
    pub sensitivity: f32,
    pub near: f32,
    pub far: f32,
    pub depth_range: DepthRange,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            sensitivity: 0.1,
            near: 0.1,
            far: 100.0,
            depth_range: DepthRange::ZeroToOne,
        }
    }
}

impl CameraSettings {
    /// Reject values that would poison camera state or every projection.
    pub fn validate(&self) -> Result<(), CameraError> {
        for (name, value) in [
            ("movement_speed", self.movement_speed),
            ("sensitivity", self.sensitivity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CameraError::InvalidSetting { name, value });
            }
        }
        check_clip_planes(self.near, self.far)
    }
}

/// `0 < near < far`, both finite.
pub(crate) fn check_clip_planes(near: f32, far: f32) -> Result<(), CameraError> {
    if near.is_finite() && far.is_finite() && near > 0.0 && far > near {
        Ok(())
    } else {
        Err(CameraError::InvalidClipPlanes { near, far })
    }
}

/// Initial camera placement. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
}

impl Default for StartPose {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            fov: DEFAULT_FOV,
        }
    }
}
