use glam::{Vec2, Vec3};
use serde::Serialize;

/// Pitch is clamped to +/- this many degrees to avoid flipping over the pole.
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_FOV: f32 = 1.0;
pub const MAX_FOV: f32 = 45.0;

pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
/// -90 degrees points the initial front vector down -Z.
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_FOV: f32 = MAX_FOV;

pub const WORLD_UP: Vec3 = Vec3::Y;

/// Whether a cursor baseline has been recorded yet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PointerState {
    /// No sample yet. The next sample becomes the baseline and rotates nothing.
    #[default]
    Uninitialized,
    /// The previous raw cursor sample.
    Tracking { last: Vec2 },
}

/// Position and orientation of the viewer. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    pub(crate) position: Vec3,
    pub(crate) yaw: f32,
    pub(crate) pitch: f32,
    pub(crate) fov: f32,
    pub(crate) pointer: PointerState,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION, DEFAULT_YAW, DEFAULT_PITCH, DEFAULT_FOV)
    }
}

impl CameraState {
    /// Pitch and field of view are clamped into range on entry.
    pub fn new(position: Vec3, yaw: f32, pitch: f32, fov: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: clamp_pitch(pitch),
            fov: clamp_fov(fov),
            pointer: PointerState::Uninitialized,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn world_up(&self) -> Vec3 {
        WORLD_UP
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Unit view direction from yaw and pitch.
    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(WORLD_UP).normalize()
    }

    /// Camera-local up, orthogonal to both front and right.
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.front())
    }
}

pub(crate) fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

pub(crate) fn clamp_fov(fov: f32) -> f32 {
    fov.clamp(MIN_FOV, MAX_FOV)
}
