//! Free-look camera: viewer position and orientation driven by raw input deltas.
//!
//! The camera is a plain value owned by the frame loop. Every update is an explicit
//! method call, so the whole component is testable without a window or GPU context.
//!
//! # Matrix convention
//! - Matrices are [`glam::Mat4`], column-major, right-handed.
//! - Eye space looks down -Z with +Y up.
//! - [`DepthRange::ZeroToOne`] (the default) targets wgpu/Vulkan clip space;
//!   [`DepthRange::NegativeOneToOne`] targets OpenGL.
//!
//! # Invariants
//! - Pitch stays within [-89, 89] degrees.
//! - Field of view stays within [1, 45] degrees.
//! - Yaw is never wrapped.
//! - The first pointer sample after construction or a reset never rotates the camera.

mod camera;
mod error;
mod settings;
mod state;

pub use camera::{Direction, FreeLookCamera};
pub use error::CameraError;
pub use settings::{CameraSettings, DepthRange, StartPose};
pub use state::{
    CameraState, DEFAULT_FOV, DEFAULT_PITCH, DEFAULT_POSITION, DEFAULT_YAW, MAX_FOV, MIN_FOV,
    PITCH_LIMIT, PointerState, WORLD_UP,
};

pub fn crate_info() -> &'static str {
    "freelook-camera v0.1.0"
}
