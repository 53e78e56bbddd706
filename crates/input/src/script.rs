//! Scripted input: a YAML list of actions replayed against a fresh camera.
//!
//! ```yaml
//! start:
//!   position: [0.0, 0.0, 3.0]
//! settings:
//!   sensitivity: 0.1
//! steps:
//!   - action: pointer
//!     x: 400.0
//!     y: 300.0
//!   - action: move
//!     direction: forward
//!     seconds: 1.0
//!   - action: scroll
//!     y: 5.0
//!   - action: reset_pointer
//! ```

use crate::action::Action;
use freelook_camera::{CameraError, CameraSettings, FreeLookCamera, StartPose};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading input scripts.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("script parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("script has no steps")]
    Empty,
    #[error("script settings rejected: {0}")]
    Settings(#[from] CameraError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub start: StartPose,
    #[serde(default)]
    pub settings: CameraSettings,
    pub steps: Vec<Action>,
}

impl Script {
    /// Fresh camera at the script's start pose.
    pub fn camera(&self) -> FreeLookCamera {
        FreeLookCamera::from_pose(&self.start, self.settings)
    }

    /// Replay every step and return the final camera.
    pub fn run(&self) -> FreeLookCamera {
        let mut camera = self.camera();
        let applied = crate::action::apply_all(&self.steps, &mut camera);
        tracing::debug!("replayed {applied} steps");
        camera
    }
}

pub fn parse_script(yaml: &str) -> Result<Script, InputError> {
    let script: Script = serde_yaml::from_str(yaml)?;
    if script.steps.is_empty() {
        return Err(InputError::Empty);
    }
    script.settings.validate()?;
    Ok(script)
}

pub fn load_script(path: impl AsRef<Path>) -> Result<Script, InputError> {
    let data = std::fs::read_to_string(path.as_ref())?;
    parse_script(&data)
}
