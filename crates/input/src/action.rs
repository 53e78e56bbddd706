use freelook_camera::{Direction, FreeLookCamera};
use serde::{Deserialize, Serialize};

/// A camera-level action produced by any input source (window, script, test).
///
/// The camera consumes actions, never raw window events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Translate for `seconds` of elapsed time.
    Move { direction: Direction, seconds: f32 },
    /// Absolute cursor sample in window coordinates.
    Pointer { x: f32, y: f32 },
    /// Vertical scroll delta; positive zooms in.
    Scroll { y: f32 },
    /// Drop the cursor baseline so the next sample cannot jump the view.
    ResetPointer,
}

impl Action {
    pub fn apply(&self, camera: &mut FreeLookCamera) {
        match *self {
            Action::Move { direction, seconds } => camera.apply_movement(direction, seconds),
            Action::Pointer { x, y } => camera.apply_pointer(x, y),
            Action::Scroll { y } => camera.apply_scroll(y),
            Action::ResetPointer => camera.reset_pointer(),
        }
    }
}

/// Apply actions in order and return how many were applied.
pub fn apply_all<'a>(
    actions: impl IntoIterator<Item = &'a Action>,
    camera: &mut FreeLookCamera,
) -> usize {
    let mut applied = 0;
    for action in actions {
        action.apply(camera);
        applied += 1;
    }
    applied
}
