//! Input contract between a window and the camera.
//!
//! # Invariants
//! - Nothing here depends on a windowing crate; apps translate their events into
//!   [`Action`]s or [`InputState`] updates.
//! - Pointer and scroll actions are applied once, in arrival order.
//! - Movement is sampled once per frame from the held-key set.

pub mod action;
pub mod cursor;
pub mod script;
pub mod state;

pub use action::{Action, apply_all};
pub use cursor::VirtualCursor;
pub use script::{InputError, Script, load_script, parse_script};
pub use state::InputState;

pub fn crate_info() -> &'static str {
    "freelook-input v0.1.0"
}
