use crate::config::DemoConfig;
use freelook_camera::{Direction, FreeLookCamera};
use freelook_input::{InputState, VirtualCursor, apply_all};
use freelook_render::{SpinningCube, Viewport};
use std::time::Instant;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Longest frame step fed to movement; a stalled frame must not teleport the camera.
pub const MAX_FRAME_SECONDS: f32 = 0.1;

/// Wheel pixels that count as one line of scroll.
const PIXELS_PER_LINE: f64 = 20.0;

/// What the window loop should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Exit,
}

/// Everything the demo mutates between frames. Owned by the event loop.
pub struct AppState {
    pub camera: FreeLookCamera,
    pub input: InputState,
    pub cursor: VirtualCursor,
    pub cube: SpinningCube,
    pub viewport: Viewport,
    pub show_hud: bool,
    pub focused: bool,
    pub last_frame_seconds: f32,
    started: Instant,
    last_frame: Instant,
}

impl AppState {
    pub fn new(config: &DemoConfig) -> Self {
        let now = Instant::now();
        Self {
            camera: FreeLookCamera::from_pose(&config.camera, config.settings),
            input: InputState::new(),
            cursor: VirtualCursor::centered(config.window.width, config.window.height),
            cube: SpinningCube::default(),
            viewport: Viewport::new(config.window.width, config.window.height),
            show_hud: true,
            focused: true,
            last_frame_seconds: 0.0,
            started: now,
            last_frame: now,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> KeyOutcome {
        if let Some(direction) = direction_for(key) {
            self.input.set_held(direction, pressed);
            return KeyOutcome::Continue;
        }
        if !pressed {
            return KeyOutcome::Continue;
        }
        match key {
            KeyCode::Escape => KeyOutcome::Exit,
            KeyCode::F1 => {
                self.show_hud = !self.show_hud;
                KeyOutcome::Continue
            }
            _ => KeyOutcome::Continue,
        }
    }

    /// Raw motion while the cursor is grabbed.
    pub fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        if !self.focused {
            return;
        }
        let position = self.cursor.accumulate(dx, dy);
        self.camera
            .apply_pointer(position.x as f32, position.y as f32);
    }

    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        self.camera.apply_scroll(scroll_lines(delta));
    }

    pub fn handle_focus(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.camera.reset_pointer();
        } else {
            self.input.release_all();
        }
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Advance to `now`: apply held movement keys for the elapsed frame time.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = now
            .saturating_duration_since(self.last_frame)
            .as_secs_f32()
            .min(MAX_FRAME_SECONDS);
        self.last_frame = now;
        self.last_frame_seconds = dt;
        self.update(dt);
        dt
    }

    pub fn update(&mut self, dt: f32) {
        let actions: Vec<_> = self.input.movement(dt).collect();
        apply_all(&actions, &mut self.camera);
    }

    /// Cube spin time, seconds since startup.
    pub fn elapsed_seconds(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started).as_secs_f32()
    }
}

pub fn direction_for(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::KeyW => Some(Direction::Forward),
        KeyCode::KeyS => Some(Direction::Backward),
        KeyCode::KeyA => Some(Direction::Left),
        KeyCode::KeyD => Some(Direction::Right),
        _ => None,
    }
}

/// Vertical wheel travel in lines. Horizontal scroll is dropped.
pub fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelook_camera::PointerState;
    use glam::Vec3;
    use std::time::Duration;
    use winit::dpi::PhysicalPosition;

    fn state() -> AppState {
        AppState::new(&DemoConfig::default())
    }

    #[test]
    fn wasd_maps_to_directions() {
        assert_eq!(direction_for(KeyCode::KeyW), Some(Direction::Forward));
        assert_eq!(direction_for(KeyCode::KeyS), Some(Direction::Backward));
        assert_eq!(direction_for(KeyCode::KeyA), Some(Direction::Left));
        assert_eq!(direction_for(KeyCode::KeyD), Some(Direction::Right));
        assert_eq!(direction_for(KeyCode::KeyQ), None);
    }

    #[test]
    fn held_forward_moves_for_frame_time() {
        let mut app = state();
        app.handle_key(KeyCode::KeyW, true);
        app.update(0.1);
        let p = app.camera.state().position();
        assert!((p - Vec3::new(0.0, 0.0, 2.75)).length() < 1e-5);

        app.handle_key(KeyCode::KeyW, false);
        app.update(0.1);
        assert_eq!(app.camera.state().position(), p);
    }

    #[test]
    fn tick_caps_long_frames() {
        let mut app = state();
        app.handle_key(KeyCode::KeyW, true);
        let dt = app.tick(app.last_frame + Duration::from_secs(5));
        assert_eq!(dt, MAX_FRAME_SECONDS);
        assert!((app.camera.state().position().z - 2.75).abs() < 1e-5);
    }

    #[test]
    fn escape_exits_and_f1_toggles_hud() {
        let mut app = state();
        assert_eq!(app.handle_key(KeyCode::Escape, false), KeyOutcome::Continue);
        assert_eq!(app.handle_key(KeyCode::Escape, true), KeyOutcome::Exit);
        app.handle_key(KeyCode::F1, true);
        assert!(!app.show_hud);
        app.handle_key(KeyCode::F1, false);
        assert!(!app.show_hud);
        app.handle_key(KeyCode::F1, true);
        assert!(app.show_hud);
    }

    #[test]
    fn first_motion_only_sets_baseline() {
        let mut app = state();
        app.handle_mouse_motion(10.0, 0.0);
        assert_eq!(app.camera.state().yaw(), -90.0);
        app.handle_mouse_motion(10.0, 0.0);
        assert!((app.camera.state().yaw() - -89.0).abs() < 1e-4);
    }

    #[test]
    fn mouse_down_pitches_down() {
        let mut app = state();
        app.handle_mouse_motion(0.0, 0.0);
        app.handle_mouse_motion(0.0, 50.0);
        assert!((app.camera.state().pitch() - -5.0).abs() < 1e-4);
    }

    #[test]
    fn focus_regain_rebaselines() {
        let mut app = state();
        app.handle_key(KeyCode::KeyD, true);
        app.handle_mouse_motion(0.0, 0.0);
        app.handle_focus(false);
        assert!(!app.input.is_held(Direction::Right));

        // Motion while unfocused is ignored.
        app.handle_mouse_motion(500.0, 0.0);
        assert_eq!(app.camera.state().yaw(), -90.0);

        app.handle_focus(true);
        assert_eq!(app.camera.state().pointer(), PointerState::Uninitialized);
        app.handle_mouse_motion(300.0, 0.0);
        assert_eq!(app.camera.state().yaw(), -90.0);
    }

    #[test]
    fn scroll_zooms() {
        let mut app = state();
        app.handle_scroll(MouseScrollDelta::LineDelta(3.0, 5.0));
        assert_eq!(app.camera.state().fov(), 40.0);
        app.handle_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -100.0)));
        assert_eq!(app.camera.state().fov(), 45.0);
    }

    #[test]
    fn resize_to_zero_is_clamped() {
        let mut app = state();
        app.handle_resize(0, 0);
        assert_eq!(app.viewport.width(), 1);
        assert_eq!(app.viewport.height(), 1);
        assert_eq!(app.viewport.aspect_ratio(), 1.0);
    }
}
