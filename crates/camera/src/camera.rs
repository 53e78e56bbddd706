use crate::error::CameraError;
use crate::settings::{CameraSettings, DepthRange, StartPose, check_clip_planes};
use crate::state::{
    CameraState, DEFAULT_FOV, DEFAULT_PITCH, DEFAULT_YAW, PointerState, clamp_fov, clamp_pitch,
};
use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Translation directions relative to the current orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order movement keys are polled each frame.
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];
}

/// Free-fly camera with mouse-look and scroll zoom.
///
/// Angle fields are degrees. See the crate docs for the matrix convention.
#[derive(Debug, Clone, Default)]
pub struct FreeLookCamera {
    state: CameraState,
    settings: CameraSettings,
}

impl FreeLookCamera {
    /// Camera at `start_position` facing -Z with the default 45 degree field of view.
    pub fn new(start_position: Vec3) -> Self {
        Self::with_orientation(start_position, DEFAULT_YAW, DEFAULT_PITCH, DEFAULT_FOV)
    }

    pub fn with_orientation(start_position: Vec3, yaw: f32, pitch: f32, fov: f32) -> Self {
        Self {
            state: CameraState::new(start_position, yaw, pitch, fov),
            settings: CameraSettings::default(),
        }
    }

    pub fn from_pose(pose: &StartPose, settings: CameraSettings) -> Self {
        Self::with_orientation(pose.position, pose.yaw, pose.pitch, pose.fov).with_settings(settings)
    }

    pub fn with_settings(mut self, settings: CameraSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn front(&self) -> Vec3 {
        self.state.front()
    }

    pub fn right(&self) -> Vec3 {
        self.state.right()
    }

    pub fn up(&self) -> Vec3 {
        self.state.up()
    }

    /// Translate along the current front or right vector. Only position changes.
    pub fn apply_movement(&mut self, direction: Direction, elapsed_seconds: f32) {
        let speed = self.settings.movement_speed * elapsed_seconds;
        let delta = match direction {
            Direction::Forward => self.state.front() * speed,
            Direction::Backward => -self.state.front() * speed,
            Direction::Left => -self.state.right() * speed,
            Direction::Right => self.state.right() * speed,
        };
        self.state.position += delta;
        debug_assert!(
            self.state.position.is_finite(),
            "camera position became non-finite: {:?}",
            self.state.position
        );
    }

    /// Feed an absolute cursor sample in window coordinates (Y grows downward).
    ///
    /// The first sample after construction or [`reset_pointer`](Self::reset_pointer)
    /// only records the baseline.
    pub fn apply_pointer(&mut self, cursor_x: f32, cursor_y: f32) {
        let sample = Vec2::new(cursor_x, cursor_y);
        let last = match self.state.pointer {
            PointerState::Uninitialized => {
                tracing::debug!("pointer baseline at ({cursor_x}, {cursor_y})");
                self.state.pointer = PointerState::Tracking { last: sample };
                return;
            }
            PointerState::Tracking { last } => last,
        };

        let dx = sample.x - last.x;
        let dy = last.y - sample.y;
        self.state.pointer = PointerState::Tracking { last: sample };

        self.state.yaw += dx * self.settings.sensitivity;
        self.state.pitch = clamp_pitch(self.state.pitch + dy * self.settings.sensitivity);
        debug_assert!(
            self.state.yaw.is_finite() && self.state.pitch.is_finite(),
            "camera orientation became non-finite: yaw={} pitch={}",
            self.state.yaw,
            self.state.pitch
        );
    }

    /// Forget the cursor baseline, e.g. after the window regains focus.
    pub fn reset_pointer(&mut self) {
        if self.state.pointer != PointerState::Uninitialized {
            tracing::debug!("pointer baseline cleared");
        }
        self.state.pointer = PointerState::Uninitialized;
    }

    /// Positive vertical scroll zooms in. Horizontal scroll has no effect.
    pub fn apply_scroll(&mut self, scroll_y: f32) {
        self.state.fov = clamp_fov(self.state.fov - scroll_y);
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.state.position;
        Mat4::look_at_rh(eye, eye + self.state.front(), self.state.world_up())
    }

    /// Perspective projection using the configured near and far planes.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Result<Mat4, CameraError> {
        self.projection_matrix_with(aspect_ratio, self.settings.near, self.settings.far)
    }

    pub fn projection_matrix_with(
        &self,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Result<Mat4, CameraError> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(CameraError::DegenerateAspect(aspect_ratio));
        }
        check_clip_planes(near, far)?;

        let fov_y = self.state.fov.to_radians();
        Ok(match self.settings.depth_range {
            DepthRange::ZeroToOne => Mat4::perspective_rh(fov_y, aspect_ratio, near, far),
            DepthRange::NegativeOneToOne => {
                Mat4::perspective_rh_gl(fov_y, aspect_ratio, near, far)
            }
        })
    }

    pub fn view_projection(&self, aspect_ratio: f32) -> Result<Mat4, CameraError> {
        Ok(self.projection_matrix(aspect_ratio)? * self.view_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MAX_FOV, MIN_FOV, PITCH_LIMIT};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn default_camera() {
        let cam = FreeLookCamera::default();
        assert_eq!(cam.state().position(), Vec3::new(0.0, 0.0, 3.0));
        let vp = cam.view_projection(800.0 / 600.0).unwrap();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn from_pose_clamps_and_keeps_settings() {
        let pose = StartPose {
            position: Vec3::new(0.0, 1.0, 0.0),
            yaw: 10.0,
            pitch: 95.0,
            fov: 60.0,
        };
        let settings = CameraSettings {
            sensitivity: 0.5,
            ..CameraSettings::default()
        };
        let cam = FreeLookCamera::from_pose(&pose, settings);
        assert_eq!(cam.state().pitch(), PITCH_LIMIT);
        assert_eq!(cam.state().fov(), MAX_FOV);
        assert_eq!(cam.settings().sensitivity, 0.5);
    }

    #[test]
    fn first_pointer_sample_does_not_rotate() {
        let mut cam = FreeLookCamera::default();
        cam.apply_pointer(500.0, 500.0);
        assert_eq!(cam.state().yaw(), -90.0);
        assert_eq!(cam.state().pitch(), 0.0);
        assert_eq!(
            cam.state().pointer(),
            PointerState::Tracking {
                last: Vec2::new(500.0, 500.0)
            }
        );

        cam.apply_pointer(510.0, 500.0);
        assert!(approx(cam.state().yaw(), -89.0));
    }

    #[test]
    fn pointer_up_increases_pitch() {
        let mut cam = FreeLookCamera::default();
        cam.apply_pointer(400.0, 300.0);
        cam.apply_pointer(400.0, 250.0);
        assert!(approx(cam.state().pitch(), 5.0));
        assert!(approx(cam.state().yaw(), -90.0));
    }

    #[test]
    fn reset_pointer_rebaselines() {
        let mut cam = FreeLookCamera::default();
        cam.apply_pointer(0.0, 0.0);
        cam.apply_pointer(10.0, 0.0);
        let yaw = cam.state().yaw();

        cam.reset_pointer();
        assert_eq!(cam.state().pointer(), PointerState::Uninitialized);
        cam.apply_pointer(5000.0, -5000.0);
        assert_eq!(cam.state().yaw(), yaw);
        assert_eq!(cam.state().pitch(), 0.0);
    }

    #[test]
    fn pitch_stays_clamped_for_large_deltas() {
        let mut cam = FreeLookCamera::default();
        cam.apply_pointer(0.0, 0.0);
        let mut y = 0.0;
        for step in 0..200 {
            y += if step % 3 == 0 { 4000.0 } else { -2500.0 };
            cam.apply_pointer(step as f32 * 7.0, y);
            let pitch = cam.state().pitch();
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&pitch), "pitch={pitch}");
        }
        cam.apply_pointer(0.0, 1.0e7);
        assert_eq!(cam.state().pitch(), -PITCH_LIMIT);
        cam.apply_pointer(0.0, -1.0e7);
        assert_eq!(cam.state().pitch(), PITCH_LIMIT);
    }

    #[test]
    fn yaw_accumulates_without_wrapping() {
        let mut cam = FreeLookCamera::default();
        cam.apply_pointer(0.0, 0.0);
        for i in 1..=100 {
            cam.apply_pointer(i as f32 * 100.0, 0.0);
        }
        // 100 samples * 100 px * 0.1 deg
        assert!((cam.state().yaw() - 910.0).abs() < 1e-2);
    }

    #[test]
    fn scroll_clamps_fov() {
        let mut cam = FreeLookCamera::default();
        for delta in [3.0, -1.0, 20.0, 50.0, -7.5, -100.0, 0.5, 44.0, -0.25] {
            cam.apply_scroll(delta);
            let fov = cam.state().fov();
            assert!((MIN_FOV..=MAX_FOV).contains(&fov), "fov={fov}");
        }
    }

    #[test]
    fn zero_scroll_is_noop() {
        let mut cam = FreeLookCamera::with_orientation(Vec3::ZERO, 0.0, 0.0, 30.0);
        cam.apply_scroll(0.0);
        assert_eq!(cam.state().fov(), 30.0);
    }

    #[test]
    fn forward_moves_along_negative_z() {
        let mut cam = FreeLookCamera::new(Vec3::ZERO);
        cam.apply_movement(Direction::Forward, 1.0);
        assert!(cam.state().position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), 1e-5));
    }

    #[test]
    fn strafe_and_backward_use_right_and_front() {
        let mut cam = FreeLookCamera::new(Vec3::ZERO);
        cam.apply_movement(Direction::Right, 2.0);
        assert!(cam.state().position().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-5));
        cam.apply_movement(Direction::Left, 2.0);
        cam.apply_movement(Direction::Backward, 0.4);
        assert!(cam.state().position().abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-5));
    }

    #[test]
    fn movement_follows_new_orientation_immediately() {
        let mut cam = FreeLookCamera::new(Vec3::ZERO);
        cam.apply_pointer(0.0, 0.0);
        // +900 px * 0.1 = +90 degrees of yaw: now facing +X
        cam.apply_pointer(900.0, 0.0);
        cam.apply_movement(Direction::Forward, 1.0);
        assert!(cam.state().position().abs_diff_eq(Vec3::new(2.5, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn zero_elapsed_does_not_move() {
        let mut cam = FreeLookCamera::default();
        cam.apply_movement(Direction::Forward, 0.0);
        assert_eq!(cam.state().position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn custom_speed_is_respected() {
        let settings = CameraSettings {
            movement_speed: 10.0,
            ..CameraSettings::default()
        };
        let mut cam = FreeLookCamera::new(Vec3::ZERO).with_settings(settings);
        cam.apply_movement(Direction::Forward, 0.5);
        assert!(cam.state().position().abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
    }

    #[test]
    fn view_matrix_maps_eye_to_origin_and_front_to_negative_z() {
        let mut cam = FreeLookCamera::new(Vec3::new(1.0, 2.0, 3.0));
        cam.apply_pointer(0.0, 0.0);
        cam.apply_pointer(123.0, -45.0);
        let view = cam.view_matrix();
        let eye = cam.state().position();
        assert!(view.transform_point3(eye).abs_diff_eq(Vec3::ZERO, 1e-5));
        assert!(
            view.transform_point3(eye + cam.front())
                .abs_diff_eq(Vec3::NEG_Z, 1e-5)
        );
    }

    #[test]
    fn projection_uses_fov_in_degrees() {
        let cam = FreeLookCamera::default();
        let aspect = 800.0 / 600.0;
        let proj = cam.projection_matrix(aspect).unwrap();
        let f = 1.0 / (22.5_f32.to_radians()).tan();
        assert!(approx(proj.y_axis.y, f));
        assert!(approx(proj.x_axis.x, f / aspect));
    }

    #[test]
    fn projection_depth_ranges() {
        let cam = FreeLookCamera::default();
        let proj = cam.projection_matrix(1.0).unwrap();
        assert!(approx(proj.project_point3(Vec3::new(0.0, 0.0, -0.1)).z, 0.0));
        assert!(approx(proj.project_point3(Vec3::new(0.0, 0.0, -100.0)).z, 1.0));

        let gl = FreeLookCamera::default().with_settings(CameraSettings {
            depth_range: DepthRange::NegativeOneToOne,
            ..CameraSettings::default()
        });
        let proj = gl.projection_matrix(1.0).unwrap();
        assert!(approx(proj.project_point3(Vec3::new(0.0, 0.0, -0.1)).z, -1.0));
        assert!((proj.project_point3(Vec3::new(0.0, 0.0, -100.0)).z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn projection_rejects_degenerate_aspect() {
        let cam = FreeLookCamera::default();
        assert_eq!(
            cam.projection_matrix(0.0),
            Err(CameraError::DegenerateAspect(0.0))
        );
        assert!(cam.projection_matrix(-1.5).is_err());
        assert!(cam.projection_matrix(f32::NAN).is_err());
        assert!(cam.projection_matrix(f32::INFINITY).is_err());
    }

    #[test]
    fn projection_rejects_bad_clip_planes() {
        let cam = FreeLookCamera::default();
        assert_eq!(
            cam.projection_matrix_with(1.0, 10.0, 1.0),
            Err(CameraError::InvalidClipPlanes {
                near: 10.0,
                far: 1.0
            })
        );
        assert!(cam.projection_matrix_with(1.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn scenario_pointer_then_scroll() {
        let (last_x, last_y) = (400.0, 300.0);
        let mut cam = FreeLookCamera::with_orientation(Vec3::new(0.0, 0.0, 3.0), -90.0, 0.0, 45.0);

        cam.apply_pointer(last_x, last_y);
        assert_eq!(cam.state().yaw(), -90.0);
        assert_eq!(cam.state().pitch(), 0.0);

        cam.apply_pointer(last_x + 10.0, last_y);
        assert!(approx(cam.state().yaw(), -89.0));
        assert_eq!(cam.state().pitch(), 0.0);

        cam.apply_scroll(-5.0);
        assert_eq!(cam.state().fov(), 45.0);

        let mut fresh = FreeLookCamera::default();
        fresh.apply_scroll(5.0);
        assert_eq!(fresh.state().fov(), 40.0);
    }
}
