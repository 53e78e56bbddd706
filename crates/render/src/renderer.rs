use crate::viewport::Viewport;
use freelook_camera::{CameraError, FreeLookCamera};
use glam::{Mat4, Vec3};
use serde::Serialize;
use std::fmt::Write;

/// Everything a renderer needs from the camera for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderView {
    pub eye: Vec3,
    pub front: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect_ratio: f32,
    pub view: Mat4,
    pub projection: Mat4,
}

impl RenderView {
    pub fn from_camera(camera: &FreeLookCamera, viewport: Viewport) -> Result<Self, CameraError> {
        let aspect_ratio = viewport.aspect_ratio();
        let state = camera.state();
        Ok(Self {
            eye: state.position(),
            front: state.front(),
            yaw: state.yaw(),
            pitch: state.pitch(),
            fov_degrees: state.fov(),
            aspect_ratio,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(aspect_ratio)?,
        })
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Renderer-agnostic interface.
///
/// A renderer reads the frame's view and the model transform, then produces output.
pub trait Renderer {
    type Output;

    fn render(&self, view: &RenderView, model: Mat4) -> Self::Output;
}

/// Text renderer for headless runs, logs, and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, view: &RenderView, model: Mat4) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Frame (aspect={:.3}) ===", view.aspect_ratio);
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2}) front=({:.3}, {:.3}, {:.3})",
            view.eye.x, view.eye.y, view.eye.z, view.front.x, view.front.y, view.front.z
        );
        let _ = writeln!(
            out,
            "Orientation: yaw={:.2} pitch={:.2} fov={:.2}",
            view.yaw, view.pitch, view.fov_degrees
        );
        write_matrix(&mut out, "View", &view.view);
        write_matrix(&mut out, "Projection", &view.projection);

        let clip = view.view_projection() * model;
        let center = clip.project_point3(Vec3::ZERO);
        let _ = writeln!(
            out,
            "Cube center (ndc): ({:.3}, {:.3}, {:.3})",
            center.x, center.y, center.z
        );
        out
    }
}

fn write_matrix(out: &mut String, name: &str, m: &Mat4) {
    let _ = writeln!(out, "{name}:");
    for i in 0..4 {
        let r = m.row(i);
        let _ = writeln!(
            out,
            "  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]",
            r.x, r.y, r.z, r.w
        );
    }
}
