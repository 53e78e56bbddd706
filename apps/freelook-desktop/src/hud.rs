use egui::Context as EguiContext;
use freelook_camera::{CameraState, PointerState};

/// Read-only overlay with the live camera state.
pub fn draw_hud(ctx: &EguiContext, camera: &CameraState, frame_seconds: f32) {
    egui::Window::new("Camera")
        .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let p = camera.position();
            ui.label(format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
            ui.label(format!("Yaw: {:.1}  Pitch: {:.1}", camera.yaw(), camera.pitch()));
            ui.label(format!("FOV: {:.1}", camera.fov()));
            ui.label(pointer_label(camera.pointer()));
            if frame_seconds > 0.0 {
                ui.label(format!(
                    "Frame: {:.2} ms ({:.0} fps)",
                    frame_seconds * 1000.0,
                    1.0 / frame_seconds
                ));
            }
            ui.separator();
            ui.small("WASD: Move | Mouse: Look | Wheel: Zoom | F1: HUD | Esc: Quit");
        });
}

fn pointer_label(pointer: PointerState) -> String {
    match pointer {
        PointerState::Uninitialized => "Pointer: waiting for first sample".into(),
        PointerState::Tracking { last } => format!("Pointer: ({:.0}, {:.0})", last.x, last.y),
    }
}
