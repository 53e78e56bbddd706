use freelook_camera::{Direction, FreeLookCamera};
use glam::Vec3;
use serde::Serialize;

const TOLERANCE: f32 = 1e-4;

/// One observed value against its expected value.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    pub name: &'static str,
    pub expected: Vec<f32>,
    pub actual: Vec<f32>,
}

impl Check {
    fn scalar(name: &'static str, expected: f32, actual: f32) -> Self {
        Self {
            name,
            expected: vec![expected],
            actual: vec![actual],
        }
    }

    fn vector(name: &'static str, expected: Vec3, actual: Vec3) -> Self {
        Self {
            name,
            expected: expected.to_array().to_vec(),
            actual: actual.to_array().to_vec(),
        }
    }

    pub fn passed(&self) -> bool {
        self.expected.len() == self.actual.len()
            && self
                .expected
                .iter()
                .zip(&self.actual)
                .all(|(e, a)| (e - a).abs() <= TOLERANCE)
    }
}

/// The reference camera walk-through: baseline, look right, zoom limits, forward step.
pub fn run_scenario() -> Vec<Check> {
    let mut checks = Vec::new();

    let mut camera = FreeLookCamera::new(Vec3::new(0.0, 0.0, 3.0));
    let before = *camera.state();
    camera.apply_pointer(500.0, 500.0);
    checks.push(Check::scalar("baseline keeps yaw", before.yaw(), camera.state().yaw()));
    checks.push(Check::scalar(
        "baseline keeps pitch",
        before.pitch(),
        camera.state().pitch(),
    ));

    camera.apply_pointer(510.0, 500.0);
    checks.push(Check::scalar("look right 10px", -89.0, camera.state().yaw()));

    camera.apply_scroll(-5.0);
    checks.push(Check::scalar("zoom out stays at max", 45.0, camera.state().fov()));

    let mut fresh = FreeLookCamera::default();
    fresh.apply_scroll(5.0);
    checks.push(Check::scalar("zoom in 5", 40.0, fresh.state().fov()));

    let mut walker = FreeLookCamera::default();
    let start = walker.state().position();
    walker.apply_movement(Direction::Forward, 1.0);
    checks.push(Check::vector(
        "forward 1s",
        Vec3::new(0.0, 0.0, -2.5),
        walker.state().position() - start,
    ));

    checks
}
