use glam::{Mat4, Vec3};

/// The demo's single cube: tilted about +Z, then spun about a diagonal axis over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinningCube {
    pub position: Vec3,
    pub tilt_degrees: f32,
    /// Need not be normalized.
    pub spin_axis: Vec3,
}

impl Default for SpinningCube {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            tilt_degrees: 45.0,
            spin_axis: Vec3::new(1.0, 1.0, 0.0),
        }
    }
}

impl SpinningCube {
    /// Model matrix after `elapsed_seconds`; the spin rate is one radian per second.
    pub fn model_matrix(&self, elapsed_seconds: f32) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_z(self.tilt_degrees.to_radians())
            * Mat4::from_axis_angle(self.spin_axis.normalize(), elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_time_zero_only_tilt_applies() {
        let m = SpinningCube::default().model_matrix(0.0);
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!(m.transform_point3(Vec3::X).abs_diff_eq(Vec3::new(h, h, 0.0), 1e-6));
    }

    #[test]
    fn spin_axis_stays_fixed() {
        let cube = SpinningCube::default();
        let axis = cube.spin_axis.normalize();
        for t in [0.0, 0.7, 2.0, 10.0] {
            let p = cube.model_matrix(t).transform_point3(axis);
            // Tilting the (1,1,0) diagonal by 45 degrees about Z lands on +Y.
            assert!(p.abs_diff_eq(Vec3::Y, 1e-5), "t={t} p={p}");
        }
    }

    #[test]
    fn translation_moves_origin() {
        let cube = SpinningCube {
            position: Vec3::new(1.0, -2.0, 0.5),
            ..SpinningCube::default()
        };
        let p = cube.model_matrix(3.0).transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(cube.position, 1e-6));
    }
}
