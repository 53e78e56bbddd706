use glam::DVec2;

/// Absolute cursor position rebuilt from relative mouse motion.
///
/// While the OS cursor is grabbed, windows only report motion deltas. Summing them
/// gives an unbounded position that behaves like a disabled GLFW cursor, which is
/// what [`FreeLookCamera::apply_pointer`](freelook_camera::FreeLookCamera::apply_pointer)
/// expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualCursor {
    position: DVec2,
}

impl VirtualCursor {
    /// Start at the center of a `width` x `height` window.
    pub fn centered(width: u32, height: u32) -> Self {
        Self {
            position: DVec2::new(width as f64 / 2.0, height as f64 / 2.0),
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Add a motion delta and return the new absolute position.
    pub fn accumulate(&mut self, dx: f64, dy: f64) -> DVec2 {
        self.position += DVec2::new(dx, dy);
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered() {
        let cursor = VirtualCursor::centered(800, 600);
        assert_eq!(cursor.position(), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn accumulates_unbounded() {
        let mut cursor = VirtualCursor::centered(800, 600);
        for _ in 0..100 {
            cursor.accumulate(50.0, -10.0);
        }
        assert_eq!(cursor.position(), DVec2::new(5400.0, -700.0));
    }
}
