use crate::action::Action;
use freelook_camera::Direction;
use std::collections::BTreeSet;

/// Movement keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: BTreeSet<Direction>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_held(&mut self, direction: Direction, pressed: bool) {
        if pressed {
            self.held.insert(direction);
        } else {
            self.held.remove(&direction);
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held.contains(&direction)
    }

    /// Drop all held keys, e.g. when the window loses focus and releases go unseen.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// One move action per held key for this frame, in Forward, Backward, Left, Right order.
    pub fn movement(&self, elapsed_seconds: f32) -> impl Iterator<Item = Action> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|d| self.held.contains(d))
            .map(move |direction| Action::Move {
                direction,
                seconds: elapsed_seconds,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelook_camera::FreeLookCamera;
    use glam::Vec3;

    #[test]
    fn press_and_release() {
        let mut input = InputState::new();
        input.set_held(Direction::Left, true);
        assert!(input.is_held(Direction::Left));
        input.set_held(Direction::Left, false);
        assert!(!input.is_held(Direction::Left));
    }

    #[test]
    fn movement_in_poll_order() {
        let mut input = InputState::new();
        input.set_held(Direction::Right, true);
        input.set_held(Direction::Forward, true);
        let actions: Vec<Action> = input.movement(0.5).collect();
        assert_eq!(
            actions,
            vec![
                Action::Move {
                    direction: Direction::Forward,
                    seconds: 0.5
                },
                Action::Move {
                    direction: Direction::Right,
                    seconds: 0.5
                },
            ]
        );
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = InputState::new();
        input.set_held(Direction::Forward, true);
        input.set_held(Direction::Backward, true);
        let mut cam = FreeLookCamera::new(Vec3::ZERO);
        for action in input.movement(1.0) {
            action.apply(&mut cam);
        }
        assert!(cam.state().position().abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn release_all_stops_movement() {
        let mut input = InputState::new();
        input.set_held(Direction::Forward, true);
        input.release_all();
        assert_eq!(input.movement(1.0).count(), 0);
    }
}
