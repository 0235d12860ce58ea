//! Touch/pointer input backends

use glam::Vec2;

/// An active touch (or held mouse button) at a screen position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub pos: Vec2,
}

/// Input source polled once per update pass
pub trait InputManager {
    /// `None` while nothing is touching the screen
    fn touch(&self) -> Option<Touch>;
}

/// Fixed input, handy for replays and headless runs
impl InputManager for Option<Touch> {
    fn touch(&self) -> Option<Touch> {
        *self
    }
}

/// Pointer state driven by host press/release events
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pressed_at: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down (or moved while down)
    pub fn press(&mut self, pos: Vec2) {
        self.pressed_at = Some(pos);
    }

    pub fn release(&mut self) {
        self.pressed_at = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }
}

impl InputManager for PointerState {
    fn touch(&self) -> Option<Touch> {
        self.pressed_at.map(|pos| Touch { pos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_press_release() {
        let mut pointer = PointerState::new();
        assert!(pointer.touch().is_none());

        pointer.press(Vec2::new(10.0, 20.0));
        assert!(pointer.is_pressed());
        assert_eq!(pointer.touch(), Some(Touch { pos: Vec2::new(10.0, 20.0) }));

        pointer.release();
        assert!(pointer.touch().is_none());
    }

    #[test]
    fn test_fixed_input() {
        let held = Some(Touch { pos: Vec2::ZERO });
        assert!(held.touch().is_some());
        assert!(None::<Touch>.touch().is_none());
    }
}
