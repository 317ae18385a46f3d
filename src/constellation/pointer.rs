use eframe::egui::{Pos2, Vec2, vec2};

/// Where the pointer is assumed to be before the first move: far enough away
/// that nothing inside the viewport feels it.
const OFFSCREEN: Vec2 = vec2(-1000.0, -1000.0);

/// Last known pointer position in viewport-local coordinates.
#[derive(Clone, Copy, Debug)]
pub(super) struct PointerTracker {
    position: Vec2,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            position: OFFSCREEN,
        }
    }
}

impl PointerTracker {
    pub(super) fn track(&mut self, pointer: Pos2, viewport_origin: Pos2) {
        self.position = pointer - viewport_origin;
    }

    pub(super) fn position(&self) -> Vec2 {
        self.position
    }
}
