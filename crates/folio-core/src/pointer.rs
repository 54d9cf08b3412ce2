//! Pointer-driven state: the custom cursor and magnetic buttons.

use crate::constants::MAGNETIC_STRENGTH;
use glam::Vec2;

/// Axis-aligned rectangle in viewport pixels, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Displacement a magnetic button should tween to for a pointer at `pointer`.
#[inline]
pub fn magnetic_offset(pointer: Vec2, rect: Rect) -> Vec2 {
    (pointer - rect.center()) * MAGNETIC_STRENGTH
}

/// Logical state of the custom cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub target: Vec2,
    pub grown: bool,
}

impl CursorState {
    /// Record a pointer move and return the position the cursor should tween to.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> Vec2 {
        self.target = Vec2::new(x, y);
        self.target
    }

    /// Pointer entered an interactive element. Returns true if the state flipped.
    pub fn enter_interactive(&mut self) -> bool {
        let flipped = !self.grown;
        self.grown = true;
        flipped
    }

    /// Pointer left an interactive element. Returns true if the state flipped.
    pub fn leave_interactive(&mut self) -> bool {
        let flipped = self.grown;
        self.grown = false;
        flipped
    }

    /// Pointer left the window; the cursor always shrinks.
    pub fn leave_window(&mut self) {
        self.grown = false;
    }
}
