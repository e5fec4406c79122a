//! Walk-cycle animation state
//!
//! Visual only: nothing here feeds back into movement or collision.

use serde::{Deserialize, Serialize};

use super::state::Direction;

/// Fractional frame counter for a looping walk cycle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Animation {
    /// Fractional frame index; the integer part is the frame shown
    pub frame: f32,
    /// Whether the character moved this tick
    pub moving: bool,
}

impl Animation {
    /// Advance the walk cycle by `speed` frames, wrapping at `frame_count`.
    /// Snaps back to the idle frame when not moving.
    pub fn advance(&mut self, moving: bool, speed: f32, frame_count: usize) {
        self.moving = moving;
        if !moving || frame_count == 0 {
            self.frame = 0.0;
            return;
        }

        self.frame += speed;
        if self.frame >= frame_count as f32 {
            self.frame = 0.0;
        }
    }

    /// Frame index to draw
    pub fn current_frame(&self) -> usize {
        self.frame as usize
    }
}

impl Direction {
    /// Row of an LPC walk sheet: up, left, down, right
    pub fn sheet_row(self) -> u32 {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }
}
