//! Scrolling viewport that follows the player

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rect;

/// Top-left of the visible window in map pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub offset: IVec2,
    /// Visible area size
    pub viewport: IVec2,
    /// Full map size the offset is clamped against
    pub world: IVec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::with_sizes(
            IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            IVec2::new(MAP_WIDTH_PX, MAP_HEIGHT_PX),
        )
    }

    pub fn with_sizes(viewport: IVec2, world: IVec2) -> Self {
        Self {
            offset: IVec2::ZERO,
            viewport,
            world,
        }
    }

    /// Center on `target`, never scrolling past the map edges
    pub fn follow(&mut self, target: &Rect) {
        let wanted = target.center() - self.viewport / 2;
        let max = (self.world - self.viewport).max(IVec2::ZERO);
        self.offset = wanted.clamp(IVec2::ZERO, max);
    }

    /// Screen-space copy of a map-space rectangle
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translated(-self.offset)
    }

    /// Visible region in map space
    pub fn visible(&self) -> Rect {
        Rect::new(self.offset.x, self.offset.y, self.viewport.x, self.viewport.y)
    }

    pub fn reset(&mut self) {
        self.offset = IVec2::ZERO;
    }
}
