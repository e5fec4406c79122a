//! Character sprite sheets
//!
//! Sheets follow the LPC walk layout: one row per facing (up, left, down,
//! right), one column per walk frame. This module only describes where frames
//! live; decoding and drawing belong to the renderer. A missing sheet is a
//! distinct error so callers can fall back to a flat-colour box.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{SPRITE_FRAME_SIZE, WALK_FRAMES};
use crate::sim::{Animation, Direction, Rect};

/// Sprite loading failures
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("sprite sheet not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("invalid sprite sheet {}: {reason}", .path.display())]
    InvalidSheet { path: PathBuf, reason: String },
}

/// Location and grid of a walk-cycle sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub path: PathBuf,
    /// Square frame edge in pixels
    pub frame_size: u32,
    /// Frames per row
    pub frames: usize,
}

impl SpriteSheet {
    /// Describe the sheet at `path`, checking that the file exists
    pub fn load(
        path: impl AsRef<Path>,
        frame_size: u32,
        frames: usize,
    ) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }
        if frame_size == 0 || frames == 0 {
            return Err(AssetError::InvalidSheet {
                path: path.to_path_buf(),
                reason: format!("{frames} frames of {frame_size}px"),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            frame_size,
            frames,
        })
    }

    /// Source rectangle of one frame inside the sheet
    pub fn frame_rect(&self, facing: Direction, frame: usize) -> Rect {
        let size = self.frame_size as i32;
        let col = (frame % self.frames) as i32;
        let row = facing.sheet_row() as i32;
        Rect::new(col * size, row * size, size, size)
    }
}

/// How a character gets drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CharacterVisual {
    Sheet(SpriteSheet),
    /// Solid box used when the sheet can't be loaded
    Fallback { color: [u8; 3] },
}

impl CharacterVisual {
    /// Load the standard walk sheet, or fall back to a flat `color` box
    pub fn load_or_fallback(path: impl AsRef<Path>, color: [u8; 3]) -> Self {
        match SpriteSheet::load(path, SPRITE_FRAME_SIZE, WALK_FRAMES) {
            Ok(sheet) => CharacterVisual::Sheet(sheet),
            Err(e) => {
                log::warn!("{e}; drawing a plain box instead");
                CharacterVisual::Fallback { color }
            }
        }
    }

    /// Sheet region for the current pose; `None` for the fallback box
    pub fn source_rect(&self, facing: Direction, animation: &Animation) -> Option<Rect> {
        match self {
            CharacterVisual::Sheet(sheet) => {
                Some(sheet.frame_rect(facing, animation.current_frame()))
            }
            CharacterVisual::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CharacterVisual::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: [u8; 3] = [0, 0, 255];

    #[test]
    fn test_missing_sheet_is_not_found() {
        let err = SpriteSheet::load("/no/such/warrior.png", 64, 9).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
        assert!(err.to_string().contains("warrior.png"));
    }

    #[test]
    fn test_fallback_visual() {
        let visual = CharacterVisual::load_or_fallback("/no/such/warrior.png", BLUE);
        assert!(visual.is_fallback());
        assert_eq!(visual.source_rect(Direction::Up, &Animation::default()), None);
    }

    #[test]
    fn test_frame_rects() {
        let sheet = SpriteSheet {
            path: PathBuf::from("warrior.png"),
            frame_size: 64,
            frames: 9,
        };
        assert_eq!(sheet.frame_rect(Direction::Up, 0), Rect::new(0, 0, 64, 64));
        assert_eq!(sheet.frame_rect(Direction::Down, 3), Rect::new(192, 128, 64, 64));
        assert_eq!(sheet.frame_rect(Direction::Right, 10), Rect::new(64, 192, 64, 64));
    }

    #[test]
    fn test_existing_sheet_loads() {
        let path = std::env::temp_dir().join(format!("gauntlet-sheet-{}.png", std::process::id()));
        std::fs::write(&path, b"not decoded here").expect("write temp file");

        let visual = CharacterVisual::load_or_fallback(&path, BLUE);
        let mut anim = Animation::default();
        anim.advance(true, 1.0, WALK_FRAMES);
        assert_eq!(
            visual.source_rect(Direction::Left, &anim),
            Some(Rect::new(64, 64, 64, 64))
        );

        assert!(matches!(
            SpriteSheet::load(&path, 0, 9),
            Err(AssetError::InvalidSheet { .. })
        ));
        let _ = std::fs::remove_file(&path);
    }
}
