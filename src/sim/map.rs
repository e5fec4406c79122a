//! The fixed dungeon layout
//!
//! Walls are one tile each: a border around the whole map plus a handful of
//! interior segments that carve out rooms and corridors. Generators sit near
//! the four corners.

use std::collections::BTreeSet;

use super::state::Wall;
use crate::consts::{MAP_HEIGHT, MAP_WIDTH};

/// Generator positions (tile coordinates)
pub const GENERATOR_TILES: [(i32, i32); 4] = [(5, 5), (35, 5), (5, 25), (35, 25)];

/// Every wall tile of the built-in map, without duplicates
pub fn wall_tiles() -> BTreeSet<(i32, i32)> {
    let mut tiles = BTreeSet::new();

    // Border
    for x in 0..MAP_WIDTH {
        tiles.insert((x, 0));
        tiles.insert((x, MAP_HEIGHT - 1));
    }
    for y in 0..MAP_HEIGHT {
        tiles.insert((0, y));
        tiles.insert((MAP_WIDTH - 1, y));
    }

    // Horizontal segments
    for x in 10..20 {
        tiles.insert((x, 10));
        tiles.insert((x, 20));
    }
    for x in 25..35 {
        tiles.insert((x, 15));
    }

    // Vertical segments
    for y in 5..15 {
        tiles.insert((20, y));
    }
    for y in 18..25 {
        tiles.insert((30, y));
    }

    tiles
}

/// Wall entities for the built-in map
pub fn walls() -> Vec<Wall> {
    let mut tiles: Vec<(i32, i32)> = wall_tiles().into_iter().collect();
    tiles.sort_by_key(|&(x, y)| (y, x));
    tiles.into_iter().map(|(x, y)| Wall::at_tile(x, y)).collect()
}

/// True if the tile at (x, y) is a wall
pub fn is_wall_tile(x: i32, y: i32) -> bool {
    wall_tiles().contains(&(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::collides_any;
    use crate::sim::rect::Rect;
    use crate::tile_to_px;

    #[test]
    fn test_border_is_closed() {
        for x in 0..MAP_WIDTH {
            assert!(is_wall_tile(x, 0));
            assert!(is_wall_tile(x, MAP_HEIGHT - 1));
        }
        for y in 0..MAP_HEIGHT {
            assert!(is_wall_tile(0, y));
            assert!(is_wall_tile(MAP_WIDTH - 1, y));
        }
    }

    #[test]
    fn test_no_duplicate_walls() {
        let walls = walls();
        // 2*40 + 2*28 border, 10+10+10 horizontal, 10+7 vertical
        assert_eq!(walls.len(), 136 + 30 + 17);
    }

    #[test]
    fn test_interior_segments() {
        assert!(is_wall_tile(15, 10));
        assert!(is_wall_tile(15, 20));
        assert!(is_wall_tile(30, 15));
        assert!(is_wall_tile(20, 7));
        assert!(is_wall_tile(30, 22));
        assert!(!is_wall_tile(15, 15));
    }

    #[test]
    fn test_spawns_are_clear() {
        let walls = walls();
        let start = tile_to_px(PLAYER_START_X, PLAYER_START_Y);
        let player = Rect::new(start.x, start.y, PLAYER_SIZE, PLAYER_SIZE);
        assert!(!collides_any(&player, &walls));

        for &(tx, ty) in &GENERATOR_TILES {
            assert!(!is_wall_tile(tx, ty));
            let pos = tile_to_px(tx, ty);
            let enemy = Rect::new(pos.x, pos.y, ENEMY_SIZE, ENEMY_SIZE);
            assert!(!collides_any(&enemy, &walls));
        }
    }
}
