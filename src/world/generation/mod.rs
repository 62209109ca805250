//! Procedural floor generation
//!
//! Scatters walls over an open floor and keeps the hero's start clear.

use rand::Rng;

use super::{Map, Position, TileType};
use crate::data::MapConfig;

/// Generate a floor from the map settings
pub fn generate_floor(rng: &mut impl Rng, config: &MapConfig) -> Map {
    let width = config.width.max(3);
    let height = config.height.max(3);
    let mut map = Map::new(width, height);

    // Border stays wall, interior is random
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let tile = if rng.gen_bool(config.wall_density.clamp(0.0, 1.0)) {
                TileType::Wall
            } else if rng.gen_bool(config.rubble_density.clamp(0.0, 1.0)) {
                TileType::Rubble
            } else {
                TileType::Floor
            };
            map.set_tile(x, y, tile);
        }
    }

    map.start_pos = Position::new(1, 1);
    clear_start_area(&mut map);

    log::debug!(
        "Generated {}x{} floor with {} walkable cells",
        width,
        height,
        map.get_walkable_positions().len()
    );

    map
}

/// Keep the start cell and its open neighbours walkable so the hero never spawns boxed in
fn clear_start_area(map: &mut Map) {
    let start = map.start_pos;
    map.set_tile(start.x, start.y, TileType::Floor);

    for (dx, dy) in [(1, 0), (0, 1)] {
        let (x, y) = (start.x + dx, start.y + dy);
        if x < map.width - 1 && y < map.height - 1 {
            map.set_tile(x, y, TileType::Floor);
        }
    }
}
