//! Tile definitions
//!
//! Terrain types and how they look.

use serde::{Deserialize, Serialize};

use crate::entities::Sprite;

/// Types of tiles in the game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Floor,
    #[default]
    Wall,
    /// Walkable floor variation
    Rubble,
}

impl TileType {
    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor | TileType::Rubble)
    }

    pub fn sprite(&self) -> Sprite {
        match self {
            TileType::Floor => Sprite::new('.', '·', (80, 80, 80)).with_bg((20, 18, 15)),
            TileType::Wall => Sprite::new('#', '█', (130, 110, 90)).with_bg((40, 35, 30)),
            TileType::Rubble => Sprite::new(',', '░', (100, 90, 80)).with_bg((25, 22, 18)),
        }
    }
}
