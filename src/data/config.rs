//! Game configuration
//!
//! Every field has a default, so a config file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::entities::{Stat, Stats};

/// Floor generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: i32,
    pub height: i32,
    /// Chance for an interior cell to be a wall
    pub wall_density: f64,
    /// Chance for an open interior cell to be rubble
    pub rubble_density: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            wall_density: 0.12,
            rubble_density: 0.05,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map: MapConfig,
    /// Terminal cells per tile side at start
    pub sprite_size: u16,
    pub min_sprite_size: u16,
    pub max_sprite_size: u16,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    pub hero_stats: Stats,
}

impl Default for GameConfig {
    fn default() -> Self {
        let mut hero_stats = Stats::default();
        hero_stats.set(Stat::Strength, 20);
        hero_stats.set(Stat::Endurance, 20);
        hero_stats.set(Stat::Intelligence, 5);
        hero_stats.set(Stat::Luck, 5);

        Self {
            map: MapConfig::default(),
            sprite_size: 1,
            min_sprite_size: 1,
            max_sprite_size: 3,
            seed: None,
            hero_stats,
        }
    }
}

impl GameConfig {
    /// Starting sprite size, forced into the configured bounds
    pub fn clamped_sprite_size(&self) -> u16 {
        let min = self.min_sprite_size.max(1);
        let max = self.max_sprite_size.max(min);
        self.sprite_size.clamp(min, max)
    }
}
