//! Ally and enemy templates
//!
//! Templates describe what can spawn on a floor and how many of each.

use serde::{Deserialize, Serialize};

use crate::entities::{AllyActionKind, EffectKind, Sprite, Stat, Stats};

/// How many copies of a template spawn on a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnCount {
    /// Copies on the first floor
    pub base: u32,
    /// Extra copies per floor below the first
    #[serde(default)]
    pub per_level: u32,
    /// Upper bound regardless of depth
    #[serde(default = "default_max_count")]
    pub max: u32,
}

fn default_max_count() -> u32 {
    u32::MAX
}

impl SpawnCount {
    pub fn new(base: u32, per_level: u32, max: u32) -> Self {
        Self { base, per_level, max }
    }

    /// Copies to spawn on dungeon `level` (1-based)
    pub fn for_level(&self, level: u32) -> u32 {
        let extra = self.per_level.saturating_mul(level.saturating_sub(1));
        self.base.saturating_add(extra).min(self.max)
    }
}

/// A friendly object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllyTemplate {
    pub name: String,
    pub sprite: Sprite,
    pub action: AllyActionKind,
    pub count: SpawnCount,
}

/// An enemy type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub sprite: Sprite,
    #[serde(default)]
    pub stats: Stats,
    pub experience: u64,
    #[serde(default)]
    pub hex: Option<EffectKind>,
    pub count: SpawnCount,
}

/// Everything that can spawn on a floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectTemplates {
    #[serde(default)]
    pub allies: Vec<AllyTemplate>,
    #[serde(default)]
    pub enemies: Vec<EnemyTemplate>,
}

impl Default for ObjectTemplates {
    fn default() -> Self {
        default_object_templates()
    }
}

fn stats(values: &[(Stat, i32)]) -> Stats {
    let mut stats = Stats::default();
    for (stat, value) in values {
        stats.set(*stat, *value);
    }
    stats
}

/// Built-in templates used when no data file is present
pub fn default_object_templates() -> ObjectTemplates {
    ObjectTemplates {
        allies: vec![
            AllyTemplate {
                name: "chest".into(),
                sprite: Sprite::new('=', '▣', (200, 160, 60)),
                action: AllyActionKind::AddGold,
                count: SpawnCount::new(3, 1, 8),
            },
            AllyTemplate {
                name: "fountain".into(),
                sprite: Sprite::new('~', '≈', (100, 160, 255)),
                action: AllyActionKind::RestoreHp,
                count: SpawnCount::new(2, 0, 2),
            },
            AllyTemplate {
                name: "altar".into(),
                sprite: Sprite::new('+', '✚', (230, 230, 140)),
                action: AllyActionKind::ApplyBlessing,
                count: SpawnCount::new(1, 0, 1),
            },
            AllyTemplate {
                name: "spring".into(),
                sprite: Sprite::new('o', '◌', (120, 220, 200)),
                action: AllyActionKind::RemoveEffect,
                count: SpawnCount::new(1, 0, 1),
            },
            AllyTemplate {
                name: "stray dog".into(),
                sprite: Sprite::new('d', 'ᴥ', (210, 180, 140)),
                action: AllyActionKind::Befriend,
                count: SpawnCount::new(0, 1, 1),
            },
        ],
        enemies: vec![
            EnemyTemplate {
                name: "rat".into(),
                sprite: Sprite::new('r', 'ʳ', (150, 120, 90)),
                stats: stats(&[(Stat::Strength, 2), (Stat::Endurance, 2), (Stat::Agility, 4)]),
                experience: 20,
                hex: None,
                count: SpawnCount::new(6, 2, 16),
            },
            EnemyTemplate {
                name: "knight".into(),
                sprite: Sprite::new('K', '♞', (180, 180, 200)),
                stats: stats(&[(Stat::Strength, 10), (Stat::Endurance, 12), (Stat::Agility, 3)]),
                experience: 60,
                hex: None,
                count: SpawnCount::new(2, 1, 8),
            },
            EnemyTemplate {
                name: "naga".into(),
                sprite: Sprite::new('n', 'ϟ', (80, 200, 120)),
                stats: stats(&[(Stat::Strength, 8), (Stat::Endurance, 8), (Stat::Intelligence, 6)]),
                experience: 90,
                hex: Some(EffectKind::Poisoning),
                count: SpawnCount::new(1, 1, 6),
            },
            EnemyTemplate {
                name: "dragon".into(),
                sprite: Sprite::new('D', 'Ɖ', (230, 60, 40)),
                stats: stats(&[(Stat::Strength, 30), (Stat::Endurance, 40), (Stat::Luck, 10)]),
                experience: 400,
                hex: None,
                count: SpawnCount::new(0, 1, 3),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_count_scales_and_caps() {
        let count = SpawnCount::new(2, 3, 6);
        assert_eq!(count.for_level(1), 2);
        assert_eq!(count.for_level(2), 5);
        assert_eq!(count.for_level(9), 6);
    }

    #[test]
    fn test_shipped_templates_parse() {
        let templates: ObjectTemplates =
            ron::from_str(include_str!("../../assets/data/objects.ron")).unwrap();
        assert!(!templates.allies.is_empty());
        assert!(!templates.enemies.is_empty());
        assert!(templates.enemies.iter().any(|e| e.hex.is_some()));
    }

    #[test]
    fn test_partial_template() {
        let template: EnemyTemplate = ron::from_str(
            r#"(
                name: "bat",
                sprite: (ascii: 'b', unicode: 'b', fg: (90, 90, 90)),
                experience: 5,
                count: (base: 3),
            )"#,
        )
        .unwrap();
        assert_eq!(template.stats, Stats::default());
        assert_eq!(template.count.for_level(4), 3);
        assert_eq!(template.hex, None);
    }
}
