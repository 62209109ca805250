//! Creature attributes

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The seven creature attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stat {
    Strength,
    Endurance,
    Intelligence,
    Luck,
    Agility,
    Perception,
    Charisma,
}

impl Stat {
    pub const ALL: [Stat; 7] = [
        Stat::Strength,
        Stat::Endurance,
        Stat::Intelligence,
        Stat::Luck,
        Stat::Agility,
        Stat::Perception,
        Stat::Charisma,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            Stat::Strength => "Str",
            Stat::Endurance => "End",
            Stat::Intelligence => "Int",
            Stat::Luck => "Luck",
            Stat::Agility => "Agi",
            Stat::Perception => "Per",
            Stat::Charisma => "Cha",
        }
    }
}

/// Value every attribute starts at
pub const BASE_STAT: i32 = 1;

/// A full attribute table; missing entries read as [`BASE_STAT`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Stat, i32>", into = "BTreeMap<Stat, i32>")]
pub struct Stats(BTreeMap<Stat, i32>);

impl Stats {
    /// Base table with `overrides` applied on top
    pub fn with_overrides(overrides: &BTreeMap<Stat, i32>) -> Self {
        let mut stats = Self::default();
        for (stat, value) in overrides {
            stats.set(*stat, *value);
        }
        stats
    }

    pub fn get(&self, stat: Stat) -> i32 {
        self.0.get(&stat).copied().unwrap_or(BASE_STAT)
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        self.0.insert(stat, value);
    }

    pub fn add(&mut self, stat: Stat, amount: i32) {
        let value = self.get(stat) + amount;
        self.set(stat, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self(Stat::ALL.into_iter().map(|s| (s, BASE_STAT)).collect())
    }
}

impl From<BTreeMap<Stat, i32>> for Stats {
    fn from(overrides: BTreeMap<Stat, i32>) -> Self {
        Self::with_overrides(&overrides)
    }
}

impl From<Stats> for BTreeMap<Stat, i32> {
    fn from(stats: Stats) -> Self {
        stats.0
    }
}
