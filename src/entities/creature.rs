//! Creature traits and the shared creature body

use super::{Sprite, Stat, Stats};
use crate::world::Position;

/// Max HP granted before endurance is counted
pub const BASE_HP: i32 = 5;
/// Max HP granted per point of endurance
pub const HP_PER_ENDURANCE: i32 = 2;

/// Anything with stats, health and a place on the map
pub trait Creature {
    fn sprite(&self) -> &Sprite;
    /// Effective stats (overlays included)
    fn stats(&self) -> Stats;
    fn position(&self) -> Position;
    fn hp(&self) -> i32;
    fn set_hp(&mut self, hp: i32);
    fn max_hp(&self) -> i32;
}

/// A creature that gains experience and levels
pub trait Adventurer: Creature {
    fn level(&self) -> u32;
    fn exp(&self) -> u64;
    fn gain_exp(&mut self, amount: u64);
    fn gold(&self) -> u64;
    /// Run the level-up sequence, returning one message per level gained
    fn level_up(&mut self) -> Vec<String>;
}

impl<C: Creature + ?Sized> Creature for &mut C {
    fn sprite(&self) -> &Sprite {
        (**self).sprite()
    }

    fn stats(&self) -> Stats {
        (**self).stats()
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn hp(&self) -> i32 {
        (**self).hp()
    }

    fn set_hp(&mut self, hp: i32) {
        (**self).set_hp(hp)
    }

    fn max_hp(&self) -> i32 {
        (**self).max_hp()
    }
}

impl<A: Adventurer + ?Sized> Adventurer for &mut A {
    fn level(&self) -> u32 {
        (**self).level()
    }

    fn exp(&self) -> u64 {
        (**self).exp()
    }

    fn gain_exp(&mut self, amount: u64) {
        (**self).gain_exp(amount)
    }

    fn gold(&self) -> u64 {
        (**self).gold()
    }

    fn level_up(&mut self) -> Vec<String> {
        (**self).level_up()
    }
}

/// Stats, health and position shared by the hero and enemies
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub sprite: Sprite,
    stats: Stats,
    max_hp: i32,
    hp: i32,
    pub position: Position,
}

impl Body {
    /// New body at full health
    pub fn new(sprite: Sprite, stats: Stats, position: Position) -> Self {
        let max_hp = max_hp_for(&stats);
        Self {
            sprite,
            stats,
            max_hp,
            hp: max_hp,
            position,
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Set HP, never above max
    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp.min(self.max_hp);
    }

    pub fn heal_full(&mut self) {
        self.hp = self.max_hp;
    }

    /// Change a stat; endurance changes recompute max HP
    pub fn add_stat(&mut self, stat: Stat, amount: i32) {
        self.stats.add(stat, amount);
        if stat == Stat::Endurance {
            self.calc_max_hp();
        }
    }

    pub fn calc_max_hp(&mut self) {
        self.max_hp = max_hp_for(&self.stats);
        self.hp = self.hp.min(self.max_hp);
    }
}

pub fn max_hp_for(stats: &Stats) -> i32 {
    BASE_HP + HP_PER_ENDURANCE * stats.get(Stat::Endurance)
}
