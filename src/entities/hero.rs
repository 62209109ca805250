//! The player-controlled hero

use super::{Adventurer, Body, Creature, Sprite, Stat, Stats};
use crate::world::Position;

/// XP needed at level 1; doubles every level
pub const BASE_LEVEL_XP: u64 = 100;
/// Strength and endurance gained per level
pub const LEVEL_UP_BONUS: i32 = 2;

/// XP threshold that triggers the next level-up from `level`
///
/// `None` once the threshold no longer fits in a `u64`; that level is never
/// reached.
pub fn xp_threshold(level: u32) -> Option<u64> {
    2u64.checked_pow(level.saturating_sub(1))
        .and_then(|factor| factor.checked_mul(BASE_LEVEL_XP))
}

/// The hero
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub body: Body,
    pub level: u32,
    pub exp: u64,
    pub gold: u64,
}

impl Hero {
    pub fn new(stats: Stats, position: Position) -> Self {
        Self {
            body: Body::new(Sprite::hero(), stats, position),
            level: 1,
            exp: 0,
            gold: 0,
        }
    }

    pub fn set_position(&mut self, position: Position) {
        self.body.position = position;
    }

    /// XP needed for the next level, saturating at `u64::MAX`
    pub fn next_level_exp(&self) -> u64 {
        xp_threshold(self.level).unwrap_or(u64::MAX)
    }

    pub fn add_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Pay `cost` if the hero can afford it
    pub fn spend_gold(&mut self, cost: u64) -> bool {
        match self.gold.checked_sub(cost) {
            Some(left) => {
                self.gold = left;
                true
            }
            None => false,
        }
    }
}

impl Creature for Hero {
    fn sprite(&self) -> &Sprite {
        &self.body.sprite
    }

    fn stats(&self) -> Stats {
        self.body.stats().clone()
    }

    fn position(&self) -> Position {
        self.body.position
    }

    fn hp(&self) -> i32 {
        self.body.hp()
    }

    fn set_hp(&mut self, hp: i32) {
        self.body.set_hp(hp);
    }

    fn max_hp(&self) -> i32 {
        self.body.max_hp()
    }
}

impl Adventurer for Hero {
    fn level(&self) -> u32 {
        self.level
    }

    fn exp(&self) -> u64 {
        self.exp
    }

    fn gain_exp(&mut self, amount: u64) {
        self.exp = self.exp.saturating_add(amount);
    }

    fn gold(&self) -> u64 {
        self.gold
    }

    fn level_up(&mut self) -> Vec<String> {
        let mut messages = Vec::new();
        while xp_threshold(self.level).is_some_and(|threshold| self.exp >= threshold) {
            self.level += 1;
            self.body.add_stat(Stat::Strength, LEVEL_UP_BONUS);
            self.body.add_stat(Stat::Endurance, LEVEL_UP_BONUS);
            self.body.heal_full();
            messages.push(format!("Level up! Reached level {}", self.level));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Hero {
        Hero::new(Stats::default(), Position::new(1, 1))
    }

    #[test]
    fn test_threshold_doubles() {
        assert_eq!(xp_threshold(1), Some(100));
        assert_eq!(xp_threshold(2), Some(200));
        assert_eq!(xp_threshold(3), Some(400));
        assert_eq!(xp_threshold(58), Some(100 << 57));
        assert_eq!(xp_threshold(59), None);
        assert_eq!(xp_threshold(200), None);
    }

    #[test]
    fn test_level_up_stops_at_max_exp() {
        let mut hero = hero();
        hero.gain_exp(u64::MAX);

        let messages = hero.level_up();

        assert_eq!(hero.level, 59);
        assert_eq!(messages.len(), 58);
        assert_eq!(hero.next_level_exp(), u64::MAX);
        assert!(hero.level_up().is_empty());
    }

    #[test]
    fn test_level_up_twice_from_250() {
        let mut hero = hero();
        hero.set_hp(1);
        hero.gain_exp(250);

        let messages = hero.level_up();

        assert_eq!(messages.len(), 2);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.stats().get(Stat::Strength), 5);
        assert_eq!(hero.stats().get(Stat::Endurance), 5);
        assert_eq!(hero.max_hp(), 15);
        assert_eq!(hero.hp(), hero.max_hp());
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut hero = hero();
        hero.gain_exp(99);
        assert!(hero.level_up().is_empty());
        assert_eq!(hero.level, 1);
    }

    #[test]
    fn test_spend_gold() {
        let mut hero = hero();
        hero.add_gold(30);
        assert!(!hero.spend_gold(31));
        assert!(hero.spend_gold(30));
        assert_eq!(hero.gold, 0);
    }
}
