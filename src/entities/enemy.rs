//! Hostile creatures

use rand::Rng;

use super::{Adventurer, Body, Creature, EffectKind, Sprite, Stat, Stats};
use crate::world::Position;

/// Multiplier on the strength ratio for the damage ceiling
pub const DAMAGE_SCALE: f64 = 50.0;

/// An enemy waiting on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub name: String,
    pub body: Body,
    /// XP awarded for the encounter
    pub experience: u64,
    /// Effect the enemy inflicts on the hero for the encounter
    pub hex: Option<EffectKind>,
}

impl Enemy {
    pub fn new(name: impl Into<String>, sprite: Sprite, stats: Stats, experience: u64, position: Position) -> Self {
        Self {
            name: name.into(),
            body: Body::new(sprite, stats, position),
            experience,
            hex: None,
        }
    }

    pub fn with_hex(mut self, hex: EffectKind) -> Self {
        self.hex = Some(hex);
        self
    }

    /// Highest damage this enemy can roll against `hero_strength`
    pub fn damage_ceiling(&self, hero_strength: i32) -> i64 {
        let ratio = if hero_strength == 0 {
            0
        } else {
            (self.body.stats().get(Stat::Strength) as f64 / hero_strength as f64 * DAMAGE_SCALE) as i64
        };
        ratio.max(1)
    }

    /// Resolve an encounter against `hero`, returning the messages it produced
    ///
    /// The hero gains this enemy's experience, takes a random hit that never
    /// drops HP below 1, and then runs its level-up sequence.
    pub fn fight<A: Adventurer>(&self, hero: &mut A, rng: &mut impl Rng) -> Vec<String> {
        hero.gain_exp(self.experience);

        let ceiling = self.damage_ceiling(hero.stats().get(Stat::Strength));
        let rolled = rng.gen_range(0..=ceiling);
        let damage = rolled.min(i64::from(hero.hp()) - 1).max(0) as i32;
        hero.set_hp(hero.hp() - damage);

        let mut messages = vec![
            format!("The {} hits you for {} damage", self.name, damage),
            format!("Earned {} XP", self.experience),
        ];
        messages.extend(hero.level_up());
        messages
    }
}

impl Creature for Enemy {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Hero;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn enemy(strength: i32, experience: u64) -> Enemy {
        let stats = Stats::with_overrides(&BTreeMap::from([(Stat::Strength, strength)]));
        Enemy::new("rat", Sprite::new('r', 'r', (150, 120, 90)), stats, experience, Position::new(2, 2))
    }

    #[test]
    fn test_damage_ceiling() {
        assert_eq!(enemy(2, 0).damage_ceiling(1), 100);
        assert_eq!(enemy(1, 0).damage_ceiling(100), 1);
        assert_eq!(enemy(1, 0).damage_ceiling(0), 1);
        assert_eq!(enemy(1, 0).damage_ceiling(-2), 1);
    }

    #[test]
    fn test_fight_never_kills() {
        let mut rng = StdRng::seed_from_u64(3);
        for strength in 1..40 {
            for hero_strength in 1..10 {
                let mut stats = Stats::default();
                stats.set(Stat::Strength, hero_strength);
                let mut hero = Hero::new(stats, Position::new(1, 1));
                enemy(strength, 0).fight(&mut hero, &mut rng);
                assert!(hero.hp() >= 1);
            }
        }
    }

    #[test]
    fn test_fight_at_one_hp_deals_nothing() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut hero = Hero::new(Stats::default(), Position::new(1, 1));
        hero.set_hp(1);
        enemy(50, 0).fight(&mut hero, &mut rng);
        assert_eq!(hero.hp(), 1);
    }

    #[test]
    fn test_fight_awards_xp_and_levels() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut hero = Hero::new(Stats::default(), Position::new(1, 1));

        let messages = enemy(1, 250).fight(&mut hero, &mut rng);

        assert_eq!(hero.exp, 250);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.hp(), hero.max_hp());
        assert!(messages.iter().any(|m| m == "Earned 250 XP"));
        assert_eq!(messages.iter().filter(|m| m.starts_with("Level up")).count(), 2);
    }
}
