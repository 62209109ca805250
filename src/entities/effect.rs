//! Temporary stat overlays
//!
//! An overlay wraps a creature for the length of one encounter. Everything but
//! the stats is read from and written to the wrapped creature; the stats are
//! the base stats with the overlay's adjustments applied on top.

use serde::{Deserialize, Serialize};

use super::{Adventurer, Creature, Sprite, Stat, Stats};
use crate::world::Position;

/// One change to a stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Add(i32),
    Set(i32),
}

/// The available effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Berserk,
    Blessing,
    Weakness,
    Poisoning,
    BestFriend,
}

impl EffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::Berserk => "Berserk",
            EffectKind::Blessing => "Blessing",
            EffectKind::Weakness => "Weakness",
            EffectKind::Poisoning => "Poisoning",
            EffectKind::BestFriend => "Best Friend",
        }
    }

    pub fn adjustments(&self) -> &'static [(Stat, Adjust)] {
        use Adjust::{Add, Set};
        match self {
            EffectKind::Berserk => &[
                (Stat::Strength, Add(5)),
                (Stat::Endurance, Add(5)),
                (Stat::Agility, Add(5)),
                (Stat::Luck, Add(5)),
            ],
            EffectKind::Blessing => &[
                (Stat::Strength, Add(2)),
                (Stat::Endurance, Add(2)),
                (Stat::Agility, Add(2)),
                (Stat::Perception, Add(2)),
                (Stat::Charisma, Add(2)),
                (Stat::Intelligence, Add(2)),
                (Stat::Luck, Add(2)),
            ],
            EffectKind::Weakness => &[
                (Stat::Strength, Add(-3)),
                (Stat::Endurance, Add(-3)),
                (Stat::Agility, Add(-3)),
                (Stat::Intelligence, Add(-3)),
            ],
            EffectKind::Poisoning => &[
                (Stat::Strength, Add(-5)),
                (Stat::Endurance, Add(-10)),
                (Stat::Agility, Add(-5)),
            ],
            EffectKind::BestFriend => &[(Stat::Strength, Set(100)), (Stat::Agility, Set(100))],
        }
    }
}

/// A creature seen through one or more effects
#[derive(Debug)]
pub struct StatOverlay<C> {
    base: C,
    effects: Vec<EffectKind>,
    adjustments: Vec<(Stat, Adjust)>,
}

impl<C: Creature> StatOverlay<C> {
    /// Wrap `base`; the adjustments are fixed here, in the order given
    pub fn new(base: C, effects: impl IntoIterator<Item = EffectKind>) -> Self {
        let effects: Vec<EffectKind> = effects.into_iter().collect();
        let adjustments = effects
            .iter()
            .flat_map(|e| e.adjustments().iter().copied())
            .collect();
        Self {
            base,
            effects,
            adjustments,
        }
    }

    pub fn effects(&self) -> &[EffectKind] {
        &self.effects
    }

    /// Drop the overlay, handing back the wrapped creature
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: Creature> Creature for StatOverlay<C> {
    fn sprite(&self) -> &Sprite {
        self.base.sprite()
    }

    fn stats(&self) -> Stats {
        let mut stats = self.base.stats();
        for (stat, adjust) in &self.adjustments {
            match adjust {
                Adjust::Add(amount) => stats.add(*stat, *amount),
                Adjust::Set(value) => stats.set(*stat, *value),
            }
        }
        stats
    }

    fn position(&self) -> Position {
        self.base.position()
    }

    fn hp(&self) -> i32 {
        self.base.hp()
    }

    fn set_hp(&mut self, hp: i32) {
        self.base.set_hp(hp);
    }

    fn max_hp(&self) -> i32 {
        self.base.max_hp()
    }
}

impl<A: Adventurer> Adventurer for StatOverlay<A> {
    fn level(&self) -> u32 {
        self.base.level()
    }

    fn exp(&self) -> u64 {
        self.base.exp()
    }

    fn gain_exp(&mut self, amount: u64) {
        self.base.gain_exp(amount);
    }

    fn gold(&self) -> u64 {
        self.base.gold()
    }

    fn level_up(&mut self) -> Vec<String> {
        self.base.level_up()
    }
}
