//! Ally actions
//!
//! Each action runs against the engine when the hero steps onto the ally.
//! Templates pick an action by name through [`AllyActionKind`].

use std::rc::Rc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{AllyAction, Creature, EffectKind, Stat};
use crate::game::GameEngine;

/// Named actions that templates can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllyActionKind {
    RestoreHp,
    ApplyBlessing,
    RemoveEffect,
    AddGold,
    Befriend,
    Descend,
}

impl AllyActionKind {
    pub fn action(self) -> AllyAction {
        match self {
            AllyActionKind::RestoreHp => Rc::new(restore_hp),
            AllyActionKind::ApplyBlessing => Rc::new(apply_blessing),
            AllyActionKind::RemoveEffect => Rc::new(remove_effect),
            AllyActionKind::AddGold => Rc::new(add_gold),
            AllyActionKind::Befriend => Rc::new(befriend),
            AllyActionKind::Descend => Rc::new(descend),
        }
    }
}

/// Price of a service on the current floor, discounted by intelligence
fn service_cost(engine: &GameEngine, base: f64) -> u64 {
    let price = (base * 1.5_f64.powi(engine.level as i32)) as i64;
    let discount = 2 * i64::from(engine.hero.stats().get(Stat::Intelligence));
    (price - discount).max(0) as u64
}

pub fn restore_hp(engine: &mut GameEngine) {
    engine.score += 0.1;
    engine.hero.body.heal_full();
    engine.notify("HP restored");
}

pub fn apply_blessing(engine: &mut GameEngine) {
    let cost = service_cost(engine, 20.0);
    if engine.hero.spend_gold(cost) {
        engine.score += 0.2;
        engine.grant_effect(EffectKind::Blessing);
        engine.notify(format!("Blessing applied for {} gold", cost));
    } else {
        engine.score -= 0.1;
        engine.notify(format!("A blessing costs {} gold", cost));
    }
}

pub fn remove_effect(engine: &mut GameEngine) {
    if engine.effects.is_empty() {
        engine.notify("Nothing to cleanse");
        return;
    }

    let cost = service_cost(engine, 10.0);
    if engine.hero.spend_gold(cost) {
        engine.clear_effects();
        engine.notify(format!("Effects removed for {} gold", cost));
    } else {
        engine.notify(format!("Cleansing costs {} gold", cost));
    }
}

pub fn add_gold(engine: &mut GameEngine) {
    if engine.rng().gen_range(1..=10) == 1 {
        engine.score -= 0.05;
        engine.grant_effect(EffectKind::Weakness);
        engine.notify("You were cursed");
    } else {
        engine.score += 0.1;
        let found = engine.rng().gen_range(10..=1000) as f64;
        let gold = (found * 1.1_f64.powi(engine.level as i32 - 1)) as u64;
        engine.hero.add_gold(gold);
        engine.notify(format!("{} gold added", gold));
    }
}

pub fn befriend(engine: &mut GameEngine) {
    engine.grant_effect(EffectKind::BestFriend);
    engine.notify("A friend will fight beside you");
}

pub fn descend(engine: &mut GameEngine) {
    engine.descend();
}
