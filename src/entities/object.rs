//! Things that sit on the map and react when the hero steps on them

use super::{Ally, Creature, Enemy, Hero, Sprite};
use crate::game::GameEngine;
use crate::render::GameSurface;
use crate::world::Position;

/// Something the viewport can paint
pub trait Drawable {
    fn draw(&self, display: &mut GameSurface);
}

/// An ally or an enemy placed on the current floor
#[derive(Debug, Clone)]
pub enum WorldObject {
    Ally(Ally),
    Enemy(Enemy),
}

impl WorldObject {
    pub fn name(&self) -> &str {
        match self {
            WorldObject::Ally(ally) => &ally.name,
            WorldObject::Enemy(enemy) => &enemy.name,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            WorldObject::Ally(ally) => ally.position,
            WorldObject::Enemy(enemy) => enemy.position(),
        }
    }

    pub fn sprite(&self) -> &Sprite {
        match self {
            WorldObject::Ally(ally) => &ally.sprite,
            WorldObject::Enemy(enemy) => enemy.sprite(),
        }
    }

    /// Resolve the hero stepping onto this object
    pub fn interact(&self, engine: &mut GameEngine) {
        log::debug!("Hero interacts with {} at {:?}", self.name(), self.position());
        match self {
            WorldObject::Ally(ally) => ally.interact(engine),
            WorldObject::Enemy(enemy) => engine.encounter(enemy),
        }
    }
}

impl Drawable for WorldObject {
    fn draw(&self, display: &mut GameSurface) {
        match self {
            WorldObject::Ally(ally) => ally.draw(display),
            WorldObject::Enemy(enemy) => enemy.draw(display),
        }
    }
}

impl Drawable for Enemy {
    fn draw(&self, display: &mut GameSurface) {
        display.draw_object(self.sprite(), self.position());
    }
}

impl Drawable for Ally {
    fn draw(&self, display: &mut GameSurface) {
        display.draw_object(&self.sprite, self.position);
    }
}

impl Drawable for Hero {
    fn draw(&self, display: &mut GameSurface) {
        display.draw_object(self.sprite(), self.position());
    }
}

impl From<Ally> for WorldObject {
    fn from(ally: Ally) -> Self {
        WorldObject::Ally(ally)
    }
}

impl From<Enemy> for WorldObject {
    fn from(enemy: Enemy) -> Self {
        WorldObject::Enemy(enemy)
    }
}
