//! Friendly interactables: chests, altars, stairs and the like

use std::fmt;
use std::rc::Rc;

use super::Sprite;
use crate::game::GameEngine;
use crate::world::Position;

/// Callback run when the hero steps onto an ally
pub type AllyAction = Rc<dyn Fn(&mut GameEngine)>;

/// A friendly object on the map
#[derive(Clone)]
pub struct Ally {
    pub name: String,
    pub sprite: Sprite,
    pub position: Position,
    action: AllyAction,
}

impl Ally {
    pub fn new(name: impl Into<String>, sprite: Sprite, position: Position, action: AllyAction) -> Self {
        Self {
            name: name.into(),
            sprite,
            position,
            action,
        }
    }

    /// Run the injected action against the engine (and through it, the hero)
    pub fn interact(&self, engine: &mut GameEngine) {
        (self.action)(engine);
    }
}

impl fmt::Debug for Ally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ally")
            .field("name", &self.name)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
