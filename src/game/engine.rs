//! Game engine
//!
//! Owns the floor, the hero and everything on the map. Renderers read it;
//! input handling and object interactions write it between frames.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::{GameConfig, ObjectTemplates};
use crate::entities::{spawn_objects_for_floor, EffectKind, Enemy, Hero, StatOverlay, WorldObject};
use crate::world::{generate_floor, Direction, Map};

/// Engine handle shared by the render chain and the game loop
pub type SharedEngine = Rc<RefCell<GameEngine>>;

/// Score lost per step taken
pub const STEP_COST: f64 = 0.02;

/// Receives every notification the engine emits
pub trait Subscriber {
    fn update(&mut self, message: &str);
}

/// The main game struct that holds all game data
pub struct GameEngine {
    /// Current floor; empty until one is generated
    pub map: Map,
    /// Terminal cells per tile side
    pub sprite_size: u16,
    pub score: f64,
    /// Dungeon depth, starting at 1
    pub level: u32,
    pub show_help: bool,
    pub objects: Vec<WorldObject>,
    pub hero: Hero,
    /// Effects waiting to wrap the hero in the next encounter
    pub effects: Vec<EffectKind>,
    config: GameConfig,
    templates: ObjectTemplates,
    rng: StdRng,
    subscribers: Vec<Rc<RefCell<dyn Subscriber>>>,
}

impl GameEngine {
    /// Create an engine and generate the first floor
    pub fn new(config: GameConfig, templates: ObjectTemplates) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let hero = Hero::new(config.hero_stats.clone(), Map::empty().start_pos);

        let mut engine = Self {
            map: Map::empty(),
            sprite_size: config.clamped_sprite_size(),
            score: 0.0,
            level: 1,
            show_help: false,
            objects: Vec::new(),
            hero,
            effects: Vec::new(),
            config,
            templates,
            rng,
            subscribers: Vec::new(),
        };
        engine.load_floor();
        engine
    }

    pub fn into_shared(self) -> SharedEngine {
        Rc::new(RefCell::new(self))
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Register an observer for notifications
    pub fn subscribe(&mut self, subscriber: Rc<RefCell<dyn Subscriber>>) {
        self.subscribers.push(subscriber);
    }

    /// Send a message to every subscriber
    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("notify: {}", message);
        for subscriber in &self.subscribers {
            match subscriber.try_borrow_mut() {
                Ok(mut subscriber) => subscriber.update(&message),
                Err(_) => log::warn!("Subscriber busy, dropped message: {}", message),
            }
        }
    }

    /// Generate a floor for the current level and put the hero on its start
    pub fn load_floor(&mut self) {
        self.map = generate_floor(&mut self.rng, &self.config.map);
        self.objects = spawn_objects_for_floor(&mut self.rng, &self.map, &self.templates, self.level);
        self.hero.set_position(self.map.start_pos);
        log::info!("Generated floor {} ({}x{})", self.level, self.map.cols(), self.map.rows());
    }

    /// Move the hero one cell if the target is walkable, then interact
    pub fn move_hero(&mut self, direction: Direction) {
        let target = self.hero.body.position.step(direction);
        if self.map.is_walkable(target.x, target.y) {
            self.hero.set_position(target);
            self.score -= STEP_COST;
        }
        self.interact();
    }

    /// Interact with every object on the hero's cell
    ///
    /// Objects leave the map before their interaction runs.
    pub fn interact(&mut self) {
        let here = self.hero.body.position;
        let (hits, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.objects)
            .into_iter()
            .partition(|object| object.position() == here);
        self.objects = rest;

        for object in hits {
            object.interact(self);
        }
    }

    /// Fight `enemy` with the pending effects and its hex layered over the hero
    pub fn encounter(&mut self, enemy: &Enemy) {
        let effects: Vec<EffectKind> = self.effects.drain(..).chain(enemy.hex).collect();
        let names: Vec<&str> = effects.iter().map(|e| e.name()).collect();
        let under = names.join(", ");

        let messages = {
            let mut hero = StatOverlay::new(&mut self.hero, effects);
            enemy.fight(&mut hero, &mut self.rng)
        };

        if !under.is_empty() {
            self.notify(format!("Fought the {} under {}", enemy.name, under));
        }
        for message in messages {
            self.notify(message);
        }
    }

    pub fn grant_effect(&mut self, effect: EffectKind) {
        self.effects.push(effect);
    }

    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    /// Go one floor deeper
    pub fn descend(&mut self) {
        self.level += 1;
        self.load_floor();
        self.notify(format!("Descended to floor {}", self.level));
    }

    /// Start over from the first floor with a fresh hero
    pub fn restart(&mut self) {
        self.level = 1;
        self.score = 0.0;
        self.effects.clear();
        self.hero = Hero::new(self.config.hero_stats.clone(), self.map.start_pos);
        self.load_floor();
        self.notify("Game restarted");
    }

    pub fn zoom_in(&mut self) {
        self.sprite_size = (self.sprite_size + 1).min(self.config.max_sprite_size.max(1));
    }

    pub fn zoom_out(&mut self) {
        self.sprite_size = self.sprite_size.saturating_sub(1).max(self.config.min_sprite_size.max(1));
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
