//! Entity model
//!
//! The hero, enemies, allies, and the temporary effects layered over them.

pub mod sprite;
pub mod stats;
pub mod creature;
pub mod hero;
pub mod enemy;
pub mod ally;
pub mod actions;
pub mod effect;
pub mod object;
pub mod spawner;

pub use sprite::Sprite;
pub use stats::{Stat, Stats};
pub use creature::{Adventurer, Body, Creature};
pub use hero::{xp_threshold, Hero};
pub use enemy::Enemy;
pub use ally::{Ally, AllyAction};
pub use actions::AllyActionKind;
pub use effect::{Adjust, EffectKind, StatOverlay};
pub use object::{Drawable, WorldObject};
pub use spawner::spawn_objects_for_floor;
