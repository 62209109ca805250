//! Game module - core game logic and state

mod engine;

pub use engine::{GameEngine, SharedEngine, Subscriber, STEP_COST};
