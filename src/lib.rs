//! Tilecrawl - A tile-based terminal dungeon crawler
//!
//! Walk the hero through random floors, fight what lives there, and take
//! whatever help the allies offer on the way down.

pub mod game;
pub mod world;
pub mod entities;
pub mod ui;
pub mod render;
pub mod data;

// Re-export commonly used types
pub use game::{GameEngine, SharedEngine};
pub use world::map::Map;
