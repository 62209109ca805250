//! World module
//!
//! Contains positions, map data structures, tiles, and procedural generation.

pub mod position;
pub mod map;
pub mod tile;
pub mod generation;

pub use position::{Direction, Position};
pub use map::Map;
pub use tile::TileType;
pub use generation::generate_floor;
