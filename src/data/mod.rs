//! Data loading and external game content
//!
//! Configuration and spawn templates come from RON files so floors can be
//! tuned without recompiling.

pub mod config;
pub mod loader;
pub mod objects;

pub use config::{GameConfig, MapConfig};
pub use loader::{load_ron, DataError, DataManager};
pub use objects::{default_object_templates, AllyTemplate, EnemyTemplate, ObjectTemplates, SpawnCount};
