//! User Interface module
//!
//! Terminal UI using ratatui, drawn through the render chain.

pub mod app;
pub mod widgets;
pub mod input;

pub use app::{build_chain, App, ScreenLayout};
pub use input::{command_for, Command};
