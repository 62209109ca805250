//! UI widgets
//!
//! Screen regions chained behind the map viewport.

pub mod status_bar;
pub mod message_log;
pub mod help;

pub use status_bar::{fill_ratio, StatusBar, STATUS_HEIGHT};
pub use message_log::{LogWindow, MessageLog, LOG_CAPACITY};
pub use help::{HelpWindow, HELP_ENTRIES};
