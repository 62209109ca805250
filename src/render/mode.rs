//! Render mode detection
//!
//! Picks between ASCII and Unicode glyphs from the locale.

use std::env;

/// Available glyph sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Classic ASCII characters (@ # . etc.)
    /// Works everywhere
    #[default]
    Ascii,

    /// Unicode symbols (☺ █ ▼ etc.)
    Unicode,
}

impl RenderMode {
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Ascii => "ASCII",
            RenderMode::Unicode => "Unicode",
        }
    }

    /// The other mode
    pub fn next(&self) -> RenderMode {
        match self {
            RenderMode::Ascii => RenderMode::Unicode,
            RenderMode::Unicode => RenderMode::Ascii,
        }
    }
}

/// Detect the best rendering mode for the current terminal
pub fn detect_render_mode() -> RenderMode {
    let mode = mode_for_locale(env::var("LC_ALL").ok().or_else(|| env::var("LANG").ok()).as_deref());
    log::info!("Using {} rendering mode", mode.name());
    mode
}

fn mode_for_locale(locale: Option<&str>) -> RenderMode {
    match locale {
        Some(lang) if lang.to_uppercase().contains("UTF") => RenderMode::Unicode,
        _ => RenderMode::Ascii,
    }
}
