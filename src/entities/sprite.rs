//! Visual representation of tiles and entities

use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};

use crate::render::RenderMode;

/// Glyphs and colors for one drawable thing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    /// Character used in ASCII mode
    pub ascii: char,
    /// Character used in Unicode mode
    pub unicode: char,
    /// Foreground color (RGB)
    pub fg: (u8, u8, u8),
    /// Background color (RGB), None keeps whatever is underneath
    #[serde(default)]
    pub bg: Option<(u8, u8, u8)>,
}

impl Sprite {
    pub fn new(ascii: char, unicode: char, fg: (u8, u8, u8)) -> Self {
        Self {
            ascii,
            unicode,
            fg,
            bg: None,
        }
    }

    pub fn with_bg(mut self, bg: (u8, u8, u8)) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn hero() -> Self {
        Self::new('@', '☺', (255, 255, 200))
    }

    /// Get the character for the current render mode
    pub fn glyph(&self, mode: RenderMode) -> char {
        match mode {
            RenderMode::Ascii => self.ascii,
            RenderMode::Unicode => self.unicode,
        }
    }

    pub fn style(&self) -> Style {
        let style = Style::default().fg(rgb(self.fg));
        match self.bg {
            Some(bg) => style.bg(rgb(bg)),
            None => style,
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
