//! Help overlay
//!
//! Covers the whole screen. Fully transparent while help is hidden,
//! a dimmed panel listing the controls while it is shown.

use ratatui::{
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::render::{RenderError, Screen, ScreenHandle};

/// Key and action pairs shown in the overlay
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("→", "Move Right"),
    ("←", "Move Left"),
    ("↑", "Move Up"),
    ("↓", "Move Down"),
    ("H", "Show Help"),
    ("+", "Zoom +"),
    ("-", "Zoom -"),
    ("R", "Restart Game"),
    ("M", "Cycle render mode"),
    ("Q / Esc", "Quit"),
];

const PANEL_WIDTH: u16 = 40;
const KEY_COLUMN: usize = 10;
const TINT: Color = Color::Rgb(0, 0, 0);
const FRAME: Color = Color::Rgb(255, 0, 0);
const TEXT: Color = Color::Rgb(128, 128, 255);

/// Fixed-size rect centred in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(row);
    rect
}

/// Root of the render chain
pub struct HelpWindow {
    handle: ScreenHandle,
}

impl HelpWindow {
    pub fn new(handle: ScreenHandle) -> Self {
        Self { handle }
    }
}

impl Screen for HelpWindow {
    fn handle(&self) -> &ScreenHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut ScreenHandle {
        &mut self.handle
    }

    fn paint(&mut self) -> Result<(), RenderError> {
        let show = self.handle.engine()?.try_borrow()?.show_help;
        let surface = self.handle.surface_mut();
        if !show {
            surface.clear();
            return Ok(());
        }
        surface.shade(TINT);

        let lines: Vec<Line> = HELP_ENTRIES
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!(" {:<width$}", key, width = KEY_COLUMN), Style::default().fg(TEXT)),
                    Span::styled(*action, Style::default().fg(TEXT)),
                ])
            })
            .collect();

        let panel = centered(surface.area(), PANEL_WIDTH, lines.len() as u16 + 4);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(FRAME));
        let inner = block.inner(panel);
        surface.render_widget(block, panel);
        surface.render_widget(Paragraph::new(lines), inner.inner(Margin::new(0, 1)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GameConfig, ObjectTemplates};
    use crate::game::{GameEngine, SharedEngine};
    use crate::render::Opacity;

    fn engine() -> SharedEngine {
        GameEngine::new(GameConfig::default(), ObjectTemplates::default()).into_shared()
    }

    fn text(window: &HelpWindow) -> String {
        let surface = window.handle().surface();
        (0..i32::from(surface.height()))
            .map(|y| surface.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_hidden_help_is_transparent() {
        let engine = engine();
        let mut help = HelpWindow::new(ScreenHandle::new(50, 20));
        help.connect_engine(engine);

        help.paint().unwrap();

        let surface = help.handle().surface();
        for y in 0..20 {
            for x in 0..50 {
                assert_eq!(surface.opacity(x, y), Some(Opacity::Clear));
            }
        }
    }

    #[test]
    fn test_shown_help_lists_controls_over_tint() {
        let engine = engine();
        engine.borrow_mut().toggle_help();
        let mut help = HelpWindow::new(ScreenHandle::new(50, 20));
        help.connect_engine(engine);

        help.paint().unwrap();

        let listing = text(&help);
        for (_, action) in HELP_ENTRIES {
            assert!(listing.contains(action), "missing {} in\n{}", action, listing);
        }
        assert_eq!(help.handle().surface().opacity(0, 0), Some(Opacity::Shade));
    }

    #[test]
    fn test_centered_fits_small_area() {
        let rect = centered(Rect::new(0, 0, 10, 4), PANEL_WIDTH, 14);
        assert!(rect.width <= 10 && rect.height <= 4);
    }
}
