//! Main UI Application
//!
//! Lays the screen regions out as a render chain and routes key presses to
//! the engine.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::input::{command_for, Command};
use super::widgets::{HelpWindow, LogWindow, MessageLog, StatusBar, STATUS_HEIGHT};
use crate::game::SharedEngine;
use crate::render::{detect_render_mode, GameSurface, RenderMode, Screen, ScreenHandle, Surface};
use crate::world::Position;

/// Width of the log column on the right
pub const LOG_WIDTH: u16 = 32;

/// Screen rects of the chained regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub game: Rect,
    pub status: Rect,
    pub log: Rect,
}

impl ScreenLayout {
    /// Map top-left, status bar under it, log down the right side
    pub fn for_area(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(LOG_WIDTH)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)])
            .split(columns[0]);

        Self {
            game: left[0],
            status: left[1],
            log: columns[1],
        }
    }
}

/// Build the chain help → map → status → log for `area`
///
/// The help overlay is the root, so it is composited over everything else.
pub fn build_chain(area: Rect, mode: RenderMode, log: Rc<RefCell<MessageLog>>) -> HelpWindow {
    let layout = ScreenLayout::for_area(area);
    let at = |rect: Rect| {
        Position::new(
            i32::from(rect.x.saturating_sub(area.x)),
            i32::from(rect.y.saturating_sub(area.y)),
        )
    };
    let handle = |rect: Rect| ScreenHandle::new(rect.width, rect.height);

    let log_window = LogWindow::new(handle(layout.log), log);
    let status = StatusBar::new(handle(layout.status).with_successor(at(layout.log), log_window));
    let game = GameSurface::new(handle(layout.game).with_successor(at(layout.status), status), mode);
    HelpWindow::new(ScreenHandle::new(area.width, area.height).with_successor(at(layout.game), game))
}

/// Main UI application
pub struct App {
    engine: SharedEngine,
    log: Rc<RefCell<MessageLog>>,
    /// Current glyph set for the map
    render_mode: RenderMode,
    /// Chain laid out for the area it was built for
    chain: Option<(Rect, HelpWindow)>,
}

impl App {
    pub fn new(engine: SharedEngine) -> Result<Self> {
        Self::with_mode(engine, detect_render_mode())
    }

    /// Create the UI and subscribe its log to the engine
    pub fn with_mode(engine: SharedEngine, render_mode: RenderMode) -> Result<Self> {
        let log = Rc::new(RefCell::new(MessageLog::new()));
        engine.try_borrow_mut()?.subscribe(log.clone());

        Ok(Self {
            engine,
            log,
            render_mode,
            chain: None,
        })
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Switch glyph sets; the chain is rebuilt on the next frame
    pub fn cycle_render_mode(&mut self) {
        self.render_mode = self.render_mode.next();
        self.chain = None;
        log::info!("Switched to render mode: {}", self.render_mode.name());
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        let Some(command) = command_for(key) else {
            return Ok(false);
        };

        match command {
            Command::Quit => return Ok(true),
            Command::CycleRenderMode => self.cycle_render_mode(),
            Command::Move(direction) => self.engine.try_borrow_mut()?.move_hero(direction),
            Command::ToggleHelp => self.engine.try_borrow_mut()?.toggle_help(),
            Command::ZoomIn => self.engine.try_borrow_mut()?.zoom_in(),
            Command::ZoomOut => self.engine.try_borrow_mut()?.zoom_out(),
            Command::Restart => self.engine.try_borrow_mut()?.restart(),
        }
        Ok(false)
    }

    /// The chain for `area`, rebuilt and reconnected when the area changed
    fn chain_for(&mut self, area: Rect) -> &mut HelpWindow {
        if matches!(&self.chain, Some((built_for, _)) if *built_for != area) {
            log::debug!("Screen resized to {}x{}, rebuilding layout", area.width, area.height);
            self.chain = None;
        }

        let (_, chain) = self.chain.get_or_insert_with(|| {
            let mut chain = build_chain(area, self.render_mode, self.log.clone());
            chain.connect_engine(self.engine.clone());
            (area, chain)
        });
        chain
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let mut canvas = Surface::new(area.width, area.height);

        match self.chain_for(area).compose(&mut canvas, Position::ORIGIN) {
            Ok(()) => canvas.present(frame.buffer_mut(), area),
            Err(e) => log::error!("Render failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GameConfig, ObjectTemplates};
    use crate::game::GameEngine;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        };
        let engine = GameEngine::new(config, ObjectTemplates::default()).into_shared();
        App::with_mode(engine, RenderMode::Ascii).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().buffer().content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_layout_regions() {
        let layout = ScreenLayout::for_area(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.game, Rect::new(0, 0, 48, 18));
        assert_eq!(layout.status, Rect::new(0, 18, 48, STATUS_HEIGHT));
        assert_eq!(layout.log, Rect::new(48, 0, LOG_WIDTH, 24));
    }

    #[test]
    fn test_frame_shows_every_region() {
        let mut app = app();
        let text = screen_text(&mut app, 80, 24);

        assert!(text.contains('@'));
        assert!(text.contains("Floor 1"));
        assert!(text.contains("Log"));
        assert!(!text.contains("Restart Game"));
    }

    #[test]
    fn test_help_key_shows_overlay() {
        let mut app = app();
        assert!(!app.handle_input(key(KeyCode::Char('h'))).unwrap());

        let text = screen_text(&mut app, 80, 24);

        assert!(text.contains("Restart Game"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(app.handle_input(key(KeyCode::Char('q'))).unwrap());
        assert!(app.handle_input(key(KeyCode::Esc)).unwrap());
        assert!(!app.handle_input(key(KeyCode::Char('x'))).unwrap());
    }

    #[test]
    fn test_engine_messages_reach_log() {
        let app = app();
        app.engine.borrow_mut().notify("Descended to floor 2");
        assert_eq!(app.log.borrow().entries().last(), Some("> Descended to floor 2"));
    }

    #[test]
    fn test_chain_rebuilt_on_resize_and_mode_change() {
        let mut app = app();
        screen_text(&mut app, 80, 24);
        assert_eq!(app.chain.as_ref().map(|(area, _)| *area), Some(Rect::new(0, 0, 80, 24)));

        screen_text(&mut app, 100, 30);
        assert_eq!(app.chain.as_ref().map(|(area, _)| *area), Some(Rect::new(0, 0, 100, 30)));

        app.handle_input(key(KeyCode::Char('m'))).unwrap();
        assert!(app.chain.is_none());
        assert_eq!(app.render_mode(), RenderMode::Unicode);
    }

    #[test]
    fn test_tiny_terminal_does_not_fail() {
        let mut app = app();
        screen_text(&mut app, 5, 3);
        assert!(app.chain.is_some());
    }
}
