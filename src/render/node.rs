//! Render node chain
//!
//! Every screen region owns a [`ScreenHandle`]: its own surface plus an
//! optional successor region. Drawing a node paints it, then resolves the
//! successor chain and composites each successor onto the shared canvas.
//! The root is composited last, so it ends up on top.

use std::cell::BorrowError;

use ratatui::style::{Color, Style};
use thiserror::Error;

use super::{Surface, WindowError};
use crate::game::SharedEngine;
use crate::world::Position;

/// Default panel background
pub const WOOD: Color = Color::Rgb(153, 92, 0);

/// Errors raised while drawing a chain
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("screen drawn before an engine was connected")]
    NotConnected,
    #[error("shared state is busy: {0}")]
    Busy(#[from] BorrowError),
    #[error("viewport does not fit the map: {0}")]
    Viewport(#[from] WindowError),
}

/// State shared by every node in a chain
pub struct ScreenHandle {
    surface: Surface,
    successor: Option<Box<dyn Screen>>,
    next_coord: Position,
    engine: Option<SharedEngine>,
}

impl ScreenHandle {
    /// A wooden panel with no successor
    pub fn new(width: u16, height: u16) -> Self {
        let mut surface = Surface::new(width, height);
        surface.fill(Style::default().bg(WOOD));
        Self {
            surface,
            successor: None,
            next_coord: Position::ORIGIN,
            engine: None,
        }
    }

    /// Attach `successor`, composited at `at` on the canvas
    pub fn with_successor(mut self, at: Position, successor: impl Screen + 'static) -> Self {
        self.successor = Some(Box::new(successor));
        self.next_coord = at;
        self
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn successor(&self) -> Option<&dyn Screen> {
        self.successor.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.engine.is_some()
    }

    /// The connected engine
    ///
    /// Returned as its own handle so a node can hold an engine borrow while
    /// it paints into its surface.
    pub fn engine(&self) -> Result<SharedEngine, RenderError> {
        self.engine.clone().ok_or(RenderError::NotConnected)
    }

    /// Connect this node and every successor after it
    pub fn connect_engine(&mut self, engine: SharedEngine) {
        if let Some(next) = self.successor.as_mut() {
            next.connect_engine(engine.clone());
        }
        self.engine = Some(engine);
    }

    /// Resolve the successor chain and composite it onto `canvas`
    pub fn draw_successor(&mut self, canvas: &mut Surface) -> Result<(), RenderError> {
        if let Some(next) = self.successor.as_mut() {
            next.draw(canvas)?;
            canvas.blit(next.handle().surface(), self.next_coord);
        }
        Ok(())
    }
}

/// A screen region in the render chain
pub trait Screen {
    fn handle(&self) -> &ScreenHandle;
    fn handle_mut(&mut self) -> &mut ScreenHandle;

    /// Paint this node's own surface
    fn paint(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    /// Paint, then draw the rest of the chain onto `canvas`
    fn draw(&mut self, canvas: &mut Surface) -> Result<(), RenderError> {
        self.paint()?;
        self.handle_mut().draw_successor(canvas)
    }

    fn connect_engine(&mut self, engine: SharedEngine) {
        self.handle_mut().connect_engine(engine);
    }

    /// Draw the chain rooted here and put this node on top at `at`
    fn compose(&mut self, canvas: &mut Surface, at: Position) -> Result<(), RenderError> {
        self.draw(canvas)?;
        canvas.blit(self.handle().surface(), at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GameConfig, ObjectTemplates};
    use crate::game::GameEngine;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Paints one glyph across its surface and records when it painted
    struct Stamp {
        handle: ScreenHandle,
        glyph: char,
        journal: Rc<RefCell<Vec<char>>>,
    }

    impl Stamp {
        fn new(glyph: char, width: u16, journal: &Rc<RefCell<Vec<char>>>) -> Self {
            Self {
                handle: ScreenHandle::new(width, 1),
                glyph,
                journal: journal.clone(),
            }
        }

        fn then(mut self, at: Position, next: impl Screen + 'static) -> Self {
            self.handle = self.handle.with_successor(at, next);
            self
        }
    }

    impl Screen for Stamp {
        fn handle(&self) -> &ScreenHandle {
            &self.handle
        }

        fn handle_mut(&mut self) -> &mut ScreenHandle {
            &mut self.handle
        }

        fn paint(&mut self) -> Result<(), RenderError> {
            self.journal.borrow_mut().push(self.glyph);
            let width = i32::from(self.handle.surface().width());
            let glyph = self.glyph;
            for x in 0..width {
                self.handle.surface_mut().put(x, 0, glyph, Style::default());
            }
            Ok(())
        }
    }

    fn engine() -> SharedEngine {
        GameEngine::new(GameConfig::default(), ObjectTemplates::default()).into_shared()
    }

    #[test]
    fn test_chain_composites_deepest_first() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let c = Stamp::new('c', 3, &journal);
        let b = Stamp::new('b', 2, &journal).then(Position::ORIGIN, c);
        let mut a = Stamp::new('a', 1, &journal).then(Position::ORIGIN, b);

        let mut canvas = Surface::new(4, 1);
        a.compose(&mut canvas, Position::ORIGIN).unwrap();

        // Each later blit covers the earlier ones where they overlap
        assert_eq!(canvas.row_text(0), "abc ");
        assert_eq!(*journal.borrow(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_successor_lands_at_its_offset() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut root = Stamp::new('r', 1, &journal).then(Position::new(2, 0), Stamp::new('x', 2, &journal));

        let mut canvas = Surface::new(5, 1);
        root.draw(&mut canvas).unwrap();

        assert_eq!(canvas.row_text(0), "  xx ");
    }

    #[test]
    fn test_connect_reaches_whole_chain() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let tail = Stamp::new('c', 1, &journal);
        let middle = Stamp::new('b', 1, &journal).then(Position::ORIGIN, tail);
        let mut root = Stamp::new('a', 1, &journal).then(Position::ORIGIN, middle);
        assert!(!root.handle().is_connected());

        root.connect_engine(engine());

        let mut node: Option<&dyn Screen> = Some(&root);
        let mut seen = 0;
        while let Some(screen) = node {
            assert!(screen.handle().is_connected());
            seen += 1;
            node = screen.handle().successor();
        }
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_engine_requires_connection() {
        let handle = ScreenHandle::new(1, 1);
        assert!(matches!(handle.engine(), Err(RenderError::NotConnected)));
    }
}
