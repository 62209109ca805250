//! Message log
//!
//! [`MessageLog`] subscribes to engine notifications and keeps the most
//! recent ones; [`LogWindow`] shows them in the right-hand column.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::game::Subscriber;
use crate::render::{RenderError, Screen, ScreenHandle, WOOD};

/// Messages kept before the oldest is dropped
pub const LOG_CAPACITY: usize = 30;

/// Bounded FIFO of formatted notifications
#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: String) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Subscriber for MessageLog {
    fn update(&mut self, message: &str) {
        self.push(format!("> {}", message));
    }
}

/// Screen region listing the log top to bottom
pub struct LogWindow {
    handle: ScreenHandle,
    log: Rc<RefCell<MessageLog>>,
}

impl LogWindow {
    pub fn new(handle: ScreenHandle, log: Rc<RefCell<MessageLog>>) -> Self {
        Self { handle, log }
    }
}

impl Screen for LogWindow {
    fn handle(&self) -> &ScreenHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut ScreenHandle {
        &mut self.handle
    }

    fn paint(&mut self) -> Result<(), RenderError> {
        let log = self.log.try_borrow()?;
        let surface = self.handle.surface_mut();
        surface.fill(Style::default().bg(WOOD));

        let area = surface.area();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Log ")
            .border_style(Style::default().fg(Color::Black));
        let inner = block.inner(area);

        // Newest entries stay in view once the log outgrows the panel
        let skip = log.len().saturating_sub(usize::from(inner.height));
        let lines: Vec<Line> = log.entries().skip(skip).map(Line::from).collect();

        surface.render_widget(Paragraph::new(lines).style(Style::default().fg(Color::Black)), inner);
        surface.render_widget(block, area);
        Ok(())
    }
}
