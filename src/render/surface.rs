//! Off-screen cell surfaces
//!
//! A surface is a ratatui [`Buffer`] plus a per-cell opacity mask, which is
//! what lets screen regions be painted separately and composited later.

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::world::Position;

/// How a cell combines with what is underneath when composited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    /// Leaves the destination untouched
    Clear,
    /// Keeps the destination glyph but replaces its background
    Shade,
    /// Overwrites the destination
    Solid,
}

/// A rectangular grid of cells that can be painted and composited
#[derive(Debug, Clone)]
pub struct Surface {
    buffer: Buffer,
    opacity: Vec<Opacity>,
}

impl Surface {
    /// A fully transparent surface
    pub fn new(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        Self {
            opacity: vec![Opacity::Clear; area.width as usize * area.height as usize],
            buffer: Buffer::empty(area),
        }
    }

    pub fn width(&self) -> u16 {
        self.buffer.area.width
    }

    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    pub fn area(&self) -> Rect {
        self.buffer.area
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (w, h) = (i32::from(self.width()), i32::from(self.height()));
        if x < 0 || y < 0 || x >= w || y >= h {
            None
        } else {
            Some((y * w + x) as usize)
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.buffer.content[i])
    }

    pub fn opacity(&self, x: i32, y: i32) -> Option<Opacity> {
        self.index(x, y).map(|i| self.opacity[i])
    }

    /// Symbols of one row, transparent cells read as spaces
    pub fn row_text(&self, y: i32) -> String {
        (0..i32::from(self.width()))
            .map(|x| match (self.cell(x, y), self.opacity(x, y)) {
                (Some(cell), Some(op)) if op != Opacity::Clear => cell.symbol().to_string(),
                _ => " ".to_string(),
            })
            .collect()
    }

    /// Paint every cell solid with `style`
    pub fn fill(&mut self, style: Style) {
        for (cell, op) in self.buffer.content.iter_mut().zip(self.opacity.iter_mut()) {
            cell.reset();
            cell.set_style(style);
            *op = Opacity::Solid;
        }
    }

    /// Make every cell transparent
    pub fn clear(&mut self) {
        for (cell, op) in self.buffer.content.iter_mut().zip(self.opacity.iter_mut()) {
            cell.reset();
            *op = Opacity::Clear;
        }
    }

    /// Turn the whole surface into a translucent tint
    pub fn shade(&mut self, bg: Color) {
        for (cell, op) in self.buffer.content.iter_mut().zip(self.opacity.iter_mut()) {
            cell.reset();
            cell.set_bg(bg);
            *op = Opacity::Shade;
        }
    }

    /// Set one cell; off-surface coordinates are ignored
    ///
    /// Style colors left unset keep the cell's current ones.
    pub fn put(&mut self, x: i32, y: i32, glyph: char, style: Style) {
        if let Some(i) = self.index(x, y) {
            let cell = &mut self.buffer.content[i];
            cell.set_char(glyph);
            cell.set_style(style);
            self.opacity[i] = Opacity::Solid;
        }
    }

    /// Fill a `size` x `size` block whose top-left corner is `(x, y)`
    pub fn put_block(&mut self, x: i32, y: i32, size: u16, glyph: char, style: Style) {
        let size = i32::from(size);
        for dy in 0..size {
            for dx in 0..size {
                self.put(x + dx, y + dy, glyph, style);
            }
        }
    }

    /// Write text left to right from `(x, y)`, clipped at the edges
    pub fn print(&mut self, x: i32, y: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, style);
        }
    }

    /// Render a ratatui widget into `area`
    ///
    /// Painted cells become solid. Blank cells over a shaded region stay
    /// shaded so panels keep their tint.
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        let area = area.intersection(self.area());
        if area.is_empty() {
            return;
        }
        widget.render(area, &mut self.buffer);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(i) = self.index(i32::from(x), i32::from(y)) {
                    let blank = self.buffer.content[i].symbol() == " ";
                    if !blank || self.opacity[i] == Opacity::Clear {
                        self.opacity[i] = Opacity::Solid;
                    }
                }
            }
        }
    }

    /// Composite `src` onto this surface with its top-left corner at `at`
    pub fn blit(&mut self, src: &Surface, at: Position) {
        for sy in 0..i32::from(src.height()) {
            for sx in 0..i32::from(src.width()) {
                let Some(si) = src.index(sx, sy) else { continue };
                let Some(di) = self.index(at.x + sx, at.y + sy) else { continue };

                match src.opacity[si] {
                    Opacity::Clear => {}
                    Opacity::Solid => {
                        self.buffer.content[di] = src.buffer.content[si].clone();
                        self.opacity[di] = Opacity::Solid;
                    }
                    Opacity::Shade => {
                        if self.opacity[di] == Opacity::Clear {
                            self.buffer.content[di] = src.buffer.content[si].clone();
                            self.opacity[di] = Opacity::Shade;
                        } else {
                            self.buffer.content[di].bg = src.buffer.content[si].bg;
                        }
                    }
                }
            }
        }
    }

    /// Copy into a terminal buffer at `area`; transparent cells come out blank
    pub fn present(&self, target: &mut Buffer, area: Rect) {
        let area = area.intersection(target.area);
        for y in 0..area.height.min(self.height()) {
            for x in 0..area.width.min(self.width()) {
                let Some(i) = self.index(i32::from(x), i32::from(y)) else { continue };
                if let Some(cell) = target.cell_mut((area.x + x, area.y + y)) {
                    match self.opacity[i] {
                        Opacity::Clear => cell.reset(),
                        _ => *cell = self.buffer.content[i].clone(),
                    }
                }
            }
        }
    }
}
