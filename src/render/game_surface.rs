//! Map viewport
//!
//! Follows the hero with one sliding window per axis and paints the visible
//! part of the floor, then every object and the hero on top.

use ratatui::style::{Color, Style};

use super::{RenderError, RenderMode, Screen, ScreenHandle, SlidingWindow, WindowError};
use crate::entities::{Creature, Drawable, Sprite};
use crate::world::{Map, Position};

/// Background behind and beyond the floor
const VOID: Color = Color::Rgb(0, 0, 0);
/// Shown while no floor is loaded
const PLACEHOLDER: Color = Color::Rgb(255, 255, 255);

/// The screen region that shows the map
pub struct GameSurface {
    handle: ScreenHandle,
    /// Top-left visible map cell
    shift: Position,
    mode: RenderMode,
    tile_size: u16,
}

impl GameSurface {
    pub fn new(handle: ScreenHandle, mode: RenderMode) -> Self {
        Self {
            handle,
            shift: Position::ORIGIN,
            mode,
            tile_size: 1,
        }
    }

    pub fn shift(&self) -> Position {
        self.shift
    }

    /// Visible tiles along each axis, never zero
    fn tiles_across(&self) -> (i32, i32) {
        let surface = self.handle.surface();
        let size = self.tile_size.max(1);
        (
            i32::from(surface.width() / size).max(1),
            i32::from(surface.height() / size).max(1),
        )
    }

    /// Put the viewport over `map` so that `focus` is as centred as the
    /// map edges allow
    pub fn calculate_shift(&mut self, map: &Map, focus: Position) -> Result<Position, WindowError> {
        let (across, down) = self.tiles_across();
        let mut window_x = SlidingWindow::new((0, map.cols()), across)?;
        let mut window_y = SlidingWindow::new((0, map.rows()), down)?;
        window_x.slide_to(focus.x);
        window_y.slide_to(focus.y);

        self.shift = Position::new(window_x.left(), window_y.left());
        Ok(self.shift)
    }

    /// Paint the visible tiles; cells past the map edge stay dark
    pub fn draw_map(&mut self, map: &Map) {
        let size = self.tile_size;
        let step = i32::from(size);
        let (across, down) = self.tiles_across();
        let shift = self.shift;
        let mode = self.mode;

        let surface = self.handle.surface_mut();
        surface.fill(Style::default().bg(VOID));
        for j in 0..down {
            for i in 0..across {
                if let Some(tile) = map.get_tile(shift.x + i, shift.y + j) {
                    let sprite = tile.sprite();
                    surface.put_block(i * step, j * step, size, sprite.glyph(mode), sprite.style());
                }
            }
        }
    }

    /// Paint `sprite` over the map cell `at`; anything off screen is clipped
    pub fn draw_object(&mut self, sprite: &Sprite, at: Position) {
        let screen = at.to_screen(self.shift, i32::from(self.tile_size));
        let glyph = sprite.glyph(self.mode);
        self.handle
            .surface_mut()
            .put_block(screen.x, screen.y, self.tile_size, glyph, sprite.style());
    }
}

impl Screen for GameSurface {
    fn handle(&self) -> &ScreenHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut ScreenHandle {
        &mut self.handle
    }

    fn paint(&mut self) -> Result<(), RenderError> {
        let engine = self.handle.engine()?;
        let engine = engine.try_borrow()?;
        self.tile_size = engine.sprite_size.max(1);

        if engine.map.is_empty() {
            self.handle.surface_mut().fill(Style::default().bg(PLACEHOLDER));
            return Ok(());
        }

        self.calculate_shift(&engine.map, engine.hero.position())?;
        self.draw_map(&engine.map);
        for object in &engine.objects {
            object.draw(self);
        }
        engine.hero.draw(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GameConfig, ObjectTemplates};
    use crate::entities::{Enemy, Stats};
    use crate::game::{GameEngine, SharedEngine};
    use crate::render::Surface;

    fn engine_on(rows: &[&str], hero: Position) -> SharedEngine {
        let mut engine = GameEngine::new(GameConfig::default(), ObjectTemplates::default());
        engine.map = Map::from_rows(rows);
        engine.objects.clear();
        engine.hero.set_position(hero);
        engine.sprite_size = 1;
        engine.into_shared()
    }

    fn viewport(width: u16, height: u16, engine: &SharedEngine) -> GameSurface {
        let mut surface = GameSurface::new(ScreenHandle::new(width, height), RenderMode::Ascii);
        surface.connect_engine(engine.clone());
        surface
    }

    const CORRIDOR: [&str; 3] = ["####################", "....................", "####################"];

    #[test]
    fn test_viewport_follows_hero() {
        let engine = engine_on(&CORRIDOR, Position::new(10, 1));
        let mut view = viewport(5, 3, &engine);

        view.paint().unwrap();

        assert_eq!(view.shift(), Position::new(8, 0));
        assert_eq!(view.handle().surface().row_text(0), "#####");
        assert_eq!(view.handle().surface().row_text(1), "..@..");
    }

    #[test]
    fn test_viewport_pins_at_map_edge() {
        let engine = engine_on(&CORRIDOR, Position::new(19, 1));
        let mut view = viewport(5, 3, &engine);

        view.paint().unwrap();

        assert_eq!(view.shift(), Position::new(15, 0));
        assert_eq!(view.handle().surface().row_text(1), "....@");
    }

    #[test]
    fn test_objects_are_offset_by_shift() {
        let engine = engine_on(&CORRIDOR, Position::new(10, 1));
        let rat = Enemy::new("rat", Sprite::new('r', 'r', (1, 1, 1)), Stats::default(), 1, Position::new(12, 1));
        let far = Enemy::new("rat", Sprite::new('r', 'r', (1, 1, 1)), Stats::default(), 1, Position::new(1, 1));
        engine.borrow_mut().objects.push(rat.into());
        engine.borrow_mut().objects.push(far.into());
        let mut view = viewport(5, 3, &engine);

        view.paint().unwrap();

        assert_eq!(view.handle().surface().row_text(1), "..@.r");
    }

    #[test]
    fn test_tiles_scale_with_sprite_size() {
        let engine = engine_on(&["###", "#.#", "###"], Position::new(1, 1));
        engine.borrow_mut().sprite_size = 2;
        let mut view = viewport(4, 4, &engine);

        view.paint().unwrap();

        let surface = view.handle().surface();
        assert_eq!(surface.row_text(0), "####");
        assert_eq!(surface.row_text(2), "##@@");
        assert_eq!(surface.row_text(3), "##@@");
    }

    #[test]
    fn test_small_map_leaves_dark_margin() {
        let engine = engine_on(&["###", "#.#", "###"], Position::new(1, 1));
        let mut view = viewport(6, 3, &engine);

        view.paint().unwrap();

        let surface = view.handle().surface();
        assert_eq!(surface.row_text(1), "#@#   ");
        assert_eq!(surface.cell(5, 1).map(|c| c.bg), Some(VOID));
    }

    #[test]
    fn test_empty_map_shows_placeholder() {
        let engine = engine_on(&[], Position::new(1, 1));
        let mut view = viewport(3, 2, &engine);

        view.paint().unwrap();

        let surface = view.handle().surface();
        assert_eq!(surface.cell(2, 1).map(|c| c.bg), Some(PLACEHOLDER));
    }

    #[test]
    fn test_unconnected_viewport_fails() {
        let mut view = GameSurface::new(ScreenHandle::new(3, 3), RenderMode::Ascii);
        let mut canvas = Surface::new(3, 3);
        assert!(matches!(view.draw(&mut canvas), Err(RenderError::NotConnected)));
    }

    #[test]
    fn test_busy_engine_fails() {
        let engine = engine_on(&CORRIDOR, Position::new(1, 1));
        let mut view = viewport(3, 3, &engine);
        let _guard = engine.borrow_mut();
        assert!(matches!(view.paint(), Err(RenderError::Busy(_))));
    }
}
