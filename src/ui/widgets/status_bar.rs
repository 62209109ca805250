//! Hero status panel
//!
//! Health and experience gauges plus the numbers that matter between fights.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::entities::{Creature, Stat};
use crate::render::{RenderError, Screen, ScreenHandle, WOOD};

/// Rows the status panel needs, borders included
pub const STATUS_HEIGHT: u16 = 6;

const GAUGE_WIDTH: u16 = 20;

/// Fraction of a bar to fill
///
/// Always within `0.0..=1.0`; a non-positive `max` gives an empty bar.
pub fn fill_ratio(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() || !max.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// Bottom panel showing the hero's vitals
pub struct StatusBar {
    handle: ScreenHandle,
}

impl StatusBar {
    pub fn new(handle: ScreenHandle) -> Self {
        Self { handle }
    }
}

impl Screen for StatusBar {
    fn handle(&self) -> &ScreenHandle {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut ScreenHandle {
        &mut self.handle
    }

    fn paint(&mut self) -> Result<(), RenderError> {
        let engine = self.handle.engine()?;
        let engine = engine.try_borrow()?;
        let hero = &engine.hero;
        let stats = hero.stats();
        let position = hero.position();
        let text = Style::default().fg(Color::Black);

        let surface = self.handle.surface_mut();
        surface.fill(Style::default().bg(WOOD));

        let area = surface.area();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Floor {} ", engine.level))
            .border_style(text);
        let inner = block.inner(area);
        surface.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 4])
            .split(inner);

        surface.render_widget(
            Paragraph::new(format!(
                "Hero at ({}, {})   Level {}   Gold {}",
                position.x, position.y, hero.level, hero.gold
            ))
            .style(text),
            rows[0],
        );

        let bars = [
            (
                "HP",
                Color::Red,
                fill_ratio(f64::from(hero.hp()), f64::from(hero.max_hp())),
                format!("{}/{}", hero.hp(), hero.max_hp()),
                format!("{} {}", Stat::Strength.short_name(), stats.get(Stat::Strength)),
            ),
            (
                "Exp",
                Color::Green,
                fill_ratio(hero.exp as f64, hero.next_level_exp() as f64),
                format!("{}/{}", hero.exp, hero.next_level_exp()),
                format!("{} {}   Score {:.4}", Stat::Luck.short_name(), stats.get(Stat::Luck), engine.score),
            ),
        ];

        for (row, (name, color, ratio, label, extra)) in rows[1..3].iter().zip(bars) {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Length(GAUGE_WIDTH),
                    Constraint::Length(2),
                    Constraint::Min(0),
                ])
                .split(*row);

            surface.render_widget(Paragraph::new(name).style(text), cols[0]);
            surface.render_widget(
                Gauge::default()
                    .gauge_style(Style::default().fg(color).bg(Color::Black))
                    .ratio(ratio)
                    .label(label),
                cols[1],
            );
            surface.render_widget(Paragraph::new(extra).style(text), cols[3]);
        }

        if !engine.effects.is_empty() {
            let names: Vec<&str> = engine.effects.iter().map(|e| e.name()).collect();
            surface.render_widget(
                Paragraph::new(format!("Next fight: {}", names.join(", "))).style(text),
                rows[3],
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GameConfig, ObjectTemplates};
    use crate::entities::EffectKind;
    use crate::game::{GameEngine, SharedEngine};

    fn painted(engine: &SharedEngine) -> String {
        let mut bar = StatusBar::new(ScreenHandle::new(70, STATUS_HEIGHT));
        bar.connect_engine(engine.clone());
        bar.paint().unwrap();
        let surface = bar.handle().surface();
        (0..i32::from(STATUS_HEIGHT))
            .map(|y| surface.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_fill_ratio_is_clamped() {
        assert_eq!(fill_ratio(5.0, 10.0), 0.5);
        assert_eq!(fill_ratio(15.0, 10.0), 1.0);
        assert_eq!(fill_ratio(-3.0, 10.0), 0.0);
        assert_eq!(fill_ratio(3.0, 0.0), 0.0);
        assert_eq!(fill_ratio(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_shows_hero_numbers() {
        let engine = GameEngine::new(GameConfig::default(), ObjectTemplates::default()).into_shared();
        engine.borrow_mut().score = -0.04;

        let text = painted(&engine);

        assert!(text.contains("Floor 1"), "{}", text);
        assert!(text.contains("Hero at (1, 1)"), "{}", text);
        assert!(text.contains("45/45"), "{}", text);
        assert!(text.contains("0/100"), "{}", text);
        assert!(text.contains("Str 20"), "{}", text);
        assert!(text.contains("Score -0.0400"), "{}", text);
        assert!(!text.contains("Next fight"), "{}", text);
    }

    #[test]
    fn test_lists_pending_effects() {
        let engine = GameEngine::new(GameConfig::default(), ObjectTemplates::default()).into_shared();
        engine.borrow_mut().grant_effect(EffectKind::Berserk);
        engine.borrow_mut().grant_effect(EffectKind::BestFriend);

        let text = painted(&engine);

        assert!(text.contains("Next fight: Berserk, Best Friend"), "{}", text);
    }
}
