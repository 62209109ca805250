use std::cell::RefCell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratatui::layout::Rect;

use tilecrawl::data::{GameConfig, ObjectTemplates};
use tilecrawl::game::GameEngine;
use tilecrawl::render::{RenderMode, Screen, SlidingWindow, Surface};
use tilecrawl::ui::build_chain;
use tilecrawl::ui::widgets::MessageLog;
use tilecrawl::world::Position;

fn bench_slide(c: &mut Criterion) {
    let mut window = SlidingWindow::new((0, 200), 40).expect("valid window");

    c.bench_function("sliding_window_slide_to", |b| {
        let mut x = 0;
        b.iter(|| {
            x = (x + 7) % 240;
            window.slide_to(black_box(x));
            black_box(window.left())
        })
    });
}

fn bench_compose(c: &mut Criterion) {
    let config = GameConfig {
        seed: Some(12345),
        ..GameConfig::default()
    };
    let engine = GameEngine::new(config, ObjectTemplates::default()).into_shared();
    let log = Rc::new(RefCell::new(MessageLog::new()));
    let area = Rect::new(0, 0, 120, 40);
    let mut chain = build_chain(area, RenderMode::Unicode, log);
    chain.connect_engine(engine);

    c.bench_function("compose_120x40", |b| {
        b.iter(|| {
            let mut canvas = Surface::new(area.width, area.height);
            chain.compose(&mut canvas, Position::ORIGIN).expect("chain draws");
            black_box(canvas)
        })
    });
}

criterion_group!(benches, bench_slide, bench_compose);
criterion_main!(benches);
