//! Tilecrawl - Entry Point
//!
//! This is the main executable that initializes the terminal,
//! sets up the game, and runs the main loop.

use std::fs::{File, OpenOptions};
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tilecrawl::data::DataManager;
use tilecrawl::game::GameEngine;
use tilecrawl::ui::App;

/// Target frames per second for the game loop
const TARGET_FPS: u64 = 30;
const FRAME_TIME: Duration = Duration::from_millis(1000 / TARGET_FPS);

fn open_log() -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("tilecrawl.log")
}

fn main() -> Result<()> {
    // Log to a file so the TUI is not disturbed
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match open_log() {
        Ok(file) => {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            logger.filter_level(log::LevelFilter::Off);
        }
    }
    logger.init();

    log::info!("Starting Tilecrawl v{}", env!("CARGO_PKG_VERSION"));

    let data = DataManager::new();
    let engine = GameEngine::new(data.config, data.objects).into_shared();
    let mut app = App::new(engine.clone())?;
    engine.try_borrow_mut()?.notify("Welcome! Press H for help");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the game loop
    let result = run_game_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Report any errors
    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Tilecrawl shut down cleanly");
    result
}

/// Main game loop
fn run_game_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        terminal.draw(|frame| app.render(frame))?;

        // Wait for input until the next frame is due
        let timeout = FRAME_TIME.saturating_sub(frame_start.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press {
                    match app.handle_input(key) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => log::warn!("Input handling error: {}", e),
                    }
                }
            }
        }
    }

    Ok(())
}
