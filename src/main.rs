mod app;
mod collision;
mod entities;
mod error;
mod event;
mod fleet;
mod game;
mod geometry;
mod scores;
mod settings;
mod stats;
mod ui;

use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::thread;
use std::time::Instant;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use app::App;
use event::{Event, EventHandler};
use scores::HighScoreFile;
use settings::{beside_executable, Settings};

const LOG_FILE: &str = "invasion.log";

fn main() -> io::Result<()> {
    let settings_path = Settings::default_path();
    let (settings, config_error) = match Settings::load(&settings_path) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    init_logging(&settings.log_level);
    if let Some(e) = config_error {
        tracing::warn!("using default settings: {e}");
    }
    tracing::info!(
        "starting: screen={}x{} frame_ms={} settings={}",
        settings.screen_width,
        settings.screen_height,
        settings.frame_ms,
        settings_path.display()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    // Key releases drive the ship's movement flags where the terminal can report them.
    let reports_releases = supports_keyboard_enhancement().unwrap_or(false);
    if reports_releases {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(settings, HighScoreFile::default_location(), reports_releases);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    if reports_releases {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => tracing::info!("quit: high_score={}", app.session.stats.high_score),
        Err(e) => tracing::error!("terminal error: {e}"),
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let frame_interval = app.session.settings.frame_interval();
    let events = EventHandler::new(frame_interval);

    loop {
        let frame_start = Instant::now();

        for ev in events.drain() {
            match ev {
                Event::Key(key) => app.on_key(key),
                Event::Click { column, row } => app.on_click(column, row),
            }
        }
        if app.should_quit {
            return Ok(());
        }

        app.on_tick(frame_start);
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(rest) = frame_interval.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

/// Log to a file beside the executable; stdout belongs to the terminal UI.
fn init_logging(level: &str) {
    let Ok(file) = File::create(beside_executable(LOG_FILE)) else { return };
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
