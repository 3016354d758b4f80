mod input;
mod ui;

use aura_chronicles::auras::flavor_source_for;
use aura_chronicles::build_info;
use aura_chronicles::core::config::DEFAULT_LOG_FILTER;
use aura_chronicles::core::{
    AutosaveTracker, GameConfig, GameSession, LOG_FILE_NAME, TICK_INTERVAL_MS,
};
use aura_chronicles::persistence::{FileStore, SaveManager};
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{handle_game_input, InputResult, UiState};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = GameConfig::from_env();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Aura Chronicles - Terminal RPG\n");
                println!("Usage: aura-chronicles [command]\n");
                println!("Commands:");
                println!("  reset      Delete saved progress");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Environment:");
                println!("  AURA_SAVE_DIR             Save and log directory");
                println!("  GEMINI_API_KEY            Enables generated aura names");
                println!("  AURA_FLAVOR_MODEL         Model for aura names");
                println!("  AURA_FLAVOR_ENDPOINT      API base URL for aura names");
                println!("  AURA_FLAVOR_TIMEOUT_SECS  Request timeout for aura names");
                println!("  RUST_LOG                  Log filter (default: info)");
                std::process::exit(0);
            }
            "reset" => {
                let mut manager = SaveManager::new(FileStore::for_config(&config)?);
                match manager.clear() {
                    Ok(()) => {
                        println!("Save data reset.");
                        std::process::exit(0);
                    }
                    Err(e) => {
                        eprintln!("Could not reset save data: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'aura-chronicles --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let store = FileStore::for_config(&config)?;
    init_logging(&config, store.dir());
    tracing::info!(version = %build_info::version_line(), remote_flavor = config.has_flavor_credential(), "starting");

    let mut manager = SaveManager::new(store);
    let player = manager.load_or_default();
    let mut autosave = AutosaveTracker::synced_with(&player);
    let mut session = GameSession::new(player, flavor_source_for(&config));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut session, &mut manager, &mut autosave);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    if let Err(e) = manager.save(&session.player) {
        eprintln!("Warning: could not save progress: {}", e);
    }
    println!("Goodbye!");

    result
}

/// Sends `tracing` output to a log file next to the save, so the terminal
/// UI stays clean. Logging is skipped if the file cannot be opened.
fn init_logging(config: &GameConfig, dir: &Path) {
    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_game(
    terminal: &mut GameTerminal,
    session: &mut GameSession,
    manager: &mut SaveManager<FileStore>,
    autosave: &mut AutosaveTracker,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut ui_state = UiState::default();
    let mut last_saved: Option<DateTime<Local>> = None;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, session, &ui_state, last_saved))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    match handle_game_input(key_event, session, &mut ui_state, &mut rng) {
                        InputResult::Continue => {}
                        InputResult::Quit => return Ok(()),
                        InputResult::ManualSave => match manager.manual_save(session) {
                            Ok(()) => last_saved = Some(Local::now()),
                            Err(e) => {
                                tracing::warn!(error = %e, "manual save failed");
                                session.notify(e.to_string());
                            }
                        },
                        InputResult::ResetProgress => {
                            if let Err(e) = manager.reset_progress(session) {
                                tracing::warn!(error = %e, "reset failed");
                                session.notify(e.to_string());
                            }
                            *autosave = AutosaveTracker::synced_with(&session.player);
                            last_saved = None;
                        }
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= Duration::from_millis(TICK_INTERVAL_MS) {
            session.tick(elapsed.as_secs_f64());
            last_tick = Instant::now();
        }

        if autosave.should_save(&session.player) {
            match manager.save(&session.player) {
                Ok(()) => last_saved = Some(Local::now()),
                Err(e) => tracing::warn!(error = %e, "autosave failed"),
            }
        }
    }
}
