mod app;
mod domain;
mod input;
mod store;
mod tasks;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use store::{ensure_tick_dir, init_local_tick, FileStore};
use tasks::TaskList;

#[derive(Parser)]
#[command(name = "tick")]
#[command(about = "A tiny terminal task list with filters and local persistence", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tick directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .tick directory
            let tick_dir = init_local_tick()?;
            println!("Initialized tick directory: {}", tick_dir.display());
            println!();
            println!("Tick will now use this local directory for task storage.");
            println!("Run 'tick' to start managing tasks.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Ensure tick directory exists
    let tick_dir = ensure_tick_dir()?;

    // Show which directory we're using (before entering the alternate screen)
    eprintln!("Using tick directory: {}", tick_dir.display());

    // Load persisted tasks; absent or corrupt data starts an empty list
    let list = TaskList::load(FileStore::new(tick_dir));
    let mut app = AppState::new(list);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Every mutation already persisted; nothing to save on exit

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Block until the next input event; there are no timers
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press {
                let should_quit = input::handle_key(app, key);
                if should_quit {
                    return Ok(());
                }
            }
        }
    }
}
