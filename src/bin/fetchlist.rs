//! Fetchlist TUI (Terminal User Interface)
//!
//! Composition root: picks the fetch source from the command line, then runs
//! the terminal front end until the user quits.

use anyhow::Context;
use clap::{ArgGroup, Parser};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fetchlist::tui::{App, Screen, ui::ui};
use fetchlist::{FetchSource, ItemProcessor, Settings};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fetchlist", about = "Browse a remote item list grouped by list id")]
#[command(group(ArgGroup::new("mock").args(["mock_with_data", "mock_empty_data", "mock_network_error"])))]
struct Args {
    /// Serve a small built-in dataset instead of hitting the network
    #[arg(long)]
    mock_with_data: bool,

    /// Serve an empty item list
    #[arg(long)]
    mock_empty_data: bool,

    /// Fail every fetch with a simulated network error
    #[arg(long)]
    mock_network_error: bool,

    /// Settings file (endpoint URL, request timeout)
    #[arg(long, default_value = "fetchlist.json")]
    config: PathBuf,

    /// File the log output is appended to
    #[arg(long, default_value = "fetchlist.log")]
    log_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    fetchlist::init(&args.log_file)
        .with_context(|| format!("opening log file {}", args.log_file.display()))?;

    let settings = Settings::load(&args.config)
        .with_context(|| format!("loading settings from {}", args.config.display()))?;

    let source = FetchSource::from_flags(
        args.mock_with_data,
        args.mock_empty_data,
        args.mock_network_error,
    );
    tracing::info!("Using {}", source.label());

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let fetcher = source.build_fetcher(&settings)?;

    let mut app = App::new(ItemProcessor::new(fetcher), runtime.handle().clone());
    app.start_load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("running terminal UI")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.poll_load();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('r') | KeyCode::F(5) => {
                        app.retry();
                    }
                    KeyCode::Down | KeyCode::Char('j') if app.current_screen == Screen::List => {
                        app.next();
                    }
                    KeyCode::Up | KeyCode::Char('k') if app.current_screen == Screen::List => {
                        app.previous();
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
