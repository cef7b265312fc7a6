//! # Newsdeck CLI Entry Point
//!
//! This is the main entry point for the Newsdeck TUI application.
//!
//! ## Overview
//!
//! Newsdeck presents a catalog of news sources in a searchable command
//! palette. Sources can be focused (favorited); the focus list is persisted
//! between runs and shown in the main view.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive palette with the built-in catalog
//! newsdeck
//!
//! # Use a custom catalog
//! newsdeck --catalog ./sources.json
//!
//! # Print the sorted catalog and exit
//! newsdeck --list
//!
//! # Print ranked search results and exit
//! newsdeck --search hacker
//!
//! # Toggle focus of a source and exit
//! newsdeck --toggle zhihu
//! ```
//!
//! ## Key Bindings
//!
//! - `Ctrl+K` - Open/close the search palette
//! - `Enter` - Toggle focus of the highlighted source (palette)
//! - `Up` / `Down` - Move selection
//! - `f` - Toggle focus of the selected source (main view)
//! - `?` - Show/hide help
//! - `q` - Quit

use newsdeck::focus::{self, FileFocusStore, FocusStore, MemoryFocusStore};
use newsdeck::logging::{self, LogOutput};
use newsdeck::source::{self, Catalog, SourceId, SourceMap};
use newsdeck::ui::{self, App, Config};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Newsdeck - pick, search and focus news sources from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "newsdeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A command palette for news sources", long_about = None)]
struct Args {
    /// Catalog file to use instead of the built-in catalog
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Focus file to use instead of the one in the data directory
    #[arg(long, value_name = "FILE", conflicts_with = "no_persist")]
    focus_file: Option<PathBuf>,

    /// Keep focus changes in memory only
    #[arg(long)]
    no_persist: bool,

    /// Print the sorted catalog and exit
    #[arg(short, long, conflicts_with_all = ["search", "toggle"])]
    list: bool,

    /// Print sources matching QUERY and exit
    #[arg(short, long, value_name = "QUERY", conflicts_with = "toggle")]
    search: Option<String>,

    /// Toggle focus of source ID and exit
    #[arg(short, long, value_name = "ID")]
    toggle: Option<String>,

    /// Write logs to FILE instead of the data directory
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn is_one_shot(&self) -> bool {
        self.list || self.search.is_some() || self.toggle.is_some() || self.init_config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    install_panic_hook();
    run_application(args).await
}

/// Restore the terminal on panic, then hand over to the previous hook.
/// The hook stays installed for the life of the process.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}

async fn run_application(args: Args) -> Result<()> {
    let config = Config::load();

    let log_output = if args.is_one_shot() {
        LogOutput::Stderr
    } else {
        match args.log_file.clone().map_or_else(logging::default_log_path, Ok) {
            Ok(path) => LogOutput::File(path),
            Err(e) => {
                eprintln!("Warning: Could not determine log file location: {}", e);
                LogOutput::Stderr
            }
        }
    };
    if let Err(e) = logging::setup_logging(&config.log_level, &log_output) {
        eprintln!("Warning: Could not initialize logging: {:#}", e);
    }

    if args.init_config {
        return init_config(&config);
    }

    let sources = load_catalog_sources(&args, &config)?;
    let catalog = Catalog::build(&sources);
    if catalog.is_empty() {
        bail!("Catalog contains no selectable sources");
    }
    tracing::info!(sources = catalog.len(), "catalog ready");

    let mut store = open_focus_store(&args, &config)?;

    let mut stdout = io::stdout();
    if args.list {
        return print_catalog(&mut stdout, &catalog, store.as_ref());
    }
    if let Some(query) = &args.search {
        return print_search(&mut stdout, query, &catalog, store.as_ref());
    }
    if let Some(id) = &args.toggle {
        return toggle_from_cli(&mut stdout, id, &catalog, store.as_mut());
    }

    let mut app = App::new(catalog, store)?;
    if config.open_palette_on_start {
        app.open_palette();
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

fn load_catalog_sources(args: &Args, config: &Config) -> Result<SourceMap> {
    match args.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => source::load_sources(path),
        None => source::builtin_sources(),
    }
}

fn open_focus_store(args: &Args, config: &Config) -> Result<Box<dyn FocusStore>> {
    if args.no_persist {
        return Ok(Box::new(MemoryFocusStore::new()));
    }

    let store = match args.focus_file.clone().or_else(|| config.focus_file.clone()) {
        Some(path) => FileFocusStore::open(path)?,
        None => FileFocusStore::new()?,
    };
    tracing::debug!(path = %store.path().display(), "using focus file");
    Ok(Box::new(store))
}

fn init_config(config: &Config) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    config.save()?;
    println!("Wrote default config: {}", path.display());
    Ok(())
}

fn focus_mark(store: &dyn FocusStore, id: &str) -> &'static str {
    if focus::is_focused(store, id) {
        "★"
    } else {
        " "
    }
}

fn print_catalog(out: &mut impl Write, catalog: &Catalog, store: &dyn FocusStore) -> Result<()> {
    for item in catalog.items() {
        writeln!(
            out,
            "{} {:<24} {}{}",
            focus_mark(store, item.id.as_str()),
            item.id,
            item.name,
            item.title
                .as_deref()
                .map(|title| format!(" ({title})"))
                .unwrap_or_default()
        )?;
    }
    Ok(())
}

fn print_search(
    out: &mut impl Write,
    query: &str,
    catalog: &Catalog,
    store: &dyn FocusStore,
) -> Result<()> {
    let results = source::search(query, catalog);
    if results.is_empty() {
        writeln!(out, "No results")?;
        return Ok(());
    }
    for item in results {
        writeln!(
            out,
            "{} {:<24} {}",
            focus_mark(store, item.id.as_str()),
            item.id,
            item.name
        )?;
    }
    Ok(())
}

fn toggle_from_cli(
    out: &mut impl Write,
    id: &str,
    catalog: &Catalog,
    store: &mut dyn FocusStore,
) -> Result<()> {
    if !catalog.contains(id) {
        bail!("Unknown source: {}", id);
    }

    let id = SourceId::from(id);
    focus::toggle_focus(store, &id)?;

    let state = if focus::is_focused(store, id.as_str()) {
        "focused"
    } else {
        "unfocused"
    };
    writeln!(out, "{} {}", id, state)?;
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = match event_reader.read_event(Duration::from_millis(100))? {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            ui::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
