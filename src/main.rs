use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use storenav::app::{r#loop::run_loop, state::AppState};
use storenav::config::AppConfig;
use storenav::domain::selection::PickerSelection;
use storenav::infrastructure::toml_inventory::TomlInventory;
use storenav::logging::LoggingConfig;

/// Terminal console with a collapsible storage systems panel. The last
/// selected system is printed to stdout as JSON on exit.
#[derive(Debug, Parser)]
#[command(name = "storenav", version, about)]
struct Cli {
    /// Inventory file [default: ~/.config/storenav/inventory.toml]
    #[arg(short, long, env = "STORENAV_INVENTORY")]
    inventory: Option<PathBuf>,

    /// Config file [default: ~/.config/storenav/config.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file [default: ~/.config/storenav/storenav.log]
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Don't reload the inventory when the file changes
    #[arg(long)]
    no_watch: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Everything that can fail on bad input happens before the terminal
    // switches to raw mode.
    let config = AppConfig::load(cli.config.as_deref())?;
    let _log_guard = LoggingConfig::from_env(cli.log_file).init()?;

    let inventory = match cli.inventory {
        Some(path) => TomlInventory::new(path),
        None => TomlInventory::optional(
            TomlInventory::default_path().context("cannot locate home directory")?,
        ),
    };
    tracing::info!(
        inventory = %inventory.path().display(),
        theme = config.theme.label(),
        "starting"
    );

    let app_state = AppState::new(&config);
    let mut selection = PickerSelection::default();

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(
        &mut terminal,
        app_state,
        Arc::new(inventory),
        &mut selection,
        !cli.no_watch,
    )
    .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "console exited with an error");
    }
    res?;

    if let Some(line) = selection.to_json_line()? {
        println!("{line}");
    }
    tracing::info!(selections = selection.count(), "exiting");

    Ok(())
}
