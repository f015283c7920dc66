use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::inventory::InventorySource;
use crate::domain::selection::SelectionHandler;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const DEBOUNCE: Duration = Duration::from_millis(500);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    source: Arc<dyn InventorySource>,
    selection: &mut dyn SelectionHandler,
    watch: bool,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    // Dropping the watcher stops it, so it lives as long as the loop
    let (action_tx, action_rx) = mpsc::channel(100);
    let _watcher = if watch {
        source
            .watch_path()
            .map(|path| watch_inventory(&path, action_tx.clone()))
            .transpose()?
            .flatten()
    } else {
        None
    };

    run_loop_with_events(
        terminal, app_state, source, selection, event_rx, action_tx, action_rx,
    )
    .await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    source: Arc<dyn InventorySource>,
    selection: &mut dyn SelectionHandler,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
    action_tx: mpsc::Sender<Action>,
    mut action_rx: mpsc::Receiver<Action>,
) -> Result<()> {
    let mut interval = interval(TICK_RATE);

    // Initial Load
    let initial = reducer::update(&mut app_state, Action::ReloadInventory);
    if let Some(command) = initial {
        handle_command(command, source.clone(), selection, action_tx.clone());
    }

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(command) = command {
                handle_command(command, source.clone(), selection, action_tx.clone());
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    source: Arc<dyn InventorySource>,
    selection: &mut dyn SelectionHandler,
    tx: mpsc::Sender<Action>,
) {
    match command {
        // Runs inline so the handler sees selections in click order
        Command::Select(system) => selection.on_select(&system),
        Command::LoadInventory => {
            tokio::spawn(async move {
                let action = match source.load().await {
                    Ok(systems) => Action::SystemsLoaded(systems),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to load inventory");
                        Action::ErrorOccurred(format!("{e:#}"))
                    }
                };
                let _ = tx.send(action).await;
            });
        }
    }
}

/// Watches the inventory file's directory and sends a debounced
/// `ReloadInventory` when the file changes. Editors often replace files
/// instead of writing in place, so the file itself is not watched.
fn watch_inventory(
    path: &Path,
    action_tx: mpsc::Sender<Action>,
) -> Result<Option<RecommendedWatcher>> {
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Ok(None);
    };
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "inventory directory missing, not watching");
        return Ok(None);
    }
    let file_name = file_name.to_os_string();

    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            if event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(file_name.as_os_str()))
            {
                let _ = notify_tx.try_send(());
            }
        }
    })?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    tracing::debug!(path = %path.display(), "watching inventory");

    tokio::spawn(async move {
        let mut pending = false;

        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(DEBOUNCE) => {
                        if action_tx.send(Action::ReloadInventory).await.is_err() {
                            break;
                        }
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    Ok(Some(watcher))
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
