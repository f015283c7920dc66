use anyhow::Result;
use ratatui::{backend::TestBackend, Terminal};
use storenav::app::action::Action;
use storenav::app::reducer::update;
use storenav::app::state::{AppMode, AppState};
use storenav::app::ui;
use storenav::domain::models::{HealthStatus, StorageSystem};

/// Renders the console in every panel state at every terminal size up to
/// 100x50, to catch layout panics.
fn main() -> Result<()> {
    let mut app_state = AppState::default();
    let systems = (0..60)
        .map(|i| {
            let status = match i % 5 {
                0 => HealthStatus::Healthy,
                1 => HealthStatus::Warning,
                2 => HealthStatus::Critical,
                3 => HealthStatus::Unrecognized("rebuilding".to_string()),
                _ => HealthStatus::Unrecognized(String::new()),
            };
            StorageSystem::new(
                i.to_string(),
                format!("storage-array-with-a-long-name-{i:03}"),
                status,
            )
        })
        .collect();
    update(&mut app_state, Action::SystemsLoaded(systems));
    update(&mut app_state, Action::HighlightPrev);

    let scenarios: [(&str, fn(&mut AppState)); 5] = [
        ("expanded", |_| {}),
        ("searching", |s| {
            update(s, Action::FocusSearch);
            update(s, Action::SetSearchTerm("array".to_string()));
        }),
        ("no matches", |s| {
            update(s, Action::SetSearchTerm("zzz".to_string()));
        }),
        ("collapsed", |s| {
            update(s, Action::ToggleCollapsed);
        }),
        ("error", |s| {
            update(
                s,
                Action::ErrorOccurred(
                    "inventory.toml: a long parse error that has to be clipped by the bar"
                        .to_string(),
                ),
            );
            update(s, Action::SelectSystem(3));
        }),
    ];

    for (name, setup) in scenarios {
        setup(&mut app_state);
        for width in 0..100 {
            for height in 0..50 {
                let mut terminal = Terminal::new(TestBackend::new(width, height))?;
                terminal.draw(|f| ui::draw(f, &mut app_state))?;
            }
        }
        let mode = if app_state.mode == AppMode::Search {
            "search"
        } else {
            "normal"
        };
        println!("{name}: ok ({mode} mode)");
    }

    println!("Layout verification completed successfully!");
    Ok(())
}
