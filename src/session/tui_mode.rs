//! TUI mode execution
//!
//! Handles terminal setup and cleanup around the ratatui application.

use super::{
    SessionData,
    messages::{
        print_session_exit_success, print_session_shutdown, print_session_starting,
        print_session_weather,
    },
};
use crate::ui::{self, UIConfig};
use crate::version::checker::check_for_new_version;
use crate::weather::current_weather_line;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.environment);
    print_session_weather(&current_weather_line().await);

    // Check for new version and get version info
    let current_version = env!("CARGO_PKG_VERSION");
    let (version_update_available, latest_version) =
        if let Some(message) = check_for_new_version(current_version).await {
            // Extract version from message - format: "New version v0.2.0 is available..."
            let latest = message.split_whitespace().nth(2).map(|v| v.to_string());
            (true, latest)
        } else {
            (false, None)
        };

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it
    let ui_config = UIConfig::new(with_background, version_update_available, latest_version);

    let app = ui::App::new(
        session.environment.clone(),
        session.event_receiver,
        session.snapshot_receiver,
        session.shutdown_sender.clone(),
        ui_config,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    result?;

    print_session_shutdown();
    for handle in session.join_handles {
        handle.abort();
    }
    print_session_exit_success();

    Ok(())
}
