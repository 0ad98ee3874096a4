//! Headless mode execution
//!
//! The plain-terminal rendering loop: the cursor is hidden once at
//! startup, every snapshot change redraws the full frame (clearing the
//! screen first), and Ctrl+C is the only way out.

use super::{
    SessionData,
    messages::{
        print_session_exit_success, print_session_shutdown, print_session_starting,
        print_session_weather,
    },
};
use crate::pretty::print_cmd_info;
use crate::render::{AnsiRenderer, RendererConfig};
use crate::version::checker::check_for_new_version;
use crate::weather::current_weather_line;
use crossterm::{cursor, execute};
use std::error::Error;
use std::io;

pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);
    print_session_weather(&current_weather_line().await);

    let current_version = env!("CARGO_PKG_VERSION");
    if let Some(message) = check_for_new_version(current_version).await {
        print_cmd_info!("Version check", "{}", message);
    }

    // Hide the cursor for the lifetime of the refresh loop
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    let mut renderer = AnsiRenderer::new(stdout, RendererConfig::default());

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Draw the initial frame, then redraw on every snapshot change
    let frame = session.snapshot_receiver.borrow_and_update().clone();
    renderer.render_snapshot(&frame)?;

    loop {
        tokio::select! {
            changed = session.snapshot_receiver.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = session.snapshot_receiver.borrow_and_update().clone();
                renderer.render_snapshot(&frame)?;
            }
            // Drain worker log events; the TUI log panel is their only
            // consumer and it is not running in this mode
            Some(_event) = session.event_receiver.recv() => {}
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    execute!(io::stdout(), cursor::Show)?;
    println!();

    print_session_shutdown();
    for handle in session.join_handles {
        handle.abort();
    }
    print_session_exit_success();

    Ok(())
}
