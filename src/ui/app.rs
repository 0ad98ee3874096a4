//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::snapshot::Snapshot;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc, watch};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub update_available: bool,
    pub latest_version: Option<String>,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        update_available: bool,
        latest_version: Option<String>,
    ) -> Self {
        Self {
            with_background_color,
            update_available,
            latest_version,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the standings sections.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives log events from the refresh worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives snapshot publications from the refresh worker.
    snapshot_receiver: watch::Receiver<Snapshot>,

    /// Broadcasts shutdown signal to the worker.
    shutdown_sender: broadcast::Sender<()>,

    /// UI configuration.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        snapshot_receiver: watch::Receiver<Snapshot>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            snapshot_receiver,
            shutdown_sender,
            ui_config,
        }
    }

    /// Switch from the splash screen to the dashboard, seeding it with the
    /// latest snapshot.
    fn enter_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.environment.clone(),
            self.start_time,
            self.ui_config.clone(),
        );
        state.set_snapshot(self.snapshot_receiver.borrow_and_update().clone());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Pick up the latest snapshot publication
        if app.snapshot_receiver.has_changed().unwrap_or(false) {
            let snapshot = app.snapshot_receiver.borrow_and_update().clone();
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.set_snapshot(snapshot);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    // Send shutdown signal to the worker
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                // Any other key press skips the splash screen
                if let Screen::Splash = app.current_screen {
                    app.enter_dashboard();
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
