//! Dashboard state management
//!
//! Contains the main dashboard state struct and related types

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{CycleState, Event as WorkerEvent};
use crate::snapshot::Snapshot;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Countdown to the next refresh cycle, derived from worker waiting events.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshInfo {
    /// Length of the current wait in seconds, zero when none is active.
    pub interval_secs: u64,
    /// Seconds elapsed since the wait started.
    pub elapsed_secs: u64,
    /// Whether a refresh is due right now.
    pub refresh_due: bool,
}

/// Dashboard state: the latest snapshot plus presentation-only concerns
/// like the activity log and the refresh countdown.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Latest snapshot published by the refresh worker.
    pub snapshot: Snapshot,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether a new version is available.
    pub update_available: bool,
    /// The latest version string, if known.
    pub latest_version: Option<String>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Current refresh-cycle state from state events
    current_cycle_state: CycleState,
    /// Countdown info for the header gauge
    refresh_info: RefreshInfo,
    /// Track the start time and original wait duration for the current
    /// waiting period
    pub waiting_start_info: Option<(Instant, u64)>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            snapshot: Snapshot::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            update_available: ui_config.update_available,
            latest_version: ui_config.latest_version,
            with_background_color: ui_config.with_background_color,
            tick: 0,
            current_cycle_state: CycleState::Fetching,
            refresh_info: RefreshInfo::default(),
            waiting_start_info: None,
        }
    }

    pub fn cycle_state(&self) -> CycleState {
        self.current_cycle_state
    }

    pub fn set_cycle_state(&mut self, state: CycleState) {
        self.current_cycle_state = state;
    }

    pub fn refresh_info(&self) -> RefreshInfo {
        self.refresh_info
    }

    pub fn set_refresh_info(&mut self, info: RefreshInfo) {
        self.refresh_info = info;
    }

    /// Replace the rendered snapshot with a newer publication.
    pub fn set_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
