//! Dashboard state update logic
//!
//! Contains the methods for updating dashboard state from events

use super::state::{DashboardState, RefreshInfo};
use crate::events::{Event as WorkerEvent, EventType};

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with a new tick, draining queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }

        // Update the countdown shown in the header gauge
        self.update_refresh_countdown();
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        if event.event_type == EventType::StateChange {
            if let Some(state) = event.cycle_state {
                self.set_cycle_state(state);
            }
        }

        // Waiting messages carry the length of the pause until the next cycle
        if event.msg.contains("refresh in") {
            if let Some(seconds) = Self::extract_wait_seconds(&event.msg) {
                let is_same_message = match &self.waiting_start_info {
                    Some((_, prev_wait)) => *prev_wait == seconds,
                    None => false,
                };

                if !is_same_message {
                    self.waiting_start_info = Some((Instant::now(), seconds));
                }
            }
        }
    }

    /// Update the refresh countdown based on the current waiting state
    fn update_refresh_countdown(&mut self) {
        if let Some((start_time, original_secs)) = &self.waiting_start_info {
            let elapsed_secs = start_time.elapsed().as_secs();
            let remaining_secs = original_secs.saturating_sub(elapsed_secs);

            self.set_refresh_info(RefreshInfo {
                interval_secs: *original_secs,
                elapsed_secs,
                refresh_due: remaining_secs == 0,
            });

            // Clear expired countdown
            if remaining_secs == 0 {
                self.waiting_start_info = None;
            }
        } else {
            self.set_refresh_info(RefreshInfo {
                interval_secs: 0,
                elapsed_secs: 0,
                refresh_due: true,
            });
        }
    }

    /// Extract wait seconds from message. Expected format:
    /// "Standings refresh in (300) seconds"
    fn extract_wait_seconds(msg: &str) -> Option<u64> {
        let start = msg.find("(")?;
        let end = msg[start..].find(") seconds")?;
        msg[start + 1..start + end].parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::CycleState;
    use crate::ui::app::UIConfig;

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Production,
            Instant::now(),
            UIConfig::new(false, false, None),
        )
    }

    #[test]
    fn test_extract_wait_seconds() {
        assert_eq!(
            DashboardState::extract_wait_seconds("Standings refresh in (300) seconds"),
            Some(300)
        );
        assert_eq!(DashboardState::extract_wait_seconds("no countdown"), None);
    }

    #[test]
    fn test_waiting_event_starts_countdown() {
        let mut state = state();
        state.add_event(WorkerEvent::state_change(
            CycleState::Waiting,
            "Standings refresh in (300) seconds".to_string(),
        ));
        state.update();

        assert_eq!(state.cycle_state(), CycleState::Waiting);
        assert_eq!(state.refresh_info().interval_secs, 300);
        assert!(!state.refresh_info().refresh_due);
    }
}
