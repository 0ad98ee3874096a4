//! Event System
//!
//! Types and implementations for refresh worker events and logging

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The dashboard sections a worker event can belong to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Section {
    /// Driver championship standings.
    Drivers,
    /// Constructor championship standings.
    Constructors,
    /// Next race metadata.
    NextRace,
}

impl Section {
    /// Human-readable label used in event messages and table titles.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Drivers => "driver standings",
            Section::Constructors => "constructor standings",
            Section::NextRace => "next race info",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    StateChange,
}

/// Represents where the refresh worker currently is in its cycle
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum CycleState {
    /// Fetching the three standings sections
    Fetching,
    /// Sleeping until the next scheduled cycle
    Waiting,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub section: Option<Section>,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Optional state information for state change events
    pub cycle_state: Option<CycleState>,
}

impl Event {
    fn new(
        section: Option<Section>,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self {
            section,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            cycle_state: None,
        }
    }

    pub fn state_change(state: CycleState, msg: String) -> Self {
        Self {
            section: None,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type: EventType::StateChange,
            log_level: LogLevel::Info,
            cycle_state: Some(state),
        }
    }

    pub fn section_with_level(
        section: Section,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Some(section), msg, event_type, log_level)
    }

    pub fn cycle_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(None, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // StateChange events drive the header gauge, not the log panel
        if self.event_type == EventType::StateChange {
            return false;
        }
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_events_always_display() {
        let event = Event::section_with_level(
            Section::Drivers,
            "Driver standings updated".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_state_change_events_hidden_from_log() {
        let event = Event::state_change(CycleState::Waiting, "sleeping".to_string());
        assert!(!event.should_display());
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::Drivers.label(), "driver standings");
        assert_eq!(Section::NextRace.label(), "next race info");
    }
}
