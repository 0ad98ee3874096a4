//! Core worker utilities

use crate::events::{Event, EventType, Section};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for the refresh worker
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_section_event(
        &self,
        section: Section,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::section_with_level(
                section, message, event_type, log_level,
            ))
            .await;
    }

    pub async fn send_cycle_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::cycle_with_level(message, event_type, log_level))
            .await;
    }
}
