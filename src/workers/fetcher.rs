//! Per-section fetching with failure isolation
//!
//! Every fetch and every parse resolves to a `SectionStatus`; nothing in
//! here returns an error to the caller. A section that fails only degrades
//! its own slice of the dashboard.

use super::core::EventSender;
use crate::api::StandingsApi;
use crate::error_classifier::ErrorClassifier;
use crate::events::{EventType, Section};
use crate::logging::LogLevel;
use crate::snapshot::SectionStatus;
use crate::standings::{
    ConstructorStanding, DriverStanding, NextRaceInfo, parse_constructor_standings,
    parse_driver_standings, parse_next_race,
};

pub struct SectionFetcher {
    api: Box<dyn StandingsApi>,
    classifier: ErrorClassifier,
    event_sender: EventSender,
}

impl SectionFetcher {
    pub fn new(api: Box<dyn StandingsApi>, event_sender: EventSender) -> Self {
        Self {
            api,
            classifier: ErrorClassifier::new(),
            event_sender,
        }
    }

    /// Fetch and decode the driver standings section.
    pub async fn driver_standings(&self) -> SectionStatus<Vec<DriverStanding>> {
        let Some(raw) = self.fetch_raw(Section::Drivers).await else {
            return SectionStatus::NoData;
        };
        match parse_driver_standings(&raw) {
            Err(e) => self.malformed(Section::Drivers, &e).await,
            Ok(standings) if standings.is_empty() => self.empty(Section::Drivers).await,
            Ok(standings) => {
                self.event_sender
                    .send_section_event(
                        Section::Drivers,
                        format!("Driver standings updated ({} entries)", standings.len()),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                SectionStatus::Ready(standings)
            }
        }
    }

    /// Fetch and decode the constructor standings section.
    pub async fn constructor_standings(&self) -> SectionStatus<Vec<ConstructorStanding>> {
        let Some(raw) = self.fetch_raw(Section::Constructors).await else {
            return SectionStatus::NoData;
        };
        match parse_constructor_standings(&raw) {
            Err(e) => self.malformed(Section::Constructors, &e).await,
            Ok(standings) if standings.is_empty() => self.empty(Section::Constructors).await,
            Ok(standings) => {
                self.event_sender
                    .send_section_event(
                        Section::Constructors,
                        format!(
                            "Constructor standings updated ({} entries)",
                            standings.len()
                        ),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                SectionStatus::Ready(standings)
            }
        }
    }

    /// Fetch and decode the next-race section.
    pub async fn next_race(&self) -> SectionStatus<NextRaceInfo> {
        let Some(raw) = self.fetch_raw(Section::NextRace).await else {
            return SectionStatus::NoData;
        };
        match parse_next_race(&raw) {
            Err(e) => self.malformed(Section::NextRace, &e).await,
            Ok(None) => self.empty(Section::NextRace).await,
            Ok(Some(info)) => {
                self.event_sender
                    .send_section_event(
                        Section::NextRace,
                        format!("Next race: {}", info.race_name),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                SectionStatus::Ready(info)
            }
        }
    }

    /// Issue the section's request. Any failure, including a blank body,
    /// collapses to `None` after logging at the classified level.
    async fn fetch_raw(&self, section: Section) -> Option<String> {
        self.event_sender
            .send_section_event(
                section,
                format!("Fetching {}...", section.label()),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let result = match section {
            Section::Drivers => self.api.driver_standings().await,
            Section::Constructors => self.api.constructor_standings().await,
            Section::NextRace => self.api.next_race().await,
        };

        match result {
            Ok(raw) if raw.trim().is_empty() => {
                self.event_sender
                    .send_section_event(
                        section,
                        format!("Empty response for {}", section.label()),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
                None
            }
            Ok(raw) => Some(raw),
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_section_event(
                        section,
                        format!("Failed to fetch {}: {}", section.label(), e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                None
            }
        }
    }

    async fn malformed<T>(&self, section: Section, error: &serde_json::Error) -> SectionStatus<T> {
        let message = format!("Error parsing {}: {}", section.label(), error);
        self.event_sender
            .send_section_event(section, message.clone(), EventType::Error, LogLevel::Error)
            .await;
        SectionStatus::Malformed(message)
    }

    async fn empty<T>(&self, section: Section) -> SectionStatus<T> {
        self.event_sender
            .send_section_event(
                section,
                format!("No {} in response", section.label()),
                EventType::Error,
                LogLevel::Warn,
            )
            .await;
        SectionStatus::NoData
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockStandingsApi;
    use crate::api::error::ApiError;
    use crate::events::Event;
    use tokio::sync::mpsc;

    fn fetcher_with(api: MockStandingsApi) -> (SectionFetcher, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel(100);
        (
            SectionFetcher::new(Box::new(api), EventSender::new(sender)),
            receiver,
        )
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_no_data() {
        let mut api = MockStandingsApi::new();
        api.expect_driver_standings().returning(|| {
            Err(ApiError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
        let (fetcher, mut events) = fetcher_with(api);

        assert_eq!(fetcher.driver_standings().await, SectionStatus::NoData);

        // First the fetching notice, then the classified failure
        let fetching = events.recv().await.unwrap();
        assert_eq!(fetching.event_type, EventType::Refresh);
        let failure = events.recv().await.unwrap();
        assert_eq!(failure.event_type, EventType::Error);
        assert_eq!(failure.log_level, LogLevel::Warn);
        assert!(failure.msg.contains("Failed to fetch driver standings"));
    }

    #[tokio::test]
    async fn test_blank_body_degrades_to_no_data() {
        let mut api = MockStandingsApi::new();
        api.expect_constructor_standings()
            .returning(|| Ok("   ".to_string()));
        let (fetcher, _events) = fetcher_with(api);

        assert_eq!(fetcher.constructor_standings().await, SectionStatus::NoData);
    }

    #[tokio::test]
    async fn test_malformed_document_carries_parse_error_text() {
        let mut api = MockStandingsApi::new();
        api.expect_next_race().returning(|| Ok("not json".to_string()));
        let (fetcher, _events) = fetcher_with(api);

        match fetcher.next_race().await {
            SectionStatus::Malformed(msg) => {
                assert!(msg.starts_with("Error parsing next race info:"));
            }
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_race_list_degrades_to_no_data() {
        let mut api = MockStandingsApi::new();
        api.expect_next_race()
            .returning(|| Ok(r#"{"race":[]}"#.to_string()));
        let (fetcher, _events) = fetcher_with(api);

        assert_eq!(fetcher.next_race().await, SectionStatus::NoData);
    }

    #[tokio::test]
    async fn test_valid_payload_becomes_ready() {
        let mut api = MockStandingsApi::new();
        api.expect_driver_standings().returning(|| {
            Ok(r#"{"drivers_championship":[{"position":1,"driver":{"name":"Max","surname":"Verstappen"},"team":{"teamName":"Red Bull Racing Honda RBPT"},"points":437}]}"#.to_string())
        });
        let (fetcher, mut events) = fetcher_with(api);

        match fetcher.driver_standings().await {
            SectionStatus::Ready(standings) => {
                assert_eq!(standings.len(), 1);
                assert_eq!(standings[0].name, "Max Verstappen");
            }
            other => panic!("expected Ready, got {:?}", other),
        }

        let _fetching = events.recv().await.unwrap();
        let success = events.recv().await.unwrap();
        assert_eq!(success.event_type, EventType::Success);
    }
}
