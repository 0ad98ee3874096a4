//! The standings refresh cycle
//!
//! One cycle fetches the three sections in fixed order and publishes the
//! snapshot progressively, so renderers can show a transient indicator for
//! the section currently in flight. Between cycles the worker sleeps for
//! the fixed refresh interval; the shutdown broadcast is the only way out.

use super::core::EventSender;
use super::fetcher::SectionFetcher;
use crate::consts::cli_consts::refresh;
use crate::events::{CycleState, Event, EventType};
use crate::logging::LogLevel;
use crate::snapshot::{SectionStatus, Snapshot};
use chrono::Local;
use tokio::sync::{broadcast, watch};
use tokio::time::sleep;

pub struct RefreshWorker {
    fetcher: SectionFetcher,
    snapshot_sender: watch::Sender<Snapshot>,
    event_sender: EventSender,
    cycle: u64,
}

impl RefreshWorker {
    pub fn new(
        fetcher: SectionFetcher,
        snapshot_sender: watch::Sender<Snapshot>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            fetcher,
            snapshot_sender,
            event_sender,
            cycle: 0,
        }
    }

    /// Run refresh cycles until shutdown. A cycle that fails in any or all
    /// sections still completes; the next cycle is the retry.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        loop {
            self.run_cycle().await;

            self.event_sender
                .send_cycle_event(
                    format!(
                        "Waiting - next refresh in ({}) seconds",
                        refresh::REFRESH_INTERVAL_SECS
                    ),
                    EventType::Waiting,
                    LogLevel::Info,
                )
                .await;
            self.event_sender
                .send_event(Event::state_change(
                    CycleState::Waiting,
                    format!(
                        "Standings refresh in ({}) seconds",
                        refresh::REFRESH_INTERVAL_SECS
                    ),
                ))
                .await;

            tokio::select! {
                _ = sleep(refresh::interval()) => {}
                _ = shutdown.recv() => break,
            }
        }
    }

    /// One full fetch-and-publish pass: drivers, constructors, next race.
    async fn run_cycle(&mut self) {
        self.cycle += 1;
        let cycle = self.cycle;

        self.event_sender
            .send_event(Event::state_change(
                CycleState::Fetching,
                "Refreshing standings".to_string(),
            ))
            .await;

        self.publish(|s| {
            s.cycle = cycle;
            s.drivers = SectionStatus::Fetching;
        });
        let drivers = self.fetcher.driver_standings().await;
        self.publish(|s| s.drivers = drivers);

        self.publish(|s| s.constructors = SectionStatus::Fetching);
        let constructors = self.fetcher.constructor_standings().await;
        self.publish(|s| s.constructors = constructors);

        self.publish(|s| s.next_race = SectionStatus::Fetching);
        let next_race = self.fetcher.next_race().await;
        self.publish(|s| s.next_race = next_race);

        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.publish(|s| s.last_updated = Some(stamp));
    }

    fn publish(&self, mutate: impl FnOnce(&mut Snapshot)) {
        self.snapshot_sender.send_modify(mutate);
    }
}
