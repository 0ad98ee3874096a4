//! Wires the refresh worker to its channels

use crate::api::F1ApiClient;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::snapshot::Snapshot;
use crate::workers::core::EventSender;
use crate::workers::fetcher::SectionFetcher;
use crate::workers::refresh::RefreshWorker;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

/// Start the standings refresh worker
pub async fn start_refresh_worker(
    api: F1ApiClient,
    shutdown: broadcast::Receiver<()>,
) -> (
    mpsc::Receiver<Event>,
    watch::Receiver<Snapshot>,
    Vec<JoinHandle<()>>,
) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (snapshot_sender, snapshot_receiver) = watch::channel(Snapshot::default());

    let sender = EventSender::new(event_sender);
    let fetcher = SectionFetcher::new(Box::new(api), sender.clone());
    let worker = RefreshWorker::new(fetcher, snapshot_sender, sender);

    let handle = tokio::spawn(async move { worker.run(shutdown).await });
    (event_receiver, snapshot_receiver, vec![handle])
}
