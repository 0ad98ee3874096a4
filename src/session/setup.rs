//! Session setup and initialization

use crate::api::F1ApiClient;
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_refresh_worker;
use crate::snapshot::Snapshot;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker log events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Latest-snapshot receiver for rendering
    pub snapshot_receiver: watch::Receiver<Snapshot>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop the worker
    pub shutdown_sender: broadcast::Sender<()>,
    /// The environment the session is running against
    pub environment: Environment,
}

/// Sets up a dashboard session: creates the API client and the shutdown
/// channel, then starts the refresh worker. Both run modes consume the
/// returned channels.
pub async fn setup_session(environment: Environment) -> SessionData {
    let api_client = F1ApiClient::new(environment.clone());

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, snapshot_receiver, join_handles) =
        start_refresh_worker(api_client, shutdown_sender.subscribe()).await;

    SessionData {
        event_receiver,
        snapshot_receiver,
        join_handles,
        shutdown_sender,
        environment,
    }
}
