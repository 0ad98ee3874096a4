use crate::api::error::ApiError;
use crate::environment::Environment;

pub(crate) mod client;
pub use client::F1ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the three standings endpoints. Each call returns the
/// raw response body; decoding happens downstream so that a malformed
/// document can be reported separately from a failed fetch.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StandingsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the current driver championship standings.
    async fn driver_standings(&self) -> Result<String, ApiError>;

    /// Fetch the current constructor championship standings.
    async fn constructor_standings(&self) -> Result<String, ApiError>;

    /// Fetch metadata for the next scheduled race.
    async fn next_race(&self) -> Result<String, ApiError>;
}
