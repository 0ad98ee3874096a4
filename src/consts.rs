pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the standings
    //! dashboard, organized by functional area.

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum event buffer size for the refresh worker.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Refresh cycle configuration
    pub mod refresh {
        use std::time::Duration;

        /// Seconds between standings refresh cycles.
        pub const REFRESH_INTERVAL_SECS: u64 = 300;

        pub const fn interval() -> Duration {
            Duration::from_secs(REFRESH_INTERVAL_SECS)
        }
    }

    /// HTTP client configuration
    pub mod http {
        use std::time::Duration;

        /// Per-request timeout in seconds. A hung endpoint can delay a
        /// cycle by at most this much per section.
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Connection establishment timeout in seconds.
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }
    }

    /// Table layout configuration
    pub mod display {
        /// Number of standings entries retained per table.
        pub const MAX_ROWS: usize = 10;

        /// Width of the position column.
        pub const POSITION_WIDTH: usize = 4;

        /// Width of the driver name column.
        pub const DRIVER_NAME_WIDTH: usize = 25;

        /// Width of the team column in the driver table. Names longer than
        /// this are cut to `TEAM_TRUNCATE_AT` characters plus `ELLIPSIS`.
        pub const TEAM_WIDTH: usize = 22;

        /// Character count a too-long team name is cut down to.
        pub const TEAM_TRUNCATE_AT: usize = 19;

        /// Width of the team column in the constructor table.
        pub const CONSTRUCTOR_TEAM_WIDTH: usize = 48;

        /// Width of the right-aligned points column.
        pub const POINTS_WIDTH: usize = 8;

        /// Marker appended to truncated team names.
        pub const ELLIPSIS: &str = "...";

        /// Fallback string for missing text fields.
        pub const PLACEHOLDER: &str = "N/A";

        /// Fallback string for an unknown championship position.
        pub const POSITION_PLACEHOLDER: &str = "?";
    }
}
