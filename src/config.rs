//! Configuration types for apiquery

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP fetch behavior configuration (timeouts, identification)
///
/// All settings have sensible defaults; `FetchConfig::default()` works out of
/// the box. Timeouts bound each request so a hung endpoint cannot stall the
/// aggregate join indefinitely.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Total per-request timeout, connect through body read (default: 30s)
    ///
    /// `None` disables the bound entirely; callers who do this should thread
    /// a cancellation token through
    /// [`crate::Fetcher::fetch_all_with_cancel`] instead.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Option<Duration>,

    /// Connection establishment timeout (default: 10s)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_request_timeout() -> Option<Duration> {
    Some(Duration::from_secs(30))
}

fn default_connect_timeout() -> Option<Duration> {
    Some(Duration::from_secs(10))
}

fn default_user_agent() -> String {
    concat!("apiquery/", env!("CARGO_PKG_VERSION")).to_string()
}
