//! # apiquery
//!
//! Concurrent authenticated JSON API fetch-and-aggregate library.
//!
//! ## Design Philosophy
//!
//! apiquery is designed to be:
//! - **Failure-isolating** - One endpoint's failure never blocks or corrupts
//!   the results of the others
//! - **Complete** - Every input endpoint appears in the output exactly once,
//!   as a success or a classified failure
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Race-free** - All outcomes funnel through a single collector that
//!   exclusively owns the result map
//!
//! ## Quick Start
//!
//! ```no_run
//! use apiquery::{Credential, EndpointMap, FetchConfig, Fetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut endpoints = EndpointMap::new();
//!     endpoints.insert(
//!         "https://api.example.com/v1/status".to_string(),
//!         Credential::new("my-api-key"),
//!     );
//!     endpoints.insert(
//!         "https://public.example.org/data".to_string(),
//!         Credential::empty(),
//!     );
//!
//!     let fetcher = Fetcher::new(FetchConfig::default())?;
//!     let results = fetcher.fetch_all(&endpoints).await;
//!
//!     for (endpoint, outcome) in &results {
//!         match outcome {
//!             Ok(value) => println!("{endpoint}: {value}"),
//!             Err(e) => eprintln!("{endpoint} failed: {e}"),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Command-line style input construction
pub mod args;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Concurrent fetch-and-aggregate engine
pub mod fetcher;
/// Core types: credentials, endpoint mappings, outcomes
pub mod types;

// Re-export commonly used types
pub use args::parse_endpoint_args;
pub use config::FetchConfig;
pub use error::{Error, FetchError, FetchErrorKind, Result};
pub use fetcher::Fetcher;
pub use types::{Credential, EndpointMap, FetchOutcome, ResultSet};
