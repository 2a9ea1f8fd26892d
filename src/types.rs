//! Core types: credentials, endpoint mappings, and fetch outcomes

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Mapping from endpoint URL to the credential used to fetch it
///
/// Keys are opaque URL strings; map semantics guarantee each endpoint appears
/// at most once. Duplicate handling for raw caller input happens in
/// [`crate::args::parse_endpoint_args`], before an `EndpointMap` exists.
pub type EndpointMap = HashMap<String, Credential>;

/// The result of one endpoint's fetch attempt
///
/// Success carries the decoded JSON value; failure carries a classified
/// [`FetchError`] scoped to that endpoint.
pub type FetchOutcome = std::result::Result<serde_json::Value, FetchError>;

/// The aggregated result set: one [`FetchOutcome`] per input endpoint
///
/// Invariant: after [`crate::Fetcher::fetch_all`] returns, the key set of
/// this map equals the key set of the input [`EndpointMap`] exactly,
/// regardless of how many fetches failed. The map is unordered; callers must
/// not assume any completion order.
pub type ResultSet = HashMap<String, FetchOutcome>;

/// An opaque bearer token scoped to one endpoint for one fetch
///
/// May be empty, signifying an unauthenticated request (no `Authorization`
/// header is attached). Immutable once created. The `Debug` impl redacts the
/// token so credentials never leak into logs or panic messages.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Create a credential from a token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Create an empty credential (unauthenticated request)
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Whether this credential is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw token, for attaching to an `Authorization` header
    ///
    /// Named to make accidental exposure visible at call sites; prefer
    /// `Debug`/`Display` formatting anywhere the value might be logged.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(***)")
        }
    }
}
