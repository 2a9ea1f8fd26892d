//! Command-line style input construction
//!
//! Turns positional `url:api_key` arguments into an [`EndpointMap`] for the
//! fetcher. This is deliberately outside the fetch engine: by the time an
//! `EndpointMap` exists, every entry in it is attempted — all validation and
//! skipping happens here.

use crate::types::{Credential, EndpointMap};
use tracing::warn;

/// Parse positional `url:api_key` arguments into an endpoint mapping
///
/// Each argument is split on its first colon into an endpoint and a
/// credential; an empty credential part means an unauthenticated request.
/// Malformed entries (no colon, or empty endpoint) are skipped with a
/// warning rather than failing the whole invocation.
///
/// Duplicate endpoints are not silently collapsed: the first occurrence
/// wins and later ones are skipped with a warning, so a repeated target
/// never swaps credentials out from under the caller unnoticed.
///
/// # Example
///
/// ```
/// use apiquery::parse_endpoint_args;
///
/// let endpoints = parse_endpoint_args(["svc.internal/status:key-1"]);
/// assert_eq!(endpoints.len(), 1);
/// assert!(endpoints.contains_key("svc.internal/status"));
/// ```
pub fn parse_endpoint_args<I, S>(args: I) -> EndpointMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut endpoints = EndpointMap::new();

    for arg in args {
        let arg = arg.as_ref();
        let Some((endpoint, api_key)) = arg.split_once(':') else {
            warn!("skipping malformed argument {arg:?}: expected url:api_key");
            continue;
        };
        if endpoint.is_empty() {
            warn!("skipping malformed argument {arg:?}: empty endpoint");
            continue;
        }
        if endpoints.contains_key(endpoint) {
            warn!("skipping duplicate endpoint {endpoint:?}: first credential wins");
            continue;
        }
        endpoints.insert(endpoint.to_string(), Credential::new(api_key));
    }

    endpoints
}
