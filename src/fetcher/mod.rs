//! Concurrent fetch-and-aggregate engine
//!
//! This module provides the [`Fetcher`], which issues one authenticated HTTP
//! GET per configured endpoint, all in parallel, and aggregates the
//! per-endpoint outcomes into a single result set. Failures are isolated:
//! each endpoint succeeds or fails on its own, and every input endpoint is
//! present in the output exactly once.
//!
//! Concurrency discipline: each spawned task sends exactly one
//! `(endpoint, outcome)` message over an mpsc channel, and a single collector
//! loop exclusively owns the result map. The result map therefore has exactly
//! one writer at any instant; no lock is needed and no entry can be lost or
//! torn by interleaved writes.

use crate::config::FetchConfig;
use crate::error::{Error, FetchError, Result};
use crate::types::{Credential, EndpointMap, FetchOutcome, ResultSet};
use std::future::Future;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// Concurrent authenticated JSON fetcher
///
/// Holds a shared [`reqwest::Client`] (connection pool, timeouts) built once
/// from a [`FetchConfig`]. Cloning is cheap; the underlying pool is shared.
#[derive(Clone)]
pub struct Fetcher {
    /// HTTP client for all outbound requests
    http_client: reqwest::Client,
}

impl Fetcher {
    /// Create a fetcher from a configuration
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the HTTP client cannot be built from the
    /// given settings.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let http_client = builder.build().map_err(|e| Error::Config {
            message: format!("failed to build HTTP client: {e}"),
            key: None,
        })?;

        Ok(Self { http_client })
    }

    /// Fetch one endpoint and decode its body as JSON
    ///
    /// Sends a single GET request (no retry). A non-empty credential is
    /// attached as a `Bearer` authorization header; an empty credential means
    /// an unauthenticated request. The underlying connection is returned to
    /// the pool on every exit path, success or failure, because the response
    /// is either fully consumed or dropped here.
    ///
    /// This method never logs and touches no shared mutable state; it returns
    /// an outcome the aggregator is responsible for recording.
    pub async fn fetch(&self, endpoint: &str, credential: &Credential) -> FetchOutcome {
        // Validate up front so a malformed endpoint is classified as
        // InvalidUrl rather than surfacing as a transport error.
        let url = match Url::parse(endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => url,
            Ok(url) => {
                return Err(FetchError::InvalidUrl {
                    url: endpoint.to_string(),
                    reason: format!("unsupported scheme {:?}", url.scheme()),
                });
            }
            Err(e) => {
                return Err(FetchError::InvalidUrl {
                    url: endpoint.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let mut request = self.http_client.get(url);
        if !credential.is_empty() {
            request = request.bearer_auth(credential.expose());
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::transport(endpoint, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        // Read the full body before decoding; a failure mid-body is a
        // transport problem, not a decode problem.
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(endpoint, &e))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    /// Fetch every endpoint in the mapping concurrently
    ///
    /// Spawns one task per entry, all launched eagerly with no ordering
    /// guarantee, and blocks until every task has reported — a full join, not
    /// a first-completed-wins race. Failures are recorded in the result set
    /// alongside successes; one endpoint failing never aborts the others.
    ///
    /// The returned map contains exactly one entry per input endpoint. An
    /// empty mapping returns an empty result set immediately without
    /// spawning anything.
    pub async fn fetch_all(&self, endpoints: &EndpointMap) -> ResultSet {
        self.fetch_all_with_cancel(endpoints, CancellationToken::new())
            .await
    }

    /// Fetch every endpoint concurrently, subject to a cancellation token
    ///
    /// Behaves like [`Fetcher::fetch_all`], but each in-flight fetch races
    /// `cancel`: once the token fires, pending fetches resolve to
    /// [`FetchError::Cancelled`] instead of holding up the join. Combined
    /// with the per-request timeout in [`FetchConfig`], this ensures a hung
    /// endpoint cannot stall the aggregate indefinitely.
    pub async fn fetch_all_with_cancel(
        &self,
        endpoints: &EndpointMap,
        cancel: CancellationToken,
    ) -> ResultSet {
        let fetcher = self.clone();
        Self::collect_outcomes(endpoints, move |endpoint, credential| {
            let fetcher = fetcher.clone();
            let cancel = cancel.clone();
            async move {
                tokio::select! {
                    _ = cancel.cancelled() => Err(FetchError::Cancelled {
                        url: endpoint.clone(),
                    }),
                    outcome = fetcher.fetch(&endpoint, &credential) => outcome,
                }
            }
        })
        .await
    }

    /// Spawn one task per endpoint and aggregate their outcomes
    ///
    /// The spawn/collect/backfill machinery, independent of what each task
    /// actually does: `make_task` builds the per-endpoint future, so tests
    /// can drive the aggregation with arbitrary task bodies (including ones
    /// that panic) without a network in the loop.
    async fn collect_outcomes<F, Fut>(endpoints: &EndpointMap, make_task: F) -> ResultSet
    where
        F: Fn(String, Credential) -> Fut,
        Fut: Future<Output = FetchOutcome> + Send + 'static,
    {
        if endpoints.is_empty() {
            return ResultSet::new();
        }

        debug!("spawning {} concurrent fetch tasks", endpoints.len());

        let (tx, mut rx) = mpsc::channel::<(String, FetchOutcome)>(endpoints.len());
        let mut tasks = Vec::with_capacity(endpoints.len());

        for (endpoint, credential) in endpoints {
            let tx = tx.clone();
            let task = make_task(endpoint.clone(), credential.clone());
            let endpoint_key = endpoint.clone();
            let endpoint = endpoint.clone();

            let handle = tokio::spawn(async move {
                let outcome = task.await;
                // Exactly one completion signal per task. The receiver only
                // disappears if the caller dropped the whole fetch_all
                // future, so a send failure is not worth surfacing.
                let _ = tx.send((endpoint, outcome)).await;
            });
            tasks.push((endpoint_key, handle));
        }

        // The collector below must observe channel closure once the last
        // task finishes; only task-owned senders may keep it open.
        drop(tx);

        let mut results = ResultSet::with_capacity(endpoints.len());
        while let Some((endpoint, outcome)) = rx.recv().await {
            if let Err(e) = &outcome {
                debug!("fetch of {endpoint} failed: {e}");
            }
            results.insert(endpoint, outcome);
        }

        // Channel closure means every task has exited, so these awaits are
        // immediate. A task that panicked never sent its outcome; backfill
        // it so the result set still covers every input endpoint.
        for (endpoint, handle) in tasks {
            if let Err(join_err) = handle.await {
                warn!("fetch task for {endpoint} did not complete: {join_err}");
                results.entry(endpoint.clone()).or_insert_with(|| {
                    Err(FetchError::Task {
                        url: endpoint,
                        reason: join_err.to_string(),
                    })
                });
            }
        }

        debug!(
            "aggregated {} outcomes ({} failed)",
            results.len(),
            results.values().filter(|o| o.is_err()).count()
        );

        results
    }
}
