//! Periodic upstream probing.
//!
//! The binary uses a [`Prober`] to issue `GET` requests to configured
//! targets through the instrumented transport, so `/metrics` reports their
//! latency without any other client traffic.

use crate::config::ProbeConfig;
use crate::domain::HttpTransport;
use anyhow::{Context, Result};
use futures::future::join_all;
use reqwest::{Method, Request, Url};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

/// Issues one `GET` per target on a fixed interval.
pub struct Prober<T> {
    transport: Arc<T>,
    targets: Vec<Url>,
    interval: Duration,
}

impl<T> Prober<T>
where
    T: HttpTransport,
    T::Error: Display,
{
    /// Validates every target URL up front.
    ///
    /// # Errors
    /// Returns an error naming the first target that is not a valid URL.
    pub fn new(transport: Arc<T>, config: &ProbeConfig) -> Result<Self> {
        // ---
        let targets = config
            .targets
            .iter()
            .map(|t| Url::parse(t).with_context(|| format!("Invalid probe target: {t}")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            transport,
            targets,
            interval: config.interval,
        })
    }

    pub fn targets(&self) -> &[Url] {
        &self.targets
    }

    /// Probes every target concurrently and returns how many responded.
    pub async fn probe_once(&self) -> usize {
        // ---
        let calls = self.targets.iter().map(|url| async move {
            let request = Request::new(Method::GET, url.clone());
            match self.transport.perform(request).await {
                Ok(response) => {
                    tracing::debug!(%url, status = %response.status(), "Probe completed");
                    // Drain the body so the connection can be reused.
                    let _ = response.bytes().await;
                    true
                }
                Err(err) => {
                    tracing::warn!(%url, "Probe failed: {err}");
                    false
                }
            }
        });

        join_all(calls).await.into_iter().filter(|ok| *ok).count()
    }

    /// Probes forever. The first round starts immediately.
    pub async fn run(self) {
        // ---
        tracing::info!(
            targets = self.targets.len(),
            interval = ?self.interval,
            "Starting probe loop"
        );

        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            let completed = self.probe_once().await;
            tracing::debug!(completed, total = self.targets.len(), "Probe round finished");
        }
    }
}
