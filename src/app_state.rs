//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The state wraps the instrumented
//! transport so the scrape endpoint serializes the very registry that the
//! outbound requests record into.

use crate::infrastructure::InstrumentedTransport;
use std::sync::Arc;

/// Shared application state passed to all Axum handlers.
///
/// Built once at startup, never mutated, and cloned cheaply per request
/// because the transport sits behind an `Arc`.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Transport whose registry backs `/metrics`.
    transport: Arc<InstrumentedTransport>,
}

impl AppState {
    // ---

    pub fn new(transport: Arc<InstrumentedTransport>) -> Self {
        // ---
        AppState { transport }
    }

    /// Get a reference to the instrumented transport.
    pub(crate) fn transport(&self) -> &InstrumentedTransport {
        // ---
        &self.transport
    }
}
