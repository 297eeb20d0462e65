// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly: a malformed route pattern or an
//! unknown metrics backend fails startup instead of surfacing per request.

use anyhow::Result;
use std::time::Duration;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable as a string.
///
/// Empty values are treated the same as missing ones.
macro_rules! optional_env {
    // ---
    ($key:literal) => {
        std::env::var($key).ok().filter(|v| !v.trim().is_empty())
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.trim().parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails with an error
/// mentioning the offending variable.
///
/// This macro is intended for config unit tests only and enforces
/// consistent error messages across failure cases.
macro_rules! assert_invalid_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            format!("{err:#}").contains(concat!("Invalid configuration: ", $key)),
            "unexpected error: {err:#}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
/// All configuration is validated eagerly during initialization.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub instrumentation: instrumentation::InstrumentationConfig,
    pub probe: probe::ProbeConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            instrumentation: instrumentation::InstrumentationConfig::from_env()?,
            probe: probe::ProbeConfig::from_env()?,
        })
    }
}

// ============================================================
// Scrape server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// Where the `/metrics` endpoint listens.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Socket address to bind. Defaults to `127.0.0.1:9090`.
        pub bind_addr: String,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr = optional_env!("CLIENT_METRICS_BIND_ADDR")
                .unwrap_or_else(|| "127.0.0.1:9090".to_string());

            Ok(Self { bind_addr })
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Instrumentation configuration
// ============================================================

mod instrumentation {
    // ---
    use super::*;
    use crate::domain::{RouteRule, DEFAULT_SERVICE_NAME};
    use crate::infrastructure::MetricsBackend;
    use anyhow::{anyhow, Context};

    /// Settings applied to the instrumented transport.
    #[derive(Debug, Clone)]
    pub struct InstrumentationConfig {
        /// Value of the `module_name` label. Defaults to `client-metrics`.
        pub service_name: String,

        /// Collapse status codes to their class. Defaults to false.
        pub normalize_status: bool,

        /// Ordered route rules, already compiled.
        pub route_rules: Vec<RouteRule>,

        /// Registry implementation. Defaults to `prom`.
        pub backend: MetricsBackend,
    }

    impl InstrumentationConfig {
        /// Builds an [`InstrumentationConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `CLIENT_METRICS_ROUTES` or
        /// `CLIENT_METRICS_BACKEND` cannot be parsed.
        pub fn from_env() -> Result<Self> {
            // ---
            let service_name = optional_env!("CLIENT_METRICS_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
            let normalize_status =
                optional_env_parse!("CLIENT_METRICS_NORMALIZE_STATUS", bool, false);

            let route_rules = match optional_env!("CLIENT_METRICS_ROUTES") {
                Some(routes) => parse_route_rules(&routes)
                    .context("Invalid configuration: CLIENT_METRICS_ROUTES")?,
                None => Vec::new(),
            };

            let backend = match optional_env!("CLIENT_METRICS_BACKEND") {
                Some(name) => name
                    .parse::<MetricsBackend>()
                    .context("Invalid configuration: CLIENT_METRICS_BACKEND")?,
                None => MetricsBackend::default(),
            };

            Ok(Self {
                service_name,
                normalize_status,
                route_rules,
                backend,
            })
        }
    }

    /// Parses `pattern => label` entries separated by `;`, keeping their order.
    pub fn parse_route_rules(routes: &str) -> Result<Vec<RouteRule>> {
        // ---
        routes
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (pattern, label) = entry
                    .split_once("=>")
                    .ok_or_else(|| anyhow!("Route entry is missing '=>': {entry}"))?;
                RouteRule::new(pattern.trim(), label.trim())
            })
            .collect()
    }
}
pub use instrumentation::{parse_route_rules, InstrumentationConfig};

// ============================================================
// Probe configuration
// ============================================================

mod probe {
    // ---
    use super::*;

    /// Upstreams the binary polls through the instrumented transport.
    #[derive(Debug, Clone)]
    pub struct ProbeConfig {
        /// URLs to `GET` on every tick. Empty disables probing.
        pub targets: Vec<String>,

        /// Time between probe rounds. Defaults to 15 seconds.
        pub interval: Duration,
    }

    impl ProbeConfig {
        /// Builds a [`ProbeConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let targets = optional_env!("CLIENT_METRICS_PROBE_TARGETS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            let interval_secs = optional_env_parse!("CLIENT_METRICS_PROBE_INTERVAL_SEC", u64, 15);

            Ok(Self {
                targets,
                interval: Duration::from_secs(interval_secs.max(1)),
            })
        }
    }
}
pub use probe::ProbeConfig;

// ============================================================
// Tests
// ============================================================
