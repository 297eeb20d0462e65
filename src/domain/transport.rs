use async_trait::async_trait;
use reqwest::{Request, Response};

/// Abstraction for anything that can carry an HTTP request to completion.
///
/// Implementations must be safe to call from many tasks at once.
#[async_trait]
pub trait HttpTransport: Send + Sync + 'static {
    // ---
    /// Transport-level failure (connect, DNS, timeout, ...).
    type Error: Send + 'static;

    /// Perform `request` and return the response head, or the failure.
    async fn perform(&self, request: Request) -> Result<Response, Self::Error>;
}
