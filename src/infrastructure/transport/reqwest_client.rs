use crate::domain::HttpTransport;
use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// `reqwest::Client` is the default underlying transport.
#[async_trait]
impl HttpTransport for Client {
    // ---
    type Error = reqwest::Error;

    async fn perform(&self, request: Request) -> Result<Response, Self::Error> {
        self.execute(request).await
    }
}
