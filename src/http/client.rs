use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use super::builder::OutboundRequest;
use crate::error::AppError;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The capability that puts a request on the wire.
pub trait Transport: Send + Sync + 'static {
    /// Send `request` and return at most `limit` bytes of the response body.
    fn send(
        &self,
        request: OutboundRequest,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<u8>, AppError>> + Send;
}

pub fn build_client() -> Result<Client, AppError> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .use_rustls_tls()
        .build()?;
    Ok(client)
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self { client: build_client()? })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: OutboundRequest, limit: usize) -> Result<Vec<u8>, AppError> {
        let mut builder = self.client.request(request.method.into(), request.url.as_str());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        let mut response = self.client.execute(builder.build()?).await?;
        tracing::debug!(status = %response.status(), "response headers received");

        // Stop reading once the preview is full; the rest of the body is dropped.
        let mut body = Vec::with_capacity(limit.min(8 * 1024));
        while body.len() < limit {
            let Some(chunk) = response.chunk().await? else {
                break;
            };
            let take = (limit - body.len()).min(chunk.len());
            body.extend_from_slice(&chunk[..take]);
        }
        Ok(body)
    }
}
