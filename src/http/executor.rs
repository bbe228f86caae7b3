use std::error::Error;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use super::builder::OutboundRequest;
use super::client::Transport;
use crate::event::Event;
use crate::state::request_state::RequestState;

/// Only this many leading bytes of a response body are kept for display.
pub const RESPONSE_PREVIEW_BYTES: usize = 1000;

/// Send the document and turn the outcome into display text. Transport
/// failures come back as `error: ...` text rather than an `Err`.
pub async fn execute<T: Transport>(transport: &T, doc: &RequestState) -> String {
    send(transport, OutboundRequest::from_document(doc)).await
}

/// Run one request off the event loop and post its text back as
/// [`Event::Response`]. A cancelled request posts nothing.
pub async fn dispatch<T: Transport>(
    transport: Arc<T>,
    doc: RequestState,
    id: u64,
    tx: UnboundedSender<Event>,
    cancel: CancellationToken,
) {
    let text = tokio::select! {
        text = execute(transport.as_ref(), &doc) => text,
        _ = cancel.cancelled() => {
            tracing::debug!(id, "request superseded");
            return;
        }
    };
    let _ = tx.send(Event::Response { id, text });
}

async fn send<T: Transport>(transport: &T, request: OutboundRequest) -> String {
    tracing::info!(method = request.method.as_str(), url = %request.url, "sending request");
    match transport.send(request, RESPONSE_PREVIEW_BYTES).await {
        Ok(mut bytes) => {
            bytes.truncate(RESPONSE_PREVIEW_BYTES);
            tracing::info!(bytes = bytes.len(), "request completed");
            String::from_utf8_lossy(&bytes).into_owned()
        }
        Err(err) => {
            let text = describe(&err);
            tracing::warn!(error = %text, "request failed");
            format!("error: {text}")
        }
    }
}

/// Display text of `err` followed by each of its sources.
fn describe(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
