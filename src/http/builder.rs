use reqwest::Method;

use crate::state::request_state::{HttpMethod, RequestState};

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Snapshot of what goes on the wire, detached from the editor state so the
/// request task owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl OutboundRequest {
    /// Every header pair is applied in display order. The URL is sent as typed.
    // TODO: attach `RequestState::body` once requests carry a body; today the
    // body editor's text never leaves the client.
    pub fn from_document(doc: &RequestState) -> Self {
        Self {
            method: doc.method,
            url: doc.url.value().to_string(),
            headers: doc
                .headers()
                .iter()
                .map(|pair| (pair.key.clone(), pair.value.clone()))
                .collect(),
        }
    }
}
