//! Client for the host's session API.
//!
//! Thin passthrough: responses come back as raw JSON values and error
//! payloads are surfaced verbatim, never interpreted.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Fixed address of the local host API server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4096";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Host API failure, reported without interpretation.
#[derive(Debug, Error)]
pub enum HostError {
    /// Request never produced a response
    #[error("request to host api failed: {0}")]
    Transport(#[from] ureq::Error),

    /// Host answered with a non-success status; body is verbatim
    #[error("host api returned {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Host answered 2xx but the body was not valid JSON
    #[error("host api returned an unparseable body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Session API client bound to one server address.
#[derive(Debug, Clone)]
pub struct HostClient {
    agent: ureq::Agent,
    base_url: String,
}

impl HostClient {
    /// Create a client for the given server address.
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    /// Fetch the full session record.
    pub fn get_session(&self, session_id: &str) -> Result<Value, HostError> {
        let url = format!("{}/session/{}", self.base_url, session_id);
        let response = self.agent.get(&url).call()?;
        Self::into_json(response)
    }

    /// Update the session title. Returns the host's response verbatim.
    pub fn update_title(&self, session_id: &str, title: &str) -> Result<Value, HostError> {
        let url = format!("{}/session/{}", self.base_url, session_id);
        let response = self
            .agent
            .patch(&url)
            .send_json(serde_json::json!({ "title": title }))?;
        Self::into_json(response)
    }

    fn into_json(response: ureq::http::Response<ureq::Body>) -> Result<Value, HostError> {
        let status = response.status();
        let body = response.into_body().read_to_string()?;
        if !status.is_success() {
            return Err(HostError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Extract the host-assigned project identifier from a session record.
pub fn project_id(record: &Value) -> Option<&str> {
    record.get("projectID").and_then(Value::as_str)
}
