//! The handler: one outbound GET to the upstream service, relayed back as-is.
use lambda_runtime::LambdaEvent;
use reqwest::Url;
use serde_json::Value;

use crate::{Error, RelayResponse, Result};

/// The fixed upstream endpoint queried on every invocation.
pub const TODO_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Relays the upstream todo endpoint to the invoking runtime.
pub struct Relay {
    // Client holds a connection pool internally, so we're reusing the client
    // between invocations.
    client: reqwest::Client,
    url: String,
}

impl Relay {
    /// Create a relay pointed at [`TODO_URL`].
    pub fn new() -> Relay {
        Relay {
            client: reqwest::Client::new(),
            url: TODO_URL.to_owned(),
        }
    }

    /// Handle one invocation: GET the upstream endpoint, decode the body as
    /// JSON, and return the upstream status code verbatim alongside it.
    ///
    /// The event payload and context are never read, so varying them cannot
    /// change the request or the outcome. 4xx/5xx upstream statuses are not
    /// errors; they pass through in `statusCode` unremapped. Network failures
    /// and non-JSON bodies propagate as [`Error`] with no fallback value.
    pub async fn handle(&self, _event: LambdaEvent<Value>) -> Result<RelayResponse> {
        let url = Url::parse(&self.url).map_err(Error::InvalidUrl)?;

        log::debug!(target: "todo_relay", "fetching todo from upstream");
        let response = self.client.get(url).send().await?;

        let status_code = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).map_err(Error::Decode)?;

        log::debug!(target: "todo_relay", "upstream responded with status {}", status_code);

        Ok(RelayResponse { status_code, body })
    }
}

impl Default for Relay {
    fn default() -> Relay {
        Relay::new()
    }
}
