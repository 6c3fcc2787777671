use serde::Serialize;
use serde_json::Value;

/// Result returned to the invoking runtime: the upstream status code and the
/// decoded JSON body.
///
/// The body is the decoded value, not a re-serialized string, so the caller
/// receives `{"statusCode": 200, "body": {..}}` with the upstream JSON inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayResponse {
    /// Upstream HTTP status code, copied verbatim.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Upstream response body, decoded as JSON.
    pub body: Value,
}
