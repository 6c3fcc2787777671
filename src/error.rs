/// Result type used throughout the crate.
///
/// This is a standard Rust `Result` where the error variant is the
/// relay-specific [`Error`] enum.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum representing possible errors while relaying the upstream response.
///
/// None of these are recovered from locally. They propagate out of the handler
/// and surface through the Lambda runtime's own error reporting.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The upstream endpoint URL failed to parse.
    #[error("invalid upstream url")]
    InvalidUrl(#[source] url::ParseError),

    /// Network error reaching the upstream service.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The upstream response body is not valid JSON.
    #[error("upstream body is not valid JSON")]
    Decode(#[source] serde_json::Error),
}
