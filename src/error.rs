use thiserror::Error;

/// Errors surfaced by the client and runner.
///
/// The library never terminates the process - every failure is returned
/// to the caller, which decides whether a variant is fatal for the run.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing or empty credentials. Raised before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Request construction or transport failure, including timeouts.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API, with the body captured for logging.
    #[error("received status code {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body could not be decoded as the expected JSON envelope.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
