use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never completed (connect failure, dropped connection, bad URL).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A field argument was not of the form `name=value`.
    #[error("invalid form field {0:?}, expected name=value")]
    InvalidField(String),

    /// The server answered the status endpoint with a non-success response.
    #[error("server error: {0}")]
    Server(String),

    /// The response body was not the JSON shape the endpoint documents.
    #[error("unexpected response payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Writing a downloaded payload to disk failed.
    #[error("failed to save {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
