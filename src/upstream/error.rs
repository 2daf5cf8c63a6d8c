use std::error::Error as _;

/// Failure of a single upstream fetch. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("error making request to TMDb: {0}")]
    Transport(String),
    #[error("error reading response: {0}")]
    Read(String),
    #[error("error parsing JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no movie found with title: {0}")]
    NotFound(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl UpstreamError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        UpstreamError::Transport(describe(err))
    }

    pub(crate) fn read(err: reqwest::Error) -> Self {
        UpstreamError::Read(describe(err))
    }

    pub(crate) fn client(err: reqwest::Error) -> Self {
        UpstreamError::Client(describe(err))
    }
}

/// Flatten a reqwest error and its sources into one line.
///
/// The URL is stripped first: reqwest prints it, and ours carries the api key.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }
    msg
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;
