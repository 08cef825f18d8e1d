use thiserror::Error;

/// Why loading the order collection failed.
///
/// Carries rendered text rather than the source error so it can travel
/// inside UI messages, which must be `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("could not reach order service: {0}")]
    Transport(String),

    #[error("order service answered with HTTP {0}")]
    Status(u16),

    #[error("unexpected response from order service: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
