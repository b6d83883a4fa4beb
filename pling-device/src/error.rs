#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("push address unavailable: {0}")]
    PushAddress(String),

    #[error("platform operation failed: {0}")]
    Platform(String),

    #[error("backend request error: {0}")]
    Backend(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    BackendStatus(reqwest::StatusCode),

    #[error("bridge message malformed: {0}")]
    Bridge(#[from] serde_json::Error),
}
