#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("tickets count mismatch: sent {sent}, received {received}")]
    TicketCountMismatch { sent: usize, received: usize },
}
