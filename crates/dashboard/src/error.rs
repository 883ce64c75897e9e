use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors surfaced by the dashboard client. Network failures and
/// non-success statuses are distinct cases so call sites can log the
/// status and body the server returned.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("push channel error: {0}")]
    Socket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
