use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Feed is neither an array nor an object with a data array")]
    UnexpectedShape,
    #[error("No coordinates found on station page for {0}")]
    CoordinatesNotFound(String),
}
