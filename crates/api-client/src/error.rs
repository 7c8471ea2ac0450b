use thiserror::Error;

/// Failure modes of the market-data boundary. Every variant means the same
/// thing to the analysis pipeline: the requested data is unavailable.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to reach the market-data API: {0}")]
    Http(#[from] reqwest::Error),

    #[error("The venue rejected the request (code {0}): {1}")]
    Venue(i32, String),

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),

    #[error("Invalid data format from API: {0}")]
    InvalidData(String),
}
