use serde::Deserialize;

/// Represents an error response from the venue's API.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueErrorResponse {
    pub code: i32,
    pub msg: String,
}
