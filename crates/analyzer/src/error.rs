use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The requested start year cannot open a season on or before `as_of`.
    #[error("Invalid start year {start_year}: must be positive and no later than {as_of_year}")]
    InvalidStartYear { start_year: i32, as_of_year: i32 },

    /// A window's prices make return or volatility mathematically undefined.
    #[error("Degenerate window {label}: {reason}")]
    DegenerateWindow { label: String, reason: String },

    #[error("An internal calculation error occurred: {0}")]
    Calculation(String),
}
