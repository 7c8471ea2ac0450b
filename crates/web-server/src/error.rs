use analyzer::error::AnalyzerError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
    #[error("Invalid start year: {0}")]
    InvalidStartYear(i32),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Invalid input maps to 400, a window with undefined metrics to 422; the
/// body never carries malformed numeric values.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Analyzer(analyzer_err) => match analyzer_err {
                AnalyzerError::InvalidStartYear { .. } => {
                    (StatusCode::BAD_REQUEST, analyzer_err.to_string())
                }
                AnalyzerError::DegenerateWindow { .. } => {
                    tracing::warn!(error = %analyzer_err, "degenerate analysis window");
                    (StatusCode::UNPROCESSABLE_ENTITY, analyzer_err.to_string())
                }
                AnalyzerError::Calculation(_) => {
                    tracing::error!(error = ?analyzer_err, "Analyzer error.");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An error occurred during analysis".to_string(),
                    )
                }
            },
            AppError::InvalidSymbol(symbol) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid symbol: {}", symbol),
            ),
            AppError::InvalidStartYear(year) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid start year: {}", year),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
