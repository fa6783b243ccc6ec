use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Dataset '{file}' is missing required columns: {}", .missing.join(", "))]
    MissingColumnsError { file: String, missing: Vec<String> },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Mes no válido. Por favor ingrese un mes en español.")]
    InvalidMonth,

    #[error("Día no válido. Por favor ingrese un día en español.")]
    InvalidWeekday,

    #[error("Falta el parámetro requerido '{name}'.")]
    MissingParameter { name: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidMonth | ApiError::InvalidWeekday => StatusCode::BAD_REQUEST,
            ApiError::MissingParameter { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Errors caused by the caller's input rather than the service state.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApiError::CsvError(_) => "Check that the dataset files are well-formed CSV with a header row",
            ApiError::IoError(_) => "Check that --data-dir points at the directory holding both CSV files",
            ApiError::MissingColumnsError { .. } => {
                "Make sure the monthly file has 'title' and 'month' columns and the daily file has 'title' and 'day_of_week'"
            }
            ApiError::ConfigError { .. } | ApiError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML config file"
            }
            ApiError::TomlError(_) => "Fix the syntax of the TOML config file",
            ApiError::InvalidMonth => "Use one of: enero, febrero, ..., diciembre",
            ApiError::InvalidWeekday => "Use one of: lunes, martes, miercoles, jueves, viernes, sabado, domingo",
            ApiError::MissingParameter { .. } => "Add the query parameter to the request URL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::warn!(status = status.as_u16(), "Rejected request: {}", self);
        } else {
            tracing::error!(status = status.as_u16(), "Request failed: {}", self);
        }

        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
