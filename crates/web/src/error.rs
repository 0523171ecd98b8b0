use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::EngineError;
use serde_json::{Value, json};
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Engine(EngineError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "Engine error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            Self::Engine(error) => engine_response(error),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "code": "validation_failed",
                    "details": field_messages(&errors)
                }),
            ),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "bad_request" }),
            ),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Unauthorized", "code": "unauthorized" }),
            ),
        };

        (status_code, Json(body)).into_response()
    }
}

fn engine_response(error: EngineError) -> (StatusCode, Value) {
    let code = error.code();

    match error {
        EngineError::NotFound => (
            StatusCode::NOT_FOUND,
            json!({ "error": "Resource not found", "code": code }),
        ),
        EngineError::ConstraintViolation(msg) => (
            StatusCode::CONFLICT,
            json!({ "error": msg, "code": code }),
        ),
        EngineError::InvalidWeight { id, weight } => (
            StatusCode::BAD_REQUEST,
            json!({
                "error": error.to_string(),
                "code": code,
                // Non-finite weights have no JSON number form.
                "details": { "entry_id": id, "weight": weight.to_string() }
            }),
        ),
        e if e.is_client_error() => (
            StatusCode::BAD_REQUEST,
            json!({ "error": e.to_string(), "code": code }),
        ),
        e => {
            tracing::error!("Engine error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "An internal error occurred", "code": "internal" }),
            )
        }
    }
}

fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect()
}

impl From<EngineError> for WebError {
    fn from(error: EngineError) -> Self {
        Self::Engine(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}
