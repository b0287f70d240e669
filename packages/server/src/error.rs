//! Application-level error type returned by handlers.
//!
//! All variants serialise to the [`ErrorResponse`] JSON format and map to
//! the appropriate HTTP status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use puml_ld::{ConversionError, ParseError, PipelineError};
use puml_ld_server_api::error::{codes, ErrorResponse};

use crate::shapes::ShapeError;

/// An error that a handler can return; converts directly to an HTTP response.
#[derive(Debug)]
pub enum AppError {
    MissingHeaders,
    EmptyBody,
    InvalidContext(String),
    BadRequest(String),
    NotFound(String),
    Parse(ParseError),
    Conversion(ConversionError),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::MissingHeaders => (
                StatusCode::BAD_REQUEST,
                codes::MISSING_HEADERS,
                "Missing required headers: Context (JSON-LD context URL or inline JSON) \
                 and Id (base IRI for generated resources)"
                    .to_string(),
            ),
            AppError::EmptyBody => (
                StatusCode::BAD_REQUEST,
                codes::EMPTY_BODY,
                "Request body is empty. PlantUML source required.".to_string(),
            ),
            AppError::InvalidContext(msg) => (
                StatusCode::BAD_REQUEST,
                codes::INVALID_CONTEXT,
                format!("Invalid Context header: {msg}"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, codes::INVALID_PARAMETER, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, codes::NOT_FOUND, msg),
            AppError::Parse(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                codes::PARSE_FAILED,
                format!("PlantUML parsing failed: {e}"),
            ),
            AppError::Conversion(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::CONVERSION_FAILED,
                format!("JSON-LD conversion failed: {e}"),
            ),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, codes::INTERNAL_ERROR, msg)
            }
        };
        let body = ErrorResponse::new(code, message);
        (status, Json(body)).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Parse(e) => AppError::Parse(e),
            PipelineError::Conversion(e) => AppError::Conversion(e),
        }
    }
}

impl From<ShapeError> for AppError {
    fn from(e: ShapeError) -> Self {
        match e {
            ShapeError::NotFound(name) => {
                AppError::NotFound(format!("SHACL shape not found for diagram type: {name}"))
            }
            ShapeError::Io(msg) => AppError::Internal(msg),
        }
    }
}
