//! Shape lookup handler: `GET /shacl?name=<type>`.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use puml_ld_server_api::{ShapeQuery, TURTLE};

use super::AppState;
use crate::error::AppError;

/// `GET /shacl?name=<type>`
///
/// Returns the stored Turtle shape for the named diagram type. The name is
/// matched case-insensitively.
pub async fn get_shape(
    State(state): State<AppState>,
    Query(query): Query<ShapeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let name = query
        .name
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: name".into()))?;

    let turtle = state.shapes.get_shape(&name).await?;
    tracing::debug!(shape = %name, bytes = turtle.len(), "serving shape");
    Ok(([(header::CONTENT_TYPE, TURTLE)], turtle))
}
