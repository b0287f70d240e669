//! Conversion handler: `PUT /convert`.

use axum::{
    body::Bytes,
    http::{header, HeaderMap},
    response::IntoResponse,
};
use puml_ld::Context;
use puml_ld_server_api::{CONTEXT_HEADER, ID_HEADER, JSON_LD};

use crate::error::AppError;

/// `PUT /convert`
///
/// Converts the PlantUML body to a JSON-LD graph document. The `Context`
/// header supplies the `@context` (an `http(s)://` IRI or inline JSON) and the
/// `Id` header the base IRI for minted node identifiers.
///
/// Checks run in order: both headers present, body non-empty, context
/// parsable, then parse and conversion.
pub async fn convert(headers: HeaderMap, body: Bytes) -> Result<impl IntoResponse, AppError> {
    let (Some(context), Some(base_iri)) = (headers.get(CONTEXT_HEADER), headers.get(ID_HEADER))
    else {
        return Err(AppError::MissingHeaders);
    };

    if body.is_empty() {
        return Err(AppError::EmptyBody);
    }
    let source = std::str::from_utf8(&body)
        .map_err(|e| AppError::BadRequest(format!("Request body is not valid UTF-8: {e}")))?;

    let context = context
        .to_str()
        .map_err(|e| AppError::InvalidContext(e.to_string()))?;
    let context = Context::from_header(context).map_err(|e| AppError::InvalidContext(e.to_string()))?;
    let base_iri = base_iri
        .to_str()
        .map_err(|e| AppError::BadRequest(format!("Invalid Id header: {e}")))?;

    let document = puml_ld::convert(source, context, base_iri).map_err(|e| {
        tracing::warn!(error = %e, "conversion rejected");
        AppError::from(e)
    })?;

    tracing::info!(base_iri, bytes = document.len(), "converted diagram");
    Ok(([(header::CONTENT_TYPE, JSON_LD)], document))
}
