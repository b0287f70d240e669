//! The end-to-end pipeline: text → model → JSON-LD.

use thiserror::Error;

use crate::detect::{detect_diagram_type, ParseError};
use crate::extract;
use crate::jsonld::{Context, ConversionError, JsonLdConverter};
use crate::model::DiagramModel;

/// Either stage of [`convert`] failing. The inner error is never reclassified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Detect the diagram type of `source` and extract its model.
///
/// # Errors
///
/// Returns [`ParseError::MissingDiagramMarker`] when `source` has no
/// `@start…` directive. Individual malformed lines never fail.
pub fn parse(source: &str) -> Result<DiagramModel, ParseError> {
    let diagram_type = detect_diagram_type(source)?;
    Ok(extract::extract(source, diagram_type))
}

/// Parse `source` and serialise it as a pretty-printed JSON-LD document.
///
/// # Errors
///
/// Returns [`PipelineError::Parse`] if the source cannot be classified and
/// [`PipelineError::Conversion`] if the graph document cannot be serialised.
pub fn convert(source: &str, context: Context, base_iri: &str) -> Result<String, PipelineError> {
    let model = parse(source)?;
    let converter = JsonLdConverter::new(context, base_iri);
    Ok(converter.convert(model)?)
}
