//! Wire constants and query types for `/convert` and `/shacl`.

use serde::{Deserialize, Serialize};

/// Request header carrying the JSON-LD context: an `http(s)://` IRI or
/// inline JSON.
pub const CONTEXT_HEADER: &str = "context";

/// Request header carrying the base IRI for minted node identifiers.
pub const ID_HEADER: &str = "id";

/// Media type of a successful `PUT /convert` response.
pub const JSON_LD: &str = "application/ld+json";

/// Media type of a successful `GET /shacl` response.
pub const TURTLE: &str = "text/turtle";

/// Query parameters for `GET /shacl`.
///
/// `name` is optional at the type level so a missing parameter reaches the
/// handler and gets the service's own 400 body instead of a rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShapeQuery {
    /// Diagram type whose shape is requested, e.g. `Class` or `ERD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
