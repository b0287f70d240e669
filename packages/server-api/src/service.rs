//! Service description and health types for `GET /` and `GET /health`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response body for `GET /`.
///
/// A static description of the service and its two working endpoints.
///
/// # Example
///
/// ```json
/// {
///   "name": "puml-ld",
///   "version": "0.1.0",
///   "description": "Converts PlantUML documents to JSON-LD format",
///   "endpoints": {
///     "shacl": { "method": "GET", "path": "/shacl", "example": "/shacl?name=Class", ... },
///     "convert": { "method": "PUT", "path": "/convert", ... }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Endpoints,
}

/// The endpoints advertised in [`ServiceInfo`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoints {
    pub shacl: EndpointInfo,
    pub convert: EndpointInfo,
}

/// One advertised endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,

    /// Query parameters and what they mean.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,

    /// Required request headers and what they carry.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// Expected request body, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    pub example: String,
}

impl ServiceInfo {
    pub const DESCRIPTION: &'static str = "Converts PlantUML documents to JSON-LD format";

    /// The service description for a deployment called `name` at `version`.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let shacl = EndpointInfo {
            method: "GET".into(),
            path: "/shacl".into(),
            description: "Retrieve SHACL shape definitions by diagram type".into(),
            parameters: BTreeMap::from([(
                "name".to_string(),
                "Diagram type (ERD, Sequence, Class, UseCase, etc.)".to_string(),
            )]),
            headers: BTreeMap::new(),
            body: None,
            example: "/shacl?name=Class".into(),
        };
        let convert = EndpointInfo {
            method: "PUT".into(),
            path: "/convert".into(),
            description: "Convert PlantUML document to JSON-LD".into(),
            parameters: BTreeMap::new(),
            headers: BTreeMap::from([
                ("Context".to_string(), "JSON-LD context URL or inline JSON".to_string()),
                ("Id".to_string(), "Base IRI for generated resources".to_string()),
            ]),
            body: Some("PlantUML source code (text/plain)".into()),
            example: "PUT /convert with PlantUML in body".into(),
        };
        Self {
            name: name.into(),
            version: version.into(),
            description: Self::DESCRIPTION.into(),
            endpoints: Endpoints { shacl, convert },
        }
    }
}

/// The response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,

    /// Current time, RFC 3339.
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok(timestamp: impl Into<String>) -> Self {
        Self {
            status: "ok".into(),
            timestamp: timestamp.into(),
        }
    }
}
