//! Request and response types for the puml-ld HTTP service.
//!
//! This crate encodes the service's HTTP contract as Rust types so the
//! server, the conformance suite, and any client agree on the wire format.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | GET | `/` | → [`ServiceInfo`] |
//! | GET | `/health` | → [`HealthResponse`] |
//! | GET | `/shacl` | [`ShapeQuery`] → `text/turtle` |
//! | PUT | `/convert` | headers [`CONTEXT_HEADER`], [`ID_HEADER`]; PlantUML body → `application/ld+json` |
//!
//! Every error response carries an [`ErrorResponse`] body.

pub mod convert;
pub mod error;
pub mod service;

pub use convert::{ShapeQuery, CONTEXT_HEADER, ID_HEADER, JSON_LD, TURTLE};
pub use error::ErrorResponse;
pub use service::{EndpointInfo, Endpoints, HealthResponse, ServiceInfo};
