//! PlantUML to JSON-LD conversion.
//!
//! This crate turns PlantUML diagram text into a neutral [`DiagramModel`]
//! and serialises that model as a JSON-LD graph document. It is the
//! foundation for the `pumlld` CLI and the `puml-ld-server` HTTP service.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`model`] | Diagram model types: [`DiagramModel`], [`Element`], [`Relationship`], [`Cardinality`] |
//! | [`detect`] | Diagram-type detection via [`detect_diagram_type`] |
//! | [`extract`] | Per-kind extractors from text to model |
//! | [`symbols`] | Directive, connector glyph and crow's-foot lookup tables |
//! | [`jsonld`] | [`JsonLdConverter`]: model to JSON-LD graph document |
//! | [`pipeline`] | [`parse`] and [`convert`], the end-to-end entry points |
//! | [`render`] | Human-readable text rendering of a model |
//!
//! # Quick start
//!
//! ```rust
//! use puml_ld::{convert, Context};
//!
//! let source = "@startuml\nclass Person\nPerson --> Company\n@enduml";
//! let context = Context::Iri("http://example.org/uml-context.jsonld".into());
//!
//! let json = convert(source, context, "http://example.org/diagrams/people").unwrap();
//! assert!(json.contains("\"@graph\""));
//! ```

pub mod detect;
pub mod extract;
pub mod jsonld;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod symbols;

pub use detect::{detect_diagram_type, ParseError};
pub use jsonld::{Context, ConversionError, GraphDocument, JsonLdConverter};
pub use model::{
    Attribute, Cardinality, DiagramModel, DiagramType, Element, Method, Relationship,
    RelationshipKind, Visibility,
};
pub use pipeline::{convert, parse, PipelineError};
pub use render::render_model;
