//! JSON-LD graph building.
//!
//! [`JsonLdConverter`] turns a [`DiagramModel`] into a [`GraphDocument`]:
//! the caller's `@context` passed through verbatim, and an `@graph` array
//! holding one diagram node, then one node per element, then one node per
//! relationship, all in model order.
//!
//! # Identifiers
//!
//! The base IRI always ends in `#`. Each node id is the base followed by a
//! sanitised local name: the element's alias, else its name, else
//! `element_<index>`; relationships always use `relationship_<index>`.
//! Sanitising replaces every character outside `[A-Za-z0-9_]` with `_`.
//!
//! # Sparse emission
//!
//! Optional fields that were not supplied are left out of the node rather
//! than written as `null`, and empty lists are left out rather than written
//! as `[]`. A boolean that was supplied is written even when it is `false`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    Attribute, Cardinality, DiagramModel, Element, Method, Relationship, RelationshipKind,
    Visibility,
};

/// Error returned when a graph document cannot be produced.
///
/// Wraps the description of the underlying failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to convert to JSON-LD: {0}")]
pub struct ConversionError(pub String);

/// The `@context` value of the output document.
///
/// Either a dereferenceable IRI or an inline JSON value. It is never fetched
/// or validated; whatever the caller supplies is written back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Context {
    /// A remote context, e.g. `"https://schema.org/"`.
    Iri(String),
    /// An inline context object (or array of contexts).
    Inline(serde_json::Value),
}

impl Context {
    /// Interpret a raw context value as supplied in a request header or on
    /// the command line.
    ///
    /// Values starting with `http://` or `https://` are IRIs; anything else
    /// must parse as JSON.
    pub fn from_header(raw: &str) -> Result<Self, serde_json::Error> {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Ok(Context::Iri(raw.to_string()));
        }
        serde_json::from_str(raw).map(Context::Inline)
    }
}

/// A complete JSON-LD graph document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphDocument {
    #[serde(rename = "@context")]
    pub context: Context,

    #[serde(rename = "@graph")]
    pub graph: Vec<Node>,
}

/// One entry of `@graph`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Node {
    Diagram(DiagramNode),
    Element(ElementNode),
    Relationship(RelationshipNode),
}

/// Entry 0 of every graph: describes the diagram as a whole.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    #[serde(rename = "@id")]
    pub id: String,

    /// `"<DiagramType>Diagram"`, e.g. `"ClassDiagram"`.
    #[serde(rename = "@type")]
    pub node_type: String,

    pub element_count: usize,

    pub relationship_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@type")]
    pub node_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub is_abstract: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeNode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<MethodNode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeNode {
    /// Always `"Attribute"`.
    #[serde(rename = "@type")]
    pub node_type: &'static str,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MethodNode {
    /// Always `"Method"`.
    #[serde(rename = "@type")]
    pub node_type: &'static str,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub is_abstract: Option<bool>,

    #[serde(rename = "static", skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipNode {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@type")]
    pub node_type: RelationshipKind,

    pub source: String,

    pub target: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_cardinality: Option<Cardinality>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_cardinality: Option<Cardinality>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronous: Option<bool>,
}

/// Element types whose nodes carry `attributes` and `methods`.
const CLASS_LIKE: &[&str] = &["Class", "Interface", "Entity"];

/// Sequence participant types whose nodes carry `participantType`.
const PARTICIPANT_LIKE: &[&str] = &["Participant", "Boundary", "Control", "Database"];

/// Builds graph documents for one context and base IRI.
#[derive(Debug, Clone)]
pub struct JsonLdConverter {
    context: Context,
    base_iri: String,
}

impl JsonLdConverter {
    /// Create a converter, normalising `base_iri` to end with `#`.
    ///
    /// Any string is accepted as-is; an empty base becomes `"#"`, giving
    /// fragment-only node ids.
    pub fn new(context: Context, base_iri: &str) -> Self {
        let base_iri = if base_iri.ends_with('#') {
            base_iri.to_string()
        } else {
            format!("{base_iri}#")
        };
        Self { context, base_iri }
    }

    /// The normalised base IRI (always ending in `#`).
    pub fn base_iri(&self) -> &str {
        &self.base_iri
    }

    /// Build the graph document for `model`.
    pub fn document(&self, model: DiagramModel) -> GraphDocument {
        let DiagramModel {
            diagram_type,
            elements,
            relationships,
        } = model;

        let mut graph = Vec::with_capacity(1 + elements.len() + relationships.len());
        graph.push(Node::Diagram(DiagramNode {
            id: self
                .base_iri
                .strip_suffix('#')
                .unwrap_or(&self.base_iri)
                .to_string(),
            node_type: format!("{diagram_type}Diagram"),
            element_count: elements.len(),
            relationship_count: relationships.len(),
        }));
        graph.extend(
            elements
                .into_iter()
                .enumerate()
                .map(|(index, element)| Node::Element(self.element_node(index, element))),
        );
        graph.extend(
            relationships
                .into_iter()
                .enumerate()
                .map(|(index, rel)| Node::Relationship(self.relationship_node(index, rel))),
        );

        GraphDocument {
            context: self.context.clone(),
            graph,
        }
    }

    /// Build the graph document for `model` and serialise it as pretty-printed
    /// JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] if serialisation fails.
    pub fn convert(&self, model: DiagramModel) -> Result<String, ConversionError> {
        let document = self.document(model);
        serde_json::to_string_pretty(&document).map_err(|e| ConversionError(e.to_string()))
    }

    /// Mint `<base>#<sanitised local name>`.
    pub fn mint(&self, local_name: &str) -> String {
        format!("{}{}", self.base_iri, sanitize(local_name))
    }

    fn element_node(&self, index: usize, element: Element) -> ElementNode {
        let local_name = match (&element.alias, element.name.is_empty()) {
            (Some(alias), _) => alias.clone(),
            (None, false) => element.name.clone(),
            (None, true) => format!("element_{index}"),
        };

        let class_like = CLASS_LIKE.contains(&element.element_type.as_str());
        let participant_type = PARTICIPANT_LIKE
            .contains(&element.element_type.as_str())
            .then(|| element.element_type.clone());
        let values = if element.element_type == "Enum" {
            element.values.filter(|v| !v.is_empty())
        } else {
            None
        };

        ElementNode {
            id: self.mint(&local_name),
            name: Some(element.name).filter(|n| !n.is_empty()),
            alias: element.alias,
            is_abstract: element.is_abstract,
            stereotype: element.stereotype,
            attributes: non_empty(element.attributes, class_like, attribute_node),
            methods: non_empty(element.methods, class_like, method_node),
            values,
            participant_type,
            node_type: element.element_type,
        }
    }

    fn relationship_node(&self, index: usize, rel: Relationship) -> RelationshipNode {
        RelationshipNode {
            id: self.mint(&format!("relationship_{index}")),
            node_type: rel.kind,
            source: self.mint(&rel.source),
            target: self.mint(&rel.target),
            label: rel.label,
            message: rel.message,
            source_cardinality: rel.source_cardinality,
            target_cardinality: rel.target_cardinality,
            synchronous: rel.synchronous,
        }
    }
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

// --- helpers -----------------------------------------------------------------

fn non_empty<T, N>(items: Vec<T>, included: bool, convert: fn(T) -> N) -> Option<Vec<N>> {
    if !included || items.is_empty() {
        return None;
    }
    Some(items.into_iter().map(convert).collect())
}

fn attribute_node(attribute: Attribute) -> AttributeNode {
    AttributeNode {
        node_type: "Attribute",
        name: attribute.name,
        datatype: attribute.datatype,
        visibility: attribute.visibility,
        default_value: attribute.default_value,
    }
}

fn method_node(method: Method) -> MethodNode {
    MethodNode {
        node_type: "Method",
        name: method.name,
        parameters: method.parameters,
        return_type: method.return_type,
        visibility: method.visibility,
        is_abstract: method.is_abstract,
        is_static: method.is_static,
    }
}

// --- tests -------------------------------------------------------------------
