//! The diagram model: the intermediate representation between extraction
//! and graph building.
//!
//! A [`DiagramModel`] is produced once by [`parse`](crate::parse) and then
//! moved into the graph builder. Element and relationship order is source
//! order and is preserved all the way into the output document.
//!
//! All types serialise with camelCase keys so the model can be printed
//! (e.g. by `pumlld parse`) and read back.

use serde::{Deserialize, Serialize};

/// The kind of diagram a source document describes.
///
/// Serialises as its canonical name (e.g. `"UseCase"`, `"ERD"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DiagramType {
    Class,
    Sequence,
    UseCase,
    #[serde(rename = "ERD")]
    Erd,
    Object,
    Activity,
    Component,
    State,
    Deployment,
    /// Fallback for unsupported or unrecognised diagram kinds.
    Generic,
}

/// Formats the type as its canonical name (e.g. `"ERD"`).
impl std::fmt::Display for DiagramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DiagramType::Class => "Class",
            DiagramType::Sequence => "Sequence",
            DiagramType::UseCase => "UseCase",
            DiagramType::Erd => "ERD",
            DiagramType::Object => "Object",
            DiagramType::Activity => "Activity",
            DiagramType::Component => "Component",
            DiagramType::State => "State",
            DiagramType::Deployment => "Deployment",
            DiagramType::Generic => "Generic",
        };
        f.write_str(name)
    }
}

/// Parses a [`DiagramType`] from its canonical name, ignoring case.
///
/// Returns `Err` with a descriptive message if the name is not recognised.
impl std::str::FromStr for DiagramType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "class" => Ok(DiagramType::Class),
            "sequence" => Ok(DiagramType::Sequence),
            "usecase" => Ok(DiagramType::UseCase),
            "erd" => Ok(DiagramType::Erd),
            "object" => Ok(DiagramType::Object),
            "activity" => Ok(DiagramType::Activity),
            "component" => Ok(DiagramType::Component),
            "state" => Ok(DiagramType::State),
            "deployment" => Ok(DiagramType::Deployment),
            "generic" => Ok(DiagramType::Generic),
            _ => Err(format!(
                "unknown diagram type {:?}; expected one of: class, sequence, usecase, \
                 erd, object, activity, component, state, deployment, generic",
                s
            )),
        }
    }
}

/// Member visibility, from the PlantUML markers `+ - # ~`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
    Package,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Package => write!(f, "package"),
        }
    }
}

/// Multiplicity at one end of a relationship.
///
/// The five well-known values come from ERD crow's-foot glyphs and from
/// quoted class-diagram labels. A quoted label that is not one of them is
/// kept verbatim as [`Cardinality::Custom`].
///
/// Serialises as a plain string (`"1"`, `"0..1"`, `"0..*"`, `"1..*"`, `"*"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Cardinality {
    /// `1`
    One,
    /// `0..1`
    ZeroOrOne,
    /// `0..*`
    ZeroOrMany,
    /// `1..*`
    OneOrMany,
    /// `*`
    Many,
    /// Any other quoted token, e.g. `"2..5"`.
    Custom(String),
}

impl Cardinality {
    pub fn as_str(&self) -> &str {
        match self {
            Cardinality::One => "1",
            Cardinality::ZeroOrOne => "0..1",
            Cardinality::ZeroOrMany => "0..*",
            Cardinality::OneOrMany => "1..*",
            Cardinality::Many => "*",
            Cardinality::Custom(s) => s,
        }
    }
}

impl From<String> for Cardinality {
    fn from(s: String) -> Self {
        match s.as_str() {
            "1" => Cardinality::One,
            "0..1" => Cardinality::ZeroOrOne,
            "0..*" => Cardinality::ZeroOrMany,
            "1..*" => Cardinality::OneOrMany,
            "*" => Cardinality::Many,
            _ => Cardinality::Custom(s),
        }
    }
}

impl From<Cardinality> for String {
    fn from(c: Cardinality) -> Self {
        match c {
            Cardinality::Custom(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of link a [`Relationship`] expresses.
///
/// Serialises as its PascalCase name; [`RelationshipKind::EntityRelation`]
/// serialises as `"Relationship"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RelationshipKind {
    /// Plain class or use-case association. Default for unknown glyphs.
    Association,
    /// Inheritance (`<|--`).
    Extension,
    /// Interface realisation (`<|..`).
    Implementation,
    /// Whole/part with ownership (`*--`).
    Composition,
    /// Whole/part without ownership (`o--`).
    Aggregation,
    /// Usage dependency (`-->`, `..>`).
    Dependency,
    /// A sequence-diagram message.
    Message,
    /// Use-case inclusion (dotted connector).
    Include,
    /// ERD crow's-foot relationship.
    #[serde(rename = "Relationship")]
    EntityRelation,
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RelationshipKind::Association => "Association",
            RelationshipKind::Extension => "Extension",
            RelationshipKind::Implementation => "Implementation",
            RelationshipKind::Composition => "Composition",
            RelationshipKind::Aggregation => "Aggregation",
            RelationshipKind::Dependency => "Dependency",
            RelationshipKind::Message => "Message",
            RelationshipKind::Include => "Include",
            RelationshipKind::EntityRelation => "Relationship",
        };
        f.write_str(name)
    }
}

/// A field of a class-like element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// An operation of a class-like element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,

    /// The raw text between the parentheses. Absent for `()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    /// Set only when the source carried an `{abstract}` modifier.
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub is_abstract: Option<bool>,

    /// Set only when the source carried a `{static}` modifier.
    #[serde(default, rename = "static", skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
}

/// A named structural unit of a diagram: class, interface, enum, actor,
/// participant, entity, or a generic `{type} {name}` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Free-form type name, e.g. `"Class"`, `"Participant"`, `"Component"`.
    #[serde(rename = "type")]
    pub element_type: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// `Some(false)` is meaningful: class declarations always record it.
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub is_abstract: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,

    /// Enum literals. `Some` (possibly empty) only for enum elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Element {
    /// Create an element with only a type and a name set.
    pub fn new(element_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: Option<String>) -> Self {
        self.alias = alias;
        self
    }
}

/// A link between two elements.
///
/// `source` and `target` are the raw names or aliases written in the
/// diagram. They are never checked against the element list; dangling
/// references are carried through as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(rename = "type")]
    pub kind: RelationshipKind,

    pub source: String,

    pub target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_cardinality: Option<Cardinality>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cardinality: Option<Cardinality>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synchronous: Option<bool>,
}

impl Relationship {
    /// Create a relationship with every optional field unset.
    pub fn new(
        kind: RelationshipKind,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            source: source.into(),
            target: target.into(),
            label: None,
            source_cardinality: None,
            target_cardinality: None,
            message: None,
            synchronous: None,
        }
    }
}

/// The parsed form of one diagram source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagramModel {
    pub diagram_type: DiagramType,
    pub elements: Vec<Element>,
    pub relationships: Vec<Relationship>,
}

impl DiagramModel {
    /// An empty model of the given type.
    pub fn new(diagram_type: DiagramType) -> Self {
        Self {
            diagram_type,
            elements: Vec::new(),
            relationships: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagram_type_display_and_parse() {
        assert_eq!(DiagramType::Erd.to_string(), "ERD");
        assert_eq!("usecase".parse::<DiagramType>(), Ok(DiagramType::UseCase));
        assert_eq!("ERD".parse::<DiagramType>(), Ok(DiagramType::Erd));
        assert!("mindmap".parse::<DiagramType>().is_err());
    }

    #[test]
    fn cardinality_serialises_as_plain_string() {
        let json = serde_json::to_string(&Cardinality::OneOrMany).unwrap();
        assert_eq!(json, r#""1..*""#);
        let back: Cardinality = serde_json::from_str(r#""0..1""#).unwrap();
        assert_eq!(back, Cardinality::ZeroOrOne);
        let custom: Cardinality = serde_json::from_str(r#""2..5""#).unwrap();
        assert_eq!(custom, Cardinality::Custom("2..5".into()));
    }

    #[test]
    fn entity_relation_serialises_as_relationship() {
        let json = serde_json::to_string(&RelationshipKind::EntityRelation).unwrap();
        assert_eq!(json, r#""Relationship""#);
        assert_eq!(RelationshipKind::EntityRelation.to_string(), "Relationship");
    }

    #[test]
    fn model_json_omits_unset_fields() {
        let mut model = DiagramModel::new(DiagramType::Class);
        model.elements.push(Element::new("Class", "Foo"));
        let json = serde_json::to_value(&model).unwrap();
        let element = &json["elements"][0];
        assert_eq!(element["type"], "Class");
        assert!(element.get("alias").is_none());
        assert!(element.get("attributes").is_none());
        assert_eq!(json["diagramType"], "Class");
    }

    #[test]
    fn model_roundtrip() {
        let mut model = DiagramModel::new(DiagramType::Sequence);
        let mut rel = Relationship::new(RelationshipKind::Message, "A", "B");
        rel.synchronous = Some(false);
        model.relationships.push(rel);
        let json = serde_json::to_string(&model).unwrap();
        let back: DiagramModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
