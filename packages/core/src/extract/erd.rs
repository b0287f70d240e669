//! Entity-relationship extraction with crow's-foot cardinalities.
//!
//! The cardinality at each end is read from a fixed two-character window at
//! that end of the connector glyph (see [`symbols::erd_cardinality`]).
//! Attribute lines inside an entity body attach to the entity under the
//! cursor.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Attribute, DiagramModel, DiagramType, Element, Relationship, RelationshipKind};
use crate::symbols::{self, End};

use super::{content_lines, dropped, optional, unquote};

pub fn extract(source: &str, diagram_type: DiagramType) -> DiagramModel {
    let mut model = DiagramModel::new(diagram_type);
    let mut cursor: Option<usize> = None;

    for line in content_lines(source) {
        if let Some(caps) = ENTITY_RE.captures(line) {
            cursor = Some(model.elements.len());
            model
                .elements
                .push(Element::new("Entity", unquote(&caps[1])).with_alias(optional(&caps, 2)));
        } else if let Some(caps) = RELATION_RE.captures(line) {
            let glyph = &caps[2];
            let mut relation =
                Relationship::new(RelationshipKind::EntityRelation, &caps[1], &caps[3]);
            relation.label = optional(&caps, 4);
            relation.source_cardinality = Some(symbols::erd_cardinality(glyph, End::Left));
            relation.target_cardinality = Some(symbols::erd_cardinality(glyph, End::Right));
            model.relationships.push(relation);
        } else if let (Some(caps), Some(index)) = (ATTRIBUTE_RE.captures(line), cursor) {
            model.elements[index].attributes.push(Attribute {
                name: caps[1].to_string(),
                datatype: optional(&caps, 2),
                ..Attribute::default()
            });
        } else {
            dropped(line);
        }
    }

    model
}

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^entity\s+("[^"]+"|\w+)(?:\s+as\s+(\w+))?"#).expect("invalid entity regex")
});

/// `<src> <crow's-foot glyph> <dst> [: label]`, e.g. `Customer ||--o{ Order`.
static RELATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)\s+([|o}]?[|o]?(?:--|\.\.)[|o]?[|o{]?)\s+(\w+)(?:\s*:\s*(.+))?")
        .expect("invalid entity relation regex")
});

/// `[*] name : type`
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*?\s*(\w+)\s*:\s*([\w.]+(?:\([^)]*\))?)").expect("invalid entity attribute regex")
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cardinality;

    fn run(body: &str) -> DiagramModel {
        extract(&format!("@startuml\n{body}\n@enduml\n"), DiagramType::Erd)
    }

    #[test]
    fn entities_with_attributes() {
        let model = run("entity Customer {\n  * id : number\n  --\n  name : varchar(255)\n}\nentity \"Line Item\" as LI");
        assert_eq!(model.elements.len(), 2);
        let customer = &model.elements[0];
        assert_eq!(customer.element_type, "Entity");
        assert_eq!(customer.attributes.len(), 2);
        assert_eq!(customer.attributes[0].name, "id");
        assert_eq!(customer.attributes[0].datatype.as_deref(), Some("number"));
        assert_eq!(customer.attributes[0].visibility, None);
        assert_eq!(customer.attributes[1].datatype.as_deref(), Some("varchar(255)"));
        assert_eq!(model.elements[1].name, "Line Item");
        assert_eq!(model.elements[1].alias.as_deref(), Some("LI"));
    }

    #[test]
    fn crows_foot_cardinalities() {
        let model = run("Customer ||--o{ Order : places\nOrder |o--|{ Item\nA }|..o| B");
        let rels = &model.relationships;
        assert_eq!(rels.len(), 3);

        assert_eq!(rels[0].kind, RelationshipKind::EntityRelation);
        assert_eq!(rels[0].source_cardinality, Some(Cardinality::One));
        assert_eq!(rels[0].target_cardinality, Some(Cardinality::ZeroOrMany));
        assert_eq!(rels[0].label.as_deref(), Some("places"));

        assert_eq!(rels[1].source_cardinality, Some(Cardinality::ZeroOrOne));
        assert_eq!(rels[1].target_cardinality, Some(Cardinality::OneOrMany));

        assert_eq!(rels[2].source_cardinality, Some(Cardinality::OneOrMany));
        assert_eq!(rels[2].target_cardinality, Some(Cardinality::ZeroOrOne));
    }

    #[test]
    fn bare_connector_is_many_to_many() {
        let model = run("A -- B");
        assert_eq!(model.relationships[0].source_cardinality, Some(Cardinality::Many));
        assert_eq!(model.relationships[0].target_cardinality, Some(Cardinality::Many));
    }

    #[test]
    fn attributes_without_entity_are_dropped() {
        let model = run("id : number\nentity A");
        assert!(model.elements[0].attributes.is_empty());
    }
}
