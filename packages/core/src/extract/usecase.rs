//! Use-case diagram extraction: actors, use cases, and their links.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{DiagramModel, DiagramType, Element, Relationship, RelationshipKind};

use super::{content_lines, dropped, optional, unquote};

/// Extract actors, use cases, and relationships. A dotted connector is an
/// `Include`; a solid one is an `Association`.
pub fn extract(source: &str, diagram_type: DiagramType) -> DiagramModel {
    let mut model = DiagramModel::new(diagram_type);

    for line in content_lines(source) {
        if let Some(caps) = ACTOR_RE.captures(line) {
            model
                .elements
                .push(Element::new("Actor", unquote(&caps[1])).with_alias(optional(&caps, 2)));
        } else if let Some(caps) = USECASE_RE.captures(line) {
            model
                .elements
                .push(Element::new("UseCase", unquote(&caps[1])).with_alias(optional(&caps, 2)));
        } else if let Some(caps) = LINK_RE.captures(line) {
            let kind = if caps[2].contains('.') {
                RelationshipKind::Include
            } else {
                RelationshipKind::Association
            };
            let mut link = Relationship::new(kind, &caps[1], &caps[3]);
            link.label = optional(&caps, 4);
            model.relationships.push(link);
        } else {
            dropped(line);
        }
    }

    model
}

static ACTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^actor\s+("[^"]+"|\w+)(?:\s+as\s+(\w+))?"#).expect("invalid actor regex")
});

static USECASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^usecase\s+("[^"]+"|\w+)(?:\s+as\s+(\w+))?"#).expect("invalid usecase regex")
});

/// `<src> <dotted-or-solid connector> <dst> [: label]`
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)\s+(<?\.\.+>?|<?-+>?)\s+(\w+)(?:\s*:\s*(.+))?")
        .expect("invalid use case link regex")
});
