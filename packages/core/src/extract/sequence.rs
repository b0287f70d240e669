//! Sequence-diagram extraction: participant declarations and messages.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{DiagramModel, DiagramType, Element, Relationship, RelationshipKind};

use super::{capitalize, content_lines, dropped, optional, unquote};

/// Extract participants (six roles) and messages between them.
///
/// A message is synchronous unless its arrow contains a dashed segment
/// (`--`).
pub fn extract(source: &str, diagram_type: DiagramType) -> DiagramModel {
    let mut model = DiagramModel::new(diagram_type);

    for line in content_lines(source) {
        if let Some(caps) = PARTICIPANT_RE.captures(line) {
            model.elements.push(
                Element::new(capitalize(&caps[1]), unquote(&caps[2])).with_alias(optional(&caps, 3)),
            );
        } else if let Some(caps) = MESSAGE_RE.captures(line) {
            let mut message = Relationship::new(RelationshipKind::Message, &caps[1], &caps[3]);
            message.message = optional(&caps, 4);
            message.synchronous = Some(!caps[2].contains("--"));
            model.relationships.push(message);
        } else {
            dropped(line);
        }
    }

    model
}

static PARTICIPANT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(participant|actor|boundary|control|entity|database)\s+("[^"]+"|\w+)(?:\s+as\s+(\w+))?"#,
    )
    .expect("invalid participant regex")
});

/// `<src> <arrow> <dst> [: message]`
static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)\s*(<?-[->]+)\s*(\w+)(?:\s*:\s*(.+))?").expect("invalid message regex")
});
