//! Kind-specific extraction of elements and relationships.
//!
//! Every extractor works line by line over trimmed lines. Blank lines and
//! lines starting with `@` (directives) or `'` (comments) are skipped. Each
//! remaining line is tried against the extractor's rules in order; the first
//! rule that matches wins, and a line no rule matches is dropped. Malformed
//! input never produces an error at this stage.

pub mod class;
pub mod erd;
pub mod generic;
pub mod sequence;
pub mod usecase;

use regex::Captures;

use crate::model::{DiagramModel, DiagramType};

/// Run the extractor that handles `diagram_type` over `source`.
///
/// Diagram types without a dedicated extractor use the generic one.
pub fn extract(source: &str, diagram_type: DiagramType) -> DiagramModel {
    let model = match diagram_type {
        DiagramType::Class => class::extract(source, diagram_type),
        DiagramType::Sequence => sequence::extract(source, diagram_type),
        DiagramType::UseCase => usecase::extract(source, diagram_type),
        DiagramType::Erd => erd::extract(source, diagram_type),
        DiagramType::Object
        | DiagramType::Activity
        | DiagramType::Component
        | DiagramType::State
        | DiagramType::Deployment
        | DiagramType::Generic => generic::extract(source, diagram_type),
    };
    tracing::debug!(
        %diagram_type,
        elements = model.elements.len(),
        relationships = model.relationships.len(),
        "extracted diagram model"
    );
    model
}

// --- helpers -----------------------------------------------------------------

/// The trimmed lines of `source` that extractors should look at.
pub(crate) fn content_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('@') && !line.starts_with('\''))
}

/// Strip double quotes from a quoted-or-bare name.
pub(crate) fn unquote(name: &str) -> String {
    name.replace('"', "")
}

/// Upper-case the first character and lower-case the rest (`"actor"` → `"Actor"`).
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// An optional capture group, trimmed, with empty text treated as absent.
pub(crate) fn optional(caps: &Captures<'_>, group: usize) -> Option<String> {
    caps.get(group)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub(crate) fn dropped(line: &str) {
    tracing::trace!(line, "no rule matched; line dropped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_lines_skip_directives_comments_and_blanks() {
        let src = "@startuml\n  ' a comment\n\n   class Foo  \n@enduml\n";
        let lines: Vec<&str> = content_lines(src).collect();
        assert_eq!(lines, vec!["class Foo"]);
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("participant"), "Participant");
        assert_eq!(capitalize("myThing"), "Mything");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn unquote_removes_quotes() {
        assert_eq!(unquote("\"Order Line\""), "Order Line");
        assert_eq!(unquote("Order"), "Order");
    }

    #[test]
    fn dispatch_falls_back_to_generic() {
        let src = "@startcomponent\ncomponent Api\nApi --> Db\n@endcomponent";
        let model = extract(src, DiagramType::Component);
        assert_eq!(model.diagram_type, DiagramType::Component);
        assert_eq!(model.elements.len(), 1);
        assert_eq!(model.elements[0].element_type, "Component");
        assert!(model.relationships.is_empty());
    }
}
