//! Diagram-type detection.
//!
//! An explicit `@start<kind>` directive wins. A bare `@startuml` falls back
//! to content sniffing in a fixed priority order, so that the common case of
//! an unqualified opener still classifies reproducibly.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::DiagramType;
use crate::symbols;

/// Errors returned when a source cannot be classified at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("not a valid PlantUML document (missing @startuml or @start* directive)")]
    MissingDiagramMarker,
}

/// Determine which kind of diagram `source` describes.
///
/// # Errors
///
/// Returns [`ParseError::MissingDiagramMarker`] when the text contains no
/// `@start…` directive.
pub fn detect_diagram_type(source: &str) -> Result<DiagramType, ParseError> {
    let mut saw_bare_uml = false;

    for caps in START_RE.captures_iter(source) {
        let kind = caps[1].to_ascii_lowercase();
        if kind == "uml" {
            saw_bare_uml = true;
            continue;
        }
        let diagram_type = symbols::directive_kind(&kind);
        tracing::debug!(%kind, %diagram_type, "explicit diagram directive");
        return Ok(diagram_type);
    }

    if !saw_bare_uml {
        return Err(ParseError::MissingDiagramMarker);
    }

    let diagram_type = sniff(source);
    tracing::debug!(%diagram_type, "diagram type inferred from content");
    Ok(diagram_type)
}

// --- helpers -----------------------------------------------------------------

/// Content heuristics for a bare `@startuml`, first match wins.
fn sniff(source: &str) -> DiagramType {
    HEURISTICS
        .iter()
        .find(|(re, _)| re.is_match(source))
        .map(|(_, t)| *t)
        .unwrap_or(DiagramType::Generic)
}

/// `@start<kind>`
static START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@start(\w+)").expect("invalid start directive regex"));

static HEURISTICS: LazyLock<Vec<(Regex, DiagramType)>> = LazyLock::new(|| {
    [
        (r"\bclass\s+\w+", DiagramType::Class),
        (r"\bactor\s+\w+|\busecase\s+\w+", DiagramType::UseCase),
        (r"\bentity\s+\w+", DiagramType::Erd),
        (r"-[->]+|<-[->]+", DiagramType::Sequence),
    ]
    .into_iter()
    .map(|(pattern, t)| (Regex::new(pattern).expect("invalid heuristic regex"), t))
    .collect()
});

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_marker_is_an_error() {
        assert_eq!(
            detect_diagram_type("class Foo\nFoo --> Bar"),
            Err(ParseError::MissingDiagramMarker)
        );
        assert_eq!(detect_diagram_type(""), Err(ParseError::MissingDiagramMarker));
    }

    #[test]
    fn explicit_directive_is_case_insensitive() {
        assert_eq!(detect_diagram_type("@startClass\n@endclass"), Ok(DiagramType::Class));
        assert_eq!(detect_diagram_type("@startentity\n"), Ok(DiagramType::Erd));
        assert_eq!(detect_diagram_type("@startSEQUENCE\n"), Ok(DiagramType::Sequence));
    }

    #[test]
    fn unknown_explicit_kind_is_generic() {
        assert_eq!(detect_diagram_type("@startmindmap\n* root\n"), Ok(DiagramType::Generic));
    }

    #[test]
    fn explicit_kind_beats_content() {
        let src = "@startstate\nclass Foo\n@endstate";
        assert_eq!(detect_diagram_type(src), Ok(DiagramType::State));
    }

    #[test]
    fn bare_uml_with_class_is_class() {
        assert_eq!(detect_diagram_type("@startuml\nclass Foo\n@enduml"), Ok(DiagramType::Class));
    }

    #[test]
    fn class_wins_over_other_families() {
        let src = "@startuml\nactor User\nentity Order\nclass Foo\nA -> B\n@enduml";
        assert_eq!(detect_diagram_type(src), Ok(DiagramType::Class));
    }

    #[test]
    fn heuristic_priority_order() {
        let usecase = "@startuml\nactor User\nentity Order\n@enduml";
        assert_eq!(detect_diagram_type(usecase), Ok(DiagramType::UseCase));

        let erd = "@startuml\nentity Order\nA -> B\n@enduml";
        assert_eq!(detect_diagram_type(erd), Ok(DiagramType::Erd));

        let seq = "@startuml\nAlice -> Bob : hello\n@enduml";
        assert_eq!(detect_diagram_type(seq), Ok(DiagramType::Sequence));

        let generic = "@startuml\nnode Server\n@enduml";
        assert_eq!(detect_diagram_type(generic), Ok(DiagramType::Generic));
    }
}
