//! Fixed lookup tables shared by the detector and the extractors.
//!
//! The tables hold data only; the code that walks them stays in the
//! functions below so each mapping can be tested on its own.

use crate::model::{Cardinality, DiagramType, RelationshipKind, Visibility};

/// `@start<kind>` directive kinds and the diagram type each one selects.
pub const DIRECTIVE_KINDS: &[(&str, DiagramType)] = &[
    ("class", DiagramType::Class),
    ("sequence", DiagramType::Sequence),
    ("usecase", DiagramType::UseCase),
    ("entity", DiagramType::Erd),
    ("object", DiagramType::Object),
    ("activity", DiagramType::Activity),
    ("component", DiagramType::Component),
    ("state", DiagramType::State),
    ("deployment", DiagramType::Deployment),
];

/// Class-diagram connector fragments, checked in order. The first entry
/// with a fragment contained in the glyph decides the relationship kind.
pub const CLASS_GLYPHS: &[(&[&str], RelationshipKind)] = &[
    (&["<|--", "--|>"], RelationshipKind::Extension),
    (&["<|..", "..|>"], RelationshipKind::Implementation),
    (&["*--", "--*"], RelationshipKind::Composition),
    (&["o--", "--o"], RelationshipKind::Aggregation),
    (&["-->", "<--"], RelationshipKind::Dependency),
    (&["..>", "<.."], RelationshipKind::Dependency),
];

/// Crow's-foot end markers and the cardinality each one denotes. Either
/// orientation of a marker maps to the same value; anything not listed is `*`.
pub const ERD_ENDS: &[(&[&str], &str)] = &[
    (&["||"], "1"),
    (&["|o", "o|"], "0..1"),
    (&["}o", "o{"], "0..*"),
    (&["}|", "|{"], "1..*"),
];

/// Map a directive kind (already lowercased) to its diagram type.
/// Unknown kinds fall back to [`DiagramType::Generic`].
pub fn directive_kind(kind: &str) -> DiagramType {
    DIRECTIVE_KINDS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, t)| *t)
        .unwrap_or(DiagramType::Generic)
}

/// Classify a class-diagram connector glyph.
pub fn class_relationship(glyph: &str) -> RelationshipKind {
    CLASS_GLYPHS
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|f| glyph.contains(*f)))
        .map(|(_, kind)| *kind)
        .unwrap_or(RelationshipKind::Association)
}

/// Map a visibility marker to a [`Visibility`]. No marker means public.
pub fn visibility(marker: Option<&str>) -> Visibility {
    match marker {
        Some("-") => Visibility::Private,
        Some("#") => Visibility::Protected,
        Some("~") => Visibility::Package,
        _ => Visibility::Public,
    }
}

/// Which end of an ERD connector to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Left,
    Right,
}

/// Read the cardinality at one end of a crow's-foot glyph.
///
/// The window is the first (left) or last (right) two characters of the
/// glyph. A glyph shorter than two characters is read whole, which never
/// matches a marker and therefore yields `*`.
pub fn erd_cardinality(glyph: &str, end: End) -> Cardinality {
    let chars: Vec<char> = glyph.chars().collect();
    let window: String = match end {
        End::Left => chars.iter().take(2).collect(),
        End::Right => chars[chars.len().saturating_sub(2)..].iter().collect(),
    };
    ERD_ENDS
        .iter()
        .find(|(markers, _)| markers.contains(&window.as_str()))
        .map(|(_, c)| Cardinality::from(c.to_string()))
        .unwrap_or(Cardinality::Many)
}
