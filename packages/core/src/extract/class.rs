//! Class-diagram extraction.
//!
//! Rules, in priority order: class, interface and enum declarations;
//! relationship lines; attribute lines; method lines; enum literals.
//!
//! Member lines (attributes, methods, enum literals) attach to the element
//! under the cursor, which always points at the most recent declaration.
//! Before the first declaration there is no cursor and member lines are
//! dropped.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::{
    Attribute, Cardinality, DiagramModel, DiagramType, Element, Method, Relationship,
};
use crate::symbols;

use super::{content_lines, dropped, optional, unquote};

/// Extract classes, interfaces, enums, their members, and relationships.
pub fn extract(source: &str, diagram_type: DiagramType) -> DiagramModel {
    let mut model = DiagramModel::new(diagram_type);
    let mut cursor: Option<usize> = None;

    for line in content_lines(source) {
        if let Some(element) = declaration(line) {
            cursor = Some(model.elements.len());
            model.elements.push(element);
        } else if let Some(relationship) = relationship(line) {
            model.relationships.push(relationship);
        } else if let Some(member) = member(line) {
            match cursor {
                Some(index) => attach(&mut model.elements[index], member, line),
                None => dropped(line),
            }
        } else {
            dropped(line);
        }
    }

    model
}

// --- rules -------------------------------------------------------------------

fn declaration(line: &str) -> Option<Element> {
    if let Some(caps) = CLASS_RE.captures(line) {
        let mut element = Element::new("Class", unquote(&caps[2])).with_alias(optional(&caps, 3));
        element.is_abstract = Some(caps.get(1).is_some());
        element.stereotype = optional(&caps, 4);
        return Some(element);
    }
    if let Some(caps) = INTERFACE_RE.captures(line) {
        return Some(Element::new("Interface", unquote(&caps[1])).with_alias(optional(&caps, 2)));
    }
    if let Some(caps) = ENUM_RE.captures(line) {
        let mut element = Element::new("Enum", unquote(&caps[1])).with_alias(optional(&caps, 2));
        element.values = Some(Vec::new());
        return Some(element);
    }
    None
}

fn relationship(line: &str) -> Option<Relationship> {
    let caps = RELATIONSHIP_RE.captures(line)?;
    let mut relationship =
        Relationship::new(symbols::class_relationship(&caps[2]), &caps[1], &caps[3]);
    relationship.label = optional(&caps, 4);

    // Positional: first quoted token is the source end, second the target end,
    // wherever on the line they appear.
    let mut quoted = QUOTED_RE.captures_iter(line).map(|c| Cardinality::from(c[1].to_string()));
    relationship.source_cardinality = quoted.next();
    relationship.target_cardinality = quoted.next();

    Some(relationship)
}

enum Member {
    Attribute(Attribute),
    Method(Method),
    Value(String),
}

fn member(line: &str) -> Option<Member> {
    if let Some(caps) = ATTRIBUTE_RE.captures(line) {
        return Some(Member::Attribute(attribute(&caps)));
    }
    if let Some(caps) = METHOD_RE.captures(line) {
        return Some(Member::Method(method(&caps)));
    }
    if let Some(caps) = VALUE_RE.captures(line) {
        return Some(Member::Value(caps[1].to_string()));
    }
    None
}

fn attribute(caps: &Captures<'_>) -> Attribute {
    Attribute {
        name: caps[3].to_string(),
        datatype: optional(caps, 4),
        visibility: Some(symbols::visibility(
            caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()),
        )),
        default_value: optional(caps, 5),
    }
}

fn method(caps: &Captures<'_>) -> Method {
    let modifier = caps.get(2).map(|m| m.as_str());
    let marker = caps.get(1).or_else(|| caps.get(3)).map(|m| m.as_str());
    Method {
        name: caps[4].to_string(),
        parameters: optional(caps, 5),
        return_type: optional(caps, 6),
        visibility: Some(symbols::visibility(marker)),
        is_abstract: (modifier == Some("abstract")).then_some(true),
        is_static: matches!(modifier, Some("static" | "classifier")).then_some(true),
    }
}

fn attach(element: &mut Element, member: Member, line: &str) {
    match member {
        Member::Attribute(attribute) => element.attributes.push(attribute),
        Member::Method(method) => element.methods.push(method),
        Member::Value(value) => match element.values.as_mut() {
            Some(values) => values.push(value),
            None => dropped(line),
        },
    }
}

// --- patterns ----------------------------------------------------------------

/// `[abstract ]class <name> [as <alias>] [<<stereotype>>]`
static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(abstract\s+)?class\s+("[^"]+"|\w+)(?:\s+as\s+(\w+))?(?:\s*<<(.+?)>>)?"#)
        .expect("invalid class regex")
});

static INTERFACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^interface\s+("[^"]+"|\w+)(?:\s+as\s+(\w+))?"#).expect("invalid interface regex")
});

static ENUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^enum\s+("[^"]+"|\w+)(?:\s+as\s+(\w+))?"#).expect("invalid enum regex")
});

/// `<src> ["card"] <glyph> ["card"] <dst> [: label]`
static RELATIONSHIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(\w+)\s+(?:"[^"]*"\s+)?([<*o+#x}^|]*(?:-+|\.{2,})[|>*o+#x{^]*)\s+(?:"[^"]*"\s+)?(\w+)(?:\s*:\s*(.+))?"#,
    )
    .expect("invalid class relationship regex")
});

static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("invalid quoted token regex"));

/// `[vis][{static}|{abstract}] [vis]name : type [= default]`; the modifier
/// is accepted but not recorded on attributes.
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([+\-#~])?(?:\{(?:abstract|static|classifier)\}\s*)?([+\-#~])?(\w+)\s*:\s*([\w.]+(?:<[^>]*>)?(?:\[\])?)(?:\s*=\s*(.+))?",
    )
    .expect("invalid attribute regex")
});

/// `[vis][{abstract}|{static}] [vis]name(params) [: returnType]`; the
/// visibility marker may sit on either side of the modifier.
static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([+\-#~])?(?:\{(abstract|static|classifier)\}\s*)?([+\-#~])?(\w+)\s*\(([^)]*)\)(?:\s*:\s*([\w.]+(?:<[^>]*>)?(?:\[\])?))?",
    )
    .expect("invalid method regex")
});

/// A bare enum literal, optionally followed by a comma.
static VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*,?$").expect("invalid enum value regex"));

// --- tests -------------------------------------------------------------------
